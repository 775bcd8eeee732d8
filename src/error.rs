// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors raised while reading user input or settings.
//!
//! The search and the optimizer never fail: an impossible request is an
//! empty result. Only the edges of the crate produce these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("No saved settings named {0:?}")]
    UnknownProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output formatting for search results and thread charts

use anyhow::{Context, Result};
use change_gears::{Slot, Solution, Target, TargetKind};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Printed in place of a table when nothing fits.
pub const NO_SOLUTIONS: &str = "ERROR: Could not find any gear combinations that work.";

/// Round to five decimals and drop trailing zeros.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.5}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" => String::from("0"),
        other => other.to_string(),
    }
}

fn gear_cell(solution: &Solution, slot: Slot) -> String {
    match solution.gear(slot) {
        Some(gear) => gear.to_string(),
        None if slot == Slot::B => String::from("ANY"),
        None => String::from("-"),
    }
}

fn actual_header(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Tpi => "Actual TPI",
        TargetKind::Pitch => "Actual Pitch (mm)",
    }
}

fn solution_cells(solution: &Solution, target: Target) -> Vec<String> {
    let mut cells: Vec<String> = Slot::FOUR_GEAR
        .iter()
        .map(|&slot| gear_cell(solution, slot))
        .collect();
    cells.push(format_number(solution.actual(target.kind())));
    cells.push(
        solution
            .error_percent(target)
            .map(format_number)
            .unwrap_or_else(|| String::from("-")),
    );
    cells
}

/// Render rows as a left-aligned text table.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

#[derive(Serialize)]
struct SolutionJson<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    error_percent: Option<f64>,
}

#[derive(Serialize)]
struct SearchJson<'a> {
    target: Target,
    solutions: Vec<SolutionJson<'a>>,
}

#[derive(Serialize)]
struct ChartRowJson<'a> {
    target: Target,
    solution: Option<SolutionJson<'a>>,
}

/// Output formatter for calculator results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format the trains found for one target.
    pub fn format_search(&self, target: Target, solutions: &[Solution]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let doc = SearchJson {
                    target,
                    solutions: solutions
                        .iter()
                        .map(|solution| SolutionJson {
                            solution,
                            error_percent: solution.error_percent(target),
                        })
                        .collect(),
                };
                serde_json::to_string_pretty(&doc).context("Failed to serialize search results")
            }
            OutputFormat::Table if solutions.is_empty() => Ok(NO_SOLUTIONS.to_string()),
            OutputFormat::Table => {
                let header = [
                    "Gear A",
                    "Gear B",
                    "Gear C",
                    "Gear D",
                    actual_header(target.kind()),
                    "Error %",
                ];
                let rows: Vec<Vec<String>> = solutions
                    .iter()
                    .map(|solution| solution_cells(solution, target))
                    .collect();
                Ok(render_table(&header, &rows))
            }
        }
    }

    /// Format one chosen train (or none) per chart row.
    pub fn format_chart(&self, targets: &[Target], chosen: &[Option<Solution>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let doc: Vec<ChartRowJson<'_>> = targets
                    .iter()
                    .zip(chosen)
                    .map(|(&target, solution)| ChartRowJson {
                        target,
                        solution: solution.as_ref().map(|solution| SolutionJson {
                            solution,
                            error_percent: solution.error_percent(target),
                        }),
                    })
                    .collect();
                serde_json::to_string_pretty(&doc).context("Failed to serialize chart")
            }
            OutputFormat::Table => {
                let header = ["Target", "Gear A", "Gear B", "Gear C", "Gear D", "Actual", "Error %"];
                let rows: Vec<Vec<String>> = targets
                    .iter()
                    .zip(chosen)
                    .map(|(&target, solution)| {
                        let mut row = vec![target.to_string()];
                        match solution {
                            Some(solution) => row.extend(solution_cells(solution, target)),
                            None => {
                                row.extend(std::iter::repeat(String::from("-")).take(4));
                                row.push(String::from("none"));
                                row.push(String::from("-"));
                            }
                        }
                        row
                    })
                    .collect();
                Ok(render_table(&header, &rows))
            }
        }
    }
}

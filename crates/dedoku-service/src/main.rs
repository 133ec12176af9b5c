//! Request/response adapter for the dedoku solving core.
//!
//! Reads a JSON array of [`CellAssignment`]s describing one puzzle, runs a
//! fresh solve session over it, and writes a [`SolveResponse`] with the
//! changed cells and a solved indicator. One puzzle per invocation,
//! synchronous. Transport framing (HTTP and friends) is a host concern;
//! this binary is the transport-neutral seam in front of the core.
//!
//! Exit codes: `0` for a solve outcome (including a stuck puzzle, which is
//! an expected result reported as `"solved": false`), `2` for rejected
//! input.

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use dedoku_core::Grid;
use dedoku_solver::Session;

use crate::dto::{CellAssignment, SolveResponse};

mod dto;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON request file; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AdapterError {
    #[display("cannot read request: {_0}")]
    Io(io::Error),
    #[display("request is not a cell assignment array: {_0}")]
    Json(serde_json::Error),
    #[display("rejected puzzle: {_0}")]
    Input(dedoku_core::InputError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("dedoku: {err}");
        process::exit(2);
    }
}

fn run(args: &Args) -> Result<(), AdapterError> {
    let body = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            body
        }
    };
    let assignments: Vec<CellAssignment> = serde_json::from_str(&body)?;
    let response = solve_request(&assignments)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .expect("response serialization cannot fail");
    println!("{json}");
    Ok(())
}

/// Runs one solve session over the request and maps both outcomes onto the
/// response shape.
fn solve_request(assignments: &[CellAssignment]) -> Result<SolveResponse, dedoku_core::InputError> {
    let grid = Grid::from_assignments(
        assignments
            .iter()
            .map(|item| (item.coordinate.as_str(), item.value.as_str())),
    )?;
    let mut session = Session::new(grid);
    let solved = match session.solve() {
        Ok(report) => {
            log::info!(
                "solved in {} iterations ({} cells assigned)",
                report.iterations,
                report.eliminations + report.exclusive_placements
            );
            true
        }
        Err(err) => {
            // Expected outcome for puzzles beyond pure deduction; the
            // partial diff still goes out, flagged unsolved.
            log::warn!("{err}");
            false
        }
    };
    Ok(SolveResponse::new(&session.changed_cells(), solved))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_from_rows(rows: &[&str]) -> Vec<CellAssignment> {
        rows.iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars().enumerate().map(move |(column, ch)| {
                    let value = match ch {
                        '.' => String::new(),
                        _ => ch.to_string(),
                    };
                    CellAssignment {
                        coordinate: format!("x-{}-y-{}", column + 1, row + 1),
                        value,
                    }
                })
            })
            .collect()
    }

    #[test]
    fn test_near_complete_row_yields_single_update() {
        // Full grid except x-8-y-1; the rest of row 1 holds 1-7 and 9, and
        // neither its column nor box holds an 8.
        let request = request_from_rows(&[
            "1234567.9",
            "456789123",
            "789123456",
            "234567891",
            "567891234",
            "891234567",
            "345678912",
            "678912345",
            "912345678",
        ]);
        let response = solve_request(&request).unwrap();
        assert!(response.solved);
        assert_eq!(
            response.updated_values,
            vec![CellAssignment {
                coordinate: "x-8-y-1".to_owned(),
                value: "8".to_owned(),
            }]
        );
    }

    #[test]
    fn test_stuck_puzzle_reports_unsolved() {
        // Contradictory givens: two 5s in row 1
        let mut rows = vec!["5.......5"];
        rows.extend(std::iter::repeat_n(".........", 8));
        let response = solve_request(&request_from_rows(&rows)).unwrap();
        assert!(!response.solved);
        assert!(response.updated_values.is_empty());
    }

    #[test]
    fn test_bad_coordinate_rejects_request() {
        let mut request = request_from_rows(&[
            "1234567.9",
            "456789123",
            "789123456",
            "234567891",
            "567891234",
            "891234567",
            "345678912",
            "678912345",
            "912345678",
        ]);
        request[0].coordinate = "y-1-x-2".to_owned();
        let err = solve_request(&request).unwrap_err();
        assert!(matches!(
            err,
            dedoku_core::InputError::MalformedCoordinateName { .. }
        ));
    }
}

//! Subcommand execution.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use vehicles_query::{edit_distance, Dataset, QueryExecutor, QueryRequest, MAX_PAGE_SIZE};

use crate::cli::Command;

/// How a command finished, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InvalidRequest,
}

pub fn load(path: Option<&Path>) -> Result<Dataset> {
    let path = path.context("no catalog given: pass --data or set VEHICLES_DATA")?;
    Dataset::from_path(path).with_context(|| format!("loading {}", path.display()))
}

/// Runs a command, writing its JSON result to `out`.
///
/// Every command except `distance` loads the catalog first.
pub fn run(
    command: Command,
    data: Option<&Path>,
    pretty: bool,
    out: &mut impl Write,
) -> Result<Outcome> {
    match command {
        Command::All => write_json(out, load(data)?.all(), pretty)?,
        Command::List { page, page_size } => {
            let dataset = load(data)?;
            write_json(out, dataset.page(page, page_size.min(MAX_PAGE_SIZE)), pretty)?
        }
        Command::Make { make } => write_json(out, &load(data)?.by_make(&make), pretty)?,
        Command::Model { model } => write_json(out, &load(data)?.by_model(&model), pretty)?,
        Command::Search { term } => write_json(out, &load(data)?.search(&term), pretty)?,
        Command::Query(args) => {
            let request = QueryRequest::from(args);
            let spec = match request.into_spec() {
                Ok(spec) => spec,
                Err(errors) => {
                    write_json(out, &errors, pretty)?;
                    return Ok(Outcome::InvalidRequest);
                }
            };
            let dataset = load(data)?;
            let results = QueryExecutor::new(&dataset).execute(&spec)?;
            write_json(out, &results, pretty)?;
        }
        Command::Distance { a, b } => write_json(out, &edit_distance(&a, &b), pretty)?,
    }

    Ok(Outcome::Success)
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

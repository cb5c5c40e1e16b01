//! Validate a JSON document against a JSON Schema.
//!
//! Exit codes: 0 when the document validates, 1 when it does not (or cannot
//! be read or parsed), 2 on usage errors or an unusable schema.

use anyhow::{anyhow, Result};
use clap::Parser;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "testdiff-validate")]
#[command(about = "Validate a JSON document against a JSON Schema")]
struct Cli {
    /// JSON Schema file
    schema: PathBuf,

    /// JSON document to validate
    data: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let schema = match read_json(&cli.schema) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: unusable schema: {err}");
            return ExitCode::from(2);
        }
    };

    let compiled = match JSONSchema::compile(&schema) {
        Ok(compiled) => compiled,
        Err(err) => {
            eprintln!("Error: unusable schema: {err}");
            return ExitCode::from(2);
        }
    };

    let data = match read_json(&cli.data) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("JSON schema validation FAILED: {err}");
            return ExitCode::FAILURE;
        }
    };

    let exit = match compiled.validate(&data) {
        Ok(()) => {
            println!("JSON schema validation: OK");
            ExitCode::SUCCESS
        }
        Err(mut errors) => {
            match errors.next() {
                Some(err) => eprintln!("JSON schema validation FAILED: {err}"),
                None => eprintln!("JSON schema validation FAILED"),
            }
            ExitCode::FAILURE
        }
    };
    exit
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| anyhow!("invalid JSON in {}: {e}", path.display()))
}

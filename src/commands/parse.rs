use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use syllascan_core::dates::parse_reference_date;
use syllascan_core::{assemble_drafts, drafts_to_json, parse_text};

use crate::render::Render;

pub fn run(file: &str, course: Option<&str>, reference: Option<&str>, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let reference = resolve_reference(reference)?;

    let outcome = parse_text(&text, course, reference)?;

    if outcome.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("Nothing found: no assignment or schedule lines recognized.");
        }
        return Ok(());
    }

    let drafts = assemble_drafts(outcome);

    if json {
        println!("{}", drafts_to_json(&drafts)?);
    } else {
        println!("{} draft(s) extracted:\n", drafts.len());
        for draft in &drafts {
            println!("{}", draft.render());
        }
        println!("\nRe-run with --json to get editable draft records.");
    }

    Ok(())
}

/// Read the syllabus text: a file path, or stdin when given "-".
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))
    }
}

/// Parse YYYY-MM-DD, defaulting to today's local date.
fn resolve_reference(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => Ok(parse_reference_date(s)?),
        None => Ok(Local::now().date_naive()),
    }
}

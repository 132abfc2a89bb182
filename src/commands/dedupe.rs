use std::fs;

use anyhow::{Context, Result};
use syllascan_core::{Draft, dedupe_against_existing, drafts_from_json, drafts_to_json};

use crate::render::Render;

pub fn run(candidates_path: &str, existing_path: &str, json: bool) -> Result<()> {
    let candidates = load_drafts(candidates_path)?;
    let existing = load_drafts(existing_path)?;

    let total = candidates.len();
    let kept = dedupe_against_existing(candidates, &existing);

    if json {
        println!("{}", drafts_to_json(&kept)?);
    } else {
        println!("{} of {} candidate(s) are new:\n", kept.len(), total);
        for draft in &kept {
            println!("{}", draft.render());
        }
    }

    Ok(())
}

fn load_drafts(path: &str) -> Result<Vec<Draft>> {
    let data = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    drafts_from_json(&data).with_context(|| format!("Failed to parse drafts JSON in {path}"))
}

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "syllascan")]
#[command(about = "Extract assignments and class schedules from syllabus text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse syllabus text into reviewable drafts
    Parse {
        /// Path to a plain-text syllabus, or "-" for stdin
        file: String,

        /// Course name attached to every extracted record
        #[arg(short, long)]
        course: Option<String>,

        /// Reference date for year inference (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        reference: Option<String>,

        /// Emit drafts as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Filter candidate drafts already present in a saved collection
    Dedupe {
        /// JSON file of candidate drafts (output of `parse --json`)
        candidates: String,

        /// JSON file of already-saved drafts
        #[arg(short, long)]
        existing: String,

        /// Emit surviving drafts as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            course,
            reference,
            json,
        } => commands::parse::run(&file, course.as_deref(), reference.as_deref(), json),
        Commands::Dedupe {
            candidates,
            existing,
            json,
        } => commands::dedupe::run(&candidates, &existing, json),
    }
}

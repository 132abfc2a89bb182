//! Terminal rendering for syllascan types.
//!
//! Extension trait adding colored one-line summaries to core records
//! using owo_colors.

use owo_colors::OwoColorize;
use syllascan_core::weekdays::DAY_ABBREVS;
use syllascan_core::{Draft, DraftKind};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Draft {
    fn render(&self) -> String {
        match self.kind {
            DraftKind::Assignment => {
                let label = self
                    .assignment_type
                    .map(|t| t.label())
                    .unwrap_or("Assignment");
                let date = self
                    .due_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "no date".to_string());
                let time = self
                    .due_time
                    .map(|r| format!(" {}-{}", r.start.format("%H:%M"), r.end.format("%H:%M")))
                    .unwrap_or_default();

                format!(
                    "  {:<12} {}  {}{}",
                    label.green(),
                    self.title,
                    date.dimmed(),
                    time.dimmed()
                )
            }
            DraftKind::RecurringClass => {
                let days = self
                    .weekdays
                    .as_ref()
                    .map(|ds| {
                        ds.iter()
                            // Draft JSON is user-editable; out-of-range
                            // indices render as "?" instead of panicking
                            .map(|&d| DAY_ABBREVS.get(d as usize).copied().unwrap_or("?"))
                            .collect::<Vec<_>>()
                            .join("/")
                    })
                    .unwrap_or_default();
                let times = match (self.start_time, self.end_time) {
                    (Some(start), Some(end)) => {
                        format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
                    }
                    _ => String::new(),
                };

                format!(
                    "  {:<12} {}  {} {}",
                    "Class".cyan(),
                    self.title,
                    days.dimmed(),
                    times.dimmed()
                )
            }
        }
    }
}

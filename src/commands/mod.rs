pub mod dedupe;
pub mod parse;

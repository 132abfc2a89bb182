//! Line scanners: assignments and recurring class schedules.

pub mod assignments;
pub mod schedule;

pub use assignments::scan_assignments;
pub use schedule::scan_schedule;

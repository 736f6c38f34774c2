//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod output;

pub use bake::{BakeReport, GenerationResult};
pub use check::CheckReport;
pub use output::{Report, TerminalOutput};

/// A binding as listed in reports.
#[derive(Debug)]
pub struct BindingSummary {
    /// Go identifier of the variable.
    pub name: String,
    /// Fully qualified declared type.
    pub ty: String,
}

//! Report data structures for commands.
//!
//! Operations collect what happened into a report; commands render the
//! report to an [`Output`] target.

mod build;
mod check;
mod output;
mod tokens;

pub use build::{BuildReport, Destination};
pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
pub use tokens::{ScaleEntry, TokensReport};

pub mod errors;
pub mod report;

pub use errors::{OrganizeError, OrganizeResult};
pub use report::{Operation, ReportEntry, RunReport, RunSummary};

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod report_tests;

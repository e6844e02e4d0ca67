//! Extract a folder of ZIP archives into one destination and flatten the
//! wrapper folders they leave behind.
//!
//! ```no_run
//! use zipflat_lib::{run, OrganizerConfig};
//!
//! let config = OrganizerConfig::from_source("/data/inbox");
//! let report = run(&config)?;
//! println!("{} failures", report.summary().failures);
//! # Ok::<(), zipflat_lib::OrganizeError>(())
//! ```

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::config::{CategoryRule, OrganizerConfig};
pub use services::organizer::run;
pub use types::{Operation, OrganizeError, OrganizeResult, RunReport};

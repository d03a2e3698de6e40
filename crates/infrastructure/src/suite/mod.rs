//! Suite files.
//!
//! A suite file is a JSON or YAML array of test cases, run in order.

mod loader;

pub use loader::{SuiteFileError, SuiteFormat, load_suite, parse_suite};

pub mod analysis;
pub mod cli;
pub mod conf;
pub mod detect;
pub mod error;
pub mod finding;
pub mod grouping;
pub mod logging;
pub mod record;

pub use analysis::analyze;
pub use error::MonitorError;
pub use finding::Finding;

#[cfg(test)]
mod test_helpers;

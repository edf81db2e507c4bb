pub mod diff;
pub mod log;

pub use diff::parse_diff;
pub use log::parse_log;

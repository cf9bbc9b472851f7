pub mod config;
pub mod har;
pub mod logging;
pub mod report;

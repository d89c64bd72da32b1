pub mod cli;
pub mod config;
pub mod exec;
pub mod fleet;
pub mod input;
pub mod report;
pub mod summary;
pub mod util;

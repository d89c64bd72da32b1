pub mod system;

use anyhow::Result;
use std::path::Path;

pub use system::SystemRunner;

/// Captured output of one external process invocation. A non-zero exit
/// lands here as `status_ok = false`; callers decide whether that is
/// fatal.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub status_ok: bool,
    pub stdout: String,
    pub stderr: String,
}

pub trait Runner: Send + Sync {
    fn run(&self, cwd: Option<&Path>, program: &str, args: &[String]) -> Result<ExecOutput>;
}

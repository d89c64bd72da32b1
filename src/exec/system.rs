use super::{ExecOutput, Runner};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, cwd: Option<&Path>, program: &str, args: &[String]) -> Result<ExecOutput> {
        debug!(
            "exec {} {:?} cwd={}",
            program,
            args,
            cwd.map(|p| p.display().to_string())
                .unwrap_or_else(|| ".".into())
        );

        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .with_context(|| format!("spawning {program}"))?;

        Ok(ExecOutput {
            status_ok: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

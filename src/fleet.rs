use crate::{
    config::Fleet,
    exec::{ExecOutput, Runner},
    util::{ensure_dir, expand_tilde},
};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{error, info};

/// One repository in the fleet manifest. Entries are independent; each
/// one owns a distinct destination directory under its base path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSpec {
    pub url: String,
    pub folder_name: String,
    pub branch: String,
    pub setup_command: String,
    pub base_path: String,
}

#[derive(Debug)]
pub struct RepoOutcome {
    pub name: String,
    pub result: Result<()>,
}

/// Set up every repository in the manifest concurrently and wait for all
/// of them to settle. A failing repository is logged and recorded in its
/// outcome; it never aborts its siblings, and there is no retry.
pub fn bootstrap(
    fleet: &Fleet,
    runner: &dyn Runner,
    repos: &BTreeMap<String, RepoSpec>,
) -> Vec<RepoOutcome> {
    let outcomes = std::thread::scope(|scope| {
        let handles: Vec<_> = repos
            .iter()
            .map(|(name, spec)| {
                let handle = scope.spawn(move || setup_repo(fleet, runner, name, spec));
                (name.as_str(), handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(name, handle)| RepoOutcome {
                name: name.to_string(),
                result: handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("setup thread panicked"))),
            })
            .collect::<Vec<_>>()
    });

    for outcome in &outcomes {
        if let Err(err) = &outcome.result {
            error!("{} failed: {:#}", outcome.name, err);
        }
    }

    outcomes
}

fn setup_repo(fleet: &Fleet, runner: &dyn Runner, name: &str, spec: &RepoSpec) -> Result<()> {
    info!("Setting up {name}");

    let base = expand_tilde(&spec.base_path);
    ensure_dir(&base)?;

    run_step(
        runner,
        Some(&base),
        "git",
        &["clone".into(), spec.url.clone(), spec.folder_name.clone()],
    )
    .with_context(|| format!("cloning {}", spec.url))?;

    let repo_dir = base.join(&spec.folder_name);

    run_step(
        runner,
        Some(&repo_dir),
        "git",
        &["checkout".into(), spec.branch.clone()],
    )
    .with_context(|| format!("checking out {}", spec.branch))?;

    run_step(
        runner,
        Some(&repo_dir),
        &fleet.shell,
        &["-c".into(), spec.setup_command.clone()],
    )
    .with_context(|| format!("running setup command: {}", spec.setup_command))?;

    info!("{name} set up");
    Ok(())
}

fn run_step(
    runner: &dyn Runner,
    cwd: Option<&Path>,
    program: &str,
    args: &[String],
) -> Result<()> {
    let out = runner.run(cwd, program, args)?;
    surface(&out);
    if !out.status_ok {
        return Err(anyhow!("{program} exited with failure"));
    }
    Ok(())
}

// Child output goes straight to the operator; failures are only visible
// in what the tools printed.
fn surface(out: &ExecOutput) {
    if !out.stdout.is_empty() {
        print!("{}", out.stdout);
    }
    if !out.stderr.is_empty() {
        eprint!("{}", out.stderr);
    }
}

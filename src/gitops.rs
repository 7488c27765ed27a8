use std::process::Command;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use tracing::debug;

/// One external `git` invocation in the post-materialization sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStep {
    pub args: Vec<String>,
}

impl GitStep {
    fn new(args: &[&str]) -> Self {
        Self {
            args: args.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// The init/add/commit sequence for a freshly materialized theme, in the
/// order it must run.
pub fn plan(theme_name: &str) -> Vec<GitStep> {
    vec![
        GitStep::new(&["init"]),
        GitStep::new(&["add", "."]),
        GitStep::new(&[
            "commit",
            "-m",
            &format!("Initial Commit for {theme_name} theme"),
        ]),
    ]
}

/// Executes a single git step. Injectable so sequencing can be exercised in
/// tests without spawning processes.
pub trait GitRunner {
    fn run(&mut self, dest: &Utf8Path, step: &GitStep) -> Result<()>;
}

/// Real executor: spawns `git` with the theme directory as working directory.
pub struct ProcessGit;

impl GitRunner for ProcessGit {
    fn run(&mut self, dest: &Utf8Path, step: &GitStep) -> Result<()> {
        debug!(args = ?step.args, "running git step");
        let status = Command::new("git")
            .args(&step.args)
            .current_dir(dest.as_std_path())
            .status()
            .with_context(|| format!("running git {}", step.args.join(" ")))?;
        if !status.success() {
            bail!(
                "git {} failed with exit code {:?}",
                step.args.join(" "),
                status.code()
            );
        }
        Ok(())
    }
}

/// Run the sequence against the theme directory. Any step failing aborts;
/// earlier steps' effects are left as-is.
pub fn init_repo(dest: &Utf8Path, theme_name: &str, runner: &mut dyn GitRunner) -> Result<()> {
    for step in plan(theme_name) {
        runner.run(dest, &step)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_runs_init_then_add_then_commit() {
        let steps = plan("demo");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].args, ["init"]);
        assert_eq!(steps[1].args, ["add", "."]);
        assert_eq!(steps[2].args[..2], ["commit".to_owned(), "-m".to_owned()]);
    }

    #[test]
    fn commit_message_embeds_the_theme_name() {
        let steps = plan("my-blog");
        let message = steps[2].args.last().unwrap();
        assert_eq!(message, "Initial Commit for my-blog theme");
    }

    /// Runner that fails on the nth step and records every attempt.
    struct FailingRunner {
        calls: Vec<Vec<String>>,
        fail_at: usize,
    }

    impl GitRunner for FailingRunner {
        fn run(&mut self, _dest: &Utf8Path, step: &GitStep) -> Result<()> {
            if self.calls.len() == self.fail_at {
                bail!("injected git failure at {}", step.args.join(" "));
            }
            self.calls.push(step.args.clone());
            Ok(())
        }
    }

    #[test]
    fn failed_step_aborts_the_sequence() {
        let mut runner = FailingRunner {
            calls: Vec::new(),
            fail_at: 1,
        };
        let err = init_repo(Utf8Path::new("unused"), "demo", &mut runner).unwrap_err();
        assert!(err.to_string().contains("injected git failure"));
        // Only `init` ran; `add` failed and `commit` was never attempted.
        assert_eq!(runner.calls, vec![vec!["init".to_owned()]]);
    }
}

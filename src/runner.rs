use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Cli;
use crate::gitops::{self, GitRunner, ProcessGit};
use crate::materialize::{self, FsSink, ProjectRequest};
use crate::{catalog, util};

/// Resolves the default author when `--author` is not given. Injectable so
/// the pipeline stays testable without touching the real environment.
pub trait AuthorSource {
    fn current_user(&self) -> Result<String>;
}

/// Reads the login name from the environment.
pub struct EnvAuthor;

impl AuthorSource for EnvAuthor {
    fn current_user(&self) -> Result<String> {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .context("determining current user; pass --author explicitly")
    }
}

pub fn run(cli: Cli) -> Result<()> {
    run_with(cli, &EnvAuthor, &mut ProcessGit)
}

fn run_with(cli: Cli, authors: &dyn AuthorSource, git: &mut dyn GitRunner) -> Result<()> {
    // Author lookup happens before any filesystem mutation so a failed
    // lookup leaves the disk untouched.
    let author = match cli.author {
        Some(author) => author,
        None => authors.current_user()?,
    };

    let request = ProjectRequest::new(&cli.name, &author, cli.git)?;
    let catalog = catalog::load()?;
    let base = util::fs::current_working_dir()?;
    debug!(theme = %request.theme_name, author = %request.author_name, "materializing theme");

    materialize::materialize(&base, &request, &catalog, &mut FsSink)?;

    if request.init_git {
        gitops::init_repo(&request.destination(&base), &request.theme_name, git)?;
        println!("Git repo initialized successfully.");
    }

    println!("Theme started successfully!");
    Ok(())
}

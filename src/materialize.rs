use std::fs;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::catalog::{TemplateCatalog, TemplateEntry};
use crate::substitute::substitute;
use crate::util;

pub const PARTS_DIR: &str = "template-parts";
pub const INC_DIR: &str = "inc";

/// A single invocation's inputs, normalized and validated.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub theme_name: String,
    pub author_name: String,
    pub init_git: bool,
}

impl ProjectRequest {
    pub fn new(raw_name: &str, author_name: &str, init_git: bool) -> Result<Self> {
        Ok(Self {
            theme_name: normalize_name(raw_name)?,
            author_name: author_name.to_owned(),
            init_git,
        })
    }

    /// Theme directory path beneath the given base.
    pub fn destination(&self, base: &Utf8Path) -> Utf8PathBuf {
        base.join(&self.theme_name)
    }
}

/// Whitespace in the raw name becomes hyphens; names that would escape the
/// destination directory are rejected outright.
fn normalize_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("theme name must not be empty");
    }
    if trimmed.contains(['/', '\\']) {
        bail!("theme name `{trimmed}` must not contain path separators");
    }
    if trimmed == "." || trimmed == ".." || trimmed.starts_with('.') {
        bail!("theme name `{trimmed}` must not start with a dot");
    }
    Ok(trimmed
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect())
}

/// Destination for finalized file contents. Injectable so write failures can
/// be exercised in tests without touching the real filesystem.
pub trait FileSink {
    fn write_file(&mut self, path: &Utf8Path, contents: &str) -> Result<()>;
}

/// Real filesystem sink: create-or-truncate, write whole contents, close.
pub struct FsSink;

impl FileSink for FsSink {
    fn write_file(&mut self, path: &Utf8Path, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("writing {}", path))
    }
}

/// Write the whole catalog, substituted for the request, beneath `base`.
/// The first directory or file failure aborts the run; entries already
/// written stay on disk and no cleanup is attempted.
pub fn materialize(
    base: &Utf8Path,
    request: &ProjectRequest,
    catalog: &TemplateCatalog,
    sink: &mut dyn FileSink,
) -> Result<()> {
    let dest = request.destination(base);
    util::fs::ensure_dir(&dest)?;
    util::fs::ensure_dir(&dest.join(PARTS_DIR))?;
    util::fs::ensure_dir(&dest.join(INC_DIR))?;

    write_group(&dest, &catalog.root_entries, request, sink)?;
    write_group(&dest.join(PARTS_DIR), &catalog.part_entries, request, sink)?;
    write_group(&dest.join(INC_DIR), &catalog.include_entries, request, sink)?;
    Ok(())
}

fn write_group(
    dir: &Utf8Path,
    entries: &[TemplateEntry],
    request: &ProjectRequest,
    sink: &mut dyn FileSink,
) -> Result<()> {
    for entry in entries {
        let path = dir.join(entry.name);
        let finalized = substitute(&entry.body, &request.theme_name, &request.author_name);
        sink.write_file(&path, &finalized)
            .with_context(|| format!("materializing entry {}", entry.name))?;
        debug!(path = %path, "wrote template");
    }
    Ok(())
}

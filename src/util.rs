/// Shared filesystem helpers.
pub mod fs {
    use std::fs;

    use anyhow::{Context, Result, anyhow};
    use camino::{Utf8Path, Utf8PathBuf};

    /// Ensure a directory exists, creating it recursively if needed. An
    /// already-existing directory is accepted, not an error.
    pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))?;
        }
        Ok(())
    }

    pub fn current_working_dir() -> Result<Utf8PathBuf> {
        let cwd = std::env::current_dir().context("determining current directory")?;
        Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
    }
}

use clap::Parser;

/// Command-line surface for the theme generator.
#[derive(Parser, Debug)]
#[command(
    name = "themekit",
    version,
    about = "Scaffold a WordPress theme directory"
)]
pub struct Cli {
    /// Theme name; also names the output directory (whitespace becomes hyphens).
    #[arg(short = 'n', long = "name", default_value = "theme")]
    pub name: String,

    /// Author substituted into the generated files. Defaults to the current OS user.
    #[arg(short = 'a', long = "author")]
    pub author: Option<String>,

    /// Initialize a git repository over the generated theme and create an initial commit.
    #[arg(long = "git", default_value_t = false)]
    pub git: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

mod catalog;
mod cli;
mod gitops;
mod logging;
mod materialize;
mod runner;
mod substitute;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = cli::parse();
    runner::run(cli)
}

use clap::Parser;

use learnhub_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let output = run(cli)?;
    println!("{output}");
    Ok(())
}

use clap::Parser;
use miette::Result;
use sinsfx::cli::{Cli, Commands};
use sinsfx::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => sinsfx::cli::convert::run(args, &printer)?,
        Commands::Check(args) => sinsfx::cli::check::run(args, &printer)?,
        Commands::Completions(args) => sinsfx::cli::completions::run(args)?,
    }

    Ok(())
}

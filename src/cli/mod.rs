pub mod check;
pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

use crate::output::Printer;
use crate::validation::Diagnostics;

/// sinsfx - Legacy particle effect converter
#[derive(Parser, Debug)]
#[command(name = "sinsfx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert .particle and .texanim files to JSON documents
    Convert(convert::ConvertArgs),

    /// Parse and build inputs without writing output
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Print conversion diagnostics below the file's status line.
pub fn print_diagnostics(printer: &Printer, diagnostics: &Diagnostics) {
    for d in diagnostics.iter() {
        eprintln!(
            "  {}[{}]: {}",
            printer.severity(d.severity),
            printer.dim(&d.code),
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("    {}: {}", printer.cyan("help"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::parse_from([
            "sinsfx",
            "convert",
            "a.particle",
            "Particle/",
            "-o",
            "build",
            "--rotation",
            "negated",
        ]);

        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.paths.len(), 2);
                assert_eq!(args.output.as_deref(), Some(std::path::Path::new("build")));
                assert_eq!(
                    args.rotation,
                    Some(crate::builder::RotationConvention::Negated)
                );
            }
            other => panic!("expected convert, got {:?}", other),
        }
    }
}

//! Command-line interface definition.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Restaurant inspection results from King County food safety listings, as JSON.
#[derive(Debug, Parser)]
#[command(name = "foodsafe", version, about)]
pub struct Cli {
    /// Configuration file (defaults to the platform configuration directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the live inspection results endpoint
    Fetch {
        /// Override a search parameter, e.g. `-p Zip_Code=98109` (unknown keys are ignored)
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Also save the raw page here, for later use with `load`
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Extract from a previously saved results page
    Load {
        path: PathBuf,
        /// Encoding of the saved page (defaults to the configured encoding)
        #[arg(short, long, value_name = "LABEL")]
        encoding: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Parses a `KEY=VALUE` search parameter override.
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, found `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Default log filter when `RUST_LOG` isn't set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("Zip_Code=98109", ("Zip_Code", "98109"))]
    #[case("Business_Name=", ("Business_Name", ""))]
    #[case(" City =Seattle", ("City", "Seattle"))]
    #[case("Violation_Descr=a=b", ("Violation_Descr", "a=b"))]
    fn test_parse_param(#[case] input: &str, #[case] expected: (&str, &str)) {
        let (key, value) = parse_param(input).unwrap();
        assert_eq!((key.as_str(), value.as_str()), expected);
    }

    #[rstest]
    #[case("Zip_Code")]
    #[case("=98109")]
    fn test_parse_param_invalid(#[case] input: &str) {
        assert!(parse_param(input).is_err());
    }

    #[test]
    fn test_fetch_arguments() {
        let cli = Cli::try_parse_from(["foodsafe", "-vv", "fetch", "-p", "Zip_Code=98109", "--param", "City=Seattle"])
            .unwrap();
        assert_eq!(cli.log_level(), "trace");
        let Command::Fetch { params, save, output } = cli.command else {
            panic!("expected the fetch command");
        };
        assert_eq!(params.len(), 2);
        assert_eq!(save, None);
        assert!(!output.compact);
    }

    #[test]
    fn test_load_arguments() {
        let cli = Cli::try_parse_from(["foodsafe", "load", "inspection_page.html", "--encoding", "latin1", "--compact"])
            .unwrap();
        let Command::Load { path, encoding, output } = cli.command else {
            panic!("expected the load command");
        };
        assert_eq!(path, PathBuf::from("inspection_page.html"));
        assert_eq!(encoding.as_deref(), Some("latin1"));
        assert!(output.compact);
    }
}

//! Root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Convert Java Selenium tests to Playwright TypeScript.
#[derive(Parser)]
#[command(name = "blastconvert")]
#[command(about = "Convert Java Selenium tests to Playwright TypeScript")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::commands::RouteArg;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["blastconvert", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve { ref host, port }) => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8000);
            }
            _ => panic!("expected serve"),
        }
        assert_eq!(cli.default_log_filter(), "info");
    }

    #[test]
    fn test_convert_args() {
        let cli = Cli::try_parse_from([
            "blastconvert",
            "-v",
            "convert",
            "LoginTest.java",
            "--model",
            "moonshot-v1-32k",
            "-o",
            "login.spec.ts",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Convert {
                file,
                model,
                output,
            }) => {
                assert_eq!(file, PathBuf::from("LoginTest.java"));
                assert_eq!(model.as_deref(), Some("moonshot-v1-32k"));
                assert_eq!(output, Some(PathBuf::from("login.spec.ts")));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_event_route_values() {
        let cli = Cli::try_parse_from(["blastconvert", "event", "--route", "models"]).unwrap();
        match cli.command {
            Some(Commands::Event { route, input }) => {
                assert_eq!(route, Some(RouteArg::Models));
                assert_eq!(input, None);
            }
            _ => panic!("expected event"),
        }

        assert!(Cli::try_parse_from(["blastconvert", "event", "--route", "admin"]).is_err());
    }

    #[test]
    fn test_convert_requires_file() {
        assert!(Cli::try_parse_from(["blastconvert", "convert"]).is_err());
    }
}

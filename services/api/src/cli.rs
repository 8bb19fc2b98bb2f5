use crate::check::{run_check, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skincare_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Skincare Check",
    about = "Score cosmetic ingredient lists from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze a single ingredient list and print the report
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["skincare-check-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_arguments() {
        let cli = Cli::try_parse_from([
            "skincare-check-api",
            "check",
            "--ingredients",
            "Water, Glycerin",
            "--skin-focus",
            "sensitive",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.ingredients.as_deref(), Some("Water, Glycerin"));
                assert_eq!(args.skin_focus.as_deref(), Some("sensitive"));
                assert!(args.json);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn ingredients_and_file_are_exclusive() {
        let result = Cli::try_parse_from([
            "skincare-check-api",
            "check",
            "--ingredients",
            "Water",
            "--file",
            "label.txt",
        ]);
        assert!(result.is_err());
    }
}

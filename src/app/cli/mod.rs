//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::commands::configure::ConfigureOptions;
use crate::app::commands::scaffold::{ScaffoldOptions, ScaffoldOutcome};
use crate::app::{config, logging};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mc-init")]
#[command(version)]
#[command(about = "Scaffold a new Managed Component project", long_about = None)]
struct Cli {
    /// Display name offered by default
    name: Option<String>,
    /// Render from this template directory instead of the built-in template
    #[arg(short, long, env = "MC_INIT_TEMPLATE", value_name = "DIR")]
    template: Option<PathBuf>,
    /// TOML file overriding prompt defaults
    #[arg(long, env = "MC_INIT_DEFAULTS", value_name = "FILE")]
    defaults: Option<PathBuf>,
    /// Also ask which implementations the component requires
    #[arg(long)]
    implements: bool,
    /// Create the project without the final confirmation
    #[arg(short, long)]
    yes: bool,
    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_scaffold(cli) {
        Ok(ScaffoldOutcome::Created { config, .. }) => {
            println!(
                "\n\n✅ {} Managed Component project initialised!\n   Now run: cd {} and start development in your src/index.ts file\n\n",
                config.display_name, config.namespace
            );
            println!(
                "💡 Remember to update the README.md file with a populated Fields Description section and Tool Settings including all the information a Component Manager would need to run the component.\nSee https://managedcomponents.dev/components for inspiration.\n"
            );
        }
        Ok(ScaffoldOutcome::Declined) => {}
        Err(AppError::Cancelled) => {
            println!("✖ Operation cancelled");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_scaffold(cli: Cli) -> Result<ScaffoldOutcome, AppError> {
    let mut defaults = config::load_defaults(cli.defaults.as_deref())?;
    if let Some(name) = cli.name.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
        defaults.display_name = name.to_string();
    }

    let options = ScaffoldOptions {
        configure: ConfigureOptions { defaults, ask_implements: cli.implements },
        skip_confirmation: cli.yes,
    };
    crate::scaffold(&options, cli.template.as_deref())
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
    fn parses_name_and_flags() {
        let cli = Cli::try_parse_from(["mc-init", "My Tool", "--implements", "-y", "-v"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("My Tool"));
        assert!(cli.implements);
        assert!(cli.yes);
        assert!(cli.verbose);
        assert!(cli.defaults.is_none());
    }

    #[test]
    fn parses_template_directory() {
        let cli = Cli::try_parse_from(["mc-init", "--template", "tpl"]).unwrap();
        assert_eq!(cli.template, Some(PathBuf::from("tpl")));
    }
}

mod args;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use args::{EventArgs, OptionArgs};
use clap::{Parser, Subcommand};
use outlook_buttons_core::CalendarVariant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outlook-buttons")]
#[command(about = "Build \"Add to Outlook calendar\" links and buttons for events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Outlook compose deep link for an event
    Url {
        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Outlook flavour: "live" or "office" (alias "365")
        #[arg(short, long, default_value = "live")]
        variant: CalendarVariant,

        /// Also open the link in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Show the query parameters that go into the deep link
    Params {
        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the button markup for each enabled Outlook button
    Buttons {
        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Insert the buttons into an HTML fragment of export links
    Inject {
        /// HTML file to read (defaults to stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write a config file with every option commented out
    Init {
        /// Where to write it (defaults to the standard location)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Url {
            event,
            options,
            variant,
            open,
        } => {
            let config = options.load_config()?;
            let resolved = options.resolve(&config)?;
            commands::url::run(&event.into_descriptor()?, variant, &resolved, open)
        }
        Commands::Params {
            event,
            options,
            json,
        } => {
            let config = options.load_config()?;
            let resolved = options.resolve(&config)?;
            commands::params::run(&event.into_descriptor()?, &resolved, json)
        }
        Commands::Buttons { event, options } => {
            let config = options.load_config()?;
            let resolved = options.resolve(&config)?;
            commands::buttons::run(&event.into_descriptor()?, &config.buttons, &resolved)
        }
        Commands::Inject {
            input,
            event,
            options,
        } => {
            let config = options.load_config()?;
            let resolved = options.resolve(&config)?;
            commands::inject::run(
                input.as_deref(),
                &event.into_descriptor()?,
                &config.buttons,
                &resolved,
            )
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init { path, force } => commands::config::init(path, force),
        },
    }
}

/// Log to stderr so stdout stays clean for links and markup
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn url_command_parses_variant_alias() {
        let cli = Cli::try_parse_from([
            "outlook-buttons",
            "url",
            "--title",
            "Team Meeting",
            "--start",
            "2024-05-01T10:00:00-04:00",
            "--end",
            "2024-05-01T11:00:00-04:00",
            "--variant",
            "365",
        ])
        .unwrap();

        match cli.command {
            Commands::Url { variant, event, .. } => {
                assert_eq!(variant, CalendarVariant::Office);
                assert_eq!(event.title.as_deref(), Some("Team Meeting"));
            }
            _ => panic!("Expected url command"),
        }
    }

    #[test]
    fn event_file_conflicts_with_flags() {
        let result = Cli::try_parse_from([
            "outlook-buttons",
            "params",
            "--event",
            "event.json",
            "--title",
            "Other",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn event_file_alone_is_enough() {
        let cli = Cli::try_parse_from(["outlook-buttons", "buttons", "--event", "event.json"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn missing_start_is_rejected() {
        let result = Cli::try_parse_from(["outlook-buttons", "url", "--title", "x", "--end", "2024-05-01"]);
        assert!(result.is_err());
    }
}

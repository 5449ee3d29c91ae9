//! Arguments shared by the link-building commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use outlook_buttons_core::config::{ButtonsConfig, parse_timezone};
use outlook_buttons_core::{EventDescriptor, EventTime, Options};

#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// JSON file describing the event (title, start, end, all_day, description, permalink, label)
    #[arg(long, conflicts_with_all = ["title", "start", "end", "all_day", "description", "description_file", "permalink", "label"])]
    pub event: Option<PathBuf>,

    /// Event title (markup is stripped)
    #[arg(short, long, required_unless_present = "event")]
    pub title: Option<String>,

    /// Start (e.g. "2024-05-01T10:00:00-04:00", "2024-05-01 10:00" or "2024-05-01")
    #[arg(short, long, required_unless_present = "event")]
    pub start: Option<String>,

    /// End, same formats as --start
    #[arg(short, long, required_unless_present = "event")]
    pub end: Option<String>,

    /// Treat the event as all-day
    #[arg(long)]
    pub all_day: bool,

    /// Event description (HTML)
    #[arg(short, long, conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the event description from a file
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// Event page URL, linked when the description is cut short
    #[arg(short, long)]
    pub permalink: Option<String>,

    /// What to call the event in the "view full description" note
    #[arg(long)]
    pub label: Option<String>,
}

impl EventArgs {
    pub fn into_descriptor(self) -> Result<EventDescriptor> {
        if let Some(path) = self.event {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read event file at {}", path.display()))?;
            return serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse event file at {}", path.display()));
        }

        let title = self.title.context("--title is required")?;
        let start: EventTime = self.start.as_deref().context("--start is required")?.parse()?;
        let end: EventTime = self.end.as_deref().context("--end is required")?.parse()?;

        let description = match (self.description, self.description_file) {
            (Some(text), _) => Some(text),
            (None, Some(path)) => Some(std::fs::read_to_string(&path).with_context(|| {
                format!("Failed to read description file at {}", path.display())
            })?),
            (None, None) => None,
        };

        let mut event = EventDescriptor::new(title, start, end);
        event.all_day = self.all_day;
        event.description = description;
        if let Some(permalink) = self.permalink {
            event.permalink = permalink;
        }
        if let Some(label) = self.label {
            event.label = label;
        }

        Ok(event)
    }
}

#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Config file to use instead of ~/.config/outlook-buttons/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave the event description out of the link
    #[arg(long)]
    pub no_description: bool,

    /// Cut the description to this many words
    #[arg(long)]
    pub word_limit: Option<usize>,

    /// Site timezone (IANA name, e.g. "Europe/Paris")
    #[arg(long)]
    pub timezone: Option<String>,
}

impl OptionArgs {
    pub fn load_config(&self) -> Result<ButtonsConfig> {
        let config = match &self.config {
            Some(path) => ButtonsConfig::load_from(path)?,
            None => ButtonsConfig::load()?,
        };
        Ok(config)
    }

    /// Options from `config`, overridden by whatever was given on the command line.
    pub fn resolve(&self, config: &ButtonsConfig) -> Result<Options> {
        let mut options = config.options()?;

        if self.no_description {
            options.include_description = false;
        }
        if let Some(limit) = self.word_limit {
            options.description_word_limit = Some(limit);
        }
        if let Some(ref tz) = self.timezone {
            options.timezone = Some(parse_timezone(tz)?);
        }

        Ok(options)
    }
}

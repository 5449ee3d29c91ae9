use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use outlook_buttons_core::render::ButtonSet;
use outlook_buttons_core::{EventDescriptor, Options, inject_buttons, render_buttons};

/// Read an HTML fragment from `input` (or stdin) and print it with the
/// Outlook buttons placed right inside its outer element.
pub fn run(
    input: Option<&Path>,
    event: &EventDescriptor,
    buttons: &ButtonSet,
    options: &Options,
) -> Result<()> {
    let container = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read HTML from {}", path.display()))?,
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            html
        }
    };

    let markup = render_buttons(event, buttons, options)?;
    print!("{}", inject_buttons(&container, &markup));

    Ok(())
}

use anyhow::{Context, Result};
use outlook_buttons_core::{CalendarVariant, EventDescriptor, Options, build_url};
use tracing::info;

pub fn run(
    event: &EventDescriptor,
    variant: CalendarVariant,
    options: &Options,
    open_in_browser: bool,
) -> Result<()> {
    let url = build_url(event, variant, options)?;
    println!("{}", url);

    if open_in_browser {
        info!(%variant, "Opening deep link in browser");
        open::that(&url).context("Failed to open browser")?;
    }

    Ok(())
}

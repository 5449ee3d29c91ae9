use anyhow::Result;
use outlook_buttons_core::render::ButtonSet;
use outlook_buttons_core::{EventDescriptor, Options, render_buttons};

pub fn run(event: &EventDescriptor, buttons: &ButtonSet, options: &Options) -> Result<()> {
    let markup = render_buttons(event, buttons, options)?;

    if markup.is_empty() {
        eprintln!("All buttons are disabled in the config. Nothing to render.");
    }

    for button in markup {
        println!("{}", button);
    }

    Ok(())
}

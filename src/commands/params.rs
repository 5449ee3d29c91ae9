use anyhow::Result;
use outlook_buttons_core::{EventDescriptor, Options, build_parameters};
use owo_colors::OwoColorize;

pub fn run(event: &EventDescriptor, options: &Options, json: bool) -> Result<()> {
    let params = build_parameters(event, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    for (key, value) in params.pairs() {
        println!("{:>8}  {}", key.bold(), value);
    }
    if params.body.is_none() {
        println!("{:>8}  {}", "body".bold(), "(omitted)".dimmed());
    }

    Ok(())
}

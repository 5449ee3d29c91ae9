//! "Add to Outlook calendar" links for events.
//!
//! - `link` builds the compose deep link for Outlook Live and Outlook 365
//! - `render` turns links into anchor-tag buttons and splices them into
//!   existing markup
//! - `config` loads builder options from a TOML file

pub mod config;
pub mod encode;
pub mod error;
pub mod event;
pub mod html;
pub mod link;
pub mod options;
pub mod render;
pub mod variant;

pub use error::{LinkError, LinkResult};
pub use event::{EventDescriptor, EventTime};
pub use link::{CalendarLinkParameters, build_parameters, build_url};
pub use options::Options;
pub use render::{ButtonSet, inject_buttons, render_button_markup, render_buttons};
pub use variant::CalendarVariant;

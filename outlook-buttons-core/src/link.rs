//! Outlook compose deep links.
//!
//! `build_parameters` turns an event into the query parameters Outlook's
//! web calendar understands, and `build_url` attaches them to the compose
//! endpoint of a calendar variant. Both are pure: the same event and
//! options always give the same output.

use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::encode::{encode_spaces_as_percent20, form_encode};
use crate::error::LinkResult;
use crate::event::EventDescriptor;
use crate::html;
use crate::options::Options;
use crate::variant::CalendarVariant;

pub const COMPOSE_PATH: &str = "/calendar/action/compose";
pub const RRV: &str = "addevent";

/// Descriptions longer than this are cut, keeping the URL under browser limits
pub const MAX_DESCRIPTION_CHARS: usize = 900;

/// ISO 8601 local time without offset
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Query parameters of a compose deep link.
///
/// `subject` and `body` are stored already encoded; the other values are raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarLinkParameters {
    pub path: String,
    pub rrv: String,
    pub startdt: String,
    pub enddt: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl CalendarLinkParameters {
    /// Parameters in link order, values as stored
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("path", self.path.as_str()),
            ("rrv", self.rrv.as_str()),
            ("startdt", self.startdt.as_str()),
            ("enddt", self.enddt.as_str()),
            ("subject", self.subject.as_str()),
        ];
        if let Some(ref body) = self.body {
            pairs.push(("body", body.as_str()));
        }
        pairs
    }

    /// `&`-joined query string. Raw values are form-encoded, `subject` and
    /// `body` are passed through as they are.
    pub fn to_query(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| match key {
                "subject" | "body" => format!("{}={}", key, value),
                _ => format!("{}={}", key, form_encode(value)),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Build the deep link parameters for an event.
pub fn build_parameters(event: &EventDescriptor, options: &Options) -> CalendarLinkParameters {
    let start = event.start.wall_clock(options.timezone);
    let end = event.end.wall_clock(options.timezone);

    let startdt = start.format(DATETIME_FORMAT).to_string();

    // Outlook's allday flag misbehaves across timezones, so all-day events
    // end on their last date at the start's time of day.
    let enddt = if event.all_day {
        end.date().and_time(start.time()).format(DATETIME_FORMAT).to_string()
    } else {
        end.format(DATETIME_FORMAT).to_string()
    };

    let subject = encode_spaces_as_percent20(&html::strip_tags(&event.title, &[]));

    let body = options
        .include_description
        .then(|| encode_spaces_as_percent20(&description_text(event, options)));

    CalendarLinkParameters {
        path: COMPOSE_PATH.to_string(),
        rrv: RRV.to_string(),
        startdt,
        enddt,
        subject,
        body,
    }
}

/// Build the full compose URL for an event on the given Outlook variant.
pub fn build_url(
    event: &EventDescriptor,
    variant: CalendarVariant,
    options: &Options,
) -> LinkResult<String> {
    let params = build_parameters(event, options);

    let mut url = Url::parse(variant.base_url())?;
    url.set_query(Some(&params.to_query()));

    trace!(%variant, %url, "Built deep link");
    Ok(url.to_string())
}

/// Plain description text before encoding
fn description_text(event: &EventDescriptor, options: &Options) -> String {
    let raw = event.description.as_deref().unwrap_or_default();
    let mut text = html::strip_tags(raw, &["p"]);

    let len = text.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        text = html::truncate_chars(&text, MAX_DESCRIPTION_CHARS).to_string();
        debug!(chars = len, "Truncated event description");

        // A long permalink would push the URL past what browsers accept
        let permalink = event.permalink.as_str();
        if !permalink.is_empty() && permalink.chars().count() < MAX_DESCRIPTION_CHARS {
            text.push_str(&format!(
                " (View Full {} Description Here: {})",
                event.label, permalink
            ));
        }
    }

    if let Some(limit) = options.word_limit() {
        text = html::trim_words(&text, limit);
        debug!(limit, "Trimmed event description to word limit");
    }

    text
}

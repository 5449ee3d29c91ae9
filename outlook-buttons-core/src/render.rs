//! Button markup for event pages.

use serde::{Deserialize, Serialize};

use crate::error::LinkResult;
use crate::event::EventDescriptor;
use crate::link::build_url;
use crate::options::Options;
use crate::variant::CalendarVariant;

fn enabled() -> bool {
    true
}

/// Which Outlook buttons to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSet {
    #[serde(default = "enabled")]
    pub live: bool,
    #[serde(default = "enabled")]
    pub office: bool,
}

impl Default for ButtonSet {
    fn default() -> Self {
        ButtonSet {
            live: true,
            office: true,
        }
    }
}

impl ButtonSet {
    /// Enabled variants, Live first
    pub fn variants(&self) -> Vec<CalendarVariant> {
        CalendarVariant::ALL
            .into_iter()
            .filter(|variant| match variant {
                CalendarVariant::Live => self.live,
                CalendarVariant::Office => self.office,
            })
            .collect()
    }
}

/// Anchor tag for one Outlook button. `url` is used verbatim as the href.
pub fn render_button_markup(url: &str, variant: CalendarVariant) -> String {
    format!(
        r#"<a target="_blank" class="tribe-events-gcal {} tribe-events-button" title="{}" href="{}">{}</a>"#,
        variant.css_class(),
        variant.title(),
        url,
        variant.label()
    )
}

/// Markup for every enabled button of `event`.
pub fn render_buttons(
    event: &EventDescriptor,
    buttons: &ButtonSet,
    options: &Options,
) -> LinkResult<Vec<String>> {
    buttons
        .variants()
        .into_iter()
        .map(|variant| Ok(render_button_markup(&build_url(event, variant, options)?, variant)))
        .collect()
}

/// Insert `buttons` right after the opening tag of `container`.
///
/// `container` is an HTML fragment wrapped in a single element, such as the
/// `<div>` holding a page's export links. Without any `>` the buttons go in
/// front.
pub fn inject_buttons(container: &str, buttons: &[String]) -> String {
    let split = container.find('>').map_or(0, |idx| idx + 1);
    let (head, tail) = container.split_at(split);

    let mut out = String::with_capacity(container.len() + buttons.iter().map(String::len).sum::<usize>());
    out.push_str(head);
    for button in buttons {
        out.push_str(button);
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> EventDescriptor {
        EventDescriptor::new(
            "Team Meeting",
            "2024-05-01T10:00:00-04:00".parse().unwrap(),
            "2024-05-01T11:00:00-04:00".parse().unwrap(),
        )
    }

    #[test]
    fn live_button_markup() {
        let markup = render_button_markup("https://example.com/x?a=1&b=2", CalendarVariant::Live);
        assert_eq!(
            markup,
            "<a target=\"_blank\" class=\"tribe-events-gcal tribe-events-outlook-live tribe-events-button\" \
             title=\"Add to Outlook Live Calendar\" href=\"https://example.com/x?a=1&b=2\">+ Outlook Live</a>"
        );
    }

    #[test]
    fn office_button_markup() {
        let markup = render_button_markup("u", CalendarVariant::Office);
        assert!(markup.contains("tribe-events-outlook-365"), "Got: {}", markup);
        assert!(markup.contains("title=\"Add to Outlook 365 Calendar\""));
        assert!(markup.ends_with(">+ Outlook 365</a>"));
    }

    #[test]
    fn href_is_exactly_the_built_url() {
        let options = Options::default();
        let url = build_url(&event(), CalendarVariant::Office, &options).unwrap();
        let markup = render_button_markup(&url, CalendarVariant::Office);
        assert!(markup.contains(&format!("href=\"{}\"", url)));
    }

    #[test]
    fn render_buttons_respects_toggles() {
        let options = Options::default();

        let both = render_buttons(&event(), &ButtonSet::default(), &options).unwrap();
        assert_eq!(both.len(), 2);
        assert!(both[0].contains("outlook.live.com"));
        assert!(both[1].contains("outlook.office.com"));

        let office_only = ButtonSet {
            live: false,
            office: true,
        };
        let one = render_buttons(&event(), &office_only, &options).unwrap();
        assert_eq!(one.len(), 1);
        assert!(one[0].contains("+ Outlook 365"));
    }

    #[test]
    fn inject_after_opening_tag() {
        let container = r#"<div class="tribe-events-cal-links"><a href="/ical">iCal</a></div>"#;
        let buttons = vec!["<a>L</a>".to_string(), "<a>O</a>".to_string()];

        assert_eq!(
            inject_buttons(container, &buttons),
            r#"<div class="tribe-events-cal-links"><a>L</a><a>O</a><a href="/ical">iCal</a></div>"#
        );
    }

    #[test]
    fn inject_without_tag_prepends() {
        let buttons = vec!["<a>L</a>".to_string()];
        assert_eq!(inject_buttons("plain text", &buttons), "<a>L</a>plain text");
        assert_eq!(inject_buttons("", &buttons), "<a>L</a>");
    }

    #[test]
    fn button_set_deserializes_with_defaults() {
        let set: ButtonSet = toml::from_str("office = false").unwrap();
        assert_eq!(set.variants(), vec![CalendarVariant::Live]);
    }
}

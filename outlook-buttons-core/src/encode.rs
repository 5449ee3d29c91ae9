//! Percent-encoding for Outlook deep link values.
//!
//! Form encoding writes a space as `+`, which Outlook's compose endpoint
//! shows literally. Outlook does accept `%20`.

use url::form_urlencoded;

/// Form-url-encode `value`.
pub fn form_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Form-url-encode `value`, writing every space as `%20` and `*` as `%2A`.
///
/// A literal `+` in the input is encoded as `%2B` by the form encoder, so
/// every `+` left in its output stands for a space. `*` is the one
/// character the form encoder passes through that Outlook links escape.
pub fn encode_spaces_as_percent20(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for chunk in form_urlencoded::byte_serialize(value.as_bytes()) {
        match chunk {
            "+" => out.push_str("%20"),
            _ if chunk.contains('*') => out.push_str(&chunk.replace('*', "%2A")),
            _ => out.push_str(chunk),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_percent20() {
        assert_eq!(encode_spaces_as_percent20("Team Meeting"), "Team%20Meeting");
        assert_eq!(encode_spaces_as_percent20("  a  "), "%20%20a%20%20");
    }

    #[test]
    fn literal_plus_is_untouched() {
        assert_eq!(encode_spaces_as_percent20("C++ meetup"), "C%2B%2B%20meetup");
    }

    #[test]
    fn other_characters_match_form_encoding() {
        let input = "Q&A: \"caf\u{e9}\" / 50% <p>";
        let expected = form_encode(input).replace('+', "%20");
        assert_eq!(encode_spaces_as_percent20(input), expected);
        assert!(!encode_spaces_as_percent20(input).contains('+'));
    }

    #[test]
    fn asterisk_is_escaped() {
        assert_eq!(encode_spaces_as_percent20("a*b~c"), "a%2Ab%7Ec");
        assert_eq!(encode_spaces_as_percent20("**Bold** news"), "%2A%2ABold%2A%2A%20news");
    }

    #[test]
    fn form_encode_escapes_reserved() {
        assert_eq!(form_encode("/calendar/action/compose"), "%2Fcalendar%2Faction%2Fcompose");
        assert_eq!(form_encode("2024-05-01T10:00:00"), "2024-05-01T10%3A00%3A00");
    }
}

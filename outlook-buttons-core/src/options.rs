//! Builder options.

use chrono_tz::Tz;

/// Controls what goes into a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Whether to send the event description as the `body` parameter
    pub include_description: bool,
    /// Cut the description to this many words. `None` or `Some(0)` means no limit.
    pub description_word_limit: Option<usize>,
    /// Site timezone. Offset-bearing times are shifted into it before formatting.
    pub timezone: Option<Tz>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            include_description: true,
            description_word_limit: None,
            timezone: None,
        }
    }
}

impl Options {
    /// Word limit, if one is actually in effect
    pub fn word_limit(&self) -> Option<usize> {
        self.description_word_limit.filter(|&n| n > 0)
    }
}

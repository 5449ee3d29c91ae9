//! Outlook web calendar flavours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// Which Outlook web calendar a link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarVariant {
    /// Outlook Live (personal Microsoft accounts)
    Live,
    /// Outlook 365 (work or school accounts)
    Office,
}

impl CalendarVariant {
    pub const ALL: [CalendarVariant; 2] = [CalendarVariant::Live, CalendarVariant::Office];

    pub fn host(&self) -> &'static str {
        match self {
            CalendarVariant::Live => "outlook.live.com",
            CalendarVariant::Office => "outlook.office.com",
        }
    }

    /// Compose deep link endpoint, without query string
    pub fn base_url(&self) -> &'static str {
        match self {
            CalendarVariant::Live => "https://outlook.live.com/calendar/0/deeplink/compose/",
            CalendarVariant::Office => "https://outlook.office.com/calendar/0/deeplink/compose/",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CalendarVariant::Live => "tribe-events-outlook-live",
            CalendarVariant::Office => "tribe-events-outlook-365",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalendarVariant::Live => "Add to Outlook Live Calendar",
            CalendarVariant::Office => "Add to Outlook 365 Calendar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalendarVariant::Live => "+ Outlook Live",
            CalendarVariant::Office => "+ Outlook 365",
        }
    }
}

impl FromStr for CalendarVariant {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(CalendarVariant::Live),
            "office" | "365" => Ok(CalendarVariant::Office),
            _ => Err(LinkError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for CalendarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarVariant::Live => write!(f, "live"),
            CalendarVariant::Office => write!(f, "office"),
        }
    }
}

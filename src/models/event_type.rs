use serde::{Deserialize, Deserializer};
use std::fmt;

/// Kind of attendance recorded for a day.
///
/// The six known tags map to a display name; any other tag is kept verbatim
/// in `Custom` and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Wfh,
    Wfo,
    AnnualLeave,
    SickLeave,
    Holiday,
    Other,
    Custom(String),
}

impl EventType {
    /// Convert DB/wire tag → enum. Never fails: unknown tags become `Custom`.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "WFH" => Self::Wfh,
            "WFO" => Self::Wfo,
            "AL" => Self::AnnualLeave,
            "SL" => Self::SickLeave,
            "HOL" => Self::Holiday,
            "OTHER" => Self::Other,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Convert enum → DB/wire tag
    pub fn to_db_str(&self) -> &str {
        match self {
            EventType::Wfh => "WFH",
            EventType::Wfo => "WFO",
            EventType::AnnualLeave => "AL",
            EventType::SickLeave => "SL",
            EventType::Holiday => "HOL",
            EventType::Other => "OTHER",
            EventType::Custom(tag) => tag,
        }
    }

    /// Human readable label used by the calendar and the export.
    pub fn display_name(&self) -> &str {
        match self {
            EventType::Wfh => "Work From Home",
            EventType::Wfo => "Work From Office",
            EventType::AnnualLeave => "Annual Leave",
            EventType::SickLeave => "Sick Leave",
            EventType::Holiday => "Holiday",
            EventType::Other => "Other",
            EventType::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(EventType::from_db_str(&tag))
    }
}

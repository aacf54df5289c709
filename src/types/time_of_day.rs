use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ordering::error::SlotError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, SlotError> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }

        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Captures the hour and minute of any clock reading, dropping seconds.
    pub fn of<T: Timelike>(time: &T) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay::of(&time)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Accepts `HH:MM` and `HH:MM:SS`; seconds are validated then ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTime {
            value: s.to_string(),
        };

        let mut parts = s.trim().split(':');
        let hour = parse_field(parts.next(), 23).ok_or_else(invalid)?;
        let minute = parse_field(parts.next(), 59).ok_or_else(invalid)?;

        if let Some(seconds) = parts.next() {
            parse_field(Some(seconds), 59).ok_or_else(invalid)?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        TimeOfDay::from_hm(hour, minute)
    }
}

fn parse_field(field: Option<&str>, max: u32) -> Option<u32> {
    let field = field?;
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    field.parse::<u32>().ok().filter(|value| *value <= max)
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

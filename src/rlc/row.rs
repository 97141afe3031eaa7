use serde::Serialize;
use std::fmt;

/// Transfer direction relative to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Direction {
    #[serde(rename = "UL")]
    Ul,
    #[serde(rename = "DL")]
    Dl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ul => "UL",
            Direction::Dl => "DL",
        }
    }

    /// Parse the tag as it appears inside `[RLC][..]`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "UL" => Some(Direction::Ul),
            "DL" => Some(Direction::Dl),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single PDU transfer extracted from one RLC log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub direction: Direction,
    pub ue_id: u64,
    /// Payload size in bytes.
    pub size: u64,
    /// Timestamp in seconds.
    pub time: f64,
}

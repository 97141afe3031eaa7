//! Throughput model: group records by UE and direction, then compute rates.

use crate::rlc::{Direction, LogRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Running totals for one (UE, direction) group.
#[derive(Debug, Clone, Copy)]
struct GroupStats {
    records: usize,
    bytes: u64,
    first_time: f64,
    last_time: f64,
}

impl GroupStats {
    fn new(record: &LogRecord) -> Self {
        Self {
            records: 1,
            bytes: record.size,
            first_time: record.time,
            last_time: record.time,
        }
    }

    fn add(&mut self, record: &LogRecord) {
        self.records += 1;
        self.bytes = self.bytes.saturating_add(record.size);
        self.first_time = self.first_time.min(record.time);
        self.last_time = self.last_time.max(record.time);
    }

    fn finish(self) -> DirectionThroughput {
        let span_s = self.last_time - self.first_time;
        let kbps = if span_s > 0.0 {
            (self.bytes as f64 * 8.0 / span_s) / 1000.0
        } else {
            0.0
        };

        DirectionThroughput {
            records: self.records,
            bytes: self.bytes,
            span_s,
            kbps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionThroughput {
    pub records: usize,
    pub bytes: u64,
    /// Latest minus earliest timestamp in the group, seconds.
    pub span_s: f64,
    /// Zero when the span is zero (single record, or all records at one instant).
    pub kbps: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UeThroughput {
    /// None if the UE has no UL records at all.
    #[serde(rename = "UL")]
    pub ul: Option<DirectionThroughput>,
    /// None if the UE has no DL records at all.
    #[serde(rename = "DL")]
    pub dl: Option<DirectionThroughput>,
}

impl UeThroughput {
    pub fn get(&self, direction: Direction) -> Option<&DirectionThroughput> {
        match direction {
            Direction::Ul => self.ul.as_ref(),
            Direction::Dl => self.dl.as_ref(),
        }
    }

    /// Rate for display: a direction with no records reads as 0.
    pub fn kbps(&self, direction: Direction) -> f64 {
        self.get(direction).map_or(0.0, |d| d.kbps)
    }
}

/// Per-UE throughput, ordered by UE id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThroughputResult {
    pub ues: BTreeMap<u64, UeThroughput>,
}

impl ThroughputResult {
    pub fn is_empty(&self) -> bool {
        self.ues.is_empty()
    }
}

/// Build throughput for every UE seen in `records`.
///
/// Single pass into (UE, direction) accumulators, then one finalize pass.
pub fn build_throughput(records: &[LogRecord]) -> ThroughputResult {
    let mut groups: BTreeMap<(u64, Direction), GroupStats> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.ue_id, record.direction))
            .and_modify(|g| g.add(record))
            .or_insert_with(|| GroupStats::new(record));
    }

    let mut ues: BTreeMap<u64, UeThroughput> = BTreeMap::new();
    for ((ue_id, direction), stats) in groups {
        let entry = ues.entry(ue_id).or_default();
        match direction {
            Direction::Ul => entry.ul = Some(stats.finish()),
            Direction::Dl => entry.dl = Some(stats.finish()),
        }
    }

    log::debug!("computed throughput for {} UEs", ues.len());
    ThroughputResult { ues }
}

//! Progress statistics snapshots and their renderings.
//!
//! A [`Stats`] value is computed fresh on every advance of an
//! [`Eta`](crate::Eta) adapter and never mutated afterwards. It carries one
//! [`AbsRelTime`] facet each for the whole job, the finished part, and the
//! unfinished part, plus the projected completion instant.

use chrono::{DateTime, Local, TimeDelta};
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Write};

/// One facet of progress: a time interval, an element count, and the count
/// expressed as a percentage of the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbsRelTime {
    /// Elapsed or projected time interval for this facet.
    #[serde(serialize_with = "serialize_duration")]
    pub duration: TimeDelta,
    /// Number of elements this facet represents.
    pub count: usize,
    /// This facet's count as a percentage of the total count (0-100).
    pub percentage: f64,
}

/// Immutable snapshot of progress at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// The whole job: count = total elements, duration = projected total
    /// runtime, percentage fixed at 100.
    pub total: AbsRelTime,
    /// The unfinished part of the job.
    pub remaining: AbsRelTime,
    /// The finished part of the job.
    pub done: AbsRelTime,
    /// Projected completion instant (now + remaining duration).
    #[serde(serialize_with = "serialize_timestamp")]
    pub eta: DateTime<Local>,
}

impl Stats {
    /// Write this snapshot to `sink` as its own line and flush.
    pub fn print(&self, sink: &mut impl Write) -> io::Result<()> {
        writeln!(sink, "{self}")?;
        sink.flush()
    }

    /// Rewrite the current terminal line with this snapshot and flush.
    ///
    /// Emits a carriage return followed by the rendered snapshot, with no
    /// trailing newline, so consecutive calls overwrite each other in place.
    pub fn print_refresh(&self, sink: &mut impl Write) -> io::Result<()> {
        write!(sink, "\r{self}")?;
        sink.flush()
    }

    /// Convert to a generic JSON mapping.
    ///
    /// Top-level keys are `total`, `remaining`, `done` and `eta`; each facet
    /// nests `duration`, `count` and `percentage`. Durations and the
    /// timestamp are rendered as strings.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Serialize the mapping from [`Stats::to_value`] to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} = {:.1}%, remaining {}",
            self.done.count,
            self.total.count,
            self.done.percentage,
            format_clock(self.remaining.duration)
        )
    }
}

/// Format a duration in clock style: `H:MM:SS`, with fractional seconds when
/// present and a leading day count past 24 hours.
fn format_clock(duration: TimeDelta) -> String {
    let (total_secs, micros) = match duration.num_microseconds() {
        Some(us) if us >= 0 => (us / 1_000_000, us % 1_000_000),
        // Negative or overflowing durations degrade to whole seconds.
        _ => (duration.num_seconds().max(0), 0),
    };

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{} day{}, ", days, if days == 1 { "" } else { "s" }));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros > 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

fn serialize_duration<S: Serializer>(duration: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_clock(*duration))
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string())
}

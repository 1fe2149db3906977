//! The progress-estimation iterator adapter.
//!
//! [`Eta`] wraps a finite iterator and yields each element paired with a
//! fresh [`Stats`] snapshot: how much is done, how much remains, and a
//! projected completion time based on a linear per-item rate. The rate is a
//! cumulative average over the whole run, recomputed on every advance, so
//! early fluctuations smooth out over time.

use crate::stats::{AbsRelTime, Stats};
use chrono::{DateTime, Local, TimeDelta};
use std::io::{self, Write};

/// Errors from constructing an [`Eta`] adapter.
#[derive(Debug, thiserror::Error)]
pub enum EtaError {
    /// The wrapped iterator does not report an exact length and no explicit
    /// total was supplied, so there is no denominator to estimate against.
    #[error("iterator does not report an exact length; supply an explicit total")]
    InvalidArgument,
}

/// Iterator adapter that tracks progress and projects completion time.
///
/// Wraps an owned iterator and yields `(element, Stats)` pairs. By default
/// every advance also rewrites a status line on standard output; use
/// [`Eta::auto_print`], [`Eta::overwrite`] and [`Eta::sink`] to change that.
///
/// # Example
///
/// ```no_run
/// use eta::Eta;
///
/// let data = vec![10, 20, 30];
/// for (item, stats) in Eta::new(data.into_iter()).unwrap() {
///     // work with `item`; `stats.eta` says when the loop should finish
///     let _ = (item, stats);
/// }
/// ```
pub struct Eta<I> {
    /// The wrapped element source.
    inner: I,
    /// Total number of elements the source is expected to yield.
    total: usize,
    /// Number of elements retrieved so far.
    done: usize,
    /// Instant this adapter was constructed.
    start_time: DateTime<Local>,
    /// Emit a status line on every advance.
    auto_print: bool,
    /// Rewrite the previous status line in place instead of appending.
    overwrite: bool,
    /// Destination for emitted status lines.
    sink: Box<dyn Write>,
}

impl<I: Iterator> Eta<I> {
    /// Wrap `inner`, deriving the total from its size hint.
    ///
    /// The hint counts as a length only when its lower and upper bounds
    /// agree, which holds for slices, `Vec`, ranges and other exact-size
    /// sources. Adapters that lose exactness (`filter`, `take_while`, ...)
    /// fail with [`EtaError::InvalidArgument`]; use [`Eta::with_total`] for
    /// those.
    pub fn new(inner: I) -> Result<Self, EtaError> {
        let total = match inner.size_hint() {
            (lower, Some(upper)) if lower == upper => upper,
            _ => return Err(EtaError::InvalidArgument),
        };
        Ok(Self::with_total(inner, total))
    }

    /// Wrap `inner` with an explicit element total, used verbatim.
    pub fn with_total(inner: I, total: usize) -> Self {
        Self {
            inner,
            total,
            done: 0,
            start_time: Local::now(),
            auto_print: true,
            overwrite: true,
            sink: Box::new(io::stdout()),
        }
    }

    /// Enable or disable automatic status emission on each advance.
    pub fn auto_print(mut self, auto_print: bool) -> Self {
        self.auto_print = auto_print;
        self
    }

    /// Choose between in-place rewrites (`true`, the default) and one
    /// appended line per advance (`false`).
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Redirect emitted status lines to `sink` instead of standard output.
    pub fn sink(mut self, sink: impl Write + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Number of elements retrieved so far.
    pub fn done(&self) -> usize {
        self.done
    }

    /// Total number of elements this adapter expects.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Wall-clock time elapsed since construction.
    pub fn elapsed(&self) -> TimeDelta {
        Local::now() - self.start_time
    }

    /// Compute a fresh snapshot. Only called after an increment, so `done`
    /// is always at least 1.
    fn compute_stats(&self) -> Stats {
        let now = Local::now();
        let elapsed = now - self.start_time;
        let per_item = elapsed / clamp_i32(self.done);

        // A total smaller than done means the caller's total was wrong;
        // remaining bottoms out at zero while done keeps counting past it.
        let remaining_count = self.total.saturating_sub(self.done);
        let remaining_duration = per_item * clamp_i32(remaining_count);

        Stats {
            total: AbsRelTime {
                duration: per_item * clamp_i32(self.total),
                count: self.total,
                percentage: 100.0,
            },
            remaining: AbsRelTime {
                duration: remaining_duration,
                count: remaining_count,
                percentage: percentage(remaining_count, self.total),
            },
            done: AbsRelTime {
                duration: per_item * clamp_i32(self.done),
                count: self.done,
                percentage: percentage(self.done, self.total),
            },
            eta: now + remaining_duration,
        }
    }
}

impl<I: Iterator> Iterator for Eta<I> {
    type Item = (I::Item, Stats);

    /// Pull one element from the wrapped source.
    ///
    /// Returns `None` once the source is exhausted, leaving the counters
    /// untouched. Otherwise increments the done count, computes a snapshot,
    /// optionally emits it, and yields the element with the snapshot.
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.done += 1;
        let stats = self.compute_stats();

        if self.auto_print {
            // Best effort: a failed progress line must not abort the loop.
            let _ = if self.overwrite {
                stats.print_refresh(&mut self.sink)
            } else {
                stats.print(&mut self.sink)
            };
        }

        Some((item, stats))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Count as a percentage of `total`, 0.0 when there is no total to divide by.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

fn clamp_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

//! Download progress accounting.
//!
//! [`ByteCounter`] decides when a progress line is due; a [`ProgressSink`]
//! decides where it goes. The HTTP layer only feeds chunk sizes in.

use std::fmt;

/// Bytes that must arrive between two progress reports (1 MiB).
pub const REPORT_INTERVAL: u64 = 1024 * 1024;

const KIB: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Intermediate report, in whole KiB received so far.
    Received { kib: u64 },
    /// Emitted once when the body is fully consumed.
    Finished { kib: u64 },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Received { kib } => write!(f, "Received {}K...", kib),
            ProgressEvent::Finished { kib } => write!(f, "Received {}K total.", kib),
        }
    }
}

/// Receives progress events during a download.
pub trait ProgressSink: Send {
    fn on_event(&mut self, event: ProgressEvent);
}

/// Prints every event on stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn on_event(&mut self, event: ProgressEvent) {
        println!("{}", event);
    }
}

impl ProgressSink for Vec<ProgressEvent> {
    fn on_event(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// Running byte count with a report threshold.
#[derive(Debug)]
pub struct ByteCounter {
    received: u64,
    notified: u64,
    interval: u64,
}

impl Default for ByteCounter {
    fn default() -> Self {
        Self::new(REPORT_INTERVAL)
    }
}

impl ByteCounter {
    pub fn new(interval: u64) -> Self {
        Self {
            received: 0,
            notified: 0,
            interval,
        }
    }

    pub fn received(&self) -> u64 {
        self.received
    }

    /// Account for a chunk. Returns an event once at least `interval` bytes
    /// arrived since the previous report.
    pub fn record(&mut self, len: usize) -> Option<ProgressEvent> {
        self.received += len as u64;
        if self.received - self.notified >= self.interval {
            self.notified = self.received;
            Some(ProgressEvent::Received {
                kib: self.received / KIB,
            })
        } else {
            None
        }
    }

    pub fn finish(&self) -> ProgressEvent {
        ProgressEvent::Finished {
            kib: self.received / KIB,
        }
    }
}

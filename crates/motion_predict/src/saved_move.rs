//! Client-side per-tick motion records.
//!
//! Every simulated tick appends one [`SavedMoveRecord`] — a snapshot of
//! the live motion's progress flags at the moment the tick's input was
//! captured, *before* the tick integrates. Records are what a replay
//! after a server correction reads the resume time from, and what the
//! move-combining optimisation consults before collapsing two outgoing
//! moves into one.

use std::collections::VecDeque;

use motion_core::MotionState;

/// One tick's snapshot of motion progress, tagged with the tick's
/// timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedMoveRecord {
    /// Client timestamp of the tick this record belongs to.
    pub timestamp: f32,
    /// Elapsed motion time when the tick's input was captured (before
    /// the tick integrated).
    pub elapsed: f32,
    /// Whether the motion held valid data at capture time.
    pub has_valid_data: bool,
    /// Whether the motion was running at capture time.
    pub active: bool,
}

impl SavedMoveRecord {
    /// Capture a record from the live motion state.
    #[must_use]
    pub fn capture(timestamp: f32, state: &MotionState) -> Self {
        Self {
            timestamp,
            elapsed: state.elapsed(),
            has_valid_data: state.has_valid_data(),
            active: state.is_active(),
        }
    }

    /// Whether this record and the next one may be collapsed into a
    /// single outgoing move.
    ///
    /// Combining is allowed only when both flags match exactly on both
    /// records: collapsing across a flag change would erase a start or
    /// stop boundary the replay pass needs to see.
    #[must_use]
    pub fn can_combine_with(&self, next: &SavedMoveRecord) -> bool {
        self.active == next.active && self.has_valid_data == next.has_valid_data
    }
}

/// Default record capacity: two seconds of history at 60 ticks/s covers
/// any plausible round trip.
pub const DEFAULT_LOG_CAPACITY: usize = 120;

/// Append-only, timestamp-ordered buffer of saved-move records.
///
/// Records are retained until the server acknowledges their timestamp;
/// acknowledging prunes everything at or before the confirmed timestamp
/// and remembers the newest pruned record as the *last acked move*,
/// which the ack and correction rules consult.
#[derive(Debug)]
pub struct SavedMoveLog {
    records: VecDeque<SavedMoveRecord>,
    capacity: usize,
    last_acked: Option<SavedMoveRecord>,
}

impl SavedMoveLog {
    /// Create a log bounded to `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            last_acked: None,
        }
    }

    /// Number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The newest record acknowledged by the server, if any.
    #[must_use]
    pub fn last_acked(&self) -> Option<&SavedMoveRecord> {
        self.last_acked.as_ref()
    }

    /// Capture and append a record for the tick at `timestamp`.
    ///
    /// Timestamps must be appended in increasing order. The oldest
    /// record is dropped once the log exceeds its capacity.
    pub fn record(&mut self, timestamp: f32, state: &MotionState) -> SavedMoveRecord {
        let record = SavedMoveRecord::capture(timestamp, state);
        debug_assert!(
            self.records.back().is_none_or(|r| r.timestamp < timestamp),
            "saved moves must be recorded in timestamp order"
        );

        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
        record
    }

    /// Find the buffered record for an exact tick timestamp.
    #[must_use]
    pub fn find(&self, timestamp: f32) -> Option<&SavedMoveRecord> {
        self.records.iter().find(|r| r.timestamp == timestamp)
    }

    /// Acknowledge every record at or before `timestamp`, returning the
    /// newest one acknowledged (now also available via
    /// [`last_acked`](Self::last_acked)).
    pub fn acknowledge(&mut self, timestamp: f32) -> Option<&SavedMoveRecord> {
        let mut newest = None;
        while let Some(front) = self.records.front() {
            if front.timestamp > timestamp {
                break;
            }
            newest = self.records.pop_front();
        }

        if newest.is_some() {
            self.last_acked = newest;
        }
        self.last_acked.as_ref()
    }

    /// Iterate the buffered records from `timestamp` forward, in order.
    /// This is the replay slice after a correction for `timestamp`.
    pub fn replay_from(&self, timestamp: f32) -> impl Iterator<Item = &SavedMoveRecord> {
        self.records.iter().filter(move |r| r.timestamp >= timestamp)
    }
}

impl Default for SavedMoveLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

//! Diagnostic trace marks and measures.
//!
//! A lightweight recorder for named timestamps and named durations between
//! two timestamps. Purely observational: nothing in the crate consumes the
//! recorded values, and no operation here may panic or propagate an error
//! into a render loop. A measure referencing a missing mark logs a warning
//! and is discarded.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use bevy::log::warn;
use bevy::prelude::Resource;

/// Resource recording named performance marks and measures.
///
/// Timestamps are offsets from the recorder's construction. A disabled
/// recorder (see [`TraceRecorder::disabled`]) turns every operation into a
/// no-op, for hosts without a usable timing facility.
#[derive(Debug, Resource)]
pub struct TraceRecorder {
    epoch: Instant,
    enabled: bool,
    marks: HashMap<String, Duration>,
    measures: HashMap<String, Duration>,
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceRecorder {
    /// Create an enabled recorder with its epoch at the current instant.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            enabled: true,
            marks: HashMap::new(),
            measures: HashMap::new(),
        }
    }

    /// Create a recorder whose every operation is a no-op.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Whether this recorder actually records anything.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a named timestamp at the current instant.
    ///
    /// Re-marking an existing name overwrites the previous timestamp.
    pub fn mark(&mut self, name: &str) {
        if !self.enabled {
            return;
        }
        self.marks.insert(name.to_owned(), self.epoch.elapsed());
    }

    /// Record the duration between two previously recorded marks.
    ///
    /// If either mark is missing the measure is logged and discarded, never
    /// surfaced as an error. The duration saturates at zero when the end
    /// mark precedes the start mark.
    pub fn measure(&mut self, name: &str, start_mark: &str, end_mark: &str) {
        if !self.enabled {
            return;
        }
        let (Some(&start), Some(&end)) = (self.marks.get(start_mark), self.marks.get(end_mark))
        else {
            warn!("trace measure {name:?} skipped: missing mark {start_mark:?} or {end_mark:?}");
            return;
        };
        self.measures
            .insert(name.to_owned(), end.saturating_sub(start));
    }

    /// Timestamp of a recorded mark, as an offset from the epoch.
    pub fn mark_timestamp(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).copied()
    }

    /// Duration of a recorded measure.
    pub fn measure_duration(&self, name: &str) -> Option<Duration> {
        self.measures.get(name).copied()
    }

    /// Discard all recorded marks.
    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// Discard all recorded measures.
    pub fn clear_measures(&mut self) {
        self.measures.clear();
    }
}

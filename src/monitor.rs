//! Frame-rate monitoring.
//!
//! The monitor counts frames inside a rolling one-second window and emits a
//! rounded FPS value each time the window elapses. The window start rolls
//! forward by whole seconds, carrying the remainder, so sampling does not
//! drift and a long pause (backgrounded window) inflates at most one sample.

use std::time::Duration;

use bevy::ecs::event::{Event, EventWriter};
use bevy::ecs::system::{Res, ResMut};
use bevy::prelude::{Real, Resource, Time};

use crate::constants::SAMPLE_WINDOW_MS;

/// Event carrying one frame-rate sample.
///
/// At most one sample is emitted per window. Consumers should treat each
/// sample as replacing the previous value; no history is retained.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsSample {
    /// Rounded frames-per-second over the last window
    pub fps: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum MonitorState {
    /// Not yet started; the sampling system arms it on its first run
    #[default]
    Idle,
    /// Counting frames inside the current window
    Running { window_start: Duration, frames: u32 },
    /// Explicitly stopped; ticks are ignored until restarted
    Stopped,
}

/// Resource driving once-per-second frame-rate sampling.
///
/// The sampling system calls [`FrameRateMonitor::tick`] every frame with the
/// current real time. [`FrameRateMonitor::stop`] is idempotent and guarantees
/// no further samples are produced until [`FrameRateMonitor::start`] is
/// called again.
#[derive(Debug, Default, Resource)]
pub struct FrameRateMonitor {
    state: MonitorState,
    last_fps: Option<u32>,
}

impl FrameRateMonitor {
    /// Start counting frames with a window beginning at `now`.
    ///
    /// A no-op while already running.
    pub fn start(&mut self, now: Duration) {
        if matches!(self.state, MonitorState::Running { .. }) {
            return;
        }
        self.state = MonitorState::Running {
            window_start: now,
            frames: 0,
        };
    }

    /// Stop counting. Idempotent; pending window state is discarded and no
    /// further samples are produced until restarted.
    pub fn stop(&mut self) {
        self.state = MonitorState::Stopped;
    }

    /// Whether the monitor has never been started.
    pub fn is_idle(&self) -> bool {
        self.state == MonitorState::Idle
    }

    /// Whether the monitor is currently counting frames.
    pub fn is_running(&self) -> bool {
        matches!(self.state, MonitorState::Running { .. })
    }

    /// The most recently emitted sample, if any.
    ///
    /// Stays `None` when sampling never started, which is how callers detect
    /// the permanently-lowest-tier fallback.
    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    /// Count one rendered frame at time `now`.
    ///
    /// Returns a rounded FPS value when the one-second window has elapsed,
    /// `None` otherwise. On emission the counter resets and the window start
    /// rolls to `now - (elapsed % window)`: the remainder carries over, so
    /// there is no systematic drift, and after a long host pause the error is
    /// capped to the one window that spanned the pause.
    pub fn tick(&mut self, now: Duration) -> Option<u32> {
        let MonitorState::Running {
            window_start,
            frames,
        } = &mut self.state
        else {
            return None;
        };

        *frames += 1;
        let elapsed = now.saturating_sub(*window_start);
        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed_ms < SAMPLE_WINDOW_MS {
            return None;
        }

        let fps = ((*frames as u64 * 1000 + elapsed_ms / 2) / elapsed_ms) as u32;
        *frames = 0;
        *window_start = now - Duration::from_millis(elapsed_ms % SAMPLE_WINDOW_MS);
        self.last_fps = Some(fps);
        Some(fps)
    }
}

/// Update system that drives the monitor from real time.
///
/// Arms an idle monitor on its first run, then ticks it once per frame and
/// forwards each emitted sample as an [`FpsSample`] event. Inert when the
/// real-time clock resource is unavailable: no samples flow and the selected
/// tier stays at its conservative default.
pub fn sample_frame_rate(
    time: Option<Res<Time<Real>>>,
    mut monitor: ResMut<FrameRateMonitor>,
    mut samples: EventWriter<FpsSample>,
) {
    let Some(time) = time else {
        return;
    };
    let now = time.elapsed();

    if monitor.is_idle() {
        monitor.start(now);
        return;
    }

    if let Some(fps) = monitor.tick(now) {
        samples.write(FpsSample { fps });
    }
}

//! Constants used throughout the bevy_adaptive_quality plugin.
//!
//! This module centralizes default thresholds, tier parameter bundles, and
//! the well-known trace mark/measure names shared with consumers.

/// FPS below this value always selects the lowest quality tier
pub const DEFAULT_LOW_FPS_THRESHOLD: u32 = 30;

/// FPS below this value (but at or above the low threshold) selects the medium tier
pub const DEFAULT_MEDIUM_FPS_THRESHOLD: u32 = 45;

/// Minimum logical core count for a device to qualify as high-performance
pub const DEFAULT_MIN_CORES: usize = 4;

/// Minimum device memory (GiB) for a device to qualify as high-performance
pub const DEFAULT_MIN_MEMORY_GIB: f64 = 4.0;

/// Length of the frame-rate sampling window in milliseconds
pub const SAMPLE_WINDOW_MS: u64 = 1000;

/// Trace mark recorded at the start of a frame
pub const FRAME_START_MARK: &str = "frame_start";

/// Trace mark recorded at the end of a frame
pub const FRAME_END_MARK: &str = "frame_end";

/// Trace mark recorded before particle generation begins
pub const PARTICLES_START_MARK: &str = "generate_particles";

/// Trace mark recorded after particle generation completes
pub const PARTICLES_END_MARK: &str = "particles_generated";

/// Trace measure covering a whole frame (frame start to frame end)
pub const FRAME_TIME_MEASURE: &str = "frame_time";

/// Trace measure covering particle generation
pub const PARTICLE_GENERATION_MEASURE: &str = "particle_generation";

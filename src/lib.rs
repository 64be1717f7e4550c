//! FPS-adaptive rendering quality tiers for Bevy apps.
//!
//! The plugin probes host capabilities once at startup, samples the rendered
//! frame rate once per second, and publishes one of three discrete quality
//! tiers ([`QualityTier`]) in the [`CurrentQuality`] resource. Visual systems
//! read the tier's parameter bundle each frame to decide how much work to do
//! (particle counts, bloom, post-processing).
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_adaptive_quality::{AdaptiveQualityPlugin, CurrentQuality};
//!
//! fn spawn_particles(quality: Res<CurrentQuality>) {
//!     let _count = quality.params.particle_count;
//! }
//!
//! let mut app = App::new();
//! app.add_plugins(DefaultPlugins);
//! app.add_plugins(AdaptiveQualityPlugin::default());
//! app.add_systems(Update, spawn_particles);
//! app.run();
//! ```

pub mod capability;
pub mod config;
pub mod constants;
pub mod monitor;
pub mod plugin;
pub mod selector;
pub mod trace;

pub use capability::{probe_capabilities, CapabilitySnapshot};
pub use config::{
    AdaptiveQualitySettings, DeviceThresholds, FpsThresholds, TierParams, TierPresets,
};
pub use constants::*;
pub use monitor::{sample_frame_rate, FpsSample, FrameRateMonitor};
pub use plugin::AdaptiveQualityPlugin;
pub use selector::{apply_quality_selection, select_tier, CurrentQuality, QualityTier};
pub use trace::TraceRecorder;

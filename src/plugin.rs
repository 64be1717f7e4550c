//! Core plugin implementation for bevy_adaptive_quality.
//!
//! This module contains the main [`AdaptiveQualityPlugin`] and its setup logic.

use bevy::{
    app::{App, Plugin, Startup, Update},
    prelude::IntoScheduleConfigs,
};

use crate::{
    apply_quality_selection, probe_capabilities, sample_frame_rate, AdaptiveQualitySettings,
    CurrentQuality, FpsSample, FrameRateMonitor, TraceRecorder,
};

/// Main plugin for adaptive rendering quality.
///
/// Probes host capabilities once at startup, samples the frame rate once per
/// second, and keeps the [`CurrentQuality`] resource updated for visual
/// systems to consume. Insert an [`AdaptiveQualitySettings`] resource before
/// adding the plugin to override thresholds or tier bundles.
///
/// # Example
///
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_adaptive_quality::AdaptiveQualityPlugin;
///
/// let mut app = App::new();
/// app.add_plugins(DefaultPlugins);
/// app.add_plugins(AdaptiveQualityPlugin::default());
/// app.run();
/// ```
#[derive(Default)]
pub struct AdaptiveQualityPlugin;

impl Plugin for AdaptiveQualityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AdaptiveQualitySettings>() // Thresholds and tier bundles
            .init_resource::<FrameRateMonitor>() // Rolling one-second FPS window
            .init_resource::<CurrentQuality>() // Published tier, starts Low
            .init_resource::<TraceRecorder>() // Diagnostic marks/measures
            .add_event::<FpsSample>()
            // Capability signals do not change at runtime, so probe once
            .add_systems(Startup, probe_capabilities)
            .add_systems(
                Update,
                (sample_frame_rate, apply_quality_selection).chain(),
            );
    }
}

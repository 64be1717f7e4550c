//! Integration tests for the bevy_adaptive_quality plugin
//!
//! These tests verify that the plugin integrates correctly with Bevy and
//! that capability probing, sampling, and tier selection work together.

use bevy::prelude::*;
use bevy_adaptive_quality::{
    AdaptiveQualityPlugin, AdaptiveQualitySettings, CapabilitySnapshot, CurrentQuality,
    DeviceThresholds, FpsSample, FrameRateMonitor, QualityTier, TraceRecorder,
};

#[test]
fn plugin_can_be_added_to_app() {
    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);

    // This should not panic
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    assert!(app.world().contains_resource::<AdaptiveQualitySettings>());
    assert!(app.world().contains_resource::<FrameRateMonitor>());
    assert!(app.world().contains_resource::<CurrentQuality>());
    assert!(app.world().contains_resource::<TraceRecorder>());
}

#[test]
fn capabilities_are_probed_once_at_startup() {
    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    // Probing never fails; missing signals degrade to defaults
    let snapshot = app.world().resource::<CapabilitySnapshot>();
    assert!(snapshot.logical_cores >= 1);
    assert!(snapshot.memory_gib >= 0.0);
    // Headless test app has no render adapter, so no acceleration hint
    assert!(!snapshot.has_accelerated_graphics);
    assert!(!snapshot.high_performance);
}

#[test]
fn pre_inserted_snapshot_is_respected() {
    let snapshot = CapabilitySnapshot::from_signals(
        Some(8),
        Some(16.0),
        true,
        &DeviceThresholds::default(),
    );

    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.insert_resource(snapshot);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    let snapshot = app.world().resource::<CapabilitySnapshot>();
    assert_eq!(snapshot.logical_cores, 8);
    assert!(snapshot.high_performance);
}

#[test]
fn quality_starts_at_the_lowest_tier() {
    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    let quality = app.world().resource::<CurrentQuality>();
    assert_eq!(quality.tier, QualityTier::Low);

    let settings = app.world().resource::<AdaptiveQualitySettings>();
    assert_eq!(quality.params, settings.tiers.low);
}

#[test]
fn monitor_is_armed_by_the_first_update() {
    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    let monitor = app.world().resource::<FrameRateMonitor>();
    assert!(monitor.is_running());
}

#[test]
fn tier_follows_injected_samples() {
    let snapshot = CapabilitySnapshot::from_signals(
        Some(8),
        Some(16.0),
        true,
        &DeviceThresholds::default(),
    );

    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.insert_resource(snapshot);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    let cases = [
        (60, QualityTier::High),
        (40, QualityTier::Medium),
        (10, QualityTier::Low),
        (45, QualityTier::High),
    ];

    for (fps, expected) in cases {
        app.world_mut().send_event(FpsSample { fps });
        app.update();

        let quality = app.world().resource::<CurrentQuality>();
        assert_eq!(quality.tier, expected, "fps={fps}");

        let settings = app.world().resource::<AdaptiveQualitySettings>();
        assert_eq!(quality.params, *settings.tiers.preset(expected));
    }
}

#[test]
fn weak_device_never_leaves_the_lowest_tier() {
    let snapshot = CapabilitySnapshot::from_signals(
        Some(2),
        Some(2.0),
        false,
        &DeviceThresholds::default(),
    );

    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.insert_resource(snapshot);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    for fps in [30, 60, 144, 10_000] {
        app.world_mut().send_event(FpsSample { fps });
        app.update();
        let quality = app.world().resource::<CurrentQuality>();
        assert_eq!(quality.tier, QualityTier::Low, "fps={fps}");
    }
}

#[test]
fn custom_settings_are_not_overwritten_by_the_plugin() {
    let mut settings = AdaptiveQualitySettings::default();
    settings.fps.low = 24;
    settings.tiers.low.particle_count = 500;

    let mut app = App::new();
    app.add_plugins(bevy::MinimalPlugins);
    app.insert_resource(settings);
    app.add_plugins(AdaptiveQualityPlugin);
    app.update();

    let settings = app.world().resource::<AdaptiveQualitySettings>();
    assert_eq!(settings.fps.low, 24);
    assert_eq!(settings.tiers.low.particle_count, 500);
}

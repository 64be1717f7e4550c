//! Configuration structures for the bevy_adaptive_quality plugin.
//!
//! This module contains all configuration types for customizing quality
//! selection: device thresholds, FPS thresholds, and the per-tier parameter
//! bundles consumed by visual systems.

use bevy::prelude::Resource;

use crate::constants::*;
use crate::selector::QualityTier;

/// Main configuration resource for adaptive quality selection.
///
/// Insert this resource before adding [`crate::AdaptiveQualityPlugin`] to
/// override the defaults; otherwise the plugin initializes it for you.
///
/// # Example
/// ```rust
/// use bevy::prelude::*;
/// use bevy_adaptive_quality::{AdaptiveQualitySettings, FpsThresholds};
///
/// App::new()
///     .insert_resource(AdaptiveQualitySettings {
///         fps: FpsThresholds { low: 24, medium: 50 },
///         ..default()
///     });
/// ```
#[derive(Debug, Clone, Default, Resource)]
pub struct AdaptiveQualitySettings {
    /// Hardware thresholds a device must meet to count as high-performance
    pub device: DeviceThresholds,
    /// FPS thresholds separating the three quality tiers
    pub fps: FpsThresholds,
    /// Parameter bundles published for each quality tier
    pub tiers: TierPresets,
}

/// Hardware capability thresholds for the high-performance classification.
///
/// These values double as substitutes when a host signal is unavailable:
/// a missing core count or memory estimate is assumed to sit exactly at the
/// threshold, so the GPU hint alone decides the classification.
#[derive(Debug, Clone)]
pub struct DeviceThresholds {
    /// Minimum number of logical cores
    pub min_cores: usize,
    /// Minimum device memory estimate in GiB
    pub min_memory_gib: f64,
}

impl Default for DeviceThresholds {
    fn default() -> Self {
        Self {
            min_cores: DEFAULT_MIN_CORES,
            min_memory_gib: DEFAULT_MIN_MEMORY_GIB,
        }
    }
}

/// FPS thresholds separating the quality tiers.
///
/// Comparisons are strict: a sample equal to `low` selects at least the
/// medium tier, a sample equal to `medium` selects the high tier.
#[derive(Debug, Clone)]
pub struct FpsThresholds {
    /// Below this FPS the lowest tier is selected regardless of hardware
    pub low: u32,
    /// Below this FPS (on capable hardware) the medium tier is selected
    pub medium: u32,
}

impl Default for FpsThresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_FPS_THRESHOLD,
            medium: DEFAULT_MEDIUM_FPS_THRESHOLD,
        }
    }
}

/// Rendering parameters bundled with a quality tier.
///
/// The plugin never interprets these values; visual systems read them from
/// [`crate::CurrentQuality`] and scale their own work accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierParams {
    /// Number of particles visual systems should draw
    pub particle_count: u32,
    /// Particle size in the consumer's own units
    pub particle_size: f32,
    /// Whether bloom should be enabled
    pub bloom_enabled: bool,
    /// Whether the post-processing stack should be enabled
    pub post_processing_enabled: bool,
}

/// The parameter bundles for all three quality tiers.
#[derive(Debug, Clone)]
pub struct TierPresets {
    /// Bundle published while the low tier is selected
    pub low: TierParams,
    /// Bundle published while the medium tier is selected
    pub medium: TierParams,
    /// Bundle published while the high tier is selected
    pub high: TierParams,
}

impl TierPresets {
    /// Fetch the parameter bundle for a tier.
    pub fn preset(&self, tier: QualityTier) -> &TierParams {
        match tier {
            QualityTier::Low => &self.low,
            QualityTier::Medium => &self.medium,
            QualityTier::High => &self.high,
        }
    }
}

impl Default for TierPresets {
    fn default() -> Self {
        Self {
            low: TierParams {
                particle_count: 2000,
                particle_size: 0.003,
                bloom_enabled: false,
                post_processing_enabled: false,
            },
            medium: TierParams {
                particle_count: 3500,
                particle_size: 0.0025,
                bloom_enabled: true,
                post_processing_enabled: false,
            },
            high: TierParams {
                particle_count: 5000,
                particle_size: 0.002,
                bloom_enabled: true,
                post_processing_enabled: true,
            },
        }
    }
}

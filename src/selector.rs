//! Quality tier selection.
//!
//! A pure decision function maps the capability snapshot and the latest FPS
//! sample to one of three tiers, and an update system republishes the result
//! in [`CurrentQuality`] every time a new sample arrives.

use bevy::ecs::event::EventReader;
use bevy::ecs::system::{Res, ResMut};
use bevy::log::debug;
use bevy::prelude::Resource;

use crate::capability::CapabilitySnapshot;
use crate::config::{AdaptiveQualitySettings, FpsThresholds, TierParams, TierPresets};
use crate::monitor::FpsSample;

/// One of the three discrete rendering-quality presets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityTier {
    /// Reduced particle counts, no bloom or post-processing
    #[default]
    Low,
    /// Moderate particle counts, bloom only
    Medium,
    /// Full particle counts with the complete post-processing stack
    High,
}

/// Map a capability snapshot and FPS sample to a quality tier.
///
/// First match wins: hardware below the capability bar or FPS below the low
/// threshold selects [`QualityTier::Low`]; FPS below the medium threshold
/// selects [`QualityTier::Medium`]; anything else selects
/// [`QualityTier::High`]. Pure and total, so it is safe to re-run on every
/// sample.
///
/// There is deliberately no hysteresis band: an FPS value oscillating right
/// at a threshold re-selects immediately and can flicker between tiers.
pub fn select_tier(
    snapshot: &CapabilitySnapshot,
    fps: u32,
    thresholds: &FpsThresholds,
) -> QualityTier {
    if !snapshot.high_performance || fps < thresholds.low {
        return QualityTier::Low;
    }
    if fps < thresholds.medium {
        return QualityTier::Medium;
    }
    QualityTier::High
}

/// Resource holding the currently selected tier and its parameter bundle.
///
/// Starts at the lowest tier so that an app whose monitor never produces a
/// sample (no clock, no refresh callbacks) keeps rendering conservatively.
/// The first healthy sample upgrades it within one window.
#[derive(Debug, Clone, Resource)]
pub struct CurrentQuality {
    /// The selected tier
    pub tier: QualityTier,
    /// Parameter bundle for the selected tier
    pub params: TierParams,
}

impl Default for CurrentQuality {
    fn default() -> Self {
        Self {
            tier: QualityTier::Low,
            params: TierPresets::default().low,
        }
    }
}

/// Update system that re-selects the tier on every new FPS sample.
///
/// Only the newest sample in a frame matters; stale samples are dropped. A
/// missing capability snapshot is treated as not-high-performance, pinning
/// the selection to the lowest tier.
pub fn apply_quality_selection(
    settings: Res<AdaptiveQualitySettings>,
    snapshot: Option<Res<CapabilitySnapshot>>,
    mut samples: EventReader<FpsSample>,
    mut current: ResMut<CurrentQuality>,
) {
    let Some(sample) = samples.read().last() else {
        return;
    };

    let tier = match snapshot.as_deref() {
        Some(snapshot) => select_tier(snapshot, sample.fps, &settings.fps),
        None => QualityTier::Low,
    };

    if tier != current.tier {
        debug!(
            "quality tier {:?} -> {:?} at {} fps",
            current.tier, tier, sample.fps
        );
    }
    current.tier = tier;
    current.params = *settings.tiers.preset(tier);
}

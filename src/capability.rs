//! Host capability probing.
//!
//! The probe runs once at startup, reads the host's logical core count,
//! total memory, and GPU-acceleration hint, and caches the result in an
//! immutable [`CapabilitySnapshot`] resource. Hardware does not change at
//! runtime, so no re-probing happens for the rest of the session.

use bevy::ecs::system::{Commands, Res};
use bevy::log::debug;
use bevy::prelude::Resource;
use bevy::render::renderer::RenderAdapterInfo;

use crate::config::{AdaptiveQualitySettings, DeviceThresholds};

/// Immutable snapshot of host hardware/graphics signals, taken once per run.
///
/// Missing signals are substituted with the configured threshold minimums,
/// so the snapshot always carries usable values and probing never fails.
#[derive(Debug, Clone, Resource)]
pub struct CapabilitySnapshot {
    /// Number of logical cores the host exposes (>= 1)
    pub logical_cores: usize,
    /// Coarse device memory estimate in GiB (>= 0)
    pub memory_gib: f64,
    /// Whether a GPU-acceleration hint was detected
    pub has_accelerated_graphics: bool,
    /// Derived: cores, memory, and acceleration all meet the thresholds
    pub high_performance: bool,
}

impl CapabilitySnapshot {
    /// Build a snapshot from raw host signals.
    ///
    /// `None` signals substitute the configured threshold minimums. The
    /// `high_performance` flag is true iff the core count and memory meet
    /// their thresholds and accelerated graphics were detected.
    pub fn from_signals(
        cores: Option<usize>,
        memory_gib: Option<f64>,
        has_accelerated_graphics: bool,
        thresholds: &DeviceThresholds,
    ) -> Self {
        let logical_cores = cores.unwrap_or(thresholds.min_cores).max(1);
        let memory_gib = memory_gib.unwrap_or(thresholds.min_memory_gib).max(0.0);
        let high_performance = logical_cores >= thresholds.min_cores
            && memory_gib >= thresholds.min_memory_gib
            && has_accelerated_graphics;
        Self {
            logical_cores,
            memory_gib,
            has_accelerated_graphics,
            high_performance,
        }
    }
}

/// Startup system that probes host capabilities and inserts the snapshot.
///
/// Core count and total memory come from `sysinfo`; the GPU hint is the
/// presence of the render adapter resource. Runs once; if a snapshot was
/// already inserted (e.g. by a test) it is left untouched.
pub fn probe_capabilities(
    mut commands: Commands,
    settings: Res<AdaptiveQualitySettings>,
    adapter_info: Option<Res<RenderAdapterInfo>>,
    existing: Option<Res<CapabilitySnapshot>>,
) {
    if existing.is_some() {
        return;
    }

    let sys = sysinfo::System::new_all();
    let cores = match sys.cpus().len() {
        0 => None,
        n => Some(n),
    };
    let total_memory = sys.total_memory();
    let memory_gib = if total_memory > 0 {
        Some(total_memory as f64 / (1024.0 * 1024.0 * 1024.0))
    } else {
        None
    };

    let snapshot = CapabilitySnapshot::from_signals(
        cores,
        memory_gib,
        adapter_info.is_some(),
        &settings.device,
    );
    debug!("capability snapshot: {snapshot:?}");
    commands.insert_resource(snapshot);
}

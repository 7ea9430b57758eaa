//! Override registry for the TLC model checker.
//!
//! TLC asks this crate which module overrides it may load. Most overrides are
//! always available; some depend on optional libraries (the Json override needs
//! gson). Discovery probes each optional group once per call and, when a group
//! is missing, returns the remaining overrides in their usual order and tells
//! the operator how to fix the resolution path. Unexpected probe failures are
//! returned as errors rather than being folded into a smaller result.
//!
//! Hosts that just want the answer call [`discover`]; hosts that need a custom
//! table, probe, or notice channel build a [`CapabilityRegistry`] directly.

use anyhow::Result;

pub mod config;
pub mod diagnostics;
pub mod extension;
pub mod probe;
pub mod registry;
pub mod report;

pub use config::Config;
pub use diagnostics::{CollectingSink, DiagnosticSink, Notice, TracingSink};
pub use extension::{
    ArtifactPattern, CapabilitySet, DependencyGroup, Extension, ExtensionId, GSON, GroupId,
    OVERRIDES,
};
pub use probe::{Availability, MissingDependency, PathProbe, Probe};
pub use registry::{CapabilityRegistry, Discovery};
pub use report::{DiscoveryReport, validate_report};

/// Discover loadable overrides using the resolution path from the environment.
pub fn discover() -> Result<Discovery> {
    discover_with(&Config::from_env())
}

/// Discover loadable overrides for an explicit configuration.
///
/// Notices go to `tracing` at WARN; install a subscriber to see them.
pub fn discover_with(config: &Config) -> Result<Discovery> {
    CapabilityRegistry::new(PathProbe::from_config(config)).discover()
}

//! Override identifiers and the fixed table they come from.
//!
//! Tables are `'static` slices of [`Extension`] rows; the only dynamic input to
//! discovery is whether each referenced [`DependencyGroup`] resolves.

pub mod identity;
pub mod set;
pub mod table;

pub use identity::{ArtifactPattern, DependencyGroup, Extension, ExtensionId, GroupId};
pub use set::CapabilitySet;
pub use table::{GSON, OVERRIDES};

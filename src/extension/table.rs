//! The built-in override table.
//!
//! Order is registration order and is what hosts see; the Json override is the
//! only entry with an optional prerequisite.

use crate::extension::identity::{ArtifactPattern, DependencyGroup, Extension, GroupId};

/// Libraries backing the Json override.
pub static GSON: DependencyGroup = DependencyGroup {
    id: GroupId("gson"),
    artifacts: &[ArtifactPattern::new("gson", ".jar")],
    description: "gson dependencies of Json overrides",
    remedy: "add the libraries in the lib/ folder of the CommunityModules to the classpath of TLC",
};

pub static OVERRIDES: &[Extension] = &[
    Extension::always("TLCExt"),
    Extension::always("IOUtils"),
    Extension::always("SVG"),
    Extension::always("SequencesExt"),
    Extension::requiring("Json", &GSON),
    Extension::always("Bitwise"),
    Extension::always("FiniteSetsExt"),
    Extension::always("Functions"),
    Extension::always("CSV"),
];

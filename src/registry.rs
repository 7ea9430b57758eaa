//! The override registry.
//!
//! `discover` probes each optional dependency group referenced by the table
//! exactly once, then returns either the full table in order or the table
//! minus the overrides of every unresolved group. Unresolved groups are an
//! expected outcome and produce a [`Notice`]; probe errors are not caught.
//! Nothing is cached, so each call reflects the environment at that moment.

use crate::diagnostics::{DiagnosticSink, Notice, TracingSink};
use crate::extension::{CapabilitySet, DependencyGroup, Extension, ExtensionId, GroupId, OVERRIDES};
use crate::probe::{Availability, Probe};
use anyhow::Result;
use tracing::debug;

/// Result of one discovery.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Discovery {
    /// Every optional group resolved; the set is the whole table.
    Available(CapabilitySet),
    /// At least one group was missing; its overrides were dropped.
    Degraded {
        capabilities: CapabilitySet,
        notices: Vec<Notice>,
    },
}

impl Discovery {
    pub fn capabilities(&self) -> &CapabilitySet {
        match self {
            Discovery::Available(capabilities) => capabilities,
            Discovery::Degraded { capabilities, .. } => capabilities,
        }
    }

    pub fn into_capabilities(self) -> CapabilitySet {
        match self {
            Discovery::Available(capabilities) => capabilities,
            Discovery::Degraded { capabilities, .. } => capabilities,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Discovery::Degraded { .. })
    }

    /// Notices for the unresolved groups; empty when available.
    pub fn notices(&self) -> &[Notice] {
        match self {
            Discovery::Available(_) => &[],
            Discovery::Degraded { notices, .. } => notices,
        }
    }
}

/// Reports which overrides a host can load right now.
pub struct CapabilityRegistry<P, D = TracingSink> {
    table: &'static [Extension],
    probe: P,
    sink: D,
}

impl<P: Probe> CapabilityRegistry<P, TracingSink> {
    /// Built-in override table, notices logged through `tracing`.
    pub fn new(probe: P) -> Self {
        Self::with_table(OVERRIDES, probe, TracingSink)
    }
}

impl<P: Probe, D: DiagnosticSink> CapabilityRegistry<P, D> {
    /// Built-in override table with a caller-supplied notice sink.
    pub fn with_sink(probe: P, sink: D) -> Self {
        Self::with_table(OVERRIDES, probe, sink)
    }

    pub fn with_table(table: &'static [Extension], probe: P, sink: D) -> Self {
        Self { table, probe, sink }
    }

    pub fn table(&self) -> &'static [Extension] {
        self.table
    }

    /// The full set, without probing anything.
    pub fn known(&self) -> CapabilitySet {
        CapabilitySet::from_ids(self.table.iter().map(|ext| ext.id).collect())
    }

    /// Distinct optional groups in first-reference order.
    pub fn groups(&self) -> Vec<&'static DependencyGroup> {
        let mut groups: Vec<&'static DependencyGroup> = Vec::new();
        for group in self.table.iter().filter_map(|ext| ext.requires) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// Probe every optional group once and report the loadable overrides.
    ///
    /// Notices are emitted only after all probes have completed, so a failed
    /// discovery leaves no diagnostics behind.
    pub fn discover(&self) -> Result<Discovery> {
        let mut notices = Vec::new();
        for group in self.groups() {
            match self.probe.probe(group)? {
                Availability::Resolved => debug!(group = %group.id, "dependency group resolved"),
                Availability::Unresolved(missing) => {
                    notices.push(Notice::unresolved(group, missing, self.members_of(group.id)));
                }
            }
        }

        if notices.is_empty() {
            return Ok(Discovery::Available(self.known()));
        }

        let unresolved: Vec<GroupId> = notices.iter().map(Notice::group).collect();
        let capabilities = CapabilitySet::from_ids(
            self.table
                .iter()
                .filter(|ext| ext.requires.is_none_or(|group| !unresolved.contains(&group.id)))
                .map(|ext| ext.id)
                .collect(),
        );
        for notice in &notices {
            self.sink.notice(notice);
        }
        Ok(Discovery::Degraded {
            capabilities,
            notices,
        })
    }

    fn members_of(&self, group: GroupId) -> Vec<ExtensionId> {
        self.table
            .iter()
            .filter(|ext| ext.requires.is_some_and(|g| g.id == group))
            .map(|ext| ext.id)
            .collect()
    }
}

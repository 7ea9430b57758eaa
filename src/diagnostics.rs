//! Operator-facing notices for degraded discoveries.
//!
//! Discovery emits one [`Notice`] per dependency group that failed its probe.
//! The default sink forwards notices to `tracing` at WARN; hosts that surface
//! diagnostics themselves can supply their own [`DiagnosticSink`].

use crate::config::display_path_list;
use crate::extension::{DependencyGroup, ExtensionId, GroupId};
use crate::probe::MissingDependency;
use std::fmt;
use std::sync::Mutex;
use tracing::warn;

/// Explains which overrides were withheld and how to get them back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub missing: MissingDependency,
    /// Overrides dropped from the result because of this group.
    pub excluded: Vec<ExtensionId>,
    pub message: String,
}

impl Notice {
    pub fn unresolved(
        group: &DependencyGroup,
        missing: MissingDependency,
        excluded: Vec<ExtensionId>,
    ) -> Self {
        let names = excluded
            .iter()
            .map(ExtensionId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let location = if missing.searched.is_empty() {
            "the resolution path is empty".to_string()
        } else {
            format!("searched {}", display_path_list(&missing.searched))
        };
        let message = format!(
            "{} not found (no match for {}; {location}), {names} override(s) won't work unless you {}.",
            group.description,
            missing.artifacts.join(", "),
            group.remedy,
        );
        Self {
            missing,
            excluded,
            message,
        }
    }

    pub fn group(&self) -> GroupId {
        self.missing.group
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives notices as discovery produces them.
pub trait DiagnosticSink {
    fn notice(&self, notice: &Notice);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn notice(&self, notice: &Notice) {
        (**self).notice(notice)
    }
}

/// Logs each notice at WARN.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notice(&self, notice: &Notice) {
        warn!(group = %notice.group(), "{}", notice.message);
    }
}

/// Keeps every notice in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.notices
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn notice(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push(notice.clone());
    }
}

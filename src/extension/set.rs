use crate::extension::identity::ExtensionId;
use serde::Serialize;

/// Ordered list of overrides a host may load, in registration order.
///
/// A set is built fresh for each query and is never mutated afterwards; the
/// only constructors live in this crate so every id traces back to a table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapabilitySet(Vec<ExtensionId>);

impl CapabilitySet {
    pub(crate) fn from_ids(ids: Vec<ExtensionId>) -> Self {
        Self(ids)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &ExtensionId) -> bool {
        self.0.contains(id)
    }

    /// Borrow the ids as a slice, preserving order.
    pub fn as_slice(&self) -> &[ExtensionId] {
        &self.0
    }

    /// Names in order; convenient for hosts that load by string.
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(ExtensionId::as_str).collect()
    }

    /// True when every id here appears in `other` in the same relative order.
    pub fn is_subsequence_of(&self, other: &CapabilitySet) -> bool {
        let mut rest = other.0.iter();
        self.0.iter().all(|id| rest.any(|candidate| candidate == id))
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a ExtensionId;
    type IntoIter = std::slice::Iter<'a, ExtensionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

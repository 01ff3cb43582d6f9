// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Structured data accompanying an error kind, opaque to this crate.
///
/// The validation engine decides the shape; templates that need a field
/// (e.g. `requiredLength` for `minlength`) pull it out at render time.
pub type ErrorDetail = serde_json::Value;

/// One validation failure: a kind name plus its detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub kind: String,
    pub detail: ErrorDetail,
}

/// An ordered set of validation errors for one field.
///
/// Entry order is the order in which the validation engine reported the
/// kinds, and it is preserved deliberately: the resolver displays the first
/// entry, so a stable order keeps the UI from flickering between messages
/// while multiple errors coexist. Inserting a kind that is already present
/// replaces its detail in place without moving it.
///
/// An empty set means "no errors". Sets are treated as immutable once
/// captured into a [`FieldSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(Vec<ErrorEntry>);

impl ErrorSet {
    /// Create a new empty error set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an error, replacing the detail in place if the kind is already
    /// present so the entry keeps its position.
    pub fn insert(&mut self, kind: impl Into<String>, detail: ErrorDetail) {
        let kind = kind.into();
        match self.0.iter_mut().find(|e| e.kind == kind) {
            Some(entry) => entry.detail = detail,
            None => self.0.push(ErrorEntry { kind, detail }),
        }
    }

    /// Get the detail for a kind, if present
    pub fn get(&self, kind: &str) -> Option<&ErrorDetail> {
        self.0.iter().find(|e| e.kind == kind).map(|e| &e.detail)
    }

    /// The first reported error, the one the resolver displays
    pub fn first(&self) -> Option<&ErrorEntry> {
        self.0.first()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.0.iter().any(|e| e.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ErrorDetail)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (String, ErrorDetail)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (kind, detail) in iter {
            set.insert(kind, detail);
        }
        set
    }
}

/// An immutable capture of a field's validation-relevant state at one point
/// in time.
///
/// Created on each status notification from the bound field and superseded
/// (never mutated) by the next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub errors: ErrorSet,
    pub touched: bool,
    pub dirty: bool,
}

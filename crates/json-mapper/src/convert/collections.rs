//! Lists, string-keyed maps and sets.
//!
//! Decoding is fail-soft: an element that does not convert is skipped and the
//! container keeps the rest. The number of skipped elements is recorded as a
//! [`IssueKind::DroppedElements`] issue on the container's path.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use super::Convertible;
use crate::diagnostics::IssueKind;
use crate::scope::Scope;

/// Convert every element of `items`, skipping the ones that fail.
pub fn decode_list<T: Convertible>(items: &[Value], scope: &mut Scope) -> Vec<T> {
    let mut decoded = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(value) = scope.descend_into(index.to_string(), |scope| T::from_json(item, scope)) {
            decoded.push(value);
        }
    }
    note_dropped(scope, items.len(), decoded.len());
    decoded
}

/// Convert every value of `entries`, skipping the ones that fail.
pub fn decode_entries<T: Convertible>(
    entries: &Map<String, Value>,
    scope: &mut Scope,
) -> Vec<(String, T)> {
    let mut decoded = Vec::with_capacity(entries.len());
    for (key, item) in entries {
        if let Some(value) = scope.descend_into(key.as_str(), |scope| T::from_json(item, scope)) {
            decoded.push((key.clone(), value));
        }
    }
    note_dropped(scope, entries.len(), decoded.len());
    decoded
}

pub fn encode_list<'a, T, I>(items: I, scope: &mut Scope) -> Value
where
    T: Convertible + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Array(
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| scope.descend_into(index.to_string(), |scope| item.to_json(scope)))
            .collect(),
    )
}

pub fn encode_entries<'a, T, I>(entries: I, scope: &mut Scope) -> Value
where
    T: Convertible + 'a,
    I: IntoIterator<Item = (&'a String, &'a T)>,
{
    let mut map = Map::new();
    for (key, item) in entries {
        let value = scope.descend_into(key.as_str(), |scope| item.to_json(scope));
        map.insert(key.clone(), value);
    }
    Value::Object(map)
}

fn note_dropped(scope: &mut Scope, total: usize, kept: usize) {
    let dropped = total - kept;
    if dropped == 0 {
        return;
    }
    tracing::debug!(
        path = %scope.location(),
        dropped,
        total,
        "skipped container elements that failed to convert"
    );
    scope.report(IssueKind::DroppedElements { dropped, total });
}

impl<T: Convertible> Convertible for Vec<T> {
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_list(value.as_array()?, scope))
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_list(self, scope)
    }
}

impl<T, S> Convertible for HashMap<String, T, S>
where
    T: Convertible,
    S: BuildHasher + Default,
{
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_entries(value.as_object()?, scope).into_iter().collect())
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_entries(self, scope)
    }
}

impl<T: Convertible> Convertible for BTreeMap<String, T> {
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_entries(value.as_object()?, scope).into_iter().collect())
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_entries(self, scope)
    }
}

impl<T, S> Convertible for IndexMap<String, T, S>
where
    T: Convertible,
    S: BuildHasher + Default,
{
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_entries(value.as_object()?, scope).into_iter().collect())
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_entries(self, scope)
    }
}

// Sets decode through the list form; equal elements collapse. Encoded order
// follows the set's iteration order, which is unspecified for `HashSet`.

impl<T, S> Convertible for HashSet<T, S>
where
    T: Convertible + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_list(value.as_array()?, scope).into_iter().collect())
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_list(self, scope)
    }
}

impl<T: Convertible + Ord> Convertible for BTreeSet<T> {
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_list(value.as_array()?, scope).into_iter().collect())
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_list(self, scope)
    }
}

impl<T, S> Convertible for IndexSet<T, S>
where
    T: Convertible + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        Some(decode_list(value.as_array()?, scope).into_iter().collect())
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        encode_list(self, scope)
    }
}

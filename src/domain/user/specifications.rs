// src/domain/user/specifications.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Columns of the `users` table. Filter and update keys are checked against
/// this list before any SQL is built; a key outside it never reaches a
/// statement.
pub const USER_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "surname",
    "patronymic",
    "age",
    "gender",
    "nationality",
];

fn ensure_column(field: &str) -> DomainResult<()> {
    if USER_COLUMNS.contains(&field) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "unknown field '{field}'"
        )))
    }
}

/// A scalar accepted in filter value lists and update assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

/// Field filter: a record matches when, for every group, its field equals at
/// least one of the group's values. Groups are kept in lexicographic field
/// order so the generated SQL text is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    groups: BTreeMap<String, Vec<FieldValue>>,
}

impl FilterSpec {
    /// Builds a filter from a raw field→values mapping. Empty keys and keys
    /// with an empty value list are dropped; a key that is not a `users`
    /// column is rejected.
    pub fn new(raw: BTreeMap<String, Vec<FieldValue>>) -> DomainResult<Self> {
        let mut groups = BTreeMap::new();
        for (field, values) in raw {
            if field.is_empty() || values.is_empty() {
                continue;
            }
            ensure_column(&field)?;
            groups.insert(field, values);
        }
        Ok(Self { groups })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn by_id(id: UserId) -> Self {
        let mut groups = BTreeMap::new();
        groups.insert("id".to_string(), vec![FieldValue::Int(id.into())]);
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[FieldValue])> {
        self.groups
            .iter()
            .map(|(field, values)| (field.as_str(), values.as_slice()))
    }
}

/// Partial update: field→new-value. Never empty and never touches `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSpec {
    changes: BTreeMap<String, FieldValue>,
}

impl UpdateSpec {
    pub fn new(raw: BTreeMap<String, FieldValue>) -> DomainResult<Self> {
        if raw.is_empty() {
            return Err(DomainError::Validation(
                "update specification cannot be empty".into(),
            ));
        }
        if raw.contains_key("id") {
            return Err(DomainError::Validation("field 'id' is not updatable".into()));
        }
        for field in raw.keys() {
            ensure_column(field)?;
        }
        Ok(Self { changes: raw })
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.changes
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }
}

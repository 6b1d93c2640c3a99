//! Base implementation of records.
use crate::error::CemError;
use chrono::prelude::{DateTime, Local};
use std::collections::{
    hash_map::{IntoIter, Iter, Keys},
    HashMap,
};

/// Represents the possible types of values stored in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value, typically a metric.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A text value.
    String(String),
}

/// A container of key-value pairs produced during training.
#[derive(Debug, Clone)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Returns an iterator over the keys of the record.
    pub fn keys(&self) -> Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs of the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Returns an iterator that consumes the record.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// Gets the value with the given key, if any.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges the given record into this one, consuming both.
    /// Keys of `other` win on collision.
    pub fn merge(self, other: Record) -> Self {
        Record(self.0.into_iter().chain(other.0).collect())
    }

    /// Gets a scalar value with the given key.
    pub fn get_scalar(&self, k: &str) -> Result<f32, CemError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(CemError::RecordValueTypeError(format!(
                "{} is not a scalar",
                k
            ))),
            None => Err(CemError::RecordValueTypeError(format!("{} not found", k))),
        }
    }

    /// Whether the record contains no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordValue};

    #[test]
    fn merge_keeps_both_sides() {
        let a = Record::from_scalar("loss", 0.5);
        let mut b = Record::empty();
        b.insert("reward_mean", RecordValue::Scalar(25.0));
        let merged = a.merge(b);
        assert_eq!(merged.get_scalar("loss").unwrap(), 0.5);
        assert_eq!(merged.get_scalar("reward_mean").unwrap(), 25.0);
    }

    #[test]
    fn get_scalar_rejects_other_kinds() {
        let mut r = Record::empty();
        r.insert("tag", RecordValue::String("cartpole".into()));
        assert!(r.get_scalar("tag").is_err());
        assert!(r.get_scalar("missing").is_err());
    }
}

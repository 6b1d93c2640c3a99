//! Aggregation of stored records.
use super::{Record, RecordValue};
use std::collections::HashSet;

/// Stores records and aggregates them into a single record on demand.
///
/// Scalar values are averaged over the stored records; for other value
/// kinds the most recent occurrence wins.
pub struct RecordStorage {
    data: Vec<Record>,
}

impl Default for RecordStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Stores a record.
    pub fn store(&mut self, record: Record) {
        self.data.push(record);
    }

    /// Aggregates the stored records and clears the storage.
    pub fn aggregate(&mut self) -> Record {
        let mut keys = HashSet::new();
        for record in self.data.iter() {
            for k in record.keys() {
                keys.insert(k.clone());
            }
        }

        let mut aggregated = Record::empty();
        for key in keys {
            let scalars: Vec<f32> = self
                .data
                .iter()
                .filter_map(|r| match r.get(&key) {
                    Some(RecordValue::Scalar(v)) => Some(*v),
                    _ => None,
                })
                .collect();
            if !scalars.is_empty() {
                let mean = scalars.iter().sum::<f32>() / scalars.len() as f32;
                aggregated.insert(key, RecordValue::Scalar(mean));
            } else if let Some(v) = self.data.iter().rev().find_map(|r| r.get(&key)) {
                aggregated.insert(key, v.clone());
            }
        }

        self.data.clear();
        aggregated
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStorage;
    use crate::record::{Record, RecordValue};

    #[test]
    fn aggregate_averages_scalars() {
        let mut storage = RecordStorage::new();
        storage.store(Record::from_scalar("reward_mean", 10.0));
        storage.store(Record::from_scalar("reward_mean", 30.0));
        let agg = storage.aggregate();
        assert_eq!(agg.get_scalar("reward_mean").unwrap(), 20.0);
    }

    #[test]
    fn aggregate_clears_storage() {
        let mut storage = RecordStorage::new();
        storage.store(Record::from_scalar("loss", 1.0));
        let _ = storage.aggregate();
        assert!(storage.aggregate().is_empty());
    }

    #[test]
    fn aggregate_keeps_latest_non_scalar() {
        let mut storage = RecordStorage::new();
        let mut a = Record::empty();
        a.insert("phase", RecordValue::String("sampling".into()));
        let mut b = Record::empty();
        b.insert("phase", RecordValue::String("updating".into()));
        storage.store(a);
        storage.store(b);
        let agg = storage.aggregate();
        match agg.get("phase") {
            Some(RecordValue::String(s)) => assert_eq!(s, "updating"),
            _ => panic!("expected string value"),
        }
    }
}

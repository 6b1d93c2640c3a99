#![warn(missing_docs)]
//! Tensorboard backend for training records.
use cem_core::record::{Record, RecordStorage, RecordValue, Recorder};
use std::path::Path;
use tensorboard_rs::summary_writer::SummaryWriter;

/// Writes scalar record values as tensorboard summaries.
///
/// [`write`](Recorder::write) expects the record to carry its own step
/// under the `opt_steps` key; [`store`](Recorder::store) buffers records
/// and [`flush`](Recorder::flush) writes their aggregate at the given
/// step. Non-scalar values are ignored.
pub struct TensorboardRecorder {
    writer: SummaryWriter,
    storage: RecordStorage,
    step_key: String,
}

impl TensorboardRecorder {
    /// Constructs a recorder writing TFRecord files into `logdir`.
    pub fn new<P: AsRef<Path>>(logdir: P) -> Self {
        Self {
            writer: SummaryWriter::new(logdir),
            storage: RecordStorage::new(),
            step_key: "opt_steps".to_string(),
        }
    }

    fn write_scalars(&mut self, record: &Record, step: usize) {
        for (k, v) in record.iter() {
            if *k == self.step_key {
                continue;
            }
            if let RecordValue::Scalar(v) = v {
                self.writer.add_scalar(k, *v, step);
            }
        }
        self.writer.flush();
    }
}

impl Recorder for TensorboardRecorder {
    fn write(&mut self, record: Record) {
        let step = record
            .get_scalar(&self.step_key)
            .expect("record carries no step") as usize;
        self.write_scalars(&record, step);
    }

    fn store(&mut self, record: Record) {
        self.storage.store(record);
    }

    fn flush(&mut self, step: i64) {
        let aggregated = self.storage.aggregate();
        self.write_scalars(&aggregated, step as usize);
    }
}

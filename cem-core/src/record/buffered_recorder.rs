use super::{Record, Recorder};

/// A recorder that keeps all records in memory, mostly for tests.
#[derive(Default)]
pub struct BufferedRecorder(Vec<Record>);

impl BufferedRecorder {
    /// Constructs an empty buffered recorder.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns an iterator over the buffered records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    /// Number of buffered records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Recorder for BufferedRecorder {
    fn write(&mut self, record: Record) {
        self.0.push(record);
    }

    fn store(&mut self, record: Record) {
        self.0.push(record);
    }

    // Buffered records are kept for inspection rather than written out.
    fn flush(&mut self, _step: i64) {}
}

use super::Record;

/// Writes records to an output destination.
///
/// Recorders are a side channel for observability only; no recorder
/// output feeds back into the training loop.
pub trait Recorder {
    /// Writes a record immediately.
    fn write(&mut self, record: Record);

    /// Stores a record for later aggregation.
    fn store(&mut self, record: Record);

    /// Writes values aggregated from the stored records at the given step.
    fn flush(&mut self, step: i64);
}

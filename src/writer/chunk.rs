//! Batch controller: partitions the input into bounded row-range chunks.
//!
//! [`RowChunks`] walks the logical concatenation of the input batches and
//! yields zero-copy [`RecordBatch`] slices of at most `batch_size` rows.
//! Because every chunk is a pure subdivision of the row sequence, the
//! concatenated output is structurally independent of both the chunk size and
//! the physical batch layout; the invariance does not rely on downstream
//! bookkeeping.

use arrow::record_batch::RecordBatch;

/// Iterator over row-range chunks covering a sequence of batches exactly.
///
/// Yields nothing for a zero-row input. A chunk never spans two physical
/// batches; the last chunk of each batch may be shorter than `batch_size`.
pub(super) struct RowChunks<'a> {
    batches: &'a [RecordBatch],
    batch_idx: usize,
    row_offset: usize,
    batch_size: usize,
}

impl<'a> RowChunks<'a> {
    /// `batch_size` must already be validated as positive.
    pub(super) fn new(batches: &'a [RecordBatch], batch_size: usize) -> Self {
        debug_assert!(batch_size > 0);
        Self {
            batches,
            batch_idx: 0,
            row_offset: 0,
            batch_size,
        }
    }
}

impl Iterator for RowChunks<'_> {
    type Item = RecordBatch;

    fn next(&mut self) -> Option<RecordBatch> {
        loop {
            let batch = self.batches.get(self.batch_idx)?;
            let remaining = batch.num_rows() - self.row_offset;
            if remaining == 0 {
                self.batch_idx += 1;
                self.row_offset = 0;
                continue;
            }
            let len = remaining.min(self.batch_size);
            let chunk = batch.slice(self.row_offset, len);
            self.row_offset += len;
            return Some(chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Int32Array;
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    fn batch_of(values: Vec<i32>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("v", DataType::Int32, false)]));
        RecordBatch::try_new(schema, vec![Arc::new(Int32Array::from(values))]).unwrap()
    }

    #[test]
    fn chunks_cover_rows_exactly() {
        let batches = [batch_of((0..10).collect()), batch_of((10..13).collect())];
        let chunks: Vec<RecordBatch> = RowChunks::new(&batches, 4).collect();
        let lens: Vec<usize> = chunks.iter().map(|c| c.num_rows()).collect();
        assert_eq!(lens, vec![4, 4, 2, 3]);
        assert_eq!(lens.iter().sum::<usize>(), 13);
    }

    #[test]
    fn zero_row_batches_are_skipped() {
        let batches = [batch_of(vec![]), batch_of(vec![1, 2]), batch_of(vec![])];
        let chunks: Vec<RecordBatch> = RowChunks::new(&batches, 8).collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].num_rows(), 2);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let batches: [RecordBatch; 0] = [];
        assert_eq!(RowChunks::new(&batches, 1).count(), 0);
    }
}

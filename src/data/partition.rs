use std::mem;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits `total` elements among `n_chunks` and returns the range for `id`.
///
/// Properties:
/// - Ranges are contiguous, disjoint and cover `[0..total)`.
/// - Sizes differ by at most 1; the first `total % n_chunks` ranges take one
///   extra element each.
/// - When `n_chunks > total`, trailing ranges are empty.
pub fn chunk_range(total: usize, id: usize, n_chunks: usize) -> Range<usize> {
    assert!(n_chunks > 0);
    assert!(id < n_chunks, "chunk id out of range");

    let base = total / n_chunks;
    let extra = total % n_chunks;

    let start = id * base + id.min(extra);
    let end = start + base + usize::from(id < extra);

    start..end
}

/// A balanced partition of `[0..total)` into contiguous chunks, one per
/// worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    total: usize,
    n_chunks: NonZeroUsize,
}

impl Partition {
    /// Creates a new `Partition`.
    ///
    /// # Arguments
    /// * `total` - Number of elements to distribute.
    /// * `n_chunks` - Number of chunks to carve the index space into.
    pub fn new(total: usize, n_chunks: NonZeroUsize) -> Self {
        Self { total, n_chunks }
    }

    /// Returns the number of chunks.
    pub fn n_chunks(&self) -> usize {
        self.n_chunks.get()
    }

    /// Returns the index range owned by chunk `id`.
    pub fn range(&self, id: usize) -> Range<usize> {
        chunk_range(self.total, id, self.n_chunks())
    }

    /// Returns every chunk's range, in chunk-id order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> {
        let this = *self;
        (0..this.n_chunks()).map(move |id| this.range(id))
    }

    /// Carves `buf` into one sub-slice per chunk, in chunk-id order.
    ///
    /// # Panics
    /// If `buf.len()` differs from the partitioned total.
    pub fn split<'a>(&self, mut buf: &'a [f64]) -> Vec<&'a [f64]> {
        assert_eq!(buf.len(), self.total, "buffer length does not match partition");

        let mut chunks = Vec::with_capacity(self.n_chunks());
        for range in self.ranges() {
            let (head, tail) = buf.split_at(range.len());
            chunks.push(head);
            buf = tail;
        }
        chunks
    }

    /// Carves `buf` into one mutable sub-slice per chunk, in chunk-id order.
    ///
    /// The returned slices are disjoint and together cover all of `buf`, so
    /// every chunk can be mutated from its own thread without locking.
    ///
    /// # Panics
    /// If `buf.len()` differs from the partitioned total.
    pub fn split_mut<'a>(&self, mut buf: &'a mut [f64]) -> Vec<&'a mut [f64]> {
        assert_eq!(buf.len(), self.total, "buffer length does not match partition");

        let mut chunks = Vec::with_capacity(self.n_chunks());
        for range in self.ranges() {
            let (head, tail) = mem::take(&mut buf).split_at_mut(range.len());
            chunks.push(head);
            buf = tail;
        }
        chunks
    }
}

/*!
 * Chunked index-range scheduling
 *
 * Splits the global index space of one permutation length into contiguous
 * sub-ranges, so the pipeline never holds more than one chunk of decoded
 * rows in memory at a time.
 */

/// A contiguous sub-range `[offset, offset + len)` of the global index
/// space, small enough to decode and buffer in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub offset: u64,
    pub len: usize,
}

/// Fixed-size partition of `[0, total)` into consecutive chunks.
///
/// Chunks cover the range exactly once, in ascending order; only the last
/// chunk may be short. A chunk size above `total` collapses to a single
/// chunk.
pub struct ChunkSchedule {
    total: u64,
    chunk_size: usize,
}

impl ChunkSchedule {
    pub fn new(total: u64, chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        Self { total, chunk_size }
    }

    /// Total number of indices covered by the schedule.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn chunk_count(&self) -> u64 {
        self.total.div_ceil(self.chunk_size as u64)
    }

    /// Iterate the chunks in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = Chunk> + '_ {
        (0..self.total)
            .step_by(self.chunk_size)
            .map(move |offset| Chunk {
                offset,
                len: (self.total - offset).min(self.chunk_size as u64) as usize,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let chunks: Vec<Chunk> = ChunkSchedule::new(12, 4).iter().collect();
        assert_eq!(
            chunks,
            vec![
                Chunk { offset: 0, len: 4 },
                Chunk { offset: 4, len: 4 },
                Chunk { offset: 8, len: 4 },
            ]
        );
    }

    #[test]
    fn test_short_last_chunk() {
        let schedule = ChunkSchedule::new(10, 4);
        let chunks: Vec<Chunk> = schedule.iter().collect();
        assert_eq!(schedule.chunk_count(), 3);
        assert_eq!(chunks.last(), Some(&Chunk { offset: 8, len: 2 }));
        assert_eq!(chunks.iter().map(|c| c.len as u64).sum::<u64>(), 10);
    }

    #[test]
    fn test_oversized_chunk_collapses() {
        let chunks: Vec<Chunk> = ChunkSchedule::new(5, 1000).iter().collect();
        assert_eq!(chunks, vec![Chunk { offset: 0, len: 5 }]);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(ChunkSchedule::new(0, 8).iter().count(), 0);
        assert_eq!(ChunkSchedule::new(0, 8).chunk_count(), 0);
    }
}

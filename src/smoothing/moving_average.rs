use crate::error::{Result, SmaError};

/// Simple moving average over a fixed-capacity circular buffer
///
/// Maintains the most recent `window_size` samples and reports their
/// arithmetic mean. Intended for smoothing bursty measurement streams
/// (A/D readings, tachometer counts, temperature) where memory must stay
/// bounded no matter how long the stream runs.
///
/// `S` is the stored sample type; it defaults to `u16` to match typical
/// A/D converter widths. The accumulator is always `f64`, so the sum of a
/// full window cannot overflow for any sample type this accepts.
///
/// The mean is recomputed over the resident window on every push rather
/// than maintained incrementally. That costs O(window) per push but keeps
/// the result exact: there is no running-sum drift to correct, even over
/// streams that run for the life of the device.
pub struct SimpleMovingAverage<S = u16> {
    buffer: Vec<S>,
    total_pushed: u64,
}

impl<S: Copy + Default + Into<f64>> SimpleMovingAverage<S> {
    /// Create an averager with the given window size.
    ///
    /// The sample buffer is allocated up front and zero-initialized; `push`
    /// never allocates. Fails with [`SmaError::InvalidWindow`] for a zero
    /// window and [`SmaError::StorageExhausted`] if the buffer cannot be
    /// allocated.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(SmaError::InvalidWindow { got: window_size });
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(window_size)
            .map_err(|source| SmaError::StorageExhausted {
                bytes: window_size.saturating_mul(std::mem::size_of::<S>()),
                source,
            })?;
        buffer.resize(window_size, S::default());

        Ok(Self {
            buffer,
            total_pushed: 0,
        })
    }

    /// Push a sample into the window and return the updated average.
    ///
    /// The oldest resident sample is overwritten once the window is full.
    /// After `k` pushes the result is the exact mean of the last
    /// `min(k, window_size)` samples.
    pub fn push(&mut self, sample: S) -> f64 {
        let slot = (self.total_pushed % self.buffer.len() as u64) as usize;
        self.buffer[slot] = sample;
        self.total_pushed += 1;
        self.average()
    }

    /// Current average without pushing a new sample.
    ///
    /// During warm-up only the samples pushed so far contribute; the
    /// unwritten tail of the buffer is excluded. Returns 0.0 before the
    /// first push.
    pub fn average(&self) -> f64 {
        let valid = self.sample_count();
        if valid == 0 {
            return 0.0;
        }
        let sum: f64 = self.buffer[..valid].iter().map(|&s| s.into()).sum();
        sum / valid as f64
    }

    /// Number of samples currently contributing to the average.
    pub fn sample_count(&self) -> usize {
        (self.total_pushed).min(self.buffer.len() as u64) as usize
    }

    /// The fixed window size chosen at construction.
    pub fn window_size(&self) -> usize {
        self.buffer.len()
    }

    /// True once the window has filled and every slot holds a real sample.
    pub fn is_warmed_up(&self) -> bool {
        self.total_pushed >= self.buffer.len() as u64
    }

    /// Discard all resident samples, returning to the freshly-built state.
    pub fn reset(&mut self) {
        self.buffer.fill(S::default());
        self.total_pushed = 0;
    }
}

use crate::smoothing::SimpleMovingAverage;

/// Common trait for sample smoothers
///
/// Lets a measurement pipeline drive interchangeable smoothing stages
/// through one seam.
pub trait Smoother {
    /// Push a single sample and return the smoothed value
    fn smooth(&mut self, sample: f64) -> f64;

    /// Smooth a buffer of samples in-place
    fn smooth_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.smooth(*sample);
        }
    }
}

impl Smoother for SimpleMovingAverage<f64> {
    fn smooth(&mut self, sample: f64) -> f64 {
        self.push(sample)
    }
}

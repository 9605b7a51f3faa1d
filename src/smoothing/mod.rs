pub mod moving_average;
pub mod smoother;

pub use moving_average::SimpleMovingAverage;
pub use smoother::Smoother;

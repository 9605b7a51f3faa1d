use approx::assert_relative_eq;

use movingmean::{SimpleMovingAverage, SmaError, WindowSize};

/// Ten pushes of the same reading into a ten-sample window: the average
/// must sit exactly on that reading the whole time.
#[test]
fn test_constant_stream_converges_exactly() {
    let mut sma = SimpleMovingAverage::<u16>::new(10).unwrap();

    for _ in 0..10 {
        assert_eq!(sma.push(25), 25.0);
    }
    assert_eq!(sma.average(), 25.0);
}

/// Filling a ten-sample window with 10..=19 gives a mean of exactly 14.5.
#[test]
fn test_ramp_fills_window() {
    let mut sma = SimpleMovingAverage::<u16>::new(10).unwrap();

    let mut average = 0.0;
    for reading in 10..=19 {
        average = sma.push(reading);
    }
    assert_eq!(average, 14.5);
    assert!(sma.is_warmed_up());
}

#[test]
fn test_warm_up_and_eviction_sequence() {
    let mut sma = SimpleMovingAverage::<f64>::new(3).unwrap();

    // Warm-up: only the pushed samples count.
    assert_relative_eq!(sma.push(1.0), 1.0);
    assert_relative_eq!(sma.push(2.0), 1.5);
    // Window full.
    assert_relative_eq!(sma.push(3.0), 2.0);
    // Oldest sample (1) evicted; window is {2, 3, 9}.
    assert_relative_eq!(sma.push(9.0), 14.0 / 3.0);
}

#[test]
fn test_single_sample_window() {
    let mut sma = SimpleMovingAverage::<f64>::new(1).unwrap();
    assert_relative_eq!(sma.push(7.0), 7.0);
    assert_relative_eq!(sma.push(42.0), 42.0);
}

/// Once the window has filled, samples older than the window have no
/// influence at all on the reported average.
#[test]
fn test_window_bound() {
    let mut with_history = SimpleMovingAverage::<f64>::new(5).unwrap();
    let mut fresh = SimpleMovingAverage::<f64>::new(5).unwrap();

    // Long, noisy prefix that must be fully forgotten.
    for i in 0..1000 {
        with_history.push((i * 31 % 97) as f64);
    }

    let tail = [12.0, -4.5, 88.25, 0.0, 3.5];
    let mut a = 0.0;
    let mut b = 0.0;
    for v in tail {
        a = with_history.push(v);
        b = fresh.push(v);
    }

    assert_relative_eq!(a, b);
    assert_relative_eq!(a, tail.iter().sum::<f64>() / tail.len() as f64);
}

/// During warm-up the divisor is the number of samples pushed so far,
/// never the full window size.
#[test]
fn test_warm_up_divisor() {
    let mut sma = SimpleMovingAverage::<f64>::new(100).unwrap();

    let samples = [3.0, 5.0, 10.0, 2.0];
    let mut running_sum = 0.0;
    for (k, v) in samples.iter().enumerate() {
        running_sum += v;
        let expected = running_sum / (k + 1) as f64;
        assert_relative_eq!(sma.push(*v), expected);
    }
}

#[test]
fn test_zero_window_rejected_everywhere() {
    assert!(matches!(
        SimpleMovingAverage::<f64>::new(0),
        Err(SmaError::InvalidWindow { got: 0 })
    ));
    assert!(WindowSize::new(0).is_err());
    assert!("0".parse::<WindowSize>().is_err());
}

#[test]
fn test_independent_instances_do_not_interact() {
    let mut left = SimpleMovingAverage::<f64>::new(4).unwrap();
    let mut right = SimpleMovingAverage::<f64>::new(4).unwrap();

    for v in [1.0, 2.0, 3.0, 4.0] {
        left.push(v);
    }
    assert_eq!(right.sample_count(), 0);
    assert_relative_eq!(right.push(100.0), 100.0);
    assert_relative_eq!(left.average(), 2.5);
}

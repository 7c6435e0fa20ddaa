use serde_json::{json, Value};
use std::time::{Duration, Instant};

/// Run `f` once and return its result with the elapsed time.
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Mean and spread of repeated runs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub iterations: usize,
    pub mean_ms: f64,
    pub std_dev_ms: f64,
    pub min_ms: f64,
}

impl Timing {
    pub fn to_json(&self) -> Value {
        json!({
            "iterations": self.iterations,
            "mean_ms": self.mean_ms,
            "std_dev_ms": self.std_dev_ms,
            "min_ms": self.min_ms,
        })
    }
}

/// Run `f` `warmup` times unmeasured, then `iterations` times measured.
/// Returns the last result alongside the timing.
pub fn measure<F, R>(warmup: usize, iterations: usize, mut f: F) -> (R, Timing)
where
    F: FnMut() -> R,
{
    for _ in 0..warmup {
        std::hint::black_box(f());
    }

    let iterations = iterations.max(1);
    let mut times = Vec::with_capacity(iterations);
    let (mut last, elapsed) = time_fn(&mut f);
    times.push(elapsed.as_secs_f64() * 1000.0);
    for _ in 1..iterations {
        let (result, elapsed) = time_fn(&mut f);
        times.push(elapsed.as_secs_f64() * 1000.0);
        last = result;
    }

    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / times.len() as f64;
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);

    let timing = Timing {
        iterations,
        mean_ms: mean,
        std_dev_ms: variance.sqrt(),
        min_ms: min,
    };
    (last, timing)
}

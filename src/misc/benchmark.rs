// src/misc/benchmark.rs

use std::time::Instant;

use log::debug;

use crate::core::checkers::{check_positive_integer, Numeric};
use crate::core::errors::Result;

pub const DEFAULT_TIMES: u64 = 100_000;

/// Runs `callback` `times` times and returns the rounded number of calls per second.
pub fn benchmark<F: FnMut(), N: Numeric>(mut callback: F, times: N) -> Result<u64> {
    let times = check_positive_integer(times, "times", true)?;
    let start = Instant::now();
    for _ in 0..times {
        callback();
    }
    let elapsed = start.elapsed().as_secs_f64().max(f64::MIN_POSITIVE);
    debug!("benchmark: {} calls in {:.6}s", times, elapsed);
    Ok((times as f64 / elapsed).round() as u64)
}

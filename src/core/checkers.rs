// src/core/checkers.rs
//
// Precondition checks shared by every helper. They fail fast with a typed
// error and never touch the caller's data.

use std::fmt::Display;

use crate::core::errors::{Result, SundriesError};

/// A number as handed in by a caller. Integers and floats are both accepted so that
/// a fractional count is reported as a type violation instead of being truncated.
pub trait Numeric: Copy + Display {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Checks that `value` is a positive integer and returns it as `u64`.
///
/// With `strict` set, zero is rejected as well.
pub fn check_positive_integer<N: Numeric>(value: N, name: &str, strict: bool) -> Result<u64> {
    let number = value.to_f64();
    let is_negative = if strict { number <= 0.0 } else { number < 0.0 };
    if is_negative || !is_integer(number) {
        return Err(SundriesError::type_violation(format!(
            "The {} argument must be a {}positive integer.",
            name,
            if strict { "strictly " } else { "" }
        )));
    }
    Ok(number as u64)
}

/// Checks that `value` is an integer (of any sign) and returns it as `i64`.
pub fn check_integer<N: Numeric>(value: N, name: &str) -> Result<i64> {
    let number = value.to_f64();
    if !is_integer(number) {
        return Err(SundriesError::type_violation(format!(
            "The {} argument must be an integer.",
            name
        )));
    }
    Ok(number as i64)
}

/// Checks `value < bound` (`strict`) or `value <= bound`.
pub fn check_less_than<N: Numeric, B: Numeric>(value: N, bound: B, name: &str, strict: bool) -> Result<()> {
    let (number, limit) = (value.to_f64(), bound.to_f64());
    let within = if strict { number < limit } else { number <= limit };
    if !within {
        return Err(SundriesError::range_violation(format!(
            "The {} argument must be less than {}{}, but it was {}.",
            name,
            if strict { "" } else { "or equal to " },
            bound,
            value
        )));
    }
    Ok(())
}

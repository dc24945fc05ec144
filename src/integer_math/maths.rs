// src/integer_math/maths.rs

use num::{BigUint, One};

use crate::core::checkers::{check_integer, check_positive_integer, Numeric};
use crate::core::errors::{Result, SundriesError};

/// n-th root of `number`.
pub fn nth_root(number: f64, n: f64) -> f64 {
    number.powf(1.0 / n)
}

/// Σ callback(x) for x in [a, b).
///
/// `a` must be a strictly positive integer, `b` a positive integer, and `a <= b`.
pub fn sigma<F, A, B>(callback: F, a: A, b: B) -> Result<f64>
where
    F: Fn(u64) -> f64,
    A: Numeric,
    B: Numeric,
{
    let a = check_positive_integer(a, "a", true)?;
    let b = check_positive_integer(b, "b", false)?;
    if a > b {
        return Err(SundriesError::range_violation(
            "The a argument must be less than or equal to the b argument.",
        ));
    }
    Ok((a..b).map(callback).sum())
}

/// Rounds to `precision` decimals; a negative precision rounds left of the decimal point.
pub fn round<P: Numeric>(number: f64, precision: P) -> Result<f64> {
    let precision = check_integer(precision, "precision")? as i32;
    // divide by an exact power of ten rather than multiply by an inexact fraction
    if precision >= 0 {
        let factor = 10f64.powi(precision);
        Ok((number * factor).round() / factor)
    } else {
        let factor = 10f64.powi(-precision);
        Ok((number / factor).round() * factor)
    }
}

/// Clamps `number` into `[min, max]`, swapping the bounds if they are inverted.
pub fn clamp(number: f64, min: f64, max: f64) -> f64 {
    let (min, max) = if max < min { (max, min) } else { (min, max) };
    number.max(min).min(max)
}

/// `a mod n`, always of the sign of `n`. NaN results collapse to 0.
pub fn modulo(a: f64, n: f64) -> f64 {
    let result = ((a % n) + n) % n;
    if result.is_nan() || result == 0.0 {
        0.0
    } else {
        result
    }
}

// These witnesses make Miller-Rabin exact for every 64-bit input.
const MILLER_RABIN_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exponent: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exponent >>= 1;
    }
    result
}

/// Primality over the whole `i64` range: trial division by the small witnesses,
/// then a deterministic Miller-Rabin round per witness.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    for &p in MILLER_RABIN_WITNESSES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    MILLER_RABIN_WITNESSES.iter().all(|&a| {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

/// Pads the integer part of `number` with leading zeros up to `length` digits.
pub fn fill_zeros<L: Numeric>(number: f64, length: L) -> Result<String> {
    let length = check_positive_integer(length, "length", true)? as usize;
    let sign = if number >= 0.0 { "" } else { "-" };
    let digits = number.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut result = format!("{}{:0>width$}", sign, integer, width = length);
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    Ok(result)
}

/// Values from `a` to `b` excluded, every `step`.
///
/// Inverted bounds are swapped. A negative step walks down from the upper bound
/// towards the lower one (still excluded). A zero or non-finite step is a range violation.
pub fn range(a: f64, b: f64, step: f64) -> Result<Vec<f64>> {
    if step == 0.0 || !step.is_finite() {
        return Err(SundriesError::range_violation(format!(
            "The step argument must be a non-zero finite number, but it was {}.",
            step
        )));
    }
    let (low, high) = if a > b { (b, a) } else { (a, b) };

    let count = ((high - low) / step.abs()).ceil().max(0.0) as usize;
    let values = if step > 0.0 {
        (0..count).map(|i| low + step * i as f64).collect()
    } else {
        (0..count).map(|i| high + step * i as f64).collect()
    };
    Ok(values)
}

/// n! computed recursively.
pub fn factorial(n: u64) -> BigUint {
    if n < 2 {
        BigUint::one()
    } else {
        factorial(n - 1) * n
    }
}

/// n! computed with a loop; safe for inputs that would exhaust the stack recursively.
pub fn factorial_iterative(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * i)
}

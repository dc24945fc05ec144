// src/arrays/matrix.rs

use crate::core::checkers::{check_positive_integer, Numeric};
use crate::core::errors::{Result, SundriesError};

/// A `height` × `width` grid filled with `value`.
pub fn create_multi<T: Clone, H: Numeric, W: Numeric>(height: H, width: W, value: T) -> Result<Vec<Vec<T>>> {
    let height = check_positive_integer(height, "height", true)? as usize;
    let width = check_positive_integer(width, "width", true)? as usize;
    Ok(vec![vec![value; width]; height])
}

/// Width of a rectangular matrix; jagged input is rejected.
fn width_of<T>(matrix: &[Vec<T>]) -> Result<usize> {
    let width = matrix.first().map_or(0, Vec::len);
    if let Some(row) = matrix.iter().position(|row| row.len() != width) {
        return Err(SundriesError::type_violation(format!(
            "The matrix argument must be rectangular: row {} has {} columns, expected {}.",
            row,
            matrix[row].len(),
            width
        )));
    }
    Ok(width)
}

/// Rotates a matrix 90° counter-clockwise (h × w becomes w × h).
pub fn turn_left<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let width = width_of(matrix)?;
    Ok((0..width)
        .rev()
        .map(|column| matrix.iter().map(|row| row[column].clone()).collect())
        .collect())
}

/// Rotates a matrix 90° clockwise (h × w becomes w × h).
pub fn turn_right<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let width = width_of(matrix)?;
    Ok((0..width)
        .map(|column| matrix.iter().rev().map(|row| row[column].clone()).collect())
        .collect())
}

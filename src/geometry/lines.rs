// src/geometry/lines.rs
//
// Plane geometry on points (x, y) and lines y = a·x + b given as (a, b).

use log::trace;

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Euclidean distance, or the sum of the axis distances when `manhattan` is set.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64, manhattan: bool) -> f64 {
    if manhattan {
        (x1 - x2).abs() + (y1 - y2).abs()
    } else {
        ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
    }
}

pub fn middle(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    ((x1 + x2) / 2.0, (y1 + y2) / 2.0)
}

/// Slope of the line through both points; `f64::INFINITY` for a vertical line or a single point.
pub fn slope(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x1 == x2 {
        return f64::INFINITY;
    }
    without_negative_zero((y2 - y1) / (x2 - x1))
}

/// Where the line through both points crosses x = 0; `f64::INFINITY` when there is no single line.
pub fn y_intercept(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let a = slope(x1, y1, x2, y2);
    if a.is_infinite() {
        return f64::INFINITY;
    }
    without_negative_zero(y1 - a * x1)
}

/// `(a, b)` of the line through both points.
pub fn equation(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    (slope(x1, y1, x2, y2), y_intercept(x1, y1, x2, y2))
}

/// Human form of `a·x + b`: `"2x + 3"`, `"-x - 1"`, `"x"`, `"4"`, or `""` for the zero line.
pub fn linear_to_string(a: f64, b: f64) -> String {
    let slope_term = match a {
        a if a == 0.0 => String::new(),
        a if a == 1.0 => "x".to_string(),
        a if a == -1.0 => "-x".to_string(),
        a => format!("{}x", a),
    };
    let intercept_term = if b == 0.0 {
        String::new()
    } else if slope_term.is_empty() {
        b.to_string()
    } else {
        format!(" {} {}", if b > 0.0 { '+' } else { '-' }, b.abs())
    };
    slope_term + &intercept_term
}

/// Line perpendicular to one of slope `a`, passing through (x, y).
pub fn perpendicular(a: f64, x: f64, y: f64) -> (f64, f64) {
    let a = -1.0 / a;
    (a, without_negative_zero(y - x * a))
}

/// Points where the line `y = a·x + b` meets the circle of centre (x, y) and radius `r`:
/// none, one tangent point or two points ordered by decreasing x.
pub fn circle_intersection(a: f64, b: f64, x: f64, y: f64, r: f64) -> Vec<(f64, f64)> {
    // Substituting the line into the circle gives A·X² + B·X + C = 0.
    let qa = a * a + 1.0;
    let qb = 2.0 * (a * (b - y) - x);
    let qc = x * x + y * y + b * b - 2.0 * y * b - r * r;
    let delta = qb * qb - 4.0 * qa * qc;
    trace!("circle intersection discriminant {}", delta);

    let roots = if delta < 0.0 {
        vec![]
    } else if delta == 0.0 {
        vec![-qb / (2.0 * qa)]
    } else {
        let root = delta.sqrt();
        vec![(-qb + root) / (2.0 * qa), (-qb - root) / (2.0 * qa)]
    };
    roots.into_iter().map(|rx| (rx, a * rx + b)).collect()
}

/// Integer sides `(w, h)` of the rectangle of `area` closest to a square, `w` being the largest
/// divisor of `area` not above its rounded-up square root.
pub fn squarest(area: u64) -> (u64, u64) {
    let mut width = (area as f64).sqrt().ceil() as u64;
    while width > 0 {
        if area % width == 0 {
            return (width, area / width);
        }
        width -= 1;
    }
    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let sqrt2 = 2f64.sqrt();
        assert_eq!(distance(1.0, 1.0, 0.0, 0.0, false), sqrt2);
        assert_eq!(distance(1.0, 1.0, 0.0, 1.0, false), 1.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0, false), 0.0);
        assert_eq!(distance(1.0, 1.0, 2.0, 2.0, false), sqrt2);
        assert_eq!(distance(1.0, 1.0, 0.0, 0.0, true), 2.0);
        assert_eq!(distance(1.0, 1.0, 0.0, 1.0, true), 1.0);
        assert_eq!(distance(1.0, 1.0, 2.0, 0.0, true), 2.0);
    }

    #[test]
    fn test_middle() {
        assert_eq!(middle(1.0, 1.0, 0.0, 0.0), (0.5, 0.5));
        assert_eq!(middle(1.0, 1.0, 0.0, 2.0), (0.5, 1.5));
        assert_eq!(middle(1.0, 1.0, 2.0, 1.0), (1.5, 1.0));
    }

    #[test]
    fn test_slope() {
        assert_eq!(slope(1.0, 1.0, 0.0, 0.0), 1.0);
        assert_eq!(slope(1.0, 1.0, 0.0, 2.0), -1.0);
        assert_eq!(slope(1.0, 1.0, 2.0, 2.0), 1.0);
        let flat = slope(1.0, 1.0, 0.0, 1.0);
        assert_eq!(flat, 0.0);
        assert!(flat.is_sign_positive());
        assert_eq!(slope(1.0, 1.0, 1.0, 0.0), f64::INFINITY);
        assert_eq!(slope(1.0, 1.0, 1.0, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_y_intercept() {
        assert_eq!(y_intercept(1.0, 1.0, 0.0, 0.0), 0.0);
        assert_eq!(y_intercept(1.0, 1.0, 0.0, 2.0), 2.0);
        assert_eq!(y_intercept(1.0, 1.0, 2.0, 0.0), 2.0);
        assert_eq!(y_intercept(1.0, 1.0, 2.0, 1.0), 1.0);
        assert!(y_intercept(1.0, 1.0, 2.0, 2.0).is_sign_positive());
        assert_eq!(y_intercept(1.0, 1.0, 1.0, 2.0), f64::INFINITY);
    }

    #[test]
    fn test_equation() {
        assert_eq!(equation(0.0, 1.0, 1.0, 3.0), (2.0, 1.0));
        assert_eq!(equation(1.0, 0.0, 1.0, 5.0).0, f64::INFINITY);
    }

    #[test]
    fn test_linear_to_string() {
        assert_eq!(linear_to_string(2.0, 3.0), "2x + 3");
        assert_eq!(linear_to_string(-1.0, -1.0), "-x - 1");
        assert_eq!(linear_to_string(1.0, 0.0), "x");
        assert_eq!(linear_to_string(0.0, 4.0), "4");
        assert_eq!(linear_to_string(0.0, -4.5), "-4.5");
        assert_eq!(linear_to_string(0.5, -2.0), "0.5x - 2");
        assert_eq!(linear_to_string(0.0, 0.0), "");
    }

    #[test]
    fn test_perpendicular() {
        assert_eq!(perpendicular(1.0, 0.0, 0.0), (-1.0, 0.0));
        assert_eq!(perpendicular(2.0, 2.0, 1.0), (-0.5, 2.0));
    }

    #[test]
    fn test_circle_intersection() {
        assert_eq!(circle_intersection(0.0, 0.0, 0.0, 0.0, 1.0), vec![(1.0, 0.0), (-1.0, 0.0)]);
        assert_eq!(circle_intersection(0.0, 1.0, 0.0, 0.0, 1.0), vec![(0.0, 1.0)]);
        assert_eq!(circle_intersection(0.0, 3.0, 0.0, 0.0, 1.0), vec![]);
    }

    #[test]
    fn test_circle_tangent_off_origin() {
        let points = circle_intersection(0.0, 2.0, 3.0, 0.0, 2.0);
        assert_eq!(points, vec![(3.0, 2.0)]);
    }

    #[test]
    fn test_squarest() {
        assert_eq!(squarest(12), (4, 3));
        assert_eq!(squarest(16), (4, 4));
        assert_eq!(squarest(7), (1, 7));
        assert_eq!(squarest(1), (1, 1));
        assert_eq!(squarest(0), (0, 0));
    }
}

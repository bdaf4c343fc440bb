//! Numerical integration over uniformly spaced samples.

use crate::types::Integration;

/// Trapezoidal rule over samples spaced `dx` apart.
///
/// Fewer than two samples integrate to zero.
pub fn trapezoid(y: &[f64], dx: f64) -> f64 {
    if y.len() < 2 {
        return 0.0;
    }
    let interior: f64 = y[1..y.len() - 1].iter().sum();
    dx * (0.5 * (y[0] + y[y.len() - 1]) + interior)
}

/// Composite Simpson's rule over samples spaced `dx` apart.
///
/// Simpson needs an even number of intervals; with an odd count the
/// leading even run is integrated with Simpson and the final interval
/// with a trapezoid. Fewer than three samples fall back to the
/// trapezoidal rule.
pub fn simpson(y: &[f64], dx: f64) -> f64 {
    let n = y.len();
    if n < 3 {
        return trapezoid(y, dx);
    }

    let intervals = n - 1;
    let (simpson_end, tail) = if intervals % 2 == 0 {
        (n - 1, 0.0)
    } else {
        (n - 2, dx * 0.5 * (y[n - 2] + y[n - 1]))
    };

    let mut sum = y[0] + y[simpson_end];
    let mut k = 1;
    while k < simpson_end {
        sum += 4.0 * y[k];
        if k + 1 < simpson_end {
            sum += 2.0 * y[k + 1];
        }
        k += 2;
    }

    dx / 3.0 * sum + tail
}

/// Integrate with the selected rule.
pub fn integrate(rule: Integration, y: &[f64], dx: f64) -> f64 {
    match rule {
        Integration::Trapezoidal => trapezoid(y, dx),
        Integration::Simpson => simpson(y, dx),
    }
}

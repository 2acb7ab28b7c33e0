//! Iterative Newton solver for real nth roots

use crate::error::{Error, Result};

/// Computes the `radical`-th root of `number` by Newton iteration on
/// `x^radical = number`, stopping once two successive estimates differ by no
/// more than `accuracy`.
///
/// The radical must be positive, the accuracy must lie strictly between 0
/// and 1, and even radicals of negative numbers are rejected since the root
/// is not real.
///
/// The loop carries no iteration cap: termination relies on convergence of
/// the iteration, which holds for well-conditioned inputs but is not
/// guaranteed in general (estimates may oscillate below the requested
/// accuracy's reach for extreme magnitudes).
pub fn nth_root(number: f64, radical: i32, accuracy: f64) -> Result<f64> {
    if radical <= 0 {
        return Err(Error::InvalidInput("the radical must be a positive integer"));
    }
    if accuracy <= 0.0 || accuracy >= 1.0 {
        return Err(Error::OutOfRange(
            "the accuracy must lie strictly between 0 and 1",
        ));
    }
    if radical % 2 == 0 && number < 0.0 {
        return Err(Error::InvalidInput(
            "even roots of negative numbers are not real",
        ));
    }

    let mut prev = 1.0;
    let mut current = newton_step(number, radical, prev);
    while (current - prev).abs() > accuracy {
        prev = current;
        current = newton_step(number, radical, prev);
    }
    Ok(current)
}

// x_{k+1} = ((n-1) x_k + a / x_k^(n-1)) / n
fn newton_step(number: f64, radical: i32, prev: f64) -> f64 {
    (f64::from(radical - 1) * prev + number / prev.powi(radical - 1)) / f64::from(radical)
}

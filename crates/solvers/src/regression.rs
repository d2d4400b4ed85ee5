//! Ordinary least-squares polynomial regression.
//!
//! # Algorithm
//!
//! [`polyfit`] builds the Vandermonde design matrix `A[i][j] = x_i^j`,
//! scales each column to unit Euclidean norm, and solves `min ‖A c − y‖²`
//! with a Householder QR factorization. The column scaling is undone on the
//! way out, so the returned coefficients are those of the unscaled problem.
//! Scaling keeps the factorization well conditioned when `x` spans tens of
//! days and the design contains cubes of it.
//!
//! Goodness of fit is reported separately by [`r_squared`], which compares
//! observed values to any set of predictions.
//!
//! # Limitations
//!
//! - Dense QR on an `m × (degree + 1)` matrix: intended for short windows and
//!   low degrees, not for large regression problems.
//! - No weighting and no regularization.

mod error;
mod polynomial;
mod qr;
mod r_squared;

pub use error::Error;
pub use polynomial::Polynomial;
pub use r_squared::{RSquared, r_squared};

use ndarray::{Array1, Array2};
use tracing::trace;

/// Fits a polynomial of the given degree to `(x, y)` by least squares.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `x` and `y` differ in length
/// - [`Error::Underdetermined`] if there are fewer observations than
///   coefficients
/// - [`Error::NonFinite`] if any observation is NaN or infinite
/// - [`Error::RankDeficient`] if the observations cannot determine every
///   coefficient (for example, all `x` equal with `degree >= 1`)
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial, Error> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let parameters = degree + 1;
    if x.len() < parameters {
        return Err(Error::Underdetermined {
            observations: x.len(),
            parameters,
        });
    }

    if x.iter().chain(y).any(|value| !value.is_finite()) {
        return Err(Error::NonFinite);
    }

    let mut design = vandermonde(x, parameters);

    let scale: Array1<f64> = design
        .columns()
        .into_iter()
        .map(|column| column.dot(&column).sqrt())
        .collect();
    if scale.iter().any(|&norm| norm == 0.0) {
        return Err(Error::RankDeficient);
    }
    design /= &scale;

    let scaled = qr::least_squares(design, Array1::from(y.to_vec()))?;
    let coefficients = (scaled / &scale).to_vec();

    trace!(degree, observations = x.len(), ?coefficients, "fitted polynomial");

    Ok(Polynomial::new(coefficients))
}

/// Builds the design matrix with columns `x^0, x^1, …, x^(parameters - 1)`.
///
/// Powers are accumulated by repeated multiplication, column by column.
fn vandermonde(x: &[f64], parameters: usize) -> Array2<f64> {
    let mut design = Array2::<f64>::ones((x.len(), parameters));
    for j in 1..parameters {
        for (i, &xi) in x.iter().enumerate() {
            design[[i, j]] = design[[i, j - 1]] * xi;
        }
    }
    design
}

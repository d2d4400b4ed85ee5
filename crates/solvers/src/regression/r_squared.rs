use std::fmt;

use super::Error;

/// Coefficient of determination of a fit.
///
/// R² is undefined when the observed values have zero variance, because the
/// total sum of squares it divides by is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RSquared {
    Defined(f64),
    Undefined,
}

impl RSquared {
    /// Returns the value, or `None` if undefined.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// Returns `true` if the statistic is defined.
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

/// Formats with three decimals, or `undefined`.
impl fmt::Display for RSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(value) => write!(f, "{value:.3}"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

/// Computes `1 − SS_res / SS_tot` for predictions against observations.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the slices differ in length and
/// [`Error::Underdetermined`] if they are empty.
pub fn r_squared(observed: &[f64], predicted: &[f64]) -> Result<RSquared, Error> {
    if observed.len() != predicted.len() {
        return Err(Error::LengthMismatch {
            x: observed.len(),
            y: predicted.len(),
        });
    }
    let Some(&first) = observed.first() else {
        return Err(Error::Underdetermined {
            observations: 0,
            parameters: 1,
        });
    };

    if observed.iter().all(|&y| y == first) {
        return Ok(RSquared::Undefined);
    }

    let mean = observed.iter().sum::<f64>() / observed.len() as f64;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return Ok(RSquared::Undefined);
    }
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    Ok(RSquared::Defined(1.0 - ss_res / ss_tot))
}

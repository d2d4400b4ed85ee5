/// A polynomial stored by ascending powers: `c[0] + c[1] x + c[2] x² + …`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients, lowest degree first.
    ///
    /// An empty coefficient list is the zero polynomial.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, lowest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree, counting trailing zero coefficients.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_by_ascending_powers() {
        let p = Polynomial::new(vec![1.0, -2.0, 0.5]);

        assert_eq!(p.degree(), 2);
        assert_eq!(p.eval(0.0), 1.0);
        assert_eq!(p.eval(2.0), 1.0 - 4.0 + 2.0);
        assert_eq!(p.eval(-1.0), 1.0 + 2.0 + 0.5);
    }

    #[test]
    fn empty_is_zero() {
        let p = Polynomial::new(Vec::new());

        assert_eq!(p.degree(), 0);
        assert_eq!(p.eval(7.0), 0.0);
    }
}

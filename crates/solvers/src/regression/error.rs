use thiserror::Error;

/// Errors that can occur while fitting or scoring a regression.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("{observations} observations cannot determine {parameters} coefficients")]
    Underdetermined {
        observations: usize,
        parameters: usize,
    },

    #[error("observations must be finite")]
    NonFinite,

    #[error("design matrix is rank deficient")]
    RankDeficient,
}

use std::error::Error;
use std::fmt;

/// Recoverable numeric failures reported by the matrix types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The determinant was exactly zero, so no inverse exists.
    /// Carries the dimension of the square matrix (2, 3 or 4).
    SingularMatrix(usize),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::SingularMatrix(size) => write!(
                f,
                "{}x{} matrix is singular (determinant is exactly zero)",
                size, size
            ),
        }
    }
}

impl Error for MathError {}

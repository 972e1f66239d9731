use thiserror::Error;

///Errors raised by the generalized inverse engine and the fixed-size value types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    ///An input has a zero dimension, a mismatched shape, or a
    ///regularization parameter which is not strictly positive.
    #[error("dimension error: {0}")]
    DimensionError(String),

    ///The singular value decomposition routine reported a failure.
    ///`info` is the routine's status code when it exposes one.
    #[error("singular value decomposition failed (info = {info:?}): {reason}")]
    DecompositionFailure {
        info : Option<i32>,
        reason : String
    },

    ///Out-of-range element access on a fixed-size vector or matrix.
    #[error("index {index} out of range for container of length {len}")]
    IndexError {
        index : usize,
        len : usize
    }
}

pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    pub fn dimension<S : Into<String>>(msg : S) -> MathError {
        MathError::DimensionError(msg.into())
    }

    pub fn index(index : usize, len : usize) -> MathError {
        MathError::IndexError {
            index,
            len
        }
    }

    pub fn is_decomposition_failure(&self) -> bool {
        match (self) {
            MathError::DecompositionFailure { .. } => true,
            _ => false
        }
    }
}

//! Small mathematical toolbox for robot kinematics and control.
//!
//! The centerpiece is [`crate::pseudoinverse::PseudoInverseEngine`], which computes
//! Moore-Penrose pseudo-inverses (hard singular value cutoff) and Tikhonov-damped
//! inverses of dense `f64` matrices through a full singular value decomposition.
//! Tall, square and wide inputs are all supported; wide inputs are decomposed in
//! transposed form and the result is mapped back, so callers always get the
//! inverse and the SVD factors of the matrix they passed in.
//!
//! Alongside it live the fixed-size value types used in kinematics code:
//! [`crate::vector3::Vector3`], [`crate::vector4::Vector4`],
//! [`crate::matrix3x3::Matrix3x3`], [`crate::matrix4x4::Matrix4x4`] and
//! [`crate::angle::Angle`]. The fixed-size matrices can route singular cases
//! through the dense engine via `pseudo_inverse`.

#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod params;
pub mod error;
pub mod linalg_utils;
pub mod svd_routine;
pub mod regularization;
pub mod pseudoinverse;
pub mod vector3;
pub mod vector4;
pub mod matrix3x3;
pub mod matrix4x4;
pub mod angle;
pub mod test_utils;

pub use crate::error::{MathError, MathResult};
pub use crate::pseudoinverse::{damped_inverse, pseudoinverse, DenseMatrix, DenseVector,
                               GeneralizedInverse, InverseOptions, PseudoInverseEngine,
                               ResizePolicy, SvdFactors};
pub use crate::regularization::{HardThreshold, Regularizer, TikhonovDamping};
pub use crate::svd_routine::{FullSvd, LapackSvd, SvdRoutine};
pub use crate::angle::Angle;
pub use crate::matrix3x3::Matrix3x3;
pub use crate::matrix4x4::Matrix4x4;
pub use crate::vector3::Vector3;
pub use crate::vector4::Vector4;

extern crate ndarray;

use std::fmt;
use std::ops::*;

use ndarray::*;
use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::pseudoinverse::*;
use crate::vector3::*;

///A 3x3 matrix stored row-major: element `(i, j)` lives at `m[3 * i + j]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x3<T> {
    pub m : [T; 9]
}

impl<T : Copy> Matrix3x3<T> {
    pub fn from_array(m : [T; 9]) -> Matrix3x3<T> {
        Matrix3x3 {
            m
        }
    }

    pub fn from_rows(rows : [[T; 3]; 3]) -> Matrix3x3<T> {
        let mut m = [rows[0][0]; 9];
        for i in 0..3 {
            for j in 0..3 {
                m[3 * i + j] = rows[i][j];
            }
        }
        Matrix3x3 {
            m
        }
    }

    ///Every entry set to `x`.
    pub fn filled(x : T) -> Matrix3x3<T> {
        Matrix3x3 {
            m : [x; 9]
        }
    }

    pub fn fill(&mut self, x : T) {
        self.m = [x; 9];
    }

    pub fn get(&self, i : usize, j : usize) -> MathResult<T> {
        if (i >= 3) {
            return Err(MathError::index(i, 3));
        }
        if (j >= 3) {
            return Err(MathError::index(j, 3));
        }
        Ok(self.m[3 * i + j])
    }

    pub fn get_flat(&self, i : usize) -> MathResult<T> {
        self.m.get(i).copied().ok_or(MathError::index(i, 9))
    }

    pub fn row(&self, i : usize) -> Vector3<T> {
        Vector3::new(self[(i, 0)], self[(i, 1)], self[(i, 2)])
    }

    pub fn column(&self, j : usize) -> Vector3<T> {
        Vector3::new(self[(0, j)], self[(1, j)], self[(2, j)])
    }

    pub fn transpose(&self) -> Matrix3x3<T> {
        let m = &self.m;
        Matrix3x3::from_array([m[0], m[3], m[6],
                               m[1], m[4], m[7],
                               m[2], m[5], m[8]])
    }
}

impl<T : Num + Copy> Matrix3x3<T> {
    ///The zero matrix.
    pub fn new() -> Matrix3x3<T> {
        Matrix3x3::filled(T::zero())
    }

    pub fn identity() -> Matrix3x3<T> {
        let mut result = Matrix3x3::new();
        result.set_identity();
        result
    }

    pub fn set_zero(&mut self) {
        self.fill(T::zero());
    }

    pub fn set_identity(&mut self) {
        self.set_zero();
        self.m[0] = T::one();
        self.m[4] = T::one();
        self.m[8] = T::one();
    }

    pub fn is_identity(&self) -> bool {
        (0..9).all(|i| {
            let expected = if (i % 4 == 0) { T::one() } else { T::zero() };
            self.m[i] == expected
        })
    }

    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0] * m[4] * m[8] + m[1] * m[5] * m[6] + m[2] * m[3] * m[7]
            - m[2] * m[4] * m[6] - m[0] * m[5] * m[7] - m[1] * m[3] * m[8]
    }

    pub fn trace(&self) -> T {
        self.m[0] + self.m[4] + self.m[8]
    }
}

impl<T : Float> Matrix3x3<T> {
    ///Inverse through the adjugate, or `None` if the determinant is zero.
    pub fn inverse(&self) -> Option<Matrix3x3<T>> {
        let det = self.determinant();
        if (det == T::zero() || !det.is_finite()) {
            return Option::None;
        }
        let inv_det = T::one() / det;
        let m = &self.m;
        let adjugate = Matrix3x3::from_array([
            m[4] * m[8] - m[5] * m[7], m[2] * m[7] - m[1] * m[8], m[1] * m[5] - m[2] * m[4],
            m[5] * m[6] - m[3] * m[8], m[0] * m[8] - m[2] * m[6], m[2] * m[3] - m[0] * m[5],
            m[3] * m[7] - m[4] * m[6], m[1] * m[6] - m[0] * m[7], m[0] * m[4] - m[1] * m[3]
        ]);
        let mut result = adjugate;
        for x in result.m.iter_mut() {
            *x = *x * inv_det;
        }
        Option::Some(result)
    }
}

impl Matrix3x3<f64> {
    pub fn to_dense(&self) -> DenseMatrix {
        let mut result = Array2::zeros((3, 3));
        for i in 0..3 {
            for j in 0..3 {
                result[[i, j]] = self[(i, j)];
            }
        }
        result
    }

    pub fn from_dense<S : Data<Elem = f64>>(mat : &ArrayBase<S, Ix2>) -> MathResult<Matrix3x3<f64>> {
        if (mat.dim() != (3, 3)) {
            return Err(MathError::dimension(format!("expected a 3x3 matrix, got {:?}", mat.dim())));
        }
        let mut result = Matrix3x3::new();
        for i in 0..3 {
            for j in 0..3 {
                result[(i, j)] = mat[[i, j]];
            }
        }
        Ok(result)
    }

    ///Pseudo-inverse through the dense engine. Unlike [`Matrix3x3::inverse`],
    ///this is defined for singular matrices.
    pub fn pseudo_inverse(&self, threshold : f64) -> MathResult<Matrix3x3<f64>> {
        let result = PseudoInverseEngine::new().pseudo_inverse(&self.to_dense(), threshold, false)?;
        Matrix3x3::from_dense(&result.inverse)
    }
}

impl<T> Index<usize> for Matrix3x3<T> {
    type Output = T;

    fn index(&self, i : usize) -> &T {
        assert!(i < 9, "index {} out of range for Matrix3x3", i);
        &self.m[i]
    }
}

impl<T> IndexMut<usize> for Matrix3x3<T> {
    fn index_mut(&mut self, i : usize) -> &mut T {
        assert!(i < 9, "index {} out of range for Matrix3x3", i);
        &mut self.m[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix3x3<T> {
    type Output = T;

    fn index(&self, (i, j) : (usize, usize)) -> &T {
        assert!(i < 3 && j < 3, "index ({}, {}) out of range for Matrix3x3", i, j);
        &self.m[3 * i + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix3x3<T> {
    fn index_mut(&mut self, (i, j) : (usize, usize)) -> &mut T {
        assert!(i < 3 && j < 3, "index ({}, {}) out of range for Matrix3x3", i, j);
        &mut self.m[3 * i + j]
    }
}

impl<T : Num + Copy> Add for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn add(self, other : Matrix3x3<T>) -> Matrix3x3<T> {
        let mut result = self;
        result += other;
        result
    }
}

impl<T : Num + Copy> Sub for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn sub(self, other : Matrix3x3<T>) -> Matrix3x3<T> {
        let mut result = self;
        result -= other;
        result
    }
}

impl<T : Num + Copy> AddAssign for Matrix3x3<T> {
    fn add_assign(&mut self, other : Matrix3x3<T>) {
        for i in 0..9 {
            self.m[i] = self.m[i] + other.m[i];
        }
    }
}

impl<T : Num + Copy> SubAssign for Matrix3x3<T> {
    fn sub_assign(&mut self, other : Matrix3x3<T>) {
        for i in 0..9 {
            self.m[i] = self.m[i] - other.m[i];
        }
    }
}

impl<T : Num + Copy> Mul for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn mul(self, other : Matrix3x3<T>) -> Matrix3x3<T> {
        let mut result = Matrix3x3::new();
        for i in 0..3 {
            for j in 0..3 {
                let mut acc = T::zero();
                for k in 0..3 {
                    acc = acc + self.m[3 * i + k] * other.m[3 * k + j];
                }
                result.m[3 * i + j] = acc;
            }
        }
        result
    }
}

impl<T : Num + Copy> MulAssign for Matrix3x3<T> {
    fn mul_assign(&mut self, other : Matrix3x3<T>) {
        *self = *self * other;
    }
}

impl<T : Num + Copy> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, v : Vector3<T>) -> Vector3<T> {
        let m = &self.m;
        Vector3::new(m[0] * v.x + m[1] * v.y + m[2] * v.z,
                     m[3] * v.x + m[4] * v.y + m[5] * v.z,
                     m[6] * v.x + m[7] * v.y + m[8] * v.z)
    }
}

//Scalar products are implemented per scalar type: a blanket `Mul<T>` would
//overlap with the matrix and vector products above.
macro_rules! impl_scalar_mul_3x3 {
    ($($t:ty),*) => {$(
        impl Mul<$t> for Matrix3x3<$t> {
            type Output = Matrix3x3<$t>;

            fn mul(self, r : $t) -> Matrix3x3<$t> {
                let mut result = self;
                result *= r;
                result
            }
        }

        impl Mul<Matrix3x3<$t>> for $t {
            type Output = Matrix3x3<$t>;

            fn mul(self, mat : Matrix3x3<$t>) -> Matrix3x3<$t> {
                mat * self
            }
        }

        impl MulAssign<$t> for Matrix3x3<$t> {
            fn mul_assign(&mut self, r : $t) {
                for x in self.m.iter_mut() {
                    *x *= r;
                }
            }
        }
    )*};
}

impl_scalar_mul_3x3!(i32, i64, f32, f64);

impl<T : fmt::Display> fmt::Display for Matrix3x3<T> {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..3 {
            for j in 0..3 {
                write!(f, "{} ", self.m[3 * i + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

extern crate ndarray;

use std::fmt;
use std::ops::*;

use ndarray::*;
use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::matrix3x3::*;
use crate::pseudoinverse::*;
use crate::vector3::*;
use crate::vector4::*;

///A 4x4 matrix stored row-major, usually a homogeneous transform
///`[R t; 0 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4<T> {
    pub m : [T; 16]
}

impl<T : Copy> Matrix4x4<T> {
    pub fn from_array(m : [T; 16]) -> Matrix4x4<T> {
        Matrix4x4 {
            m
        }
    }

    pub fn from_rows(rows : [[T; 4]; 4]) -> Matrix4x4<T> {
        let mut m = [rows[0][0]; 16];
        for i in 0..4 {
            for j in 0..4 {
                m[4 * i + j] = rows[i][j];
            }
        }
        Matrix4x4 {
            m
        }
    }

    pub fn filled(x : T) -> Matrix4x4<T> {
        Matrix4x4 {
            m : [x; 16]
        }
    }

    pub fn fill(&mut self, x : T) {
        self.m = [x; 16];
    }

    pub fn get(&self, i : usize, j : usize) -> MathResult<T> {
        if (i >= 4) {
            return Err(MathError::index(i, 4));
        }
        if (j >= 4) {
            return Err(MathError::index(j, 4));
        }
        Ok(self.m[4 * i + j])
    }

    pub fn get_flat(&self, i : usize) -> MathResult<T> {
        self.m.get(i).copied().ok_or(MathError::index(i, 16))
    }

    pub fn row(&self, i : usize) -> Vector4<T> {
        Vector4::new(self[(i, 0)], self[(i, 1)], self[(i, 2)], self[(i, 3)])
    }

    pub fn column(&self, j : usize) -> Vector4<T> {
        Vector4::new(self[(0, j)], self[(1, j)], self[(2, j)], self[(3, j)])
    }

    pub fn transpose(&self) -> Matrix4x4<T> {
        let mut result = *self;
        for i in 0..4 {
            for j in 0..4 {
                result.m[4 * i + j] = self.m[4 * j + i];
            }
        }
        result
    }

    ///Upper-left 3x3 block.
    pub fn rotation(&self) -> Matrix3x3<T> {
        let m = &self.m;
        Matrix3x3::from_array([m[0], m[1], m[2],
                               m[4], m[5], m[6],
                               m[8], m[9], m[10]])
    }

    ///Upper three entries of the last column.
    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.m[3], self.m[7], self.m[11])
    }
}

impl<T : Num + Copy> Matrix4x4<T> {
    ///The zero matrix.
    pub fn new() -> Matrix4x4<T> {
        Matrix4x4::filled(T::zero())
    }

    pub fn identity() -> Matrix4x4<T> {
        let mut result = Matrix4x4::new();
        result.set_identity();
        result
    }

    ///The homogeneous transform applying `rotation` then `translation`.
    pub fn homogeneous(rotation : &Matrix3x3<T>, translation : &Vector3<T>) -> Matrix4x4<T> {
        let mut result = Matrix4x4::identity();
        for i in 0..3 {
            for j in 0..3 {
                result.m[4 * i + j] = rotation[(i, j)];
            }
            result.m[4 * i + 3] = translation[i];
        }
        result
    }

    pub fn set_zero(&mut self) {
        self.fill(T::zero());
    }

    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..4 {
            self.m[5 * i] = T::one();
        }
    }

    pub fn is_identity(&self) -> bool {
        (0..16).all(|i| {
            let expected = if (i % 5 == 0) { T::one() } else { T::zero() };
            self.m[i] == expected
        })
    }

    pub fn trace(&self) -> T {
        self.m[0] + self.m[5] + self.m[10] + self.m[15]
    }

    //2x2 minors of the top two rows and the bottom two rows, shared by
    //the determinant and the inverse.
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let a = |r : usize, c : usize| self.m[4 * r + c];
        let s = [a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
                 a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
                 a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
                 a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
                 a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
                 a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3)];
        let c = [a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
                 a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
                 a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
                 a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
                 a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
                 a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3)];
        (s, c)
    }

    pub fn determinant(&self) -> T {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    ///Applies the transform to a point (implicit `w = 1`). The bottom row is
    ///ignored, so no perspective divide happens.
    pub fn transform_point(&self, p : &Vector3<T>) -> Vector3<T> {
        let m = &self.m;
        Vector3::new(m[0] * p.x + m[1] * p.y + m[2] * p.z + m[3],
                     m[4] * p.x + m[5] * p.y + m[6] * p.z + m[7],
                     m[8] * p.x + m[9] * p.y + m[10] * p.z + m[11])
    }
}

impl<T : Float> Matrix4x4<T> {
    ///Inverse by Laplace expansion over 2x2 minors, or `None` if the
    ///determinant is zero.
    pub fn inverse(&self) -> Option<Matrix4x4<T>> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        if (det == T::zero() || !det.is_finite()) {
            return Option::None;
        }
        let inv_det = T::one() / det;
        let a = |r : usize, c : usize| self.m[4 * r + c];
        let adjugate = [
            a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
            -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
            a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
            -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],

            -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
            a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
            -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
            a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],

            a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
            -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
            a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
            -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],

            -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
            a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
            -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
            a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0]
        ];
        let mut result = Matrix4x4::from_array(adjugate);
        for x in result.m.iter_mut() {
            *x = *x * inv_det;
        }
        Option::Some(result)
    }
}

impl Matrix4x4<f64> {
    pub fn to_dense(&self) -> DenseMatrix {
        let mut result = Array2::zeros((4, 4));
        for i in 0..4 {
            for j in 0..4 {
                result[[i, j]] = self[(i, j)];
            }
        }
        result
    }

    pub fn from_dense<S : Data<Elem = f64>>(mat : &ArrayBase<S, Ix2>) -> MathResult<Matrix4x4<f64>> {
        if (mat.dim() != (4, 4)) {
            return Err(MathError::dimension(format!("expected a 4x4 matrix, got {:?}", mat.dim())));
        }
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                result[(i, j)] = mat[[i, j]];
            }
        }
        Ok(result)
    }

    pub fn pseudo_inverse(&self, threshold : f64) -> MathResult<Matrix4x4<f64>> {
        let result = PseudoInverseEngine::new().pseudo_inverse(&self.to_dense(), threshold, false)?;
        Matrix4x4::from_dense(&result.inverse)
    }
}

impl<T> Index<usize> for Matrix4x4<T> {
    type Output = T;

    fn index(&self, i : usize) -> &T {
        assert!(i < 16, "index {} out of range for Matrix4x4", i);
        &self.m[i]
    }
}

impl<T> IndexMut<usize> for Matrix4x4<T> {
    fn index_mut(&mut self, i : usize) -> &mut T {
        assert!(i < 16, "index {} out of range for Matrix4x4", i);
        &mut self.m[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix4x4<T> {
    type Output = T;

    fn index(&self, (i, j) : (usize, usize)) -> &T {
        assert!(i < 4 && j < 4, "index ({}, {}) out of range for Matrix4x4", i, j);
        &self.m[4 * i + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix4x4<T> {
    fn index_mut(&mut self, (i, j) : (usize, usize)) -> &mut T {
        assert!(i < 4 && j < 4, "index ({}, {}) out of range for Matrix4x4", i, j);
        &mut self.m[4 * i + j]
    }
}

impl<T : Num + Copy> Add for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn add(self, other : Matrix4x4<T>) -> Matrix4x4<T> {
        let mut result = self;
        result += other;
        result
    }
}

impl<T : Num + Copy> Sub for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn sub(self, other : Matrix4x4<T>) -> Matrix4x4<T> {
        let mut result = self;
        result -= other;
        result
    }
}

impl<T : Num + Copy> AddAssign for Matrix4x4<T> {
    fn add_assign(&mut self, other : Matrix4x4<T>) {
        for i in 0..16 {
            self.m[i] = self.m[i] + other.m[i];
        }
    }
}

impl<T : Num + Copy> SubAssign for Matrix4x4<T> {
    fn sub_assign(&mut self, other : Matrix4x4<T>) {
        for i in 0..16 {
            self.m[i] = self.m[i] - other.m[i];
        }
    }
}

impl<T : Num + Copy> Mul for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn mul(self, other : Matrix4x4<T>) -> Matrix4x4<T> {
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                let mut acc = T::zero();
                for k in 0..4 {
                    acc = acc + self.m[4 * i + k] * other.m[4 * k + j];
                }
                result.m[4 * i + j] = acc;
            }
        }
        result
    }
}

impl<T : Num + Copy> MulAssign for Matrix4x4<T> {
    fn mul_assign(&mut self, other : Matrix4x4<T>) {
        *self = *self * other;
    }
}

impl<T : Num + Copy> Mul<Vector4<T>> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, v : Vector4<T>) -> Vector4<T> {
        Vector4::new(self.row(0).dot(&v), self.row(1).dot(&v),
                     self.row(2).dot(&v), self.row(3).dot(&v))
    }
}

macro_rules! impl_scalar_mul_4x4 {
    ($($t:ty),*) => {$(
        impl Mul<$t> for Matrix4x4<$t> {
            type Output = Matrix4x4<$t>;

            fn mul(self, r : $t) -> Matrix4x4<$t> {
                let mut result = self;
                result *= r;
                result
            }
        }

        impl Mul<Matrix4x4<$t>> for $t {
            type Output = Matrix4x4<$t>;

            fn mul(self, mat : Matrix4x4<$t>) -> Matrix4x4<$t> {
                mat * self
            }
        }

        impl MulAssign<$t> for Matrix4x4<$t> {
            fn mul_assign(&mut self, r : $t) {
                for x in self.m.iter_mut() {
                    *x *= r;
                }
            }
        }
    )*};
}

impl_scalar_mul_4x4!(i32, i64, f32, f64);

impl<T : fmt::Display> fmt::Display for Matrix4x4<T> {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            for j in 0..4 {
                write!(f, "{} ", self.m[4 * i + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    //Quarter turn about z followed by a shift.
    fn quarter_turn() -> Matrix4x4<f64> {
        let rotation = Matrix3x3::from_rows([[0.0, -1.0, 0.0],
                                             [1.0, 0.0, 0.0],
                                             [0.0, 0.0, 1.0]]);
        Matrix4x4::homogeneous(&rotation, &Vector3::new(1.0, 2.0, 3.0))
    }

    #[test]
    fn default_is_zero() {
        let m : Matrix4x4<f64> = Matrix4x4::default();
        assert_eq!(m, Matrix4x4::new());
        assert_eq!(m.get(2, 3), Ok(0.0));
        assert_eq!(m.get(4, 0), Err(MathError::index(4, 4)));
        assert_eq!(m.get_flat(16), Err(MathError::index(16, 16)));
    }

    #[test]
    #[should_panic]
    fn flat_index_is_bounds_checked() {
        let m : Matrix4x4<i32> = Matrix4x4::new();
        let value = m[16];
        assert_eq!(value, 0);
    }

    #[test]
    fn identity() {
        let mut m = Matrix4x4::filled(1.0);
        assert!(!m.is_identity());
        m.set_identity();
        assert!(m.is_identity());
        assert_eq!(m.trace(), 4.0);
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(format!("{}", Matrix4x4::<i32>::identity()),
                   "1 0 0 0 \n0 1 0 0 \n0 0 1 0 \n0 0 0 1 \n");
    }

    #[test]
    fn arithmetic() {
        let mut a : Matrix4x4<i64> = Matrix4x4::new();
        for i in 0..16 {
            a[i] = i as i64;
        }
        let i = Matrix4x4::identity();
        assert_eq!(a * i, a);
        assert_eq!(i * a, a);
        assert_eq!(a + a, a * 2);
        assert_eq!(a - a, Matrix4x4::new());
        assert_eq!(a * Vector4::new(1, 0, 0, 0), a.column(0));
        assert_eq!((a * a)[(1, 2)], a.row(1).dot(&a.column(2)));

        let mut b = a;
        b += a;
        b -= a;
        b *= i;
        b *= 3;
        assert_eq!(b, a * 3);
        assert_eq!(a.transpose().row(3), a.column(3));
    }

    #[test]
    fn homogeneous_transform() {
        let t = quarter_turn();
        let p = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(t.transform_point(&p), Vector3::new(1.0, 3.0, 3.0));
        assert_eq!(t * Vector4::from_point(&p), Vector4::new(1.0, 3.0, 3.0, 1.0));
        assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.rotation().determinant(), 1.0);
        assert_eq!(t.determinant(), 1.0);
    }

    #[test]
    fn inverse_undoes_transform() {
        let t = quarter_turn();
        let t_inv = t.inverse().unwrap();
        assert_equal_matrices(&(t * t_inv).to_dense(), &Matrix4x4::<f64>::identity().to_dense());
        let p = Vector3::new(-2.0, 0.5, 7.0);
        let back = t_inv.transform_point(&t.transform_point(&p));
        assert_equal_matrices(&back.to_dense().insert_axis(Axis(1)), &p.to_dense().insert_axis(Axis(1)));
    }

    #[test]
    fn block_diagonal_determinant() {
        let a = Matrix4x4::from_rows([[1.0, 2.0, 0.0, 0.0],
                                      [3.0, 4.0, 0.0, 0.0],
                                      [0.0, 0.0, 2.0, 1.0],
                                      [0.0, 0.0, 1.0, 1.0]]);
        assert_eq!(a.determinant(), -2.0);
        let a_inv = a.inverse().unwrap();
        assert_equal_matrices(&a_inv.to_dense(), &a.pseudo_inverse(1e-6).unwrap().to_dense());
    }

    #[test]
    fn inverse_of_dense_random_matrix() {
        //every entry nonzero, so each cofactor term contributes
        let a = Matrix4x4::from_dense(&random_well_conditioned_matrix(4)).unwrap();
        let a_inv = a.inverse().unwrap();
        let identity = Matrix4x4::<f64>::identity().to_dense();
        assert_equal_matrices(&(a * a_inv).to_dense(), &identity);
        assert_equal_matrices(&(a_inv * a).to_dense(), &identity);
        assert_equal_matrices(&a_inv.to_dense(), &a.pseudo_inverse(1e-6).unwrap().to_dense());
    }

    #[test]
    fn singular_matrix_has_only_pseudo_inverse() {
        let mut a = Matrix4x4::identity();
        a[(3, 3)] = 0.0;
        assert!(a.inverse().is_none());
        assert_equal_matrices(&a.pseudo_inverse(1e-6).unwrap().to_dense(), &a.to_dense());
    }

    #[test]
    fn dense_conversion_checks_shape() {
        let t = quarter_turn();
        assert_eq!(Matrix4x4::from_dense(&t.to_dense()), Ok(t));
        assert!(Matrix4x4::from_dense(&Array2::<f64>::eye(3)).is_err());
    }
}

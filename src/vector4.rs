extern crate ndarray;

use std::fmt;
use std::ops::*;

use ndarray::*;
use num_traits::{Float, Num, Zero};
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::vector3::*;

///A 4d vector, typically homogeneous coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x : T,
    pub y : T,
    pub z : T,
    pub w : T
}

impl<T : Copy> Vector4<T> {
    pub fn new(x : T, y : T, z : T, w : T) -> Vector4<T> {
        Vector4 {
            x,
            y,
            z,
            w
        }
    }

    pub fn get(&self, i : usize) -> MathResult<T> {
        match (i) {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::index(i, 4))
        }
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    ///Drops the last coordinate.
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T : Copy + Zero> Vector4<T> {
    pub fn zero() -> Vector4<T> {
        Vector4::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero() && self.w.is_zero()
    }
}

impl<T : Num + Copy> Vector4<T> {
    ///Homogeneous coordinates of a point (`w = 1`).
    pub fn from_point(p : &Vector3<T>) -> Vector4<T> {
        Vector4::new(p.x, p.y, p.z, T::one())
    }

    pub fn dot(&self, other : &Vector4<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T : Float> Vector4<T> {
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    pub fn normalize(&mut self) {
        let inv_norm = T::one() / self.norm();
        self.x = self.x * inv_norm;
        self.y = self.y * inv_norm;
        self.z = self.z * inv_norm;
        self.w = self.w * inv_norm;
    }

    pub fn normalized(&self) -> Vector4<T> {
        let mut result = *self;
        result.normalize();
        result
    }
}

impl Vector4<f64> {
    pub fn to_dense(&self) -> Array1<f64> {
        arr1(&self.to_array())
    }
}

impl<T : Copy> From<[T; 4]> for Vector4<T> {
    fn from(a : [T; 4]) -> Vector4<T> {
        Vector4::new(a[0], a[1], a[2], a[3])
    }
}

impl<T> Index<usize> for Vector4<T> {
    type Output = T;

    fn index(&self, i : usize) -> &T {
        match (i) {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index {} out of range for Vector4", i)
        }
    }
}

impl<T> IndexMut<usize> for Vector4<T> {
    fn index_mut(&mut self, i : usize) -> &mut T {
        match (i) {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index {} out of range for Vector4", i)
        }
    }
}

impl<T : Neg<Output = T>> Neg for Vector4<T> {
    type Output = Vector4<T>;

    fn neg(self) -> Vector4<T> {
        Vector4 { x : -self.x, y : -self.y, z : -self.z, w : -self.w }
    }
}

impl<T : Add<Output = T>> Add for Vector4<T> {
    type Output = Vector4<T>;

    fn add(self, other : Vector4<T>) -> Vector4<T> {
        Vector4 { x : self.x + other.x, y : self.y + other.y, z : self.z + other.z, w : self.w + other.w }
    }
}

impl<T : Sub<Output = T>> Sub for Vector4<T> {
    type Output = Vector4<T>;

    fn sub(self, other : Vector4<T>) -> Vector4<T> {
        Vector4 { x : self.x - other.x, y : self.y - other.y, z : self.z - other.z, w : self.w - other.w }
    }
}

impl<T : AddAssign> AddAssign for Vector4<T> {
    fn add_assign(&mut self, other : Vector4<T>) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl<T : SubAssign> SubAssign for Vector4<T> {
    fn sub_assign(&mut self, other : Vector4<T>) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl<T : Mul<Output = T> + Copy> Mul<T> for Vector4<T> {
    type Output = Vector4<T>;

    fn mul(self, t : T) -> Vector4<T> {
        Vector4 { x : self.x * t, y : self.y * t, z : self.z * t, w : self.w * t }
    }
}

impl<T : Div<Output = T> + Copy> Div<T> for Vector4<T> {
    type Output = Vector4<T>;

    fn div(self, t : T) -> Vector4<T> {
        Vector4 { x : self.x / t, y : self.y / t, z : self.z / t, w : self.w / t }
    }
}

impl<T : MulAssign + Copy> MulAssign<T> for Vector4<T> {
    fn mul_assign(&mut self, t : T) {
        self.x *= t;
        self.y *= t;
        self.z *= t;
        self.w *= t;
    }
}

impl<T : DivAssign + Copy> DivAssign<T> for Vector4<T> {
    fn div_assign(&mut self, t : T) {
        self.x /= t;
        self.y /= t;
        self.z /= t;
        self.w /= t;
    }
}

impl<T : fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} ", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let v = Vector4::new(5.0, 4.0, 9.0, 1.0);
        assert_eq!(format!("{}", v), "5 4 9 1 ");
    }

    #[test]
    fn default_is_zero() {
        let v : Vector4<f64> = Vector4::default();
        for i in 0..4 {
            assert_eq!(v[i], 0.0);
        }
        assert!(v.is_zero());
        assert_eq!(v.get(4), Err(MathError::index(4, 4)));
    }

    #[test]
    fn arithmetic() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Vector4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, Vector4::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(-a, a * -1.0);
        assert_eq!(a / 2.0, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(a.dot(&b), 20.0);
        assert_eq!(a.norm_squared(), 30.0);

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector4::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn normalized_has_unit_norm() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.norm(), 2.0);
        assert_eq!(v.normalized(), Vector4::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn homogeneous_point() {
        let p = Vector3::new(1, 2, 3);
        let h = Vector4::from_point(&p);
        assert_eq!(h, Vector4::new(1, 2, 3, 1));
        assert_eq!(h.xyz(), p);
    }
}

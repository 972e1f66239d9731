extern crate ndarray;

use std::fmt;
use std::ops::*;

use ndarray::*;
use num_traits::{Float, Num, Zero};
use serde::{Deserialize, Serialize};

use crate::error::*;

///A 3d vector, e.g. a point or a translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x : T,
    pub y : T,
    pub z : T
}

impl<T : Copy> Vector3<T> {
    pub fn new(x : T, y : T, z : T) -> Vector3<T> {
        Vector3 {
            x,
            y,
            z
        }
    }

    ///Bounds-checked component access.
    pub fn get(&self, i : usize) -> MathResult<T> {
        match (i) {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::index(i, 3))
        }
    }

    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T : Copy + Zero> Vector3<T> {
    pub fn zero() -> Vector3<T> {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T : Num + Copy> Vector3<T> {
    pub fn dot(&self, other : &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn cross(&self, other : &Vector3<T>) -> Vector3<T> {
        Vector3::new(self.y * other.z - other.y * self.z,
                     self.z * other.x - other.z * self.x,
                     self.x * other.y - other.x * self.y)
    }
}

impl<T : Float> Vector3<T> {
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    ///Scales to unit length in place. A zero vector becomes non-finite.
    pub fn normalize(&mut self) {
        let inv_norm = T::one() / self.norm();
        self.x = self.x * inv_norm;
        self.y = self.y * inv_norm;
        self.z = self.z * inv_norm;
    }

    pub fn normalized(&self) -> Vector3<T> {
        let mut result = *self;
        result.normalize();
        result
    }
}

impl Vector3<f64> {
    pub fn to_dense(&self) -> Array1<f64> {
        arr1(&self.to_array())
    }
}

impl<T : Copy> From<[T; 3]> for Vector3<T> {
    fn from(a : [T; 3]) -> Vector3<T> {
        Vector3::new(a[0], a[1], a[2])
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, i : usize) -> &T {
        match (i) {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {} out of range for Vector3", i)
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, i : usize) -> &mut T {
        match (i) {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {} out of range for Vector3", i)
        }
    }
}

impl<T : Neg<Output = T>> Neg for Vector3<T> {
    type Output = Vector3<T>;

    fn neg(self) -> Vector3<T> {
        Vector3 { x : -self.x, y : -self.y, z : -self.z }
    }
}

impl<T : Add<Output = T>> Add for Vector3<T> {
    type Output = Vector3<T>;

    fn add(self, other : Vector3<T>) -> Vector3<T> {
        Vector3 { x : self.x + other.x, y : self.y + other.y, z : self.z + other.z }
    }
}

impl<T : Sub<Output = T>> Sub for Vector3<T> {
    type Output = Vector3<T>;

    fn sub(self, other : Vector3<T>) -> Vector3<T> {
        Vector3 { x : self.x - other.x, y : self.y - other.y, z : self.z - other.z }
    }
}

impl<T : AddAssign> AddAssign for Vector3<T> {
    fn add_assign(&mut self, other : Vector3<T>) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T : SubAssign> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, other : Vector3<T>) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T : Mul<Output = T> + Copy> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, t : T) -> Vector3<T> {
        Vector3 { x : self.x * t, y : self.y * t, z : self.z * t }
    }
}

impl<T : Div<Output = T> + Copy> Div<T> for Vector3<T> {
    type Output = Vector3<T>;

    fn div(self, t : T) -> Vector3<T> {
        Vector3 { x : self.x / t, y : self.y / t, z : self.z / t }
    }
}

impl<T : MulAssign + Copy> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, t : T) {
        self.x *= t;
        self.y *= t;
        self.z *= t;
    }
}

impl<T : DivAssign + Copy> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, t : T) {
        self.x /= t;
        self.y /= t;
        self.z /= t;
    }
}

impl<T : fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn display() {
        let v = Vector3::new(5.0, 4.0, 9.0);
        assert_eq!(format!("{}", v), "5 4 9 ");
    }

    #[test]
    fn default_is_zero() {
        let v : Vector3<i32> = Vector3::default();
        assert_eq!(v[0], 0);
        assert_eq!(v[2], 0);
        assert!(v.is_zero());
        assert_eq!(v.get(3), Err(MathError::index(3, 3)));

        let w : Vector3<f32> = Vector3::zero();
        assert!(w.is_zero());
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let v = Vector3::new(0.0, 1.0, 2.0);
        let value = v[3];
        assert_eq!(value, 0.0);
    }

    #[test]
    fn indexing() {
        let mut v = Vector3::new(0.0, 1.0, 2.0);
        assert_eq!(v.get(1), Ok(1.0));
        v[2] = 5.0;
        assert_eq!(v.z, 5.0);
        assert_eq!(v.to_array(), [0.0, 1.0, 5.0]);
    }

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);
        assert_eq!(a + b, Vector3::new(5, 7, 9));
        assert_eq!(b - a, Vector3::new(3, 3, 3));
        assert_eq!(-a, Vector3::new(-1, -2, -3));
        assert_eq!(a * 2, Vector3::new(2, 4, 6));
        assert_eq!(b / 2, Vector3::new(2, 2, 3));
        assert_eq!(a.dot(&b), 32);

        let mut c = a;
        c += b;
        assert_eq!(c, Vector3::new(5, 7, 9));
        c -= a;
        assert_eq!(c, b);
        c *= 3;
        assert_eq!(c, Vector3::new(12, 15, 18));
        c /= 3;
        assert_eq!(c, b);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
        assert!(x.cross(&x).is_zero());
    }

    #[test]
    fn norms() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.norm_squared(), 49.0);
        assert_eq!(v.norm(), 7.0);
        let n = v.normalized();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(n.x, 2.0 / 7.0, epsilon = 1e-15);
    }

    #[test]
    fn dense_conversion() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v.to_dense(), arr1(&[1.0, 2.0, 3.0]));
    }
}

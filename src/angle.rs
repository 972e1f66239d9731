use std::f64::consts::PI;
use std::fmt;
use std::ops::*;

use serde::{Deserialize, Serialize};

///A planar angle in radians, kept within [-pi, pi].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle {
    value : f64
}

//Brings `value` into [-pi, pi]. Inputs above pi land in (-pi, pi],
//inputs below -pi in [-pi, pi). Non-finite values pass through.
fn wrap(value : f64) -> f64 {
    if (!value.is_finite() || (value >= -PI && value <= PI)) {
        return value;
    }
    let wrapped = (value + PI).rem_euclid(2.0 * PI) - PI;
    if (value > 0.0 && wrapped <= -PI) {
        PI
    } else {
        wrapped
    }
}

impl Angle {
    pub fn new(value : f64) -> Angle {
        Angle {
            value : wrap(value)
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    ///Moves from `self` (`alpha = 0`) towards `other` (`alpha = 1`) along
    ///the shorter arc.
    pub fn interpolate(&self, alpha : f64, other : &Angle) -> Angle {
        let diff = *other - *self;
        Angle::new(self.value + alpha * diff.value)
    }

    ///Distance on the unit circle, in [0, pi].
    pub fn distance(&self, other : &Angle) -> f64 {
        (*self - *other).value.abs()
    }

    pub fn sin(&self) -> f64 {
        self.value.sin()
    }

    pub fn cos(&self) -> f64 {
        self.value.cos()
    }

    pub fn tan(&self) -> f64 {
        self.value.tan()
    }
}

impl From<f64> for Angle {
    fn from(value : f64) -> Angle {
        Angle::new(value)
    }
}

impl From<Angle> for f64 {
    fn from(angle : Angle) -> f64 {
        angle.value
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other : Angle) -> Angle {
        Angle::new(self.value + other.value)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other : Angle) -> Angle {
        Angle::new(self.value - other.value)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, coef : f64) -> Angle {
        Angle::new(coef * self.value)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, angle : Angle) -> Angle {
        angle * self
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wraps_on_construction() {
        assert_abs_diff_eq!(Angle::new(2.0 * PI + 0.1).value(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(-2.0 * PI - 0.1).value(), -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(7.0 * PI / 2.0).value(), -PI / 2.0, epsilon = 1e-12);
        assert_eq!(Angle::new(1.0).value(), 1.0);
        assert_eq!(Angle::new(PI).value(), PI);
        assert_eq!(Angle::new(-PI).value(), -PI);
        assert_eq!(Angle::default().value(), 0.0);
    }

    #[test]
    fn odd_multiples_of_pi_land_on_the_boundary() {
        assert_abs_diff_eq!(Angle::new(3.0 * PI).value(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(-3.0 * PI).value().abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(Angle::new(f64::NAN).value().is_nan());
        assert_eq!(Angle::new(f64::INFINITY).value(), f64::INFINITY);
    }

    #[test]
    fn arithmetic() {
        assert_abs_diff_eq!((Angle::new(5.0) - Angle::new(2.0)).value(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!((Angle::new(1.0) + Angle::new(1.5)).value(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!((Angle::new(0.5) * 2.0).value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!((2.0 * Angle::new(0.5)).value(), 1.0, epsilon = 1e-12);
        //3 + 3 overshoots pi and comes back negative
        assert_abs_diff_eq!((Angle::new(3.0) + Angle::new(3.0)).value(), 6.0 - 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_takes_shortest_arc() {
        let a = Angle::new(3.0);
        let b = Angle::new(-3.0);
        assert_eq!(a.interpolate(0.0, &b), a);
        assert_abs_diff_eq!(a.interpolate(1.0, &b).value(), b.value(), epsilon = 1e-12);
        //halfway passes through pi rather than 0
        assert_abs_diff_eq!(a.interpolate(0.5, &b).value().abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn distance_on_circle() {
        let a = Angle::new(3.0);
        let b = Angle::new(-3.0);
        assert_abs_diff_eq!(a.distance(&b), 2.0 * PI - 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.distance(&a), 2.0 * PI - 6.0, epsilon = 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn trigonometry_and_conversions() {
        let a = Angle::from(PI / 6.0);
        assert_abs_diff_eq!(a.sin(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a.cos(), 3.0f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(PI / 4.0).tan(), 1.0, epsilon = 1e-12);
        let x : f64 = a.into();
        assert_eq!(x, PI / 6.0);
        assert_eq!(format!("{}", Angle::new(0.25)), "0.25");
    }
}

use core::f32::consts::PI;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn sqrt(value: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        value.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrtf(value)
    }
}

fn atan2(y: f32, x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan2f(y, x)
    }
}

/// A 2D vector used for position, velocity and acceleration.
///
/// Every operation is total. The one degenerate case is normalizing the zero
/// vector: [`Vector2D::try_normalize`] reports it as `None`, and
/// [`Vector2D::normalize`] (and everything built on it) yields the zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f32 {
        sqrt(self.magnitude_squared())
    }

    /// Direction in radians, `atan2(y, x)`.
    pub fn heading(&self) -> f32 {
        atan2(self.y, self.x)
    }

    pub fn heading_degrees(&self) -> f32 {
        self.heading() * (180.0 / PI)
    }

    /// Unit vector with the same heading, or `None` for the zero vector.
    pub fn try_normalize(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > 0.0 {
            Some(*self / mag)
        } else {
            None
        }
    }

    /// Unit vector with the same heading. The zero vector normalizes to itself.
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Rescales to `max` when longer than `max`, keeping the heading.
    pub fn limit(&self, max: f32) -> Self {
        if self.magnitude() > max {
            self.set_magnitude(max)
        } else {
            *self
        }
    }

    pub fn set_magnitude(&self, magnitude: f32) -> Self {
        self.normalize() * magnitude
    }

    /// Euclidean distance, computed as the magnitude of `other - self`.
    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*other - *self).magnitude()
    }
}

macro_rules! impl_vector_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl $op for Vector2D {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                Self {
                    x: self.x $sym other.x,
                    y: self.y $sym other.y,
                }
            }
        }

        impl $op<f32> for Vector2D {
            type Output = Self;

            fn $method(self, scalar: f32) -> Self {
                Self {
                    x: self.x $sym scalar,
                    y: self.y $sym scalar,
                }
            }
        }

        impl $assign for Vector2D {
            fn $assign_method(&mut self, other: Self) {
                *self = *self $sym other;
            }
        }

        impl $assign<f32> for Vector2D {
            fn $assign_method(&mut self, scalar: f32) {
                *self = *self $sym scalar;
            }
        }
    };
}

impl_vector_op!(Add, add, AddAssign, add_assign, +);
impl_vector_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_op!(Div, div, DivAssign, div_assign, /);

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_vector2d_new() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
        assert_eq!(Vector2D::zero(), Vector2D::default());
    }

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_heading() {
        assert!(approx(Vector2D::new(0.0, 1.0).heading(), PI / 2.0));
        assert!(approx(Vector2D::new(-1.0, 0.0).heading_degrees(), 180.0));
        assert!(approx(Vector2D::new(1.0, -1.0).heading_degrees(), -45.0));
    }

    #[test]
    fn test_normalize_keeps_heading() {
        for v in [
            Vector2D::new(3.0, 4.0),
            Vector2D::new(-0.001, 0.002),
            Vector2D::new(-250.0, -1.0),
        ] {
            let n = v.normalize();
            assert!(approx(n.magnitude(), 1.0));
            assert!(approx(n.heading(), v.heading()));
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Vector2D::zero().try_normalize(), None);
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
        assert_eq!(Vector2D::zero().set_magnitude(3.0), Vector2D::zero());
        assert_eq!(Vector2D::zero().limit(1.0), Vector2D::zero());
    }

    #[test]
    fn test_limit() {
        let v = Vector2D::new(30.0, 40.0);
        let limited = v.limit(4.0);
        assert!(approx(limited.magnitude(), 4.0));
        assert!(approx(limited.heading(), v.heading()));

        let short = Vector2D::new(1.0, 1.0);
        assert_eq!(short.limit(4.0), short);
    }

    #[test]
    fn test_set_magnitude() {
        let v = Vector2D::new(0.0, -2.0).set_magnitude(7.0);
        assert!(approx(v.x, 0.0));
        assert!(approx(v.y, -7.0));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vector2D::new(1.5, -2.0);
        let b = Vector2D::new(-4.0, 9.25);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(Vector2D::new(0.0, 0.0).distance(&Vector2D::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * v2, Vector2D::new(3.0, 8.0));
        assert_eq!(v2 / v1, Vector2D::new(3.0, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));
    }

    #[test]
    fn test_scalar_operations() {
        let v = Vector2D::new(2.0, 4.0);
        assert_eq!(v + 1.0, Vector2D::new(3.0, 5.0));
        assert_eq!(v - 1.0, Vector2D::new(1.0, 3.0));
        assert_eq!(v * 2.0, Vector2D::new(4.0, 8.0));
        assert_eq!(v / 2.0, Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn test_in_place_operations() {
        let mut v = Vector2D::new(1.0, 1.0);
        v += Vector2D::new(1.0, 2.0);
        v *= 2.0;
        v -= 1.0;
        v /= Vector2D::new(3.0, 5.0);
        assert_eq!(v, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_add_sub_round_trip() {
        let pairs = [
            (Vector2D::new(0.1, 0.2), Vector2D::new(0.3, -0.7)),
            (Vector2D::new(1.234, -9.0), Vector2D::new(-0.001, 5.5)),
        ];
        for (a, b) in pairs {
            let back = (a + b) - b;
            assert!(approx(back.x, a.x));
            assert!(approx(back.y, a.y));
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Vector2D::new(1.0, 2.0);
        let mut b = a;
        b += 1.0;
        assert_eq!(a, Vector2D::new(1.0, 2.0));
        assert_eq!(b, Vector2D::new(2.0, 3.0));
    }
}

use core::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(a: Self, b: Self) -> Self {
        Self {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        }
    }

    /// Unit vector pointing from `self` toward `other`; the zero vector
    /// when the points coincide.
    pub fn unit_vector_to(self, other: Self) -> Vec2d {
        (other - self).normalize()
    }
}

impl Vec2d {
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            Self::default()
        } else {
            self * (1.0 / n)
        }
    }
}

impl Add<Vec2d> for Point2d {
    type Output = Point2d;

    fn add(self, rhs: Vec2d) -> Self::Output {
        Point2d {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Point2d> for Point2d {
    type Output = Vec2d;

    fn sub(self, rhs: Point2d) -> Self::Output {
        Vec2d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Add for Vec2d {
    type Output = Vec2d;

    fn add(self, rhs: Vec2d) -> Self::Output {
        Vec2d {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;

    fn sub(self, rhs: Vec2d) -> Self::Output {
        Vec2d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;

    fn mul(self, rhs: f64) -> Self::Output {
        Vec2d {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// 2x2 rotation built to carry a chosen baseline onto the positive x-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation2d {
    m: [[f64; 2]; 2],
}

impl Rotation2d {
    /// Rotation mapping `baseline` onto the positive x-axis, so that for a
    /// non-zero baseline `apply(baseline)` has zero y and positive x.
    pub fn to_x_axis(baseline: Vec2d) -> Self {
        let angle = baseline.y.atan2(baseline.x);
        let (sin, cos) = angle.sin_cos();
        Self {
            m: [[cos, sin], [-sin, cos]],
        }
    }

    pub fn apply(&self, v: Vec2d) -> Vec2d {
        Vec2d {
            x: self.m[0][0] * v.x + self.m[0][1] * v.y,
            y: self.m[1][0] * v.x + self.m[1][1] * v.y,
        }
    }

    /// Inverse rotation. The adjugate suffices: the determinant is one.
    pub fn invert(&self) -> Self {
        let [[a, b], [c, d]] = self.m;
        Self {
            m: [[d, -b], [-c, a]],
        }
    }
}

/// Closed polygon; the first vertex is not repeated at the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point2d>,
}

impl Polygon {
    /// Shoelace signed area over the cyclic vertex list.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut area = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            area += p.x * q.y - q.x * p.y;
        }
        area / 2.0
    }

    /// Positive area outlines a filled region; negative marks a hole.
    pub fn is_filled(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Point2d, Polygon, Rotation2d, Vec2d};

    #[test]
    fn vec_ops_and_normalize() {
        let a = Vec2d { x: 3.0, y: 4.0 };
        let b = Vec2d { x: 1.0, y: -2.0 };

        assert_eq!(a + b, Vec2d { x: 4.0, y: 2.0 });
        assert_eq!(a - b, Vec2d { x: 2.0, y: 6.0 });
        assert!((a.dot(b) + 5.0).abs() < 1e-12);
        assert!((a.norm() - 5.0).abs() < 1e-12);

        let n = a.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-12);

        let z = Vec2d::default().normalize();
        assert_eq!(z, Vec2d::default());
    }

    #[test]
    fn unit_vector_between_coincident_points_is_zero() {
        let p = Point2d::new(2.5, -1.0);
        assert_eq!(p.unit_vector_to(p), Vec2d::default());
    }

    #[test]
    fn rotation_to_x_axis_cases() {
        let cases = [
            Vec2d { x: 0.3, y: 0.5 },
            Vec2d { x: -0.3, y: 0.8 },
            Vec2d { x: 7.0, y: -5.0 },
            Vec2d { x: 0.0, y: -5.0 },
            Vec2d { x: 0.0, y: 2.0 },
            Vec2d { x: 3.0, y: 0.0 },
            Vec2d { x: -10.0, y: 0.0 },
        ];

        for v in cases {
            let rot = Rotation2d::to_x_axis(v);
            let on_axis = rot.apply(v);
            assert!(
                on_axis.y.abs() < 1e-9,
                "expected ({}, {}) to land on the x axis, got ({}, {})",
                v.x,
                v.y,
                on_axis.x,
                on_axis.y
            );
            assert!(on_axis.x > 0.0);

            let back = rot.invert().apply(on_axis);
            assert!((back.x - v.x).abs() < 1e-9);
            assert!((back.y - v.y).abs() < 1e-9);
        }
    }

    proptest! {
        #[test]
        fn rotation_round_trip(x in -100.0f64..100.0, y in -100.0f64..100.0) {
            prop_assume!(x.abs() > 1e-6 || y.abs() > 1e-6);
            let v = Vec2d { x, y };

            let rot = Rotation2d::to_x_axis(v);
            let on_axis = rot.apply(v);
            prop_assert!(on_axis.y.abs() < 1e-9 * v.norm().max(1.0));
            prop_assert!(on_axis.x > 0.0);

            let back = rot.invert().apply(on_axis);
            prop_assert!((back.x - v.x).abs() < 1e-9 * v.norm().max(1.0));
            prop_assert!((back.y - v.y).abs() < 1e-9 * v.norm().max(1.0));
        }
    }

    #[test]
    fn unit_square_area_and_reversal() {
        let mut poly = Polygon {
            points: vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(1.0, 0.0),
                Point2d::new(1.0, 1.0),
                Point2d::new(0.0, 1.0),
            ],
        };

        assert!((poly.signed_area() - 1.0).abs() < 1e-12);
        assert!(poly.is_filled());

        poly.reverse();
        assert!((poly.signed_area() + 1.0).abs() < 1e-12);
        assert!(!poly.is_filled());
    }
}

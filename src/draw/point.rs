//! 2D point type with distance, interpolation and polar rotation helpers.

use std::fmt;

/// Points closer than this are treated as coincident by [`Point::towards`].
const TOWARDS_EPSILON: f64 = 0.01;

/// A point in surface coordinates (pixels, y pointing down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Polar form of a point about the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
    /// Distance from the origin
    pub rho: f64,
    /// Angle in radians, measured from the positive x axis
    pub theta: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves the point in place, for callers reusing one instance per frame.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        self.squared_distance_to(other).sqrt()
    }

    /// Squared Euclidean distance; cheaper when only comparing distances.
    pub fn squared_distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns the point `distance` units from `self` along the ray to `target`.
    ///
    /// If the two points are closer than 0.01 the direction is unstable, so
    /// `target` itself is returned.
    pub fn towards(&self, target: Point, distance: f64) -> Point {
        let span = self.distance_to(target);
        if span < TOWARDS_EPSILON {
            return target;
        }
        let frac = distance / span;
        Point::new(
            self.x + frac * (target.x - self.x),
            self.y + frac * (target.y - self.y),
        )
    }

    /// Rotates the point about the origin by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Point {
        let mut polar = self.to_polar();
        polar.theta += angle;
        Point::from_polar(polar)
    }

    /// The origin has no direction; its angle is reported as 0.
    pub fn to_polar(&self) -> Polar {
        let rho = (self.x * self.x + self.y * self.y).sqrt();
        let theta = if rho == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        };
        Polar { rho, theta }
    }

    pub fn from_polar(polar: Polar) -> Point {
        Point::new(polar.rho * polar.theta.cos(), polar.rho * polar.theta.sin())
    }

    pub fn scale(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<Polar> for Point {
    fn from(polar: Polar) -> Self {
        Point::from_polar(polar)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_point_eq(a: Point, b: Point) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn move_to_updates_in_place() {
        let mut p = Point::new(1.0, 2.0);
        p.move_to(-3.0, 4.5);
        assert_eq!(p, Point::new(-3.0, 4.5));
    }

    #[test]
    fn distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.squared_distance_to(b), 25.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn towards_moves_along_the_ray() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_point_eq(a.towards(b, 4.0), Point::new(4.0, 0.0));
        assert_point_eq(a.towards(b, 15.0), Point::new(15.0, 0.0));
        assert_point_eq(a.towards(b, -2.0), Point::new(-2.0, 0.0));
    }

    #[test]
    fn towards_returns_target_when_coincident() {
        let a = Point::new(5.0, 5.0);
        let b = Point::new(5.005, 5.0);
        assert_eq!(a.towards(b, 100.0), b);
    }

    #[test]
    fn polar_round_trip() {
        for p in [
            Point::new(1.0, 0.0),
            Point::new(-2.5, 7.0),
            Point::new(0.0, -3.0),
            Point::new(-1e3, -1e-3),
        ] {
            assert_point_eq(Point::from_polar(p.to_polar()), p);
        }
    }

    #[test]
    fn zero_point_has_defined_angle() {
        let polar = Point::ORIGIN.to_polar();
        assert_eq!(polar, Polar { rho: 0.0, theta: 0.0 });
        let rotated = Point::ORIGIN.rotate(1.234);
        assert!(rotated.x.is_finite() && rotated.y.is_finite());
        assert_point_eq(rotated, Point::ORIGIN);
    }

    #[test]
    fn rotate_quarter_turns() {
        let p = Point::new(2.0, 0.0);
        assert_point_eq(p.rotate(FRAC_PI_2), Point::new(0.0, 2.0));
        assert_point_eq(p.rotate(PI), Point::new(-2.0, 0.0));
        assert_point_eq(p.rotate(0.0), p);
    }

    #[test]
    fn rotate_is_reversible() {
        let p = Point::new(3.5, -1.25);
        for angle in [0.1, 1.0, -2.0, 7.5] {
            assert_point_eq(p.rotate(angle).rotate(-angle), p);
        }
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "1.5,-2");
    }
}

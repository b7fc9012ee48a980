//! Plane geometry for the two arcs and their knobs.
//!
//! Screen coordinates: x grows to the right, y grows downward, so angles
//! measured with `atan2` increase clockwise on screen.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Angle of `self` seen from `center`, in radians within `(-PI, PI]`.
    pub fn angle_from(self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// True when `point` lies no further than `radius + slack` from the center.
    pub fn reaches(&self, point: Point, slack: f64) -> bool {
        point.distance_to(self.center) <= self.radius + slack
    }

    pub fn point_at(&self, angle: f64) -> Point {
        point_on_circle(self.radius, angle, self.center)
    }
}

pub fn point_on_circle(radius: f64, angle: f64, center: Point) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Whole degrees of `angle`, truncated toward zero.
pub fn truncated_degrees(angle: f64) -> i64 {
    (angle * 180.0 / PI) as i64
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Inclusive range of whole degrees a knob may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleRange {
    pub min_degrees: i64,
    pub max_degrees: i64,
}

impl AngleRange {
    pub const fn new(min_degrees: i64, max_degrees: i64) -> Self {
        Self {
            min_degrees,
            max_degrees,
        }
    }

    /// Checks the truncated degree value of `angle`, not the exact angle, so
    /// `-10.9°` is inside `[-170, -10]` while `-9.4°` is not.
    pub fn admits(&self, angle: f64) -> bool {
        (self.min_degrees..=self.max_degrees).contains(&truncated_degrees(angle))
    }
}

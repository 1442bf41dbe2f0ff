//! Value types for a forklift body in the plane.
//!
//! - `Pose`: polar position plus heading, `(angle, distance)`; the body sits at
//!   `distance·(cos angle, sin angle)` and points along the same angle.
//! - `Segment`: the body as two endpoints, `center ± half_length·dir`.
//! - `SegmentPair`: both bodies of one draw, with the poses that produced them.

use nalgebra::Vector2;

/// A point (or direction) in R².
pub type Point2 = Vector2<f64>;

/// Randomly drawn position and orientation of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Heading in radians, in `[0, 2π)` when drawn by `sample_pose`.
    pub angle: f64,
    /// Distance of the center from the origin.
    pub distance: f64,
}

impl Pose {
    #[inline]
    pub fn new(angle: f64, distance: f64) -> Self {
        Self { angle, distance }
    }
    /// Unit heading `(cos angle, sin angle)`.
    #[inline]
    pub fn direction(&self) -> Point2 {
        Vector2::new(self.angle.cos(), self.angle.sin())
    }
    #[inline]
    pub fn center(&self) -> Point2 {
        self.direction() * self.distance
    }
}

/// Straight segment between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }
    /// Body of length `2 * half_length` centered at `pose.center()`, oriented along `pose.angle`.
    pub fn from_pose(pose: &Pose, half_length: f64) -> Self {
        let c = pose.center();
        let d = pose.direction() * half_length;
        Self { a: c + d, b: c - d }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.a - self.b).norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        (self.a + self.b) * 0.5
    }
}

/// Both bodies of one draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPair {
    pub first: Segment,
    pub second: Segment,
    pub poses: [Pose; 2],
}

impl SegmentPair {
    pub fn from_poses(p1: Pose, p2: Pose, half_length: f64) -> Self {
        Self {
            first: Segment::from_pose(&p1, half_length),
            second: Segment::from_pose(&p2, half_length),
            poses: [p1, p2],
        }
    }
    #[inline]
    pub fn segments(&self) -> [&Segment; 2] {
        [&self.first, &self.second]
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bound line segments with 2D-projected queries

use crate::error::{Error, Result};
use bim_lite_core::{GeometryRecord, Point3d};
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Tolerance for the point-on-segment containment test (internal units).
///
/// A point is "on" a segment when the sum of its distances to the two
/// endpoints differs from the segment length by less than this. The test
/// tolerates floating-point slack; it is not a strict collinearity plus
/// bounds check.
pub const CONTAINMENT_TOL: f64 = 0.001;

/// Minimum 3D length for a bound segment. Shorter curves cannot carry a
/// wall or size an opening symbol.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// A bound 3D line segment.
///
/// Spatial queries against walls work on the z=0 projection; the start Z
/// ties a wall to its level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Point3<f64>,
    end: Point3<f64>,
}

impl Segment {
    /// Create a bound segment. Fails on degenerate (near-zero length)
    /// input, which the drafting host would reject as well.
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Result<Self> {
        let length = (end - start).norm();
        if length < MIN_SEGMENT_LENGTH {
            return Err(Error::DegenerateSegment(length));
        }
        Ok(Self { start, end })
    }

    /// Build a segment from a parsed record's already-converted endpoints.
    pub fn from_record(record: &GeometryRecord) -> Result<Self> {
        Self::new(to_point(record.start), to_point(record.end))
    }

    pub fn start(&self) -> Point3<f64> {
        self.start
    }

    pub fn end(&self) -> Point3<f64> {
        self.end
    }

    /// 3D length of the segment.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Length of the z=0 projection.
    pub fn length_2d(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// 3D midpoint.
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.start, &self.end)
    }

    /// Midpoint of the z=0 projection.
    pub fn midpoint_2d(&self) -> Point2<f64> {
        let mid = self.midpoint();
        Point2::new(mid.x, mid.y)
    }

    /// Axis-aligned bounds of the z=0 projection: (min_x, min_y, max_x, max_y).
    pub fn bounds_2d(&self) -> (f64, f64, f64, f64) {
        (
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Tolerant point-on-segment test on the z=0 projection.
    pub fn contains_2d(&self, point: &Point2<f64>) -> bool {
        let p0 = Point2::new(self.start.x, self.start.y);
        let p1 = Point2::new(self.end.x, self.end.y);
        let d0 = (point - p0).norm();
        let d1 = (point - p1).norm();
        (self.length_2d() - (d0 + d1)).abs() < CONTAINMENT_TOL
    }
}

fn to_point(p: Point3d) -> Point3<f64> {
    Point3::new(p.x, p.y, p.z)
}

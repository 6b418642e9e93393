// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BIM-Lite Geometry
//!
//! Line-segment geometry for building reconstruction: bound segments with
//! tolerant 2D containment tests, and a grid-backed spatial index used to
//! find the wall hosting an opening.

pub mod error;
pub mod index;
pub mod segment;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use index::SegmentIndex;
pub use segment::{Segment, CONTAINMENT_TOL};

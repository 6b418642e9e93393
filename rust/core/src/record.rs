// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed geometry records produced by the row parser

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D point in internal length units (simplified for serialization)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Building-element category, decided once at parse time.
///
/// Label matching is case-insensitive and tolerates surrounding
/// whitespace; anything that is not a wall, window, or door label maps
/// to no category and the row is dropped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Wall,
    Window,
    Door,
}

impl Category {
    /// Map a raw label column to a category.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("wall") {
            Some(Category::Wall)
        } else if label.eq_ignore_ascii_case("window") {
            Some(Category::Window)
        } else if label.eq_ignore_ascii_case("door") {
            Some(Category::Door)
        } else {
            None
        }
    }

    /// True for categories placed as openings hosted on a wall.
    pub fn is_opening(self) -> bool {
        matches!(self, Category::Window | Category::Door)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Wall => write!(f, "wall"),
            Category::Window => write!(f, "window"),
            Category::Door => write!(f, "door"),
        }
    }
}

/// One parsed input row: a categorized line segment.
///
/// `start`/`end` are already converted to internal units. `raw_start_z`
/// keeps the start Z exactly as it appeared in the row (meters): window
/// placement adds it verbatim as the sill offset, without conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryRecord {
    pub category: Category,
    pub start: Point3d,
    pub end: Point3d,
    pub raw_start_z: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_and_whitespace_insensitive() {
        assert_eq!(Category::from_label("wall"), Some(Category::Wall));
        assert_eq!(Category::from_label(" WALL "), Some(Category::Wall));
        assert_eq!(Category::from_label("Window"), Some(Category::Window));
        assert_eq!(Category::from_label("\tdoor"), Some(Category::Door));
    }

    #[test]
    fn unknown_labels_have_no_category() {
        assert_eq!(Category::from_label("roof"), None);
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("walls"), None);
    }

    #[test]
    fn openings_are_windows_and_doors() {
        assert!(Category::Window.is_opening());
        assert!(Category::Door.is_opening());
        assert!(!Category::Wall.is_opening());
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building model entities
//!
//! Levels and walls are created during phase 1 of a batch, symbols and
//! openings during phase 2; none of them is mutated after creation.
//! Identifiers are opaque handles issued by the [`ModelMutator`]
//! collaborator.
//!
//! [`ModelMutator`]: crate::store::ModelMutator

use bim_lite_core::Category;
use bim_lite_geometry::{Point3, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a building level.
    LevelId
);
entity_id!(
    /// Identifier of a wall.
    WallId
);
entity_id!(
    /// Identifier of an opening symbol (reusable window/door template).
    SymbolId
);
entity_id!(
    /// Identifier of a placed opening instance.
    OpeningId
);

/// A building level at a given elevation (internal units).
///
/// At most one level exists per elevation within [`LEVEL_TOL`].
///
/// [`LEVEL_TOL`]: crate::levels::LEVEL_TOL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub elevation: f64,
}

/// A wall bound to a level, located by its centerline segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub line: Segment,
    pub level: LevelId,
}

/// A named opening template, keyed by category and width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningSymbol {
    pub id: SymbolId,
    pub category: Category,
    pub width: f64,
    pub name: String,
}

/// A window or door placed on a host wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: OpeningId,
    pub wall: WallId,
    pub symbol: SymbolId,
    pub level: LevelId,
    pub position: Point3<f64>,
}

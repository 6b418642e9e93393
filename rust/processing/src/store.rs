// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator traits for the target model
//!
//! The pipeline reads pre-existing state through [`ModelStore`] once at
//! batch start, and commits creation intents through [`ModelMutator`].
//! Whatever transactional guarantees exist live behind the mutator; the
//! pipeline itself has no rollback semantics.

use crate::entities::{Level, LevelId, OpeningId, OpeningSymbol, SymbolId, Wall, WallId};
use crate::error::Result;
use bim_lite_core::Category;
use bim_lite_geometry::{Point3, Segment};

/// Read-only view of the target model, valid for the duration of a batch.
pub trait ModelStore {
    /// Existing levels, in the model's enumeration order.
    fn levels(&self) -> Vec<Level>;

    /// Existing walls, in the model's enumeration order. Order matters:
    /// hosting lookups resolve ties by first enumeration.
    fn walls(&self) -> Vec<Wall>;

    /// Existing opening symbols of one category. The first symbol is the
    /// duplication seed for new width variants.
    fn symbols(&self, category: Category) -> Vec<OpeningSymbol>;
}

/// The only way entities are committed to the target model.
///
/// Each method is a creation intent; the collaborator executes it and
/// returns the created entity's identifier. Any failure is fatal to the
/// batch.
pub trait ModelMutator {
    /// Create a level at exactly `elevation`.
    fn create_level(&mut self, elevation: f64) -> Result<LevelId>;

    /// Create a wall from a centerline bound to a level.
    fn create_wall(&mut self, line: Segment, level: LevelId) -> Result<WallId>;

    /// Duplicate the symbol `seed` under a new name, overriding its
    /// width, and make the copy usable for placement.
    fn duplicate_symbol(&mut self, seed: SymbolId, name: &str, width: f64) -> Result<SymbolId>;

    /// Place an opening instance on a host wall.
    fn place_opening(
        &mut self,
        wall: WallId,
        symbol: SymbolId,
        level: LevelId,
        position: Point3<f64>,
    ) -> Result<OpeningId>;
}

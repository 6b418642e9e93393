// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory model arena
//!
//! Implements both collaborator traits over plain vectors with a single
//! monotonically increasing id counter, the way the drafting host hands
//! out element ids. Used by the engine facade and throughout the tests;
//! its mutations never fail.

use crate::entities::{Level, LevelId, Opening, OpeningId, OpeningSymbol, SymbolId, Wall, WallId};
use crate::error::Result;
use crate::export::ModelContents;
use crate::store::{ModelMutator, ModelStore};
use bim_lite_core::{Category, METERS_TO_FEET};
use bim_lite_geometry::{Point3, Segment};
use serde::Serialize;

/// An owned building model holding every committed entity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InMemoryModel {
    next_id: u32,
    levels: Vec<Level>,
    walls: Vec<Wall>,
    symbols: Vec<OpeningSymbol>,
    openings: Vec<Opening>,
}

impl InMemoryModel {
    /// An empty model with no levels, walls, or symbol catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A model primed like an empty project template: one generic window
    /// symbol and one generic door symbol to duplicate new widths from.
    pub fn template() -> Self {
        let mut model = Self::new();
        model.add_symbol(Category::Window, 0.915 * METERS_TO_FEET, "M_Fixed 0915 x 1220");
        model.add_symbol(
            Category::Door,
            0.915 * METERS_TO_FEET,
            "M_Single-Flush 0915 x 2134",
        );
        model
    }

    /// Register a pre-existing symbol, as if loaded from a project
    /// template. Catalog order is insertion order; the first symbol of a
    /// category becomes its duplication seed.
    pub fn add_symbol(&mut self, category: Category, width: f64, name: &str) -> SymbolId {
        let id = SymbolId(self.bump());
        self.symbols.push(OpeningSymbol {
            id,
            category,
            width,
            name: name.to_string(),
        });
        id
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn symbols(&self) -> &[OpeningSymbol] {
        &self.symbols
    }

    pub fn openings(&self) -> &[Opening] {
        &self.openings
    }

    /// Borrowed view of everything, for export handoff.
    pub fn contents(&self) -> ModelContents<'_> {
        ModelContents {
            levels: &self.levels,
            walls: &self.walls,
            symbols: &self.symbols,
            openings: &self.openings,
        }
    }

    fn bump(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl ModelStore for InMemoryModel {
    fn levels(&self) -> Vec<Level> {
        self.levels.clone()
    }

    fn walls(&self) -> Vec<Wall> {
        self.walls.clone()
    }

    fn symbols(&self, category: Category) -> Vec<OpeningSymbol> {
        self.symbols
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }
}

impl ModelMutator for InMemoryModel {
    fn create_level(&mut self, elevation: f64) -> Result<LevelId> {
        let id = LevelId(self.bump());
        self.levels.push(Level { id, elevation });
        Ok(id)
    }

    fn create_wall(&mut self, line: Segment, level: LevelId) -> Result<WallId> {
        let id = WallId(self.bump());
        self.walls.push(Wall { id, line, level });
        Ok(id)
    }

    fn duplicate_symbol(&mut self, seed: SymbolId, name: &str, width: f64) -> Result<SymbolId> {
        // Seed ids come from this model's own catalog; an unknown id is a
        // caller bug, but fall back to the window category rather than
        // panic in a collaborator.
        let category = self
            .symbols
            .iter()
            .find(|s| s.id == seed)
            .map(|s| s.category)
            .unwrap_or(Category::Window);
        let id = SymbolId(self.bump());
        self.symbols.push(OpeningSymbol {
            id,
            category,
            width,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn place_opening(
        &mut self,
        wall: WallId,
        symbol: SymbolId,
        level: LevelId,
        position: Point3<f64>,
    ) -> Result<OpeningId> {
        let id = OpeningId(self.bump());
        self.openings.push(Opening {
            id,
            wall,
            symbol,
            level,
            position,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_across_entity_kinds() {
        let mut model = InMemoryModel::new();
        let level = model.create_level(0.0).unwrap();
        let symbol = model.add_symbol(Category::Door, 3.0, "seed");
        let wall = model
            .create_wall(
                Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0)).unwrap(),
                level,
            )
            .unwrap();
        assert_ne!(level.0, symbol.0);
        assert_ne!(symbol.0, wall.0);
    }

    #[test]
    fn template_has_one_seed_per_opening_category() {
        let model = InMemoryModel::template();
        assert_eq!(ModelStore::symbols(&model, Category::Window).len(), 1);
        assert_eq!(ModelStore::symbols(&model, Category::Door).len(), 1);
        assert!(ModelStore::levels(&model).is_empty());
    }

    #[test]
    fn duplicate_keeps_the_seed_category() {
        let mut model = InMemoryModel::template();
        let seed = ModelStore::symbols(&model, Category::Door)[0].id;
        let copy = model.duplicate_symbol(seed, "opening 4", 4.0).unwrap();
        let symbols = ModelStore::symbols(&model, Category::Door);
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[1].id, copy);
        assert_eq!(symbols[1].name, "opening 4");
    }
}

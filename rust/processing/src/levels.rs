// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Level resolution by elevation
//!
//! One level per distinct elevation: floating-point noise in input
//! elevations must never spawn near-duplicate levels.

use crate::entities::{Level, LevelId};
use crate::error::Result;
use crate::store::{ModelMutator, ModelStore};
use tracing::debug;

/// Two elevations within this distance (internal units) are the same level.
pub const LEVEL_TOL: f64 = 0.01;

/// Known levels of the model under construction.
#[derive(Debug, Clone, Default)]
pub struct LevelMap {
    levels: Vec<Level>,
    created: usize,
}

impl LevelMap {
    /// Load pre-existing levels from the store.
    pub fn from_store(store: &dyn ModelStore) -> Self {
        Self {
            levels: store.levels(),
            created: 0,
        }
    }

    /// Return the level at `elevation`, creating it on first sight.
    ///
    /// An existing level within [`LEVEL_TOL`] is reused; otherwise a
    /// level is created at exactly the requested elevation.
    pub fn resolve(
        &mut self,
        mutator: &mut dyn ModelMutator,
        elevation: f64,
    ) -> Result<LevelId> {
        if let Some(level) = self
            .levels
            .iter()
            .find(|l| (l.elevation - elevation).abs() < LEVEL_TOL)
        {
            return Ok(level.id);
        }

        let id = mutator.create_level(elevation)?;
        debug!(%id, elevation, "created level");
        self.levels.push(Level { id, elevation });
        self.created += 1;
        Ok(id)
    }

    /// Number of levels created by this batch (excludes pre-existing).
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryModel;

    #[test]
    fn nearby_elevations_share_a_level() {
        let mut model = InMemoryModel::new();
        let mut levels = LevelMap::from_store(&model);

        let first = levels.resolve(&mut model, 10.0).unwrap();
        let second = levels.resolve(&mut model, 10.009).unwrap();
        let third = levels.resolve(&mut model, 9.995).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(levels.created(), 1);
        assert_eq!(model.levels().len(), 1);
    }

    #[test]
    fn distinct_elevations_create_distinct_levels() {
        let mut model = InMemoryModel::new();
        let mut levels = LevelMap::from_store(&model);

        let ground = levels.resolve(&mut model, 0.0).unwrap();
        let upper = levels.resolve(&mut model, 0.01).unwrap();

        assert_ne!(ground, upper);
        assert_eq!(levels.created(), 2);
    }

    #[test]
    fn new_levels_sit_at_the_exact_elevation() {
        let mut model = InMemoryModel::new();
        let mut levels = LevelMap::from_store(&model);

        levels.resolve(&mut model, 3.14159).unwrap();
        assert_eq!(model.levels()[0].elevation, 3.14159);
    }

    #[test]
    fn pre_existing_levels_participate_in_dedup() {
        let mut model = InMemoryModel::new();
        let existing = model.create_level(5.0).unwrap();

        let mut levels = LevelMap::from_store(&model);
        let resolved = levels.resolve(&mut model, 5.004).unwrap();

        assert_eq!(resolved, existing);
        assert_eq!(levels.created(), 0);
    }
}

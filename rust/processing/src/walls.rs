// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall construction and hosting lookup
//!
//! Walls are built from wall-category records during phase 1, resolving
//! their level from the segment's start elevation. The set doubles as
//! the spatial lookup used by opening placement: pre-existing walls are
//! indexed before batch walls, in store enumeration order, so hosting
//! ties resolve exactly like a first-found scan over the model.

use crate::entities::{Wall, WallId};
use crate::error::Result;
use crate::levels::LevelMap;
use crate::store::{ModelMutator, ModelStore};
use bim_lite_core::GeometryRecord;
use bim_lite_geometry::{Point2, Segment, SegmentIndex};
use rustc_hash::FxHashMap;
use tracing::debug;

/// All walls known to the batch, with spatial lookup by plan point.
#[derive(Debug, Clone, Default)]
pub struct WallSet {
    walls: FxHashMap<WallId, Wall>,
    index: SegmentIndex<WallId>,
    created: usize,
}

impl WallSet {
    /// Load and index pre-existing walls from the store.
    pub fn from_store(store: &dyn ModelStore) -> Self {
        let mut set = Self::default();
        for wall in store.walls() {
            set.index.insert(wall.id, wall.line);
            set.walls.insert(wall.id, wall);
        }
        set
    }

    /// Build a wall from a wall-category record: resolve the level from
    /// the start-point elevation, commit the wall, index it.
    pub fn build(
        &mut self,
        levels: &mut LevelMap,
        mutator: &mut dyn ModelMutator,
        record: &GeometryRecord,
    ) -> Result<&Wall> {
        let line = Segment::from_record(record)?;
        let level = levels.resolve(mutator, line.start().z)?;
        let id = mutator.create_wall(line, level)?;
        debug!(%id, %level, "created wall");

        self.index.insert(id, line);
        self.created += 1;
        Ok(self.walls.entry(id).or_insert(Wall { id, line, level }))
    }

    /// The wall whose centerline contains `point` in plan, first created
    /// wins on overlap. `None` means no wall hosts that point.
    pub fn wall_at(&self, point: &Point2<f64>) -> Option<&Wall> {
        self.index.query(point).and_then(|id| self.walls.get(&id))
    }

    /// Number of walls created by this batch (excludes pre-existing).
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

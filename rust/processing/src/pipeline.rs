// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-phase batch pipeline
//!
//! Phase 1 turns every wall record into a wall (creating levels lazily);
//! phase 2 places every window/door record against the finished wall
//! set. Raw input order never matters: an opening row ahead of its host
//! wall's row still resolves, because no opening is considered until all
//! walls exist.

use crate::entities::LevelId;
use crate::error::Result;
use crate::levels::LevelMap;
use crate::openings;
use crate::store::{ModelMutator, ModelStore};
use crate::symbols::SymbolCatalog;
use crate::walls::WallSet;
use bim_lite_core::{Category, GeometryRecord};
use serde::Serialize;
use tracing::{debug, info};

/// What one batch run created and skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub records: usize,
    pub levels_created: usize,
    pub walls_created: usize,
    pub symbols_created: usize,
    pub openings_placed: usize,
    pub openings_skipped: usize,
    /// Level of the last wall built in this batch; the export target.
    pub target_level: Option<LevelId>,
}

/// Batch state snapshotted from a [`ModelStore`], consumed by one run.
///
/// Construction and execution are split so the same collaborator value
/// can serve as store and mutator:
///
/// ```rust
/// use bim_lite_core::parse_batch;
/// use bim_lite_processing::{BatchPipeline, InMemoryModel};
///
/// let records = parse_batch("header\nwall,,0,0,0,5,0,0\n");
/// let mut model = InMemoryModel::template();
/// let summary = BatchPipeline::from_store(&model)
///     .run(&records, &mut model)
///     .unwrap();
/// assert_eq!(summary.walls_created, 1);
/// ```
#[derive(Debug, Default)]
pub struct BatchPipeline {
    levels: LevelMap,
    walls: WallSet,
    symbols: SymbolCatalog,
}

impl BatchPipeline {
    /// Snapshot pre-existing levels, walls, and symbol catalogs.
    pub fn from_store(store: &dyn ModelStore) -> Self {
        Self {
            levels: LevelMap::from_store(store),
            walls: WallSet::from_store(store),
            symbols: SymbolCatalog::from_store(store),
        }
    }

    /// Process one batch of records to completion.
    ///
    /// Fatal errors (no symbol seed, collaborator failures) abort the
    /// remainder of the batch; whatever was committed before the failure
    /// stays committed, per the mutator's own guarantees.
    pub fn run(
        mut self,
        records: &[GeometryRecord],
        mutator: &mut dyn ModelMutator,
    ) -> Result<BatchSummary> {
        let mut target_level = None;

        // Phase 1: walls only.
        for record in records.iter().filter(|r| r.category == Category::Wall) {
            let wall = self.walls.build(&mut self.levels, mutator, record)?;
            target_level = Some(wall.level);
        }
        info!(
            walls = self.walls.created(),
            levels = self.levels.created(),
            "wall phase complete"
        );

        // Phase 2: openings, against the completed wall set.
        let mut placed = 0;
        let mut skipped = 0;
        for record in records.iter().filter(|r| r.category.is_opening()) {
            match openings::place(record, &self.walls, &mut self.symbols, mutator)? {
                Some(_) => placed += 1,
                None => skipped += 1,
            }
        }
        info!(placed, skipped, "opening phase complete");

        if skipped > 0 {
            debug!(skipped, "openings without a host wall were dropped");
        }

        Ok(BatchSummary {
            records: records.len(),
            levels_created: self.levels.created(),
            walls_created: self.walls.created(),
            symbols_created: self.symbols.created(),
            openings_placed: placed,
            openings_skipped: skipped,
            target_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryModel;
    use bim_lite_core::parse_batch;

    fn run(input: &str, model: &mut InMemoryModel) -> Result<BatchSummary> {
        let records = parse_batch(input);
        BatchPipeline::from_store(model).run(&records, model)
    }

    #[test]
    fn empty_batch_is_a_clean_no_op() {
        let mut model = InMemoryModel::template();
        let summary = run("header only\n", &mut model).unwrap();
        assert_eq!(summary, BatchSummary::default());
    }

    #[test]
    fn wall_then_window_end_to_end() {
        let mut model = InMemoryModel::template();
        let summary = run(
            "category,id,sx,sy,sz,ex,ey,ez\n\
             wall,,0,0,0,5,0,0\n\
             window,,2,0,1,3,0,1\n",
            &mut model,
        )
        .unwrap();

        assert_eq!(summary.walls_created, 1);
        assert_eq!(summary.levels_created, 1);
        assert_eq!(summary.openings_placed, 1);
        assert_eq!(summary.openings_skipped, 0);
        assert_eq!(summary.target_level, Some(model.levels()[0].id));
        assert_eq!(model.openings().len(), 1);
    }

    #[test]
    fn opening_rows_may_precede_their_host_wall_row() {
        let mut model = InMemoryModel::template();
        let summary = run(
            "header\n\
             window,,2,0,1,3,0,1\n\
             door,,1,0,0,1.9,0,0\n\
             wall,,0,0,0,5,0,0\n",
            &mut model,
        )
        .unwrap();

        assert_eq!(summary.openings_placed, 2);
        assert_eq!(summary.openings_skipped, 0);
    }

    #[test]
    fn hostless_door_is_counted_but_not_an_error() {
        let mut model = InMemoryModel::template();
        let summary = run(
            "header\n\
             wall,,0,0,0,5,0,0\n\
             door,,30,30,0,31,30,0\n",
            &mut model,
        )
        .unwrap();

        assert_eq!(summary.openings_placed, 0);
        assert_eq!(summary.openings_skipped, 1);
        assert!(model.openings().is_empty());
    }

    #[test]
    fn missing_seed_aborts_the_batch() {
        let mut model = InMemoryModel::new(); // no symbol catalog at all
        let err = run(
            "header\n\
             wall,,0,0,0,5,0,0\n\
             window,,2,0,1,3,0,1\n",
            &mut model,
        )
        .unwrap_err();

        assert!(matches!(err, crate::Error::NoSeedSymbol { .. }));
        // Phase 1 entities stay committed.
        assert_eq!(model.walls().len(), 1);
    }

    #[test]
    fn target_level_follows_the_last_wall() {
        let mut model = InMemoryModel::template();
        let summary = run(
            "header\n\
             wall,,0,0,0,5,0,0\n\
             wall,,0,0,4,5,0,4\n",
            &mut model,
        )
        .unwrap();

        let last_wall = model.walls().last().unwrap();
        assert_eq!(summary.target_level, Some(last_wall.level));
        assert_eq!(summary.levels_created, 2);
    }
}

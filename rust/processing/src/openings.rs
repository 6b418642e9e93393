// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening placement
//!
//! Runs in phase 2, against fully built wall geometry. An opening whose
//! midpoint lies on no wall is skipped; a category without a symbol seed
//! aborts the batch. Placement height starts from the host wall curve's
//! own base Z (a wall's base need not equal its level's nominal
//! elevation). Windows additionally float at a sill height: the row's
//! unconverted start Z is added verbatim. Doors sit at the wall base.
//! The asymmetry is intentional placement policy.

use crate::entities::OpeningId;
use crate::error::Result;
use crate::store::ModelMutator;
use crate::symbols::SymbolCatalog;
use crate::walls::WallSet;
use bim_lite_core::{Category, GeometryRecord};
use bim_lite_geometry::{Point3, Segment};
use tracing::debug;

/// Place one window/door record on its host wall.
///
/// Returns `Ok(None)` when no wall contains the segment midpoint; that is
/// expected input slack, not a failure.
pub fn place(
    record: &GeometryRecord,
    walls: &WallSet,
    symbols: &mut SymbolCatalog,
    mutator: &mut dyn ModelMutator,
) -> Result<Option<OpeningId>> {
    debug_assert!(record.category.is_opening());

    let line = Segment::from_record(record)?;
    let mid = line.midpoint_2d();

    let Some(wall) = walls.wall_at(&mid) else {
        debug!(category = %record.category, x = mid.x, y = mid.y, "no host wall, opening skipped");
        return Ok(None);
    };

    let symbol = symbols.resolve(mutator, record.category, line.length())?;

    let mut height = wall.line.start().z;
    if record.category == Category::Window {
        height += record.raw_start_z;
    }

    let position = Point3::new(mid.x, mid.y, height);
    let id = mutator.place_opening(wall.id, symbol, wall.level, position)?;
    debug!(%id, wall = %wall.id, %symbol, "placed opening");
    Ok(Some(id))
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BIM-Lite Processing
//!
//! Reconstruction pipeline turning parsed element records into a building
//! model: level resolution, wall construction, spatial wall lookup, and
//! window/door placement against reusable opening symbols.
//!
//! The pipeline never talks to a drafting host directly. Everything it
//! reads comes through [`ModelStore`], every entity it creates goes
//! through [`ModelMutator`], and the finished model is handed to an
//! [`ExportFacility`]. [`InMemoryModel`] implements the first two for
//! standalone use and tests.
//!
//! A batch is strictly two-phase: all wall records become walls before
//! any opening record is considered, because opening placement queries
//! the completed wall geometry.

pub mod entities;
pub mod error;
pub mod export;
pub mod levels;
pub mod memory;
pub mod openings;
pub mod pipeline;
pub mod store;
pub mod symbols;
pub mod walls;

pub use entities::{Level, LevelId, Opening, OpeningId, OpeningSymbol, SymbolId, Wall, WallId};
pub use error::{Error, Result};
pub use export::{ExportFacility, ExportOptions, ModelContents};
pub use levels::{LevelMap, LEVEL_TOL};
pub use memory::InMemoryModel;
pub use pipeline::{BatchPipeline, BatchSummary};
pub use store::{ModelMutator, ModelStore};
pub use symbols::{SymbolCatalog, WIDTH_TOL};
pub use walls::WallSet;

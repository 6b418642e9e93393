// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BIM-Lite Engine
//!
//! Stable facade over the reconstruction pipeline: one batch in (a CSV
//! string or file), one committed model plus summary out, with an
//! optional export handoff. Backend collaborators stay swappable; the
//! facade defaults to the in-memory model primed like an empty project
//! template.
//!
//! ```rust
//! use bim_lite_engine::ConversionEngine;
//!
//! let input = "category,id,sx,sy,sz,ex,ey,ez\n\
//!              wall,,0,0,0,5,0,0\n\
//!              window,,2,0,1,3,0,1\n";
//!
//! let conversion = ConversionEngine::new().convert(input).unwrap();
//! assert_eq!(conversion.summary.walls_created, 1);
//! assert_eq!(conversion.summary.openings_placed, 1);
//! ```

use bim_lite_core::parse_batch;
use bim_lite_processing::{
    BatchPipeline, BatchSummary, ExportFacility, ExportOptions, InMemoryModel,
};
use memmap2::Mmap;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine facade
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("batch file is not valid UTF-8")]
    InvalidEncoding,

    #[error(transparent)]
    Processing(#[from] bim_lite_processing::Error),
}

/// A completed batch: the committed model and what the run did.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub model: InMemoryModel,
    pub summary: BatchSummary,
}

impl Conversion {
    /// Hand the finished model to a drafting exporter, targeting the
    /// level of the last wall built.
    ///
    /// Returns `false` without calling the exporter when the batch built
    /// no wall (there is no plan view to draw).
    pub fn export_to(
        &self,
        facility: &mut dyn ExportFacility,
        options: &ExportOptions,
    ) -> Result<bool> {
        let Some(target) = self.summary.target_level else {
            warn!("batch built no walls; export skipped");
            return Ok(false);
        };
        facility.export(self.model.contents(), options, target)?;
        info!(%target, "model exported");
        Ok(true)
    }
}

/// One-batch conversion engine.
///
/// Holds the starting model state (pre-existing levels, walls, and the
/// symbol catalog with its duplication seeds) and is consumed by a
/// single conversion, matching the one-file-one-model batch contract.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    model: InMemoryModel,
}

impl ConversionEngine {
    /// Engine over a template model: empty geometry, one symbol seed per
    /// opening category.
    pub fn new() -> Self {
        Self {
            model: InMemoryModel::template(),
        }
    }

    /// Engine over caller-supplied starting state.
    pub fn with_model(model: InMemoryModel) -> Self {
        Self { model }
    }

    /// Convert one batch of rows (header line included).
    pub fn convert(mut self, input: &str) -> Result<Conversion> {
        let records = parse_batch(input);
        info!(records = records.len(), "batch parsed");

        let summary = BatchPipeline::from_store(&self.model).run(&records, &mut self.model)?;
        Ok(Conversion {
            model: self.model,
            summary,
        })
    }

    /// Convert a batch file without reading it into owned memory first.
    pub fn convert_file(self, path: impl AsRef<Path>) -> Result<Conversion> {
        let file = File::open(path)?;
        // Safety: mapped read-only and dropped before the handle.
        let mmap = unsafe { Mmap::map(&file)? };
        let input = std::str::from_utf8(&mmap).map_err(|_| Error::InvalidEncoding)?;
        self.convert(input)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bim_lite_core::Category;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a reconstruction batch.
///
/// Skippable conditions (malformed rows, openings without a host wall)
/// never surface here; they reduce coverage and are counted in the batch
/// summary instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A new symbol width was needed but the category has no symbol to
    /// duplicate from. Unlike a missing host wall, this means the target
    /// model lacks a template entirely and nothing in this category can
    /// ever be placed.
    #[error("no seed symbol for category '{category}' (requested width {width})")]
    NoSeedSymbol { category: Category, width: f64 },

    #[error("geometry error: {0}")]
    Geometry(#[from] bim_lite_geometry::Error),

    #[error("model mutator failure: {0}")]
    Mutator(String),

    #[error("export failure: {0}")]
    Export(String),
}

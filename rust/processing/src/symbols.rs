// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening symbol resolution
//!
//! Each opening needs a symbol (a reusable window/door template) whose
//! width matches the opening segment's length. Missing widths are
//! synthesized by duplicating the category's seed symbol under a
//! collision-free name; a category without any seed cannot place
//! openings at all, which is fatal.

use crate::entities::{OpeningSymbol, SymbolId};
use crate::error::{Error, Result};
use crate::store::{ModelMutator, ModelStore};
use bim_lite_core::Category;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Two widths within this distance (internal units) match the same symbol.
pub const WIDTH_TOL: f64 = 0.01;

/// Per-category symbol catalog: pre-existing symbols loaded once from the
/// store, plus the variants synthesized during the batch.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    by_category: FxHashMap<Category, Vec<OpeningSymbol>>,
    created: usize,
}

impl SymbolCatalog {
    /// Load the opening-category catalogs from the store.
    pub fn from_store(store: &dyn ModelStore) -> Self {
        let mut by_category = FxHashMap::default();
        for category in [Category::Window, Category::Door] {
            by_category.insert(category, store.symbols(category));
        }
        Self {
            by_category,
            created: 0,
        }
    }

    /// Return a symbol of `category` matching `width`, synthesizing one
    /// from the category's seed if no width matches.
    pub fn resolve(
        &mut self,
        mutator: &mut dyn ModelMutator,
        category: Category,
        width: f64,
    ) -> Result<SymbolId> {
        let entries = self.by_category.entry(category).or_default();

        if let Some(id) = entries
            .iter()
            .find(|s| (s.width - width).abs() < WIDTH_TOL)
            .map(|s| s.id)
        {
            return Ok(id);
        }

        let seed = entries
            .first()
            .map(|s| s.id)
            .ok_or(Error::NoSeedSymbol { category, width })?;

        let name = unique_name(entries, width);
        let id = mutator.duplicate_symbol(seed, &name, width)?;
        debug!(%id, %category, width, name = %name, "synthesized opening symbol");
        entries.push(OpeningSymbol {
            id,
            category,
            width,
            name,
        });
        self.created += 1;
        Ok(id)
    }

    /// Number of symbols synthesized by this batch.
    pub fn created(&self) -> usize {
        self.created
    }
}

/// Base name plus a `"(n)"` suffix, n from 1, until no catalog entry
/// carries the name.
fn unique_name(entries: &[OpeningSymbol], width: f64) -> String {
    let base = format!("opening {width}");
    let mut name = base.clone();
    let mut index = 1;
    while entries.iter().any(|s| s.name == name) {
        name = format!("{base}({index})");
        index += 1;
    }
    name
}

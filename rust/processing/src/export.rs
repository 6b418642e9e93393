// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export handoff
//!
//! The finished model is handed to a drafting-export collaborator
//! together with a fixed option set and a target level. The drawing
//! file's byte format belongs entirely to the collaborator.

use crate::entities::{Level, LevelId, Opening, OpeningSymbol, Wall};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Borrowed view of a finished model, as handed to the exporter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelContents<'a> {
    pub levels: &'a [Level],
    pub walls: &'a [Wall],
    pub symbols: &'a [OpeningSymbol],
    pub openings: &'a [Opening],
}

/// Color translation mode for exported entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    IndexColors,
    TrueColors,
}

/// How solid geometry is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidMode {
    Polymesh,
    Acis,
}

/// Target drawing file version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcadVersion {
    R2007,
    R2010,
    R2013,
}

/// Line weight scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineScaling {
    ModelSpace,
    PaperSpace,
    ViewScale,
}

/// Granularity of exported property overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropOverride {
    ByEntity,
    ByLayer,
}

/// Text fidelity in the exported drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextTreatment {
    Exact,
    Approximate,
}

/// Drafting export options.
///
/// The defaults are the converter's fixed production set; nothing in the
/// pipeline varies them per batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub colors: ColorMode,
    pub solids: SolidMode,
    pub file_version: AcadVersion,
    pub hide_scope_box: bool,
    pub hide_unreferenced_view_tags: bool,
    pub hide_reference_plane: bool,
    pub layer_mapping: String,
    pub line_scaling: LineScaling,
    pub prop_overrides: PropOverride,
    pub text_treatment: TextTreatment,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            colors: ColorMode::IndexColors,
            solids: SolidMode::Polymesh,
            file_version: AcadVersion::R2013,
            hide_scope_box: true,
            hide_unreferenced_view_tags: true,
            hide_reference_plane: true,
            layer_mapping: "AIA".to_string(),
            line_scaling: LineScaling::PaperSpace,
            prop_overrides: PropOverride::ByEntity,
            text_treatment: TextTreatment::Exact,
        }
    }
}

/// Drafting-export collaborator.
///
/// Consumes the finished model and produces the output drawing for the
/// target level's plan view. Failures are fatal to the batch.
pub trait ExportFacility {
    fn export(
        &mut self,
        model: ModelContents<'_>,
        options: &ExportOptions,
        target: LevelId,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_the_production_set() {
        let options = ExportOptions::default();
        assert_eq!(options.colors, ColorMode::IndexColors);
        assert_eq!(options.solids, SolidMode::Polymesh);
        assert_eq!(options.file_version, AcadVersion::R2013);
        assert!(options.hide_scope_box);
        assert!(options.hide_unreferenced_view_tags);
        assert!(options.hide_reference_plane);
        assert_eq!(options.layer_mapping, "AIA");
        assert_eq!(options.line_scaling, LineScaling::PaperSpace);
        assert_eq!(options.prop_overrides, PropOverride::ByEntity);
        assert_eq!(options.text_treatment, TextTreatment::Exact);
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = ExportOptions::default();
        let json = serde_json::to_string(&options).unwrap();
        let back: ExportOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}

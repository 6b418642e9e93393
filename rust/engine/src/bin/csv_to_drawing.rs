// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert a tabular element batch (CSV) into a building model
//! and write a drafting package (JSON) for downstream drawing export.
//!
//! Usage:
//!   csv-to-drawing <batch.csv> [options]

use bim_lite_engine::ConversionEngine;
use bim_lite_processing::{
    Error as ProcessingError, ExportFacility, ExportOptions, LevelId, ModelContents,
    Result as ProcessingResult,
};
use serde_json::json;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Exporter that writes the model and options as a JSON drafting package.
struct JsonDraftingExporter {
    path: PathBuf,
}

impl ExportFacility for JsonDraftingExporter {
    fn export(
        &mut self,
        model: ModelContents<'_>,
        options: &ExportOptions,
        target: LevelId,
    ) -> ProcessingResult<()> {
        let package = json!({
            "target_level": target,
            "options": options,
            "model": model,
        });
        let text = serde_json::to_string_pretty(&package)
            .map_err(|e| ProcessingError::Export(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| ProcessingError::Export(e.to_string()))
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let input_path = &args[1];
    let mut output_path = PathBuf::from("drawing_package.json");

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output_path = PathBuf::from(&args[i]);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("=== Tabular Batch to Drawing Package ===");
    println!();

    println!("[1/3] Reconstructing model from: {}", input_path);
    let conversion = ConversionEngine::new()
        .convert_file(input_path)
        .unwrap_or_else(|e| {
            eprintln!("Error: conversion failed: {}", e);
            std::process::exit(1);
        });

    let summary = &conversion.summary;
    println!("  Records:  {}", summary.records);
    println!(
        "  Walls:    {} (on {} new levels)",
        summary.walls_created, summary.levels_created
    );
    println!(
        "  Openings: {} placed, {} without a host wall",
        summary.openings_placed, summary.openings_skipped
    );
    if summary.symbols_created > 0 {
        println!("  Symbols:  {} new width variants", summary.symbols_created);
    }

    println!("[2/3] Exporting to: {}", output_path.display());
    let mut exporter = JsonDraftingExporter {
        path: output_path.clone(),
    };
    let exported = conversion
        .export_to(&mut exporter, &ExportOptions::default())
        .unwrap_or_else(|e| {
            eprintln!("Error: export failed: {}", e);
            std::process::exit(1);
        });

    println!("[3/3] Done.");
    if !exported {
        println!("  No walls were built; no drawing package written.");
    }
}

fn print_usage() {
    println!("Usage: csv-to-drawing <batch.csv> [options]");
    println!();
    println!("Options:");
    println!("  --output <path>   Drafting package path (default: drawing_package.json)");
    println!();
    println!("Input format: CSV with a header row, then");
    println!("  category,<unused>,start_x,start_y,start_z,end_x,end_y,end_z");
    println!("with category one of wall/window/door and coordinates in meters.");
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BIM-Lite Core Parser
//!
//! Parser for the flat tabular building-element format: one element per
//! comma-separated row, converted into typed [`GeometryRecord`]s.
//!
//! ## Overview
//!
//! - **Row parsing**: category label + six coordinate fields per row
//! - **Unit conversion**: meters → internal units, applied exactly once
//!   at parse time using [fast-float](https://docs.rs/fast-float)
//! - **Skip policy**: malformed or unrecognized rows yield no record and
//!   never abort a batch
//!
//! ## Quick Start
//!
//! ```rust
//! use bim_lite_core::{parse_batch, Category};
//!
//! let input = "category,id,sx,sy,sz,ex,ey,ez\n\
//!              wall,,0,0,0,5,0,0\n\
//!              window,,2,0,1,3,0,1\n";
//!
//! let records = parse_batch(input);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].category, Category::Wall);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for parsed records

pub mod parser;
pub mod record;
pub mod units;

pub use parser::{parse_batch, parse_row};
pub use record::{Category, GeometryRecord, Point3d};
pub use units::METERS_TO_FEET;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row parser for the tabular element format
//!
//! Format: `category,<unused>,start_x,start_y,start_z,end_x,end_y,end_z`
//! with coordinates in meters. Rows that cannot be parsed are skipped,
//! never reported as errors; bad input reduces coverage, not success.

use crate::record::{Category, GeometryRecord, Point3d};
use crate::units::to_internal;

/// Number of columns a row must have to be considered at all.
const MIN_COLUMNS: usize = 8;

/// Parse a single coordinate field (meters).
///
/// Mirrors lenient numeric parsing: surrounding whitespace is fine,
/// anything else is a rejection.
#[inline]
fn parse_coord(field: &str) -> Option<f64> {
    fast_float::parse(field.trim()).ok()
}

/// Parse one input row into a [`GeometryRecord`].
///
/// Returns `None` when the row is malformed (too few columns, a
/// non-numeric coordinate) or its category label is unrecognized.
/// Coordinates are converted meters → internal units here and only here.
pub fn parse_row(row: &str) -> Option<GeometryRecord> {
    let fields: Vec<&str> = row.split(',').collect();
    if fields.len() < MIN_COLUMNS {
        return None;
    }

    let category = Category::from_label(fields[0])?;

    let start_x = parse_coord(fields[2])?;
    let start_y = parse_coord(fields[3])?;
    let start_z = parse_coord(fields[4])?;
    let end_x = parse_coord(fields[5])?;
    let end_y = parse_coord(fields[6])?;
    let end_z = parse_coord(fields[7])?;

    Some(GeometryRecord {
        category,
        start: Point3d::new(
            to_internal(start_x),
            to_internal(start_y),
            to_internal(start_z),
        ),
        end: Point3d::new(to_internal(end_x), to_internal(end_y), to_internal(end_z)),
        raw_start_z: start_z,
    })
}

/// Parse a whole batch of rows.
///
/// The first line is a header and is always skipped. Unparsable rows are
/// dropped silently per the batch skip policy.
pub fn parse_batch(input: &str) -> Vec<GeometryRecord> {
    input.lines().skip(1).filter_map(parse_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::METERS_TO_FEET;

    #[test]
    fn coordinates_are_converted_exactly_once() {
        let record = parse_row("wall,,1,2,3,4,5,6").expect("valid row");
        assert_eq!(record.category, Category::Wall);
        assert_eq!(record.start.x, 1.0 * METERS_TO_FEET);
        assert_eq!(record.start.y, 2.0 * METERS_TO_FEET);
        assert_eq!(record.start.z, 3.0 * METERS_TO_FEET);
        assert_eq!(record.end.x, 4.0 * METERS_TO_FEET);
        assert_eq!(record.end.y, 5.0 * METERS_TO_FEET);
        assert_eq!(record.end.z, 6.0 * METERS_TO_FEET);
    }

    #[test]
    fn raw_start_z_is_kept_unconverted() {
        let record = parse_row("window,,2,0,1.5,3,0,1.5").expect("valid row");
        assert_eq!(record.raw_start_z, 1.5);
        assert_eq!(record.start.z, 1.5 * METERS_TO_FEET);
    }

    #[test]
    fn non_numeric_coordinate_rejects_the_row() {
        assert!(parse_row("wall,,a,0,0,5,0,0").is_none());
        assert!(parse_row("wall,,0,0,0,5,0,?").is_none());
        // Rejection is idempotent: same row, same outcome.
        assert!(parse_row("wall,,a,0,0,5,0,0").is_none());
    }

    #[test]
    fn short_rows_are_rejected() {
        assert!(parse_row("wall,,0,0,0,5,0").is_none());
        assert!(parse_row("wall").is_none());
        assert!(parse_row("").is_none());
    }

    #[test]
    fn unrecognized_category_yields_no_record() {
        assert!(parse_row("roof,,0,0,0,5,0,0").is_none());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let record = parse_row("door,,0,0,0,1,0,0,comment,more").expect("valid row");
        assert_eq!(record.category, Category::Door);
    }

    #[test]
    fn whitespace_in_fields_is_tolerated() {
        let record = parse_row(" Wall ,, 0 , 0 , 0 , 5 , 0 , 0 ").expect("valid row");
        assert_eq!(record.category, Category::Wall);
        assert_eq!(record.end.x, 5.0 * METERS_TO_FEET);
    }

    #[test]
    fn batch_skips_header_and_bad_rows() {
        let input = "category,id,sx,sy,sz,ex,ey,ez\n\
                     wall,,0,0,0,5,0,0\n\
                     wall,,bad,0,0,5,0,0\n\
                     \n\
                     window,,2,0,1,3,0,1\n";
        let records = parse_batch(input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Wall);
        assert_eq!(records[1].category, Category::Window);
    }

    #[test]
    fn header_is_skipped_even_if_parseable() {
        // A data-shaped first line is still treated as the header.
        let input = "wall,,0,0,0,5,0,0\nwall,,0,0,3,5,0,3\n";
        let records = parse_batch(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw_start_z, 3.0);
    }
}

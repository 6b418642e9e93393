// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversion for tabular input
//!
//! Input rows carry coordinates in meters; the reconstruction model works
//! in feet (the drafting host's internal length unit). The conversion is
//! applied once, at parse time, and nowhere else.

/// Meters → feet, the model's internal length unit.
pub const METERS_TO_FEET: f64 = 3.28084;

/// Convert a length or coordinate from input meters to internal units.
#[inline]
pub fn to_internal(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

//! Physical constants and unit conversions

/// Earth radius used for all great-circle math (meters)
pub const EARTH_RADIUS_M: f64 = 6378137.0;

/// Meters to nautical miles
pub const METERS_TO_NAUTICAL_MILES: f64 = 0.00053995680345572;

/// Meters to feet
pub const METERS_TO_FEET: f64 = 3.28084;

/// Classification tag carried by airborne objects
pub const TAG_AIR: &str = "Air";

/// Classification tag carried by ground units
pub const TAG_GROUND: &str = "Ground";

/// Classification tag carried by bullseye reference points
pub const TAG_BULLSEYE: &str = "Bullseye";

/// Classification tag carried by descending personnel
pub const TAG_PARACHUTIST: &str = "Parachutist";

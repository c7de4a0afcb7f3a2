//! Fixed constants of the gear/speed/cadence wheel
//!
//! Domains, transforms and alignment offsets are part of the instrument's
//! design and are not user configurable.

use std::f64::consts::PI;

// =============================================================================
// Physical Assumptions
// =============================================================================

/// Wheel rollout in metres per revolution (700x20c wheel and tyre)
pub const ROLLOUT_M: f64 = 2.090;

/// Wheel diameter in inches used by the gear-inch convention
pub const WHEEL_INCHES: f64 = 27.0;

/// km/h per m/s
pub const KMH_PER_MS: f64 = 3.6;

/// Seconds per minute, converts rpm to hertz
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// =============================================================================
// Axis Domains (inclusive bounds)
// =============================================================================

pub const GEAR_INCHES_DOMAIN: (i32, i32) = (68, 112);
pub const CHAINRING_DOMAIN: (i32, i32) = (42, 52);
/// Cogs run from the largest to the smallest
pub const COG_DOMAIN: (i32, i32) = (18, 12);
pub const SPEED_DOMAIN: (i32, i32) = (35, 55);
pub const CADENCE_DOMAIN: (i32, i32) = (80, 150);

// =============================================================================
// Alignment
// =============================================================================

/// Angle covered by the full gear-inch scale. Fixes the radians per log unit
/// shared by every axis.
pub const GEAR_INCHES_SPAN_RAD: f64 = 0.82 * PI;

/// Rotation of the chainring scale start
pub const CHAINRING_OFFSET_RAD: f64 = 0.525 * PI;

/// Rotation of the speed scale start
pub const SPEED_OFFSET_RAD: f64 = -0.32 * PI;

/// Chainring entry tied to the gear-inch zero (47t)
pub const CHAINRING_REFERENCE_INDEX: usize = 5;

/// Cog entry the speed and cadence scales are referenced to (15t)
pub const COG_REFERENCE_INDEX: usize = 3;

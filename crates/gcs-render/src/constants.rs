//! Drawing constants for the wheel layers
//!
//! Lengths are in disc units: 1.0 is the disc drawing size, origin at the
//! centre of the disc.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

pub const DEFAULT_PAGE_SIZE_MM: f32 = 100.0;
pub const DEFAULT_DISC_SIZE_MM: f32 = 80.0;

// =============================================================================
// Cut Lines
// =============================================================================

pub const CUT_LINE_WIDTH: f64 = 0.001;

/// Middle disc edge
pub const MIDDLE_CUT_RADIUS: f64 = 0.393;

/// Top and base disc edge
pub const OUTER_CUT_RADIUS: f64 = 0.49;

/// Centre pin mark
pub const CENTRE_RADIUS: f64 = 0.01;
pub const CENTRE_CROSS_HALF: f64 = 0.015;

// =============================================================================
// Scales
// =============================================================================

pub const SCALE_LINE_WIDTH: f64 = 0.002;

/// Radius of the base disc scales (gear inches, chainring, speed)
pub const BASE_SCALE_RADIUS: f64 = 0.4;
pub const BASE_MAJOR_END: f64 = 0.42;
pub const BASE_MINOR_END: f64 = 0.41;

/// Radius of the middle and top disc scales (cogs, cadence)
pub const INNER_SCALE_RADIUS: f64 = 0.386;
pub const INNER_MAJOR_END: f64 = 0.36;
pub const CADENCE_MINOR_END: f64 = 0.373;

/// "GR" tie mark on the top disc
pub const GEAR_MARK_START: f64 = 0.31;
pub const GEAR_MARK_END: f64 = 0.28;

/// Speed reading window on the top disc
pub const WINDOW_OUTER: f64 = 0.48;
pub const WINDOW_HALF_HEIGHT: f64 = 0.018;

// =============================================================================
// Labels
// =============================================================================

pub const DEFAULT_LABEL_SIZE: f64 = 0.02;

/// Gap between an outward tick end and its label
pub const OUTSIDE_LABEL_GAP: f64 = 0.01;

/// Offset back from an inward tick end where the label starts
pub const INSIDE_LABEL_OFFSET: f64 = 0.04;

/// Glyph height of label text relative to font size (Helvetica-Bold digits)
pub const LABEL_HEIGHT_RATIO: f64 = 0.72;

/// Labels sit this fraction of their height below the tick axis
pub const LABEL_BASELINE_RATIO: f64 = 0.3;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Largest sweep drawn with a single cubic Bezier segment
pub const MAX_ARC_SEGMENT: f64 = std::f64::consts::FRAC_PI_2;

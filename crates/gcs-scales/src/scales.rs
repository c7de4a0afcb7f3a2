//! Scale placement for the gear/speed/cadence wheel
//!
//! Every quantity is placed on one logarithmic circular axis. The radians per
//! log unit come from the gear-inch span; each axis then gets its own offset so
//! that lining up two scales solves
//!
//! ```text
//! gear inches = 27 x chainring teeth / cog teeth
//! speed       = rollout x cadence x gear ratio
//! ```
//!
//! The computation runs as a fixed sequence of phases. Later phases only read
//! the immutable output of earlier ones.

use crate::constants::*;
use crate::types::*;

/// Raw value and its logarithm, before any angular placement
#[derive(Debug, Clone, Copy)]
struct LogEntry {
    raw: i32,
    transformed: Option<f64>,
    log_value: f64,
}

/// Output of the gear-inch phase, consumed by every later phase
#[derive(Debug, Clone, Copy)]
struct GearFrame {
    modulus: f64,
    zero_angle: f64,
}

/// Output of the chainring phase
#[derive(Debug, Clone, Copy)]
struct ChainringRefs {
    reference_angle: f64,
    reference_scaled: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleModel;

impl ScaleModel {
    pub fn new() -> Self {
        Self
    }

    /// Compute every scale of the wheel.
    ///
    /// With the built-in domains this never fails; errors only surface if a
    /// domain is widened past what the logarithm accepts.
    pub fn compute(&self) -> Result<ScaleResult> {
        compute_scales(Axis::domain)
    }
}

fn compute_scales(domain: impl Fn(Axis) -> (i32, i32)) -> Result<ScaleResult> {
    let gear_log = log_series(Axis::GearInches, domain(Axis::GearInches))?;
    let frame = gear_frame(&gear_log)?;
    log::debug!(
        "modulus {:.6} rad/log unit, zero angle {:.6} rad",
        frame.modulus,
        frame.zero_angle
    );

    let gear_inches = place(Axis::GearInches, &gear_log, frame.modulus, -frame.zero_angle);

    let chainring_log = log_series(Axis::ChainringTeeth, domain(Axis::ChainringTeeth))?;
    let chainring = place(
        Axis::ChainringTeeth,
        &chainring_log,
        frame.modulus,
        -CHAINRING_OFFSET_RAD,
    );
    let cr = chainring_refs(&chainring)?;

    let cog_zero = frame.zero_angle - cr.reference_scaled;
    let cog_log = log_series(Axis::CogTeeth, domain(Axis::CogTeeth))?;
    let cogs = place(Axis::CogTeeth, &cog_log, frame.modulus, -cog_zero);
    let sp_reference_angle = cogs
        .get(COG_REFERENCE_INDEX)
        .map(|p| p.final_angle)
        .ok_or(ScaleError::MissingReference {
            axis: Axis::CogTeeth,
            index: COG_REFERENCE_INDEX,
        })?;

    let speed_log = log_series(Axis::Speed, domain(Axis::Speed))?;
    let speed = place(Axis::Speed, &speed_log, frame.modulus, -SPEED_OFFSET_RAD);

    let cadence_offset = frame.zero_angle - SPEED_OFFSET_RAD;
    let cadence_log = log_series(Axis::Cadence, domain(Axis::Cadence))?;
    let cadence = place(
        Axis::Cadence,
        &cadence_log,
        frame.modulus,
        cadence_offset + sp_reference_angle,
    );

    log::debug!(
        "CR reference {:.6} rad, GR reference {:.6} rad",
        cr.reference_angle,
        sp_reference_angle
    );

    Ok(ScaleResult {
        gear_inches,
        chainring,
        cogs,
        speed,
        cadence,
        modulus: frame.modulus,
        zero_angle: frame.zero_angle,
        cr_reference_angle: cr.reference_angle,
        sp_reference_angle,
    })
}

/// Raw values from `first` to `last` inclusive, stepping towards `last`
fn raw_values((first, last): (i32, i32)) -> Vec<i32> {
    if first <= last {
        (first..=last).collect()
    } else {
        (last..=first).rev().collect()
    }
}

fn log_series(axis: Axis, domain: (i32, i32)) -> Result<Vec<LogEntry>> {
    raw_values(domain)
        .into_iter()
        .map(|raw| {
            let transformed = axis.transform(raw);
            let value = transformed.unwrap_or(f64::from(raw));
            if !(value.is_finite() && value > 0.0) {
                return Err(ScaleError::NonPositive { axis, raw, value });
            }
            Ok(LogEntry {
                raw,
                transformed,
                log_value: value.ln(),
            })
        })
        .collect()
}

fn gear_frame(gear_log: &[LogEntry]) -> Result<GearFrame> {
    let (first, last) = match (gear_log.first(), gear_log.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ScaleError::DegenerateSpan),
    };
    let span = last.log_value - first.log_value;
    if span == 0.0 {
        return Err(ScaleError::DegenerateSpan);
    }
    let modulus = GEAR_INCHES_SPAN_RAD / span;
    Ok(GearFrame {
        modulus,
        zero_angle: modulus * first.log_value,
    })
}

fn chainring_refs(chainring: &[ScalePoint]) -> Result<ChainringRefs> {
    let reference = chainring
        .get(CHAINRING_REFERENCE_INDEX)
        .ok_or(ScaleError::MissingReference {
            axis: Axis::ChainringTeeth,
            index: CHAINRING_REFERENCE_INDEX,
        })?;
    Ok(ChainringRefs {
        reference_angle: reference.final_angle,
        reference_scaled: reference.scaled_angle,
    })
}

fn place(axis: Axis, entries: &[LogEntry], modulus: f64, offset: f64) -> Vec<ScalePoint> {
    let modulus = if axis.is_inverted() { -modulus } else { modulus };
    entries
        .iter()
        .map(|entry| {
            let scaled_angle = modulus * entry.log_value;
            ScalePoint {
                raw: entry.raw,
                transformed: entry.transformed,
                log_value: entry.log_value,
                scaled_angle,
                final_angle: scaled_angle + offset,
            }
        })
        .collect()
}

use crate::constants::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("{axis:?} value {raw} maps to {value}, which has no logarithm")]
    NonPositive { axis: Axis, raw: i32, value: f64 },
    #[error("Gear-inch domain spans no logarithmic range")]
    DegenerateSpan,
    #[error("{axis:?} series has no reference entry at index {index}")]
    MissingReference { axis: Axis, index: usize },
}

pub type Result<T> = std::result::Result<T, ScaleError>;

/// The five quantities printed on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    GearInches,
    ChainringTeeth,
    CogTeeth,
    Speed,
    Cadence,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::GearInches,
        Axis::ChainringTeeth,
        Axis::CogTeeth,
        Axis::Speed,
        Axis::Cadence,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Axis::GearInches => "Gear inches",
            Axis::ChainringTeeth => "Chainring teeth",
            Axis::CogTeeth => "Cog teeth",
            Axis::Speed => "Speed (km/h)",
            Axis::Cadence => "Cadence (rpm)",
        }
    }

    /// Inclusive (first, last) raw values, in generation order
    pub fn domain(self) -> (i32, i32) {
        match self {
            Axis::GearInches => GEAR_INCHES_DOMAIN,
            Axis::ChainringTeeth => CHAINRING_DOMAIN,
            Axis::CogTeeth => COG_DOMAIN,
            Axis::Speed => SPEED_DOMAIN,
            Axis::Cadence => CADENCE_DOMAIN,
        }
    }

    /// Physical quantity whose logarithm is placed on the dial.
    ///
    /// Returns `None` for tooth counts, where the raw value is used directly.
    pub fn transform(self, raw: i32) -> Option<f64> {
        let value = f64::from(raw);
        match self {
            Axis::GearInches => Some(value / WHEEL_INCHES),
            Axis::ChainringTeeth | Axis::CogTeeth => None,
            Axis::Speed => Some(value / (KMH_PER_MS * ROLLOUT_M)),
            Axis::Cadence => Some(value / SECONDS_PER_MINUTE),
        }
    }

    /// Cogs turn the opposite way: more teeth means a lower ratio
    pub fn is_inverted(self) -> bool {
        matches!(self, Axis::CogTeeth)
    }
}

/// One tick position on a scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalePoint {
    pub raw: i32,
    pub transformed: Option<f64>,
    pub log_value: f64,
    pub scaled_angle: f64,
    /// Placed angle on the dial in radians, unbounded
    pub final_angle: f64,
}

impl ScalePoint {
    pub fn final_angle_degrees(&self) -> f64 {
        self.final_angle.to_degrees()
    }
}

/// Every scale of the wheel, computed once per run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleResult {
    pub gear_inches: Vec<ScalePoint>,
    pub chainring: Vec<ScalePoint>,
    pub cogs: Vec<ScalePoint>,
    pub speed: Vec<ScalePoint>,
    pub cadence: Vec<ScalePoint>,
    /// Radians per unit of natural log, shared by all axes
    pub modulus: f64,
    /// Scaled angle of the first gear-inch entry, the dial's angular zero
    pub zero_angle: f64,
    /// Chainring the gear-inch zero is tied to ("CR" mark)
    pub cr_reference_angle: f64,
    /// Cog the speed and cadence scales are tied to ("GR" mark)
    pub sp_reference_angle: f64,
}

impl ScaleResult {
    pub fn series(&self, axis: Axis) -> &[ScalePoint] {
        match axis {
            Axis::GearInches => &self.gear_inches,
            Axis::ChainringTeeth => &self.chainring,
            Axis::CogTeeth => &self.cogs,
            Axis::Speed => &self.speed,
            Axis::Cadence => &self.cadence,
        }
    }

    pub fn point(&self, axis: Axis, raw: i32) -> Option<&ScalePoint> {
        self.series(axis).iter().find(|p| p.raw == raw)
    }

    /// (first, last) final angles of a series, used for the scale's arc
    pub fn angular_range(&self, axis: Axis) -> Option<(f64, f64)> {
        let series = self.series(axis);
        Some((series.first()?.final_angle, series.last()?.final_angle))
    }
}

//! Query-time configuration shared by the routing and direction crates.

use crate::{NavError, NavResult, EARTH_RADIUS_MILES};

/// Top-level routing configuration.
///
/// Typically loaded from a TOML/JSON file by the serving application and
/// handed to `MapServiceBuilder::config`.  All fields have sensible defaults;
/// call [`validate`](Self::validate) after deserialising.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Sphere radius for all distance computations.  Default: 3963 miles.
    pub earth_radius_miles: f64,

    /// Maximum number of vertices one shortest-path query may close.
    /// `None` disables the budget.  Default: one million.
    pub max_expansions: Option<usize>,

    /// Turns with `|Δ|` below this are "Go straight".  Default: 15°.
    pub straight_threshold_deg: f64,

    /// Turns with `|Δ|` below this (and not straight) are slight turns.
    /// Default: 30°.
    pub slight_threshold_deg: f64,

    /// Turns with `|Δ|` below this (and not slight) are ordinary turns;
    /// anything at or above it is sharp.  Default: 100°.
    pub turn_threshold_deg: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            earth_radius_miles:     EARTH_RADIUS_MILES,
            max_expansions:         Some(1_000_000),
            straight_threshold_deg: 15.0,
            slight_threshold_deg:   30.0,
            turn_threshold_deg:     100.0,
        }
    }
}

impl NavConfig {
    /// Reject configurations that would make routing or classification
    /// meaningless.
    pub fn validate(&self) -> NavResult<()> {
        if !(self.earth_radius_miles.is_finite() && self.earth_radius_miles > 0.0) {
            return Err(NavError::Config(format!(
                "earth_radius_miles must be positive, got {}",
                self.earth_radius_miles
            )));
        }
        if self.max_expansions == Some(0) {
            return Err(NavError::Config("max_expansions must be at least 1".into()));
        }
        let bands = [
            self.straight_threshold_deg,
            self.slight_threshold_deg,
            self.turn_threshold_deg,
        ];
        let increasing = bands[0] > 0.0 && bands.windows(2).all(|w| w[0] < w[1]);
        if !increasing || bands[2] > 180.0 {
            return Err(NavError::Config(format!(
                "turn thresholds must satisfy 0 < straight < slight < turn <= 180, got {bands:?}"
            )));
        }
        Ok(())
    }
}

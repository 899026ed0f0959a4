//! Turn-by-turn maneuver type and its text form.
//!
//! A maneuver renders as
//!
//! ```text
//! <Verb> on <Way> and continue for <distance:.3> miles.
//! ```
//!
//! and [`FromStr`] accepts exactly that grammar, so
//! `m.to_string().parse::<Maneuver>() == Ok(m)` whenever `m`'s distance is
//! already rounded to three decimals.

use std::fmt;
use std::str::FromStr;

use nav_core::NavConfig;

use crate::ManeuverParseError;

/// Way name used when a segment has no path name.
pub const UNNAMED_WAY: &str = "";

const WAY_SEPARATOR: &str = " on ";
const DISTANCE_SEPARATOR: &str = " and continue for ";
const SUFFIX: &str = " miles.";

/// What the traveller does at the start of a maneuver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManeuverKind {
    Start,
    Straight,
    SlightLeft,
    SlightRight,
    TurnRight,
    TurnLeft,
    SharpLeft,
    SharpRight,
}

impl ManeuverKind {
    pub const ALL: [ManeuverKind; 8] = [
        ManeuverKind::Start,
        ManeuverKind::Straight,
        ManeuverKind::SlightLeft,
        ManeuverKind::SlightRight,
        ManeuverKind::TurnRight,
        ManeuverKind::TurnLeft,
        ManeuverKind::SharpLeft,
        ManeuverKind::SharpRight,
    ];

    /// The verb phrase this kind renders as.
    pub const fn verb(self) -> &'static str {
        match self {
            ManeuverKind::Start       => "Start",
            ManeuverKind::Straight    => "Go straight",
            ManeuverKind::SlightLeft  => "Slight left",
            ManeuverKind::SlightRight => "Slight right",
            ManeuverKind::TurnRight   => "Turn right",
            ManeuverKind::TurnLeft    => "Turn left",
            ManeuverKind::SharpLeft   => "Sharp left",
            ManeuverKind::SharpRight  => "Sharp right",
        }
    }

    pub fn from_verb(verb: &str) -> Option<ManeuverKind> {
        Self::ALL.into_iter().find(|k| k.verb() == verb)
    }

    /// Classify a signed heading change normalised to `(-180, 180]`.
    /// Positive deltas turn right.
    pub fn classify(delta_deg: f64, config: &NavConfig) -> ManeuverKind {
        let magnitude = delta_deg.abs();
        let right = delta_deg > 0.0;
        if magnitude < config.straight_threshold_deg {
            ManeuverKind::Straight
        } else if magnitude < config.slight_threshold_deg {
            if right { ManeuverKind::SlightRight } else { ManeuverKind::SlightLeft }
        } else if magnitude < config.turn_threshold_deg {
            if right { ManeuverKind::TurnRight } else { ManeuverKind::TurnLeft }
        } else if right {
            ManeuverKind::SharpRight
        } else {
            ManeuverKind::SharpLeft
        }
    }
}

impl fmt::Display for ManeuverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// One instruction of a route description.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maneuver {
    pub kind:           ManeuverKind,
    /// Way travelled on; [`UNNAMED_WAY`] for nameless segments.
    pub way:            String,
    pub distance_miles: f64,
}

impl Maneuver {
    pub fn new(kind: ManeuverKind, way: impl Into<String>, distance_miles: f64) -> Self {
        Self { kind, way: way.into(), distance_miles }
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{WAY_SEPARATOR}{}{DISTANCE_SEPARATOR}{:.3}{SUFFIX}",
            self.kind.verb(),
            self.way,
            self.distance_miles,
        )
    }
}

impl FromStr for Maneuver {
    type Err = ManeuverParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grammar = || ManeuverParseError::Grammar(s.to_owned());

        let body = s.strip_suffix(SUFFIX).ok_or_else(grammar)?;
        // Split on the last separator: way names may contain the phrase,
        // distances never do.
        let (head, distance) = body.rsplit_once(DISTANCE_SEPARATOR).ok_or_else(grammar)?;

        let (kind, way) = ManeuverKind::ALL
            .into_iter()
            .find_map(|k| {
                head.strip_prefix(k.verb())
                    .and_then(|rest| rest.strip_prefix(WAY_SEPARATOR))
                    .map(|way| (k, way))
            })
            .ok_or_else(|| match head.split_once(WAY_SEPARATOR) {
                Some((verb, _)) => ManeuverParseError::UnknownVerb(verb.to_owned()),
                None => grammar(),
            })?;

        let well_formed = !distance.is_empty()
            && distance.chars().all(|c| c.is_ascii_digit() || c == '.');
        let distance_miles = well_formed
            .then(|| distance.parse::<f64>().ok())
            .flatten()
            .ok_or_else(|| ManeuverParseError::Distance(distance.to_owned()))?;

        Ok(Maneuver { kind, way: way.to_owned(), distance_miles })
    }
}

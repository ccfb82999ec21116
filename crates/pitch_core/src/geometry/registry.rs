//! Provider coordinate-system registry
//!
//! Pure lookup table from a provider identifier to the coordinate convention
//! that provider ships its data in. No state, no registration at runtime:
//! custom conventions go through [`CoordinateSystem::from_parts`] instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

use super::{CoordinateSystem, Dimension, Origin, PitchDimensions, VerticalOrientation};

/// Known match data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Metrica,
    Tracab,
    Opta,
    #[serde(rename = "statsbomb")]
    StatsBomb,
    Wyscout,
    SecondSpectrum,
    #[serde(rename = "skillcorner")]
    SkillCorner,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Metrica => "metrica",
            Provider::Tracab => "tracab",
            Provider::Opta => "opta",
            Provider::StatsBomb => "statsbomb",
            Provider::Wyscout => "wyscout",
            Provider::SecondSpectrum => "second_spectrum",
            Provider::SkillCorner => "skillcorner",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metrica" => Ok(Provider::Metrica),
            "tracab" => Ok(Provider::Tracab),
            "opta" => Ok(Provider::Opta),
            "statsbomb" => Ok(Provider::StatsBomb),
            "wyscout" => Ok(Provider::Wyscout),
            "second_spectrum" => Ok(Provider::SecondSpectrum),
            "skillcorner" => Ok(Provider::SkillCorner),
            other => Err(DatasetError::UnknownProvider(other.to_string())),
        }
    }
}

// Dimension literals below are known non-degenerate, so plain struct
// construction is used instead of the validating Dimension::new.
fn dims(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PitchDimensions {
    PitchDimensions {
        x_dim: Dimension { min: x_min, max: x_max },
        y_dim: Dimension { min: y_min, max: y_max },
    }
}

impl CoordinateSystem {
    /// The coordinate convention `provider` ships its raw data in.
    pub fn for_provider(provider: Provider) -> CoordinateSystem {
        match provider {
            // Unit square, y down, origin in the top-left corner
            Provider::Metrica => CoordinateSystem::new(
                dims(0.0, 1.0, 0.0, 1.0),
                VerticalOrientation::TopToBottom,
                Origin::TopLeft,
            ),
            // Centimetres around the pitch centre, y up
            Provider::Tracab => CoordinateSystem::new(
                dims(-5250.0, 5250.0, -3400.0, 3400.0),
                VerticalOrientation::BottomToTop,
                Origin::Center,
            ),
            Provider::Opta => CoordinateSystem::new(
                dims(0.0, 100.0, 0.0, 100.0),
                VerticalOrientation::BottomToTop,
                Origin::BottomLeft,
            ),
            // 120x80 yards, y down
            Provider::StatsBomb => CoordinateSystem::new(
                dims(0.0, 120.0, 0.0, 80.0),
                VerticalOrientation::TopToBottom,
                Origin::TopLeft,
            ),
            Provider::Wyscout => CoordinateSystem::new(
                dims(0.0, 100.0, 0.0, 100.0),
                VerticalOrientation::TopToBottom,
                Origin::TopLeft,
            ),
            // Metres around the pitch centre, y up
            Provider::SecondSpectrum => CoordinateSystem::new(
                dims(-52.5, 52.5, -34.0, 34.0),
                VerticalOrientation::BottomToTop,
                Origin::Center,
            ),
            Provider::SkillCorner => CoordinateSystem::new(
                dims(-52.5, 52.5, -34.0, 34.0),
                VerticalOrientation::BottomToTop,
                Origin::Center,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_provider_has_valid_dimensions() {
        for provider in Provider::iter() {
            let cs = CoordinateSystem::for_provider(provider);
            assert!(
                cs.pitch_dimensions.x_dim.min < cs.pitch_dimensions.x_dim.max,
                "{provider} has a degenerate x dimension"
            );
            assert!(
                cs.pitch_dimensions.y_dim.min < cs.pitch_dimensions.y_dim.max,
                "{provider} has a degenerate y dimension"
            );
        }
    }

    #[test]
    fn test_provider_name_roundtrip() {
        for provider in Provider::iter() {
            assert_eq!(Provider::from_str(provider.name()).unwrap(), provider);
        }
    }

    #[test]
    fn test_serde_names_match_registry_names() {
        for provider in Provider::iter() {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{}\"", provider.name()));
        }
    }

    #[test]
    fn test_unknown_provider_is_a_configuration_error() {
        let err = Provider::from_str("sportec").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_statsbomb_convention() {
        let cs = CoordinateSystem::for_provider(Provider::StatsBomb);
        assert_eq!(cs.pitch_dimensions.x_dim.max, 120.0);
        assert_eq!(cs.pitch_dimensions.y_dim.max, 80.0);
        assert_eq!(cs.vertical_orientation, VerticalOrientation::TopToBottom);
        assert_eq!(cs.origin, Origin::TopLeft);
    }

    #[test]
    fn test_centered_systems_span_zero() {
        let cs = CoordinateSystem::for_provider(Provider::Tracab);
        assert_eq!(cs.origin, Origin::Center);
        assert!(cs.pitch_dimensions.contains(&crate::geometry::Point::new(0.0, 0.0)));
    }
}

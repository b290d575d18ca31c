//! Unit display
//!
//! Body measurements are always stored metric (kg, cm). The user's
//! [`Units`] preference only decides how they are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Units;

const LBS_PER_KG: f64 = 2.204_622_6;
const CM_PER_INCH: f64 = 2.54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg * LBS_PER_KG,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    FeetInches,
}

impl Units {
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            Units::Metric => WeightUnit::Kg,
            Units::Imperial => WeightUnit::Lbs,
        }
    }

    pub fn height_unit(&self) -> HeightUnit {
        match self {
            Units::Metric => HeightUnit::Cm,
            Units::Imperial => HeightUnit::FeetInches,
        }
    }
}

/// A height as whole feet and inches, rendered `5'7"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: u32,
    pub inches: u32,
}

impl FeetInches {
    /// Rounds to the nearest inch first, so 5'11.7" becomes 6'0" and never 5'12"
    pub fn from_cm(cm: f64) -> Self {
        let total = (cm / CM_PER_INCH).round().max(0.0) as u32;
        Self {
            feet: total / 12,
            inches: total % 12,
        }
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}

/// Render a stored weight in the preferred units, e.g. `70 kg` or `154.3 lbs`
pub fn format_weight(weight_kg: f64, units: Units) -> String {
    let unit = units.weight_unit();
    let value = match unit {
        WeightUnit::Kg => weight_kg,
        WeightUnit::Lbs => (unit.from_kg(weight_kg) * 10.0).round() / 10.0,
    };
    format!("{} {}", value, unit)
}

/// Render a stored height in the preferred units, e.g. `170 cm` or `5'7"`
pub fn format_height(height_cm: f64, units: Units) -> String {
    match units.height_unit() {
        HeightUnit::Cm => format!("{} cm", height_cm),
        HeightUnit::FeetInches => FeetInches::from_cm(height_cm).to_string(),
    }
}

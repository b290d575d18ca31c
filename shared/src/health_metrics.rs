//! Body mass index
//!
//! Computed from the profile's metric values and shown on the profile page
//! only when both weight and height are known.

use serde::{Deserialize, Serialize};

/// Upper bounds (exclusive) of the underweight, normal and overweight bands
const BMI_BANDS: [f64; 3] = [18.5, 25.0, 30.0];

/// WHO adult BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// weight(kg) / height(m)², unrounded
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powi(2)
}

/// BMI rounded to one decimal, or `None` unless both measurements are known
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let (weight, height) = (weight_kg?, height_cm?);
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(weight) || !usable(height) {
        return None;
    }
    Some((calculate_bmi(weight, height) * 10.0).round() / 10.0)
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    let [under, normal, over] = BMI_BANDS;
    match bmi {
        b if b < under => BmiCategory::Underweight,
        b if b < normal => BmiCategory::Normal,
        b if b < over => BmiCategory::Overweight,
        _ => BmiCategory::Obese,
    }
}

/// Weights (kg) that put the given height in the normal band
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m_sq = (height_cm / 100.0).powi(2);
    (BMI_BANDS[0] * height_m_sq, BMI_BANDS[1] * height_m_sq)
}

/// BMI reading shown on the profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
    pub healthy_weight_range_kg: (f64, f64),
}

pub fn bmi_reading(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<BmiReading> {
    let value = bmi(weight_kg, height_cm)?;
    let height = height_cm?;
    Some(BmiReading {
        value,
        category: classify_bmi(value),
        healthy_weight_range_kg: healthy_weight_range_kg(height),
    })
}

// SPDX-License-Identifier: MIT

//! Food, weight and body-measurement log records.

use serde::{Deserialize, Serialize};

use crate::models::client::Macros;

/// How a weight entry was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSource {
    Manual,
    Photo,
}

/// Coarse weight-trend classification attached to a weight log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    /// Losing at or beyond the target rate
    Green,
    /// Plateau
    Amber,
    /// Gaining
    Red,
}

/// A logged food entry. Newest entries are inserted at the head of the
/// collection; entries are deletable by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLog {
    pub id: String,
    pub client_id: String,
    /// ISO 8601 date-time string
    pub date: String,
    /// Free-form meal bucket ("Breakfast", "Meal 5", ...)
    pub meal_type: String,
    pub food_name: String,
    pub grams: f64,
    pub macros: Macros,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Confidence reported by AI food recognition, in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<f64>,
    pub is_verified: bool,
}

/// A logged weight entry. Adding one also updates the owning client
/// profile's current weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLog {
    pub id: String,
    pub client_id: String,
    pub date: String,
    pub weight_kg: f64,
    pub source: WeightSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_status: Option<TrendStatus>,
}

/// Tape measurements and progress photos. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementLog {
    pub id: String,
    pub client_id: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

// SPDX-License-Identifier: MIT

//! Static catalog entries: food nutrition and exercise reference data.
//!
//! These are immutable lookup tables, not part of the mutable store.

use serde::{Deserialize, Serialize};

/// Nutrition reference entry, normalized per 100g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fats_per_100g: f64,
    pub fiber_per_100g: f64,
    pub image_url: String,
}

/// Muscle group targeted by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
}

/// Exercise library entry with form notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub gif_url: String,
    pub notes: String,
}

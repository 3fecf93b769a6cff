// SPDX-License-Identifier: MIT

//! Workout and exercise models.

use serde::{Deserialize, Serialize};

/// A single exercise within a workout. Owned exclusively by its workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Rep range as free text, e.g. "6-8"
    pub reps: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A coach-assigned workout for one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub client_id: String,
    pub day_of_week: String,
    pub title: String,
    pub exercises: Vec<Exercise>,
    /// Derived: true iff the exercise list is non-empty and every exercise
    /// is completed. Recomputed whenever an exercise toggles, never set
    /// independently.
    pub completed: bool,
}

impl Workout {
    /// Recompute the derived `completed` flag from the exercise list.
    pub fn recompute_completed(&mut self) {
        self.completed = !self.exercises.is_empty() && self.exercises.iter().all(|e| e.completed);
    }

    /// Toggle one exercise's completion and recompute the workout flag.
    ///
    /// Returns false if no exercise with the given id exists.
    pub fn toggle_exercise(&mut self, exercise_id: &str) -> bool {
        let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == exercise_id) else {
            return false;
        };
        exercise.completed = !exercise.completed;
        self.recompute_completed();
        true
    }
}

// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod catalog;
pub mod client;
pub mod logs;
pub mod user;
pub mod workout;

pub use catalog::{ExerciseDefinition, FoodItem, MuscleGroup};
pub use client::{ClientProfile, ClientStatus, Habit, HabitFrequency, Macros, MealPlan};
pub use logs::{FoodLog, MeasurementLog, TrendStatus, WeightLog, WeightSource};
pub use user::{User, UserRole};
pub use workout::{Exercise, Workout};

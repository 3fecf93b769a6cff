// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod ai;
pub mod catalog;
pub mod nutrition;
pub mod trend;

pub use ai::{DietPlan, FoodAnalysis, GeminiClient, GeneratedWorkout};
pub use catalog::CatalogService;
pub use nutrition::{daily_totals, project_weekly_steps, StepProjection};
pub use trend::{classify_weights, TrendClass, TrendReport};

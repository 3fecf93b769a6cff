// SPDX-License-Identifier: MIT

//! AI-assisted routes backed by the Gemini client.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Exercise, FoodLog, Macros, Workout};
use crate::services::{DietPlan, FoodAnalysis};
use crate::time_utils::{new_id, now_iso};
use crate::AppState;
use axum::{extract::State, routing::post, Extension, Json, Router};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Recognition confidence above which a photo analysis is logged without
/// asking the client to confirm.
pub const CONFIDENCE_THRESHOLD: f64 = 0.75;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ai/food-image", post(analyze_food_image))
        .route("/api/ai/food-search", post(search_food))
        .route("/api/ai/diet-plan", post(generate_diet_plan))
        .route("/api/ai/workout", post(generate_workout))
}

fn require_coach(user: &AuthUser) -> Result<()> {
    if user.is_coach() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

// ─── Food Image Analysis ─────────────────────────────────────

#[derive(Deserialize)]
pub struct FoodImageRequest {
    /// Base64-encoded JPEG, with or without a `data:` URL prefix.
    pub image_base64: String,
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
}

fn default_meal_type() -> String {
    "Snacks".to_string()
}

#[derive(Serialize)]
pub struct FoodImageResponse {
    pub analysis: FoodAnalysis,
    /// Present when confidence cleared the auto-log threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged: Option<FoodLog>,
}

/// Analyze a meal photo and auto-log it when recognition is confident.
///
/// Low-confidence results are returned for manual review instead of being
/// written to the diary.
async fn analyze_food_image(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<FoodImageRequest>,
) -> Result<Json<FoodImageResponse>> {
    let payload = body
        .image_base64
        .rsplit_once("base64,")
        .map(|(_, data)| data)
        .unwrap_or(&body.image_base64);

    STANDARD
        .decode(payload)
        .map_err(|_| AppError::BadRequest("image_base64 is not valid base64".to_string()))?;

    let analysis = state.gemini.analyze_food_image(payload).await?;

    let logged = if analysis.confidence > CONFIDENCE_THRESHOLD {
        let log = FoodLog {
            id: new_id(),
            client_id: user.user_id.clone(),
            date: now_iso(),
            meal_type: body.meal_type,
            food_name: analysis.food_name.clone(),
            grams: analysis.grams,
            macros: analysis.macros,
            photo_url: None,
            ai_confidence: Some(analysis.confidence),
            is_verified: true,
        };
        state.store.add_food_log(log.clone())?;
        tracing::debug!(
            food = %log.food_name,
            confidence = analysis.confidence,
            "Auto-logged analyzed meal"
        );
        Some(log)
    } else {
        None
    };

    Ok(Json(FoodImageResponse { analysis, logged }))
}

// ─── Food Search ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct FoodSearchRequest {
    pub query: String,
}

/// Look up per-100g nutrition for a food name.
///
/// The local catalog answers first; the model is only consulted on a miss.
async fn search_food(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FoodSearchRequest>,
) -> Result<Json<FoodAnalysis>> {
    let query = body.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_string()));
    }

    if let Some(item) = state.catalog.search_foods(query).into_iter().next().cloned() {
        return Ok(Json(FoodAnalysis {
            food_name: item.name,
            grams: 100.0,
            macros: Macros {
                calories: item.calories_per_100g,
                protein: item.protein_per_100g,
                carbs: item.carbs_per_100g,
                fats: item.fats_per_100g,
                fiber: item.fiber_per_100g,
            },
            confidence: 1.0,
        }));
    }

    let analysis = state.gemini.search_food(query).await?;
    Ok(Json(analysis))
}

// ─── Plan Generation (coach-only) ────────────────────────────

#[derive(Deserialize)]
pub struct DietPlanRequest {
    pub client_id: String,
}

/// Generate macro targets and a meal plan suggestion for a client.
///
/// The result is a proposal; the coach applies it via the profile update
/// endpoint after review.
async fn generate_diet_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<DietPlanRequest>,
) -> Result<Json<DietPlan>> {
    require_coach(&user)?;

    let client = state
        .store
        .client(&body.client_id)
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", body.client_id)))?;

    let plan = state
        .gemini
        .generate_diet(client.age, client.current_weight_kg, &client.goal)
        .await?;

    Ok(Json(plan))
}

#[derive(Deserialize)]
pub struct WorkoutGenRequest {
    pub client_id: String,
    pub day: String,
    #[serde(default)]
    pub focus: Option<String>,
}

/// Generate a workout for a client and assign it immediately.
async fn generate_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<WorkoutGenRequest>,
) -> Result<Json<Workout>> {
    require_coach(&user)?;

    let client = state
        .store
        .client(&body.client_id)
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", body.client_id)))?;

    let generated = state
        .gemini
        .generate_workout(&client.goal, &body.day, body.focus.as_deref())
        .await?;

    let exercises: Vec<Exercise> = generated
        .exercises
        .into_iter()
        .map(|e| Exercise {
            id: format!("ai-{}", new_id()),
            name: e.name,
            sets: e.sets,
            reps: e.reps,
            weight_kg: None,
            completed: false,
            video_url: None,
            notes: None,
        })
        .collect();

    let workout = Workout {
        id: format!("wk_{}", new_id()),
        client_id: client.id,
        day_of_week: body.day,
        title: generated.title,
        exercises,
        completed: false,
    };

    state.store.add_workout(workout.clone())?;
    Ok(Json(workout))
}

// SPDX-License-Identifier: MIT

//! API routes for authenticated users (client-facing surface).
//!
//! Clients only ever see their own records. Coaches may read any client's
//! records here by passing `client_id`; write endpoints on this surface
//! always target the caller's own profile.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{
    ClientProfile, ExerciseDefinition, FoodItem, FoodLog, Macros, MeasurementLog, User, WeightLog,
    WeightSource, Workout,
};
use crate::services::{classify_weights, daily_totals, project_weekly_steps, StepProjection};
use crate::time_utils::{new_id, now_iso, today_prefix};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/food-logs", get(get_food_logs).post(create_food_log))
        .route("/api/food-logs/{id}", delete(delete_food_log))
        .route("/api/weight-logs", get(get_weight_logs).post(create_weight_log))
        .route(
            "/api/measurements",
            get(get_measurements).post(create_measurement),
        )
        .route("/api/workouts", get(get_workouts))
        .route(
            "/api/workouts/{id}/exercises/{exercise_id}/toggle",
            post(toggle_exercise),
        )
        .route("/api/habits/{id}/toggle", put(toggle_habit))
        .route("/api/summary", get(get_summary))
        .route("/api/catalog/foods", get(get_food_catalog))
        .route("/api/catalog/exercises", get(get_exercise_catalog))
}

/// Optional record-scoping for coach reads.
#[derive(Deserialize)]
pub struct ScopeParams {
    #[serde(default)]
    client_id: Option<String>,
}

/// Resolve which client's records the caller may read.
///
/// Clients are always pinned to their own ID; coaches may name any client.
fn resolve_scope(user: &AuthUser, params: &ScopeParams) -> String {
    if user.is_coach() {
        params
            .client_id
            .clone()
            .unwrap_or_else(|| user.user_id.clone())
    } else {
        user.user_id.clone()
    }
}

/// Fetch the caller's own client profile, or 404 for non-clients.
fn own_profile(state: &AppState, user: &AuthUser) -> Result<ClientProfile> {
    state
        .store
        .client(&user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", user.user_id)))
}

// ─── User Profile ────────────────────────────────────────────

/// Get current user identity (reduced view, no credentials).
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<User>> {
    if user.is_coach() {
        let coach = state
            .store
            .users()
            .into_iter()
            .find(|u| u.id == user.user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;
        return Ok(Json(coach));
    }

    let profile = own_profile(&state, &user)?;
    Ok(Json(profile.reduced_user()))
}

// ─── Food Logs ───────────────────────────────────────────────

async fn get_food_logs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<FoodLog>>> {
    let client_id = resolve_scope(&user, &params);
    let logs: Vec<FoodLog> = state
        .store
        .food_logs()
        .into_iter()
        .filter(|l| l.client_id == client_id)
        .collect();
    Ok(Json(logs))
}

#[derive(Deserialize)]
pub struct CreateFoodLogRequest {
    pub meal_type: String,
    pub food_name: String,
    pub grams: f64,
    pub macros: Macros,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Log a meal. Manual entries are always marked verified.
async fn create_food_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateFoodLogRequest>,
) -> Result<Json<FoodLog>> {
    let log = FoodLog {
        id: new_id(),
        client_id: user.user_id.clone(),
        date: body.date.unwrap_or_else(now_iso),
        meal_type: body.meal_type,
        food_name: body.food_name,
        grams: body.grams,
        macros: body.macros,
        photo_url: body.photo_url,
        ai_confidence: None,
        is_verified: true,
    };

    state.store.add_food_log(log.clone())?;
    Ok(Json(log))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

async fn delete_food_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let log = state
        .store
        .food_logs()
        .into_iter()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Food log {} not found", id)))?;

    if !user.is_coach() && log.client_id != user.user_id {
        return Err(AppError::Forbidden);
    }

    state.store.delete_food_log(&id)?;
    Ok(Json(DeleteResponse { deleted: true }))
}

// ─── Weight Logs ─────────────────────────────────────────────

async fn get_weight_logs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<WeightLog>>> {
    let client_id = resolve_scope(&user, &params);
    let logs: Vec<WeightLog> = state
        .store
        .weight_logs()
        .into_iter()
        .filter(|l| l.client_id == client_id)
        .collect();
    Ok(Json(logs))
}

#[derive(Deserialize)]
pub struct CreateWeightLogRequest {
    pub weight_kg: f64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub source: Option<WeightSource>,
}

/// Record a weigh-in.
///
/// The stored trend status is classified from the client's weight history
/// with the new point appended, ordered by date. The profile's current
/// weight tracks whatever was logged last, even a backdated entry.
async fn create_weight_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateWeightLogRequest>,
) -> Result<Json<WeightLog>> {
    let date = body.date.unwrap_or_else(now_iso);

    let mut history: Vec<WeightLog> = state
        .store
        .weight_logs()
        .into_iter()
        .filter(|l| l.client_id == user.user_id)
        .collect();
    history.sort_by(|a, b| a.date.cmp(&b.date));

    let mut weights: Vec<f64> = history.iter().map(|l| l.weight_kg).collect();
    let insert_at = history.partition_point(|l| l.date.as_str() <= date.as_str());
    weights.insert(insert_at, body.weight_kg);

    let report = classify_weights(&weights);

    let log = WeightLog {
        id: new_id(),
        client_id: user.user_id.clone(),
        date,
        weight_kg: body.weight_kg,
        source: body.source.unwrap_or(WeightSource::Manual),
        trend_status: Some(report.class.status()),
    };

    state.store.add_weight_log(log.clone())?;
    Ok(Json(log))
}

// ─── Measurements ────────────────────────────────────────────

async fn get_measurements(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<MeasurementLog>>> {
    let client_id = resolve_scope(&user, &params);
    let logs: Vec<MeasurementLog> = state
        .store
        .measurements()
        .into_iter()
        .filter(|l| l.client_id == client_id)
        .collect();
    Ok(Json(logs))
}

#[derive(Deserialize)]
pub struct CreateMeasurementRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
    #[serde(default)]
    pub arms: Option<f64>,
    #[serde(default)]
    pub thighs: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

async fn create_measurement(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateMeasurementRequest>,
) -> Result<Json<MeasurementLog>> {
    let log = MeasurementLog {
        id: new_id(),
        client_id: user.user_id.clone(),
        date: body.date.unwrap_or_else(now_iso),
        chest: body.chest,
        waist: body.waist,
        hips: body.hips,
        arms: body.arms,
        thighs: body.thighs,
        notes: body.notes,
        photo_url: body.photo_url,
    };

    state.store.add_measurement(log.clone())?;
    Ok(Json(log))
}

// ─── Workouts ────────────────────────────────────────────────

async fn get_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<Workout>>> {
    let client_id = resolve_scope(&user, &params);
    let workouts: Vec<Workout> = state
        .store
        .workouts()
        .into_iter()
        .filter(|w| w.client_id == client_id)
        .collect();
    Ok(Json(workouts))
}

/// Toggle one exercise's completion; the workout's completion flag is
/// recomputed from its exercises in the same write.
async fn toggle_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((workout_id, exercise_id)): Path<(String, String)>,
) -> Result<Json<Workout>> {
    let workout = state
        .store
        .workout(&workout_id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", workout_id)))?;

    if !user.is_coach() && workout.client_id != user.user_id {
        return Err(AppError::Forbidden);
    }

    let updated = state.store.toggle_exercise(&workout_id, &exercise_id)?;
    Ok(Json(updated))
}

// ─── Habits ──────────────────────────────────────────────────

/// Toggle a habit's completion flag on the caller's own profile.
async fn toggle_habit(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<ClientProfile>> {
    let mut profile = own_profile(&state, &user)?;

    let habit = profile
        .habits
        .iter_mut()
        .find(|h| h.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Habit {} not found", id)))?;
    habit.completed = !habit.completed;

    state.store.update_client(profile.clone())?;
    Ok(Json(profile))
}

// ─── Daily Summary ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct SummaryParams {
    /// Today's step count as reported by the caller's device.
    #[serde(default)]
    steps: u64,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub date: String,
    pub consumed: Macros,
    pub targets: Macros,
    pub trend: crate::services::TrendReport,
    pub steps: StepProjection,
}

/// Dashboard summary: today's macro totals against targets, the current
/// weight trend, and the weekly step projection.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<SummaryResponse>> {
    let profile = own_profile(&state, &user)?;
    let today = today_prefix();

    let logs: Vec<FoodLog> = state
        .store
        .food_logs()
        .into_iter()
        .filter(|l| l.client_id == user.user_id)
        .collect();
    let consumed = daily_totals(&logs, &today);

    let mut history: Vec<WeightLog> = state
        .store
        .weight_logs()
        .into_iter()
        .filter(|l| l.client_id == user.user_id)
        .collect();
    history.sort_by(|a, b| a.date.cmp(&b.date));
    let weights: Vec<f64> = history.iter().map(|l| l.weight_kg).collect();
    let trend = classify_weights(&weights);

    let weekly_goal = profile
        .weekly_step_goal
        .map(u64::from)
        .unwrap_or(u64::from(profile.step_goal) * 7);
    let steps = project_weekly_steps(params.steps, weekly_goal);

    Ok(Json(SummaryResponse {
        date: today,
        consumed,
        targets: profile.daily_macro_targets,
        trend,
        steps,
    }))
}

// ─── Catalogs ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct FoodCatalogParams {
    #[serde(default)]
    query: Option<String>,
}

async fn get_food_catalog(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FoodCatalogParams>,
) -> Json<Vec<FoodItem>> {
    let foods: Vec<FoodItem> = match params.query.as_deref() {
        Some(q) if !q.trim().is_empty() => {
            state.catalog.search_foods(q).into_iter().cloned().collect()
        }
        _ => state.catalog.foods().to_vec(),
    };
    Json(foods)
}

async fn get_exercise_catalog(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ExerciseDefinition>> {
    Json(state.catalog.exercises().to_vec())
}

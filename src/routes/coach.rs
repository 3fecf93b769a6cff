// SPDX-License-Identifier: MIT

//! Coach-only routes: roster management and workout programming.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{
    ClientProfile, ClientStatus, Exercise, Habit, Macros, MealPlan, MeasurementLog, UserRole,
    WeightLog, Workout,
};
use crate::time_utils::new_id;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/clients", get(list_clients).post(create_client))
        .route("/api/clients/{id}", get(get_client).put(update_client))
        .route("/api/clients/{id}/workouts", post(create_workout))
        .route("/api/workouts/{id}", put(update_workout))
}

fn require_coach(user: &AuthUser) -> Result<()> {
    if user.is_coach() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

// ─── Roster ──────────────────────────────────────────────────

async fn list_clients(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ClientProfile>>> {
    require_coach(&user)?;
    Ok(Json(state.store.clients()))
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub username: String,
    pub passport_code: String,
    pub dob: String,
    pub age: u32,
    pub occupation: String,
    pub height_cm: f64,
    pub start_weight_kg: f64,
    pub goal: String,
    pub subscription_end_date: String,
    pub daily_macro_targets: Macros,
    pub step_goal: u32,
    #[serde(default)]
    pub weekly_step_goal: Option<u32>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub meal_plan: MealPlan,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

/// Onboard a new client.
///
/// The server assigns the ID, starts the client as active, and sets the
/// current weight to the starting weight until the first weigh-in.
async fn create_client(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateClientRequest>,
) -> Result<Json<ClientProfile>> {
    require_coach(&user)?;

    if body.username.trim().is_empty() || body.passport_code.trim().is_empty() {
        return Err(AppError::BadRequest(
            "username and passport_code are required".to_string(),
        ));
    }
    if state
        .store
        .clients()
        .iter()
        .any(|c| c.username == body.username)
    {
        return Err(AppError::BadRequest(format!(
            "Username {} is already taken",
            body.username
        )));
    }

    let client = ClientProfile {
        id: format!("client_{}", new_id()),
        name: body.name,
        username: body.username,
        role: UserRole::Client,
        avatar_url: body.avatar_url,
        coach_id: user.user_id.clone(),
        passport_code: body.passport_code,
        dob: body.dob,
        age: body.age,
        occupation: body.occupation,
        height_cm: body.height_cm,
        start_weight_kg: body.start_weight_kg,
        current_weight_kg: body.start_weight_kg,
        goal: body.goal,
        subscription_end_date: body.subscription_end_date,
        daily_macro_targets: body.daily_macro_targets,
        meal_plan: body.meal_plan,
        habits: body.habits,
        step_goal: body.step_goal,
        weekly_step_goal: body.weekly_step_goal,
        status: ClientStatus::Active,
    };

    state.store.add_client(client.clone())?;
    tracing::info!(client_id = %client.id, "Client onboarded");
    Ok(Json(client))
}

/// Full client detail for the coach dashboard.
#[derive(Serialize)]
pub struct ClientDetailResponse {
    pub client: ClientProfile,
    pub workouts: Vec<Workout>,
    pub weight_logs: Vec<WeightLog>,
    pub measurements: Vec<MeasurementLog>,
}

async fn get_client(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<ClientDetailResponse>> {
    require_coach(&user)?;

    let client = state
        .store
        .client(&id)
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))?;

    let workouts = state
        .store
        .workouts()
        .into_iter()
        .filter(|w| w.client_id == id)
        .collect();
    let weight_logs = state
        .store
        .weight_logs()
        .into_iter()
        .filter(|l| l.client_id == id)
        .collect();
    let measurements = state
        .store
        .measurements()
        .into_iter()
        .filter(|l| l.client_id == id)
        .collect();

    Ok(Json(ClientDetailResponse {
        client,
        workouts,
        weight_logs,
        measurements,
    }))
}

/// Replace a client profile: targets, meal plan, habits, status, all of it.
async fn update_client(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(client): Json<ClientProfile>,
) -> Result<Json<ClientProfile>> {
    require_coach(&user)?;

    if client.id != id {
        return Err(AppError::BadRequest(
            "Profile ID does not match the URL".to_string(),
        ));
    }

    state.store.update_client(client.clone())?;
    Ok(Json(client))
}

// ─── Workout Programming ─────────────────────────────────────

#[derive(Deserialize)]
pub struct ExerciseRequest {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateWorkoutRequest {
    pub day_of_week: String,
    pub title: String,
    pub exercises: Vec<ExerciseRequest>,
}

/// Assign a new workout to a client.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(client_id): Path<String>,
    Json(body): Json<CreateWorkoutRequest>,
) -> Result<Json<Workout>> {
    require_coach(&user)?;

    if state.store.client(&client_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Client {} not found",
            client_id
        )));
    }

    let exercises: Vec<Exercise> = body
        .exercises
        .into_iter()
        .map(|e| Exercise {
            id: format!("ex_{}", new_id()),
            name: e.name,
            sets: e.sets,
            reps: e.reps,
            weight_kg: e.weight_kg,
            completed: false,
            video_url: e.video_url,
            notes: e.notes,
        })
        .collect();

    let mut workout = Workout {
        id: format!("wk_{}", new_id()),
        client_id,
        day_of_week: body.day_of_week,
        title: body.title,
        exercises,
        completed: false,
    };
    workout.recompute_completed();

    state.store.add_workout(workout.clone())?;
    Ok(Json(workout))
}

/// Replace an assigned workout. Completion is recomputed from the submitted
/// exercises rather than trusted from the body.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(mut workout): Json<Workout>,
) -> Result<Json<Workout>> {
    require_coach(&user)?;

    if workout.id != id {
        return Err(AppError::BadRequest(
            "Workout ID does not match the URL".to_string(),
        ));
    }

    workout.recompute_completed();
    state.store.update_workout(workout.clone())?;
    Ok(Json(workout))
}

// SPDX-License-Identifier: MIT

//! AI surface tests: catalog-first food search, image analysis with the
//! auto-log threshold, and coach-only plan generation, all against a local
//! stub standing in for the model API.

use axum::http::StatusCode;
use serde_json::json;

mod common;

// "hello world", valid standard base64
const VALID_IMAGE_B64: &str = "aGVsbG8gd29ybGQ=";

#[tokio::test]
async fn test_food_search_catalog_hit_needs_no_model() {
    // Default app: the model endpoint is unreachable, so a catalog hit is
    // the only way this can succeed
    let (app, _) = common::create_test_app();
    let token = common::login_client(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/food-search",
        &token,
        Some(json!({ "query": "paneer" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let analysis = common::read_json(response).await;
    assert_eq!(analysis["confidence"], 1.0);
    assert_eq!(analysis["grams"], 100.0);
    assert!(analysis["food_name"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("paneer"));
}

#[tokio::test]
async fn test_food_search_empty_query_is_400() {
    let (app, _) = common::create_test_app();
    let token = common::login_client(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/food-search",
        &token,
        Some(json!({ "query": "   " })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_food_search_falls_back_to_model_on_catalog_miss() {
    let reply = json!({
        "foodName": "Dragon Fruit",
        "grams": 100,
        "macros": { "calories": 60, "protein": 1.2, "carbs": 13, "fats": 0.4, "fiber": 3 },
        "confidence": 1
    });
    let base_url = common::spawn_model_stub(reply.to_string()).await;
    let (app, _) = common::create_test_app_with_model(base_url);
    let token = common::login_client(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/food-search",
        &token,
        Some(json!({ "query": "dragon fruit" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let analysis = common::read_json(response).await;
    // snake_case out, regardless of the model's camelCase reply
    assert_eq!(analysis["food_name"], "Dragon Fruit");
    assert!(analysis.get("foodName").is_none());
    assert_eq!(analysis["macros"]["calories"], 60.0);
}

#[tokio::test]
async fn test_food_image_invalid_base64_is_400() {
    let (app, state) = common::create_test_app();
    let token = common::login_client(&app).await;
    let before = state.store.food_logs().len();

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/food-image",
        &token,
        Some(json!({ "image_base64": "this is not base64!!" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.food_logs().len(), before);
}

#[tokio::test]
async fn test_food_image_high_confidence_auto_logs() {
    let reply = json!({
        "foodName": "Masala Dosa",
        "grams": 180,
        "macros": { "calories": 350, "protein": 8, "carbs": 65, "fats": 12, "fiber": 4 },
        "confidence": 0.9
    });
    let base_url = common::spawn_model_stub(reply.to_string()).await;
    let (app, state) = common::create_test_app_with_model(base_url);
    let token = common::login_client(&app).await;

    let body = json!({
        // Data-URL prefix must be tolerated
        "image_base64": format!("data:image/jpeg;base64,{}", VALID_IMAGE_B64),
        "meal_type": "Breakfast"
    });
    let response =
        common::send_json(&app, "POST", "/api/ai/food-image", &token, Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let result = common::read_json(response).await;
    assert_eq!(result["analysis"]["confidence"], 0.9);
    let logged = &result["logged"];
    assert_eq!(logged["client_id"], "c1");
    assert_eq!(logged["meal_type"], "Breakfast");
    assert_eq!(logged["ai_confidence"], 0.9);
    assert_eq!(logged["is_verified"], true);

    let id = logged["id"].as_str().unwrap();
    assert!(state.store.food_logs().iter().any(|l| l.id == id));
}

#[tokio::test]
async fn test_food_image_low_confidence_is_returned_for_review() {
    let reply = json!({
        "foodName": "Some Curry",
        "grams": 250,
        "macros": { "calories": 400, "protein": 15, "carbs": 30, "fats": 22, "fiber": 5 },
        "confidence": 0.5
    });
    let base_url = common::spawn_model_stub(reply.to_string()).await;
    let (app, state) = common::create_test_app_with_model(base_url);
    let token = common::login_client(&app).await;
    let before = state.store.food_logs().len();

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/food-image",
        &token,
        Some(json!({ "image_base64": VALID_IMAGE_B64 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let result = common::read_json(response).await;
    assert_eq!(result["analysis"]["food_name"], "Some Curry");
    // Below the threshold: nothing logged, no "logged" key at all
    assert!(result.get("logged").is_none());
    assert_eq!(state.store.food_logs().len(), before);
}

#[tokio::test]
async fn test_food_image_fenced_reply_is_handled() {
    let reply = json!({
        "foodName": "Idli",
        "grams": 120,
        "macros": { "calories": 190, "protein": 6, "carbs": 38, "fats": 1, "fiber": 2 },
        "confidence": 0.8
    });
    // Models sometimes wrap the reply in markdown fences anyway
    let fenced = format!("```json\n{}\n```", reply);
    let base_url = common::spawn_model_stub(fenced).await;
    let (app, _) = common::create_test_app_with_model(base_url);
    let token = common::login_client(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/food-image",
        &token,
        Some(json!({ "image_base64": VALID_IMAGE_B64 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let result = common::read_json(response).await;
    assert_eq!(result["logged"]["food_name"], "Idli");
}

#[tokio::test]
async fn test_diet_plan_generation_serializes_snake_case() {
    let reply = json!({
        "macros": { "calories": 2100, "protein": 140, "carbs": 220, "fats": 65, "fiber": 30 },
        "mealPlan": {
            "breakfast": "Oats with whey",
            "lunch": "Dal, rice, salad",
            "dinner": "Paneer and vegetables",
            "snack": "Almonds"
        }
    });
    let base_url = common::spawn_model_stub(reply.to_string()).await;
    let (app, _) = common::create_test_app_with_model(base_url);
    let token = common::login_coach(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/diet-plan",
        &token,
        Some(json!({ "client_id": "c1" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let plan = common::read_json(response).await;
    assert_eq!(plan["macros"]["calories"], 2100.0);
    assert!(plan.get("mealPlan").is_none());
    let slots: Vec<&str> = plan["meal_plan"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(slots, vec!["breakfast", "lunch", "dinner", "snack"]);
}

#[tokio::test]
async fn test_workout_generation_assigns_and_persists() {
    let reply = json!({
        "title": "Push Day",
        "exercises": [
            { "name": "Bench Press", "sets": 4, "reps": "6-8" },
            { "name": "Overhead Press", "sets": 3, "reps": "8-10" },
            { "name": "Lateral Raises", "sets": 3, "reps": "12-15" },
            { "name": "Triceps Pushdown", "sets": 3, "reps": "10-12" }
        ]
    });
    let base_url = common::spawn_model_stub(reply.to_string()).await;
    let (app, state) = common::create_test_app_with_model(base_url);
    let token = common::login_coach(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/workout",
        &token,
        Some(json!({ "client_id": "c2", "day": "Wednesday", "focus": "Shoulders" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let workout = common::read_json(response).await;
    assert_eq!(workout["client_id"], "c2");
    assert_eq!(workout["completed"], false);
    let exercises = workout["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 4);
    for exercise in exercises {
        assert!(exercise["id"].as_str().unwrap().starts_with("ai-"));
        assert_eq!(exercise["completed"], false);
    }

    let id = workout["id"].as_str().unwrap();
    assert!(state.store.workout(id).is_some());
}

#[tokio::test]
async fn test_diet_plan_unknown_client_is_404() {
    let (app, _) = common::create_test_app();
    let token = common::login_coach(&app).await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/diet-plan",
        &token,
        Some(json!({ "client_id": "c_missing" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// SPDX-License-Identifier: MIT

//! Gemini API client for AI-assisted food recognition and plan generation.
//!
//! Four stateless request/response wrappers:
//! - food-image analysis (vision, inline JPEG)
//! - food-name lookup (nutrition fallback when the catalog misses)
//! - diet-plan generation
//! - workout generation
//!
//! Each builds a prompt, calls `generateContent` expecting a JSON reply,
//! strips optional code-fence markup, and parses the result. No retries and
//! no explicit timeout; malformed model output surfaces as an `AiApi` error.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Macros, MealPlan};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

// ─── Wire Types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

// ─── Result Types ────────────────────────────────────────────────

/// Result of AI food recognition or lookup.
///
/// Parsed from the model's camelCase reply, but serialized snake_case like
/// every other API body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FoodAnalysis {
    pub food_name: String,
    /// Estimated total serving weight in grams
    pub grams: f64,
    /// Macros for the whole estimated serving
    pub macros: Macros,
    /// Model confidence in [0, 1]
    pub confidence: f64,
}

/// Generated daily macro targets plus a four-slot meal suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DietPlan {
    pub macros: Macros,
    pub meal_plan: MealPlan,
}

/// Generated workout skeleton: title plus 4-6 exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub title: String,
    pub exercises: Vec<GeneratedExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Analyze a base64-encoded JPEG of a meal.
    ///
    /// Returns the identified dish with estimated serving weight, macros for
    /// that serving, and a confidence score. Callers apply their own
    /// confidence threshold.
    pub async fn analyze_food_image(&self, base64_jpeg: &str) -> Result<FoodAnalysis, AppError> {
        let prompt = "\
Analyze this image of food. Identify the main dish or components.
1. Estimate the TOTAL weight in grams of the serving shown.
2. Estimate the TOTAL macronutrients (Calories, Protein, Carbs, Fats, Fiber) for that entire estimated weight.
3. Provide a confidence score between 0 and 1 based on how clear the food and portion size are.

Return ONLY valid JSON with this structure, no markdown formatting:
{
  \"foodName\": \"string\",
  \"grams\": number,
  \"macros\": {
    \"calories\": number,
    \"protein\": number,
    \"carbs\": number,
    \"fats\": number,
    \"fiber\": number
  },
  \"confidence\": number
}";

        let parts = vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: base64_jpeg.to_string(),
                },
            },
            Part::Text {
                text: prompt.to_string(),
            },
        ];

        // Low temperature for more deterministic estimates
        self.generate_json(parts, Some(0.2)).await
    }

    /// Look up standard per-100g nutrition for a free-text food query.
    ///
    /// Fallback for when the local food catalog has no match.
    pub async fn search_food(&self, query: &str) -> Result<FoodAnalysis, AppError> {
        let prompt = format!(
            "\
You are a nutrition database. The user is searching for: \"{query}\".
Provide standard nutritional info for 100g of this item.
Return ONLY valid JSON:
{{
  \"foodName\": \"Standardized Name\",
  \"grams\": 100,
  \"macros\": {{
    \"calories\": number,
    \"protein\": number,
    \"carbs\": number,
    \"fats\": number,
    \"fiber\": number
  }},
  \"confidence\": 1
}}"
        );

        self.generate_json(vec![Part::Text { text: prompt }], None).await
    }

    /// Generate daily macro targets and a meal plan suggestion.
    pub async fn generate_diet(
        &self,
        age: u32,
        weight_kg: f64,
        goal: &str,
    ) -> Result<DietPlan, AppError> {
        let prompt = format!(
            "\
Create a personalized daily nutrition plan for a client with these details:
- Age: {age}
- Current Weight: {weight_kg}kg
- Goal: {goal}

1. Calculate appropriate daily macro targets (Calories, Protein, Carbs, Fats, Fiber).
2. Create a meal suggestion for Breakfast, Lunch, Dinner, and Snack that fits these macros.
3. Include diverse options, including healthy Indian cuisine if appropriate or relevant to general healthy eating.

Return ONLY valid JSON:
{{
  \"macros\": {{
    \"calories\": number,
    \"protein\": number,
    \"carbs\": number,
    \"fats\": number,
    \"fiber\": number
  }},
  \"mealPlan\": {{
    \"breakfast\": \"string\",
    \"lunch\": \"string\",
    \"dinner\": \"string\",
    \"snack\": \"string\"
  }}
}}"
        );

        self.generate_json(vec![Part::Text { text: prompt }], Some(0.7)).await
    }

    /// Generate a workout for a goal, day and optional focus area.
    pub async fn generate_workout(
        &self,
        goal: &str,
        day: &str,
        focus: Option<&str>,
    ) -> Result<GeneratedWorkout, AppError> {
        let focus = focus.unwrap_or("General");
        let prompt = format!(
            "\
Create a workout routine for a client with Goal: \"{goal}\".
Day: {day}
Focus Area: {focus}

Return a workout Title and 4-6 Exercises.
For each exercise, provide name, sets (number), and reps (string range).

Return ONLY valid JSON:
{{
  \"title\": \"string\",
  \"exercises\": [
    {{ \"name\": \"string\", \"sets\": number, \"reps\": \"string\" }}
  ]
}}"
        );

        self.generate_json(vec![Part::Text { text: prompt }], Some(0.7)).await
    }

    // ─── Transport ───────────────────────────────────────────────

    /// Call `generateContent` and parse the JSON reply into `T`.
    async fn generate_json<T: DeserializeOwned>(
        &self,
        parts: Vec<Part>,
        temperature: Option<f32>,
    ) -> Result<T, AppError> {
        let raw = self.generate(parts, temperature).await?;
        parse_json_reply(&raw)
    }

    /// Call `generateContent` and return the raw text of the first candidate.
    async fn generate(&self, parts: Vec<Part>, temperature: Option<f32>) -> Result<String, AppError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                temperature,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::AiApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AiApi(format!("HTTP {}: {}", status, body)));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::AiApi(format!("Response parse error: {}", e)))?;

        if let Some(error) = reply.error {
            return Err(AppError::AiApi(error.message));
        }

        reply
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|mut p| p.drain(..).next())
            .and_then(|p| p.text)
            .ok_or_else(|| AppError::AiApi("No response text from model".to_string()))
    }
}

/// Strip optional markdown code fences and parse the model's JSON reply.
pub fn parse_json_reply<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    let clean = strip_code_fences(raw);
    serde_json::from_str(&clean).map_err(|e| AppError::AiApi(format!("Invalid JSON reply: {}", e)))
}

/// Remove ```json / ``` fence markers the model sometimes adds despite the
/// response-format hint.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_plain_text() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fences_fenced() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_fenced_food_analysis() {
        let raw = "```json\n{\n  \"foodName\": \"Masala Dosa\",\n  \"grams\": 180,\n  \"macros\": {\"calories\": 350, \"protein\": 8, \"carbs\": 65, \"fats\": 12, \"fiber\": 4},\n  \"confidence\": 0.82\n}\n```";
        let result: FoodAnalysis = parse_json_reply(raw).unwrap();
        assert_eq!(result.food_name, "Masala Dosa");
        assert_eq!(result.grams, 180.0);
        assert_eq!(result.macros.calories, 350.0);
        assert_eq!(result.confidence, 0.82);
    }

    #[test]
    fn test_parse_diet_plan_keeps_slot_order() {
        let raw = "{\"macros\":{\"calories\":2100,\"protein\":140,\"carbs\":220,\"fats\":65,\"fiber\":30},\"mealPlan\":{\"breakfast\":\"Oats\",\"lunch\":\"Dal and rice\",\"dinner\":\"Paneer\",\"snack\":\"Almonds\"}}";
        let plan: DietPlan = parse_json_reply(raw).unwrap();
        let slots: Vec<&str> = plan.meal_plan.iter().map(|(k, _)| k).collect();
        assert_eq!(slots, vec!["breakfast", "lunch", "dinner", "snack"]);
    }

    #[test]
    fn test_results_serialize_snake_case() {
        let analysis = FoodAnalysis {
            food_name: "Masala Dosa".to_string(),
            grams: 180.0,
            macros: Macros::default(),
            confidence: 0.82,
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("food_name").is_some());
        assert!(json.get("foodName").is_none());

        let plan = DietPlan {
            macros: Macros::default(),
            meal_plan: MealPlan::new(),
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("meal_plan").is_some());
        assert!(json.get("mealPlan").is_none());
    }

    #[test]
    fn test_parse_malformed_reply_is_error() {
        let err = parse_json_reply::<FoodAnalysis>("I could not identify the food.").unwrap_err();
        assert!(matches!(err, AppError::AiApi(_)));
    }

    #[test]
    fn test_parse_generated_workout() {
        let raw = "{\"title\":\"Push Day\",\"exercises\":[{\"name\":\"Bench Press\",\"sets\":4,\"reps\":\"6-8\"},{\"name\":\"Overhead Press\",\"sets\":3,\"reps\":\"8-10\"}]}";
        let workout: GeneratedWorkout = parse_json_reply(raw).unwrap();
        assert_eq!(workout.title, "Push Day");
        assert_eq!(workout.exercises.len(), 2);
        assert_eq!(workout.exercises[0].sets, 4);
    }
}

// SPDX-License-Identifier: MIT

//! Client profile, macro targets, meal plan and habits.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::user::{User, UserRole};

/// Macronutrient totals or targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
}

impl Macros {
    /// Accumulate another set of macros into this one.
    pub fn accumulate(&mut self, other: &Macros) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fats += other.fats;
        self.fiber += other.fiber;
    }
}

/// Meal plan: slot name (e.g. "breakfast", "Pre-Workout") to free-text
/// suggestion.
///
/// Slot names are chosen by the coach, so this is an explicit ordered map
/// that preserves insertion order rather than a sorted or hashed one.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    slots: Vec<(String, String)>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot's text, replacing in place if the slot already exists.
    pub fn set(&mut self, slot: impl Into<String>, text: impl Into<String>) {
        let slot = slot.into();
        let text = text.into();
        if let Some(entry) = self.slots.iter_mut().find(|(name, _)| *name == slot) {
            entry.1 = text;
        } else {
            self.slots.push((slot, text));
        }
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, text)| text.as_str())
    }

    pub fn remove(&mut self, slot: &str) -> Option<String> {
        let idx = self.slots.iter().position(|(name, _)| name == slot)?;
        Some(self.slots.remove(idx).1)
    }

    /// Iterate slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Serialize for MealPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (slot, text) in &self.slots {
            map.serialize_entry(slot, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MealPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MealPlanVisitor;

        impl<'de> Visitor<'de> for MealPlanVisitor {
            type Value = MealPlan;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of meal slot names to text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut plan = MealPlan::new();
                while let Some((slot, text)) = access.next_entry::<String, String>()? {
                    plan.set(slot, text);
                }
                Ok(plan)
            }
        }

        deserializer.deserialize_map(MealPlanVisitor)
    }
}

/// How often a habit is expected to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitFrequency {
    Daily,
    Weekly,
}

/// A coach-assigned habit, embedded in the client profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub frequency: HabitFrequency,
    pub completed: bool,
}

/// Subscription/engagement status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Flagged,
    Expired,
}

/// A coached client: identity plus profile, targets, plan and habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub coach_id: String,
    /// Per-client shared secret used as the login credential.
    pub passport_code: String,
    pub dob: String,
    pub age: u32,
    pub occupation: String,
    pub height_cm: f64,
    pub start_weight_kg: f64,
    /// Always reflects the most recently added weight log (last write wins,
    /// not max-by-date).
    pub current_weight_kg: f64,
    pub goal: String,
    pub subscription_end_date: String,
    pub daily_macro_targets: Macros,
    #[serde(default)]
    pub meal_plan: MealPlan,
    #[serde(default)]
    pub habits: Vec<Habit>,
    pub step_goal: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_step_goal: Option<u32>,
    pub status: ClientStatus,
}

impl ClientProfile {
    /// Reduced user view handed out as the session identity after client
    /// login. Excludes the passport code and coaching fields.
    pub fn reduced_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            role: UserRole::Client,
            username: Some(self.username.clone()),
            email: None,
            avatar_url: self.avatar_url.clone(),
        }
    }
}

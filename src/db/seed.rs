// SPDX-License-Identifier: MIT

//! Seed data for first-time database initialization.
//!
//! Two demo clients with logs and workouts, plus the demo coach account.
//! Read-only: used once by `Store::initialize`.

use crate::models::{
    ClientProfile, ClientStatus, Exercise, FoodLog, Habit, HabitFrequency, Macros, MealPlan,
    MeasurementLog, TrendStatus, User, UserRole, WeightLog, WeightSource, Workout,
};
use crate::time_utils::now_iso;

pub const COACH_USERNAME: &str = "rushi";
/// Demo coach password, hashed into the credential table at seed time.
pub const COACH_PASSWORD: &str = "rushi9001";

pub fn coach() -> User {
    User {
        id: "coach_rushi".to_string(),
        name: "Coach Rushi".to_string(),
        role: UserRole::Coach,
        username: Some(COACH_USERNAME.to_string()),
        email: Some("rushi@titanfit.com".to_string()),
        avatar_url: Some(
            "https://ui-avatars.com/api/?name=Coach+Rushi&background=0D8ABC&color=fff".to_string(),
        ),
    }
}

pub fn clients() -> Vec<ClientProfile> {
    let mut jane_plan = MealPlan::new();
    jane_plan.set("breakfast", "100g Oatmeal, 1 scoop Whey Protein");
    jane_plan.set("lunch", "200g Chicken Breast (Grilled), 150g White Rice (Cooked)");
    jane_plan.set("dinner", "150g Salmon (Raw), 100g Asparagus");
    jane_plan.set("snack", "30g Almonds");

    vec![
        ClientProfile {
            id: "c1".to_string(),
            name: "Jane Doe".to_string(),
            username: "janedoe_fit".to_string(),
            role: UserRole::Client,
            avatar_url: Some(
                "https://ui-avatars.com/api/?name=Jane+Doe&background=0D8ABC&color=fff".to_string(),
            ),
            coach_id: "coach_rushi".to_string(),
            passport_code: "JD-2024-X9Y".to_string(),
            dob: "1995-05-15".to_string(),
            age: 29,
            occupation: "Software Engineer".to_string(),
            height_cm: 168.0,
            start_weight_kg: 70.0,
            current_weight_kg: 66.5,
            goal: "Loose 5kg & Build Muscle".to_string(),
            subscription_end_date: "2024-12-31".to_string(),
            daily_macro_targets: Macros {
                calories: 2100.0,
                protein: 140.0,
                carbs: 220.0,
                fats: 65.0,
                fiber: 30.0,
            },
            meal_plan: jane_plan,
            habits: vec![
                Habit {
                    id: "h1".to_string(),
                    name: "Drink 3L Water".to_string(),
                    frequency: HabitFrequency::Daily,
                    completed: false,
                },
                Habit {
                    id: "h2".to_string(),
                    name: "Sleep 8 Hours".to_string(),
                    frequency: HabitFrequency::Daily,
                    completed: true,
                },
                Habit {
                    id: "h3".to_string(),
                    name: "Morning Stretching".to_string(),
                    frequency: HabitFrequency::Daily,
                    completed: false,
                },
            ],
            step_goal: 8000,
            weekly_step_goal: Some(56000),
            status: ClientStatus::Active,
        },
        ClientProfile {
            id: "c2".to_string(),
            name: "John Smith".to_string(),
            username: "johns_gains".to_string(),
            role: UserRole::Client,
            avatar_url: Some(
                "https://ui-avatars.com/api/?name=John+Smith&background=EB4D4B&color=fff"
                    .to_string(),
            ),
            coach_id: "coach_rushi".to_string(),
            passport_code: "JS-8821-B2A".to_string(),
            dob: "1990-08-20".to_string(),
            age: 33,
            occupation: "Architect".to_string(),
            height_cm: 182.0,
            start_weight_kg: 95.0,
            current_weight_kg: 91.2,
            goal: "Hypertrophy".to_string(),
            subscription_end_date: "2024-06-15".to_string(),
            daily_macro_targets: Macros {
                calories: 2800.0,
                protein: 200.0,
                carbs: 300.0,
                fats: 80.0,
                fiber: 40.0,
            },
            meal_plan: MealPlan::new(),
            habits: vec![Habit {
                id: "h4".to_string(),
                name: "Creatine Intake".to_string(),
                frequency: HabitFrequency::Daily,
                completed: false,
            }],
            step_goal: 10000,
            weekly_step_goal: Some(70000),
            status: ClientStatus::Flagged,
        },
    ]
}

pub fn weight_logs() -> Vec<WeightLog> {
    let entry = |id: &str, client_id: &str, date: &str, kg: f64, source, status| WeightLog {
        id: id.to_string(),
        client_id: client_id.to_string(),
        date: date.to_string(),
        weight_kg: kg,
        source,
        trend_status: Some(status),
    };

    vec![
        entry("w1", "c1", "2024-05-20", 67.5, WeightSource::Manual, TrendStatus::Green),
        entry("w2", "c1", "2024-05-21", 67.2, WeightSource::Manual, TrendStatus::Green),
        entry("w3", "c1", "2024-05-22", 67.0, WeightSource::Manual, TrendStatus::Green),
        entry("w4", "c1", "2024-05-23", 66.8, WeightSource::Manual, TrendStatus::Green),
        entry("w5", "c1", "2024-05-24", 66.5, WeightSource::Photo, TrendStatus::Green),
        entry("w6", "c2", "2024-05-22", 90.0, WeightSource::Manual, TrendStatus::Green),
        entry("w7", "c2", "2024-05-23", 90.5, WeightSource::Manual, TrendStatus::Amber),
        entry("w8", "c2", "2024-05-24", 91.2, WeightSource::Manual, TrendStatus::Red),
    ]
}

/// Seed food logs dated "now" so the daily nutrition card has content on a
/// fresh install.
pub fn food_logs() -> Vec<FoodLog> {
    vec![
        FoodLog {
            id: "f1".to_string(),
            client_id: "c1".to_string(),
            date: now_iso(),
            meal_type: "Breakfast".to_string(),
            food_name: "Masala Dosa".to_string(),
            grams: 180.0,
            macros: Macros {
                calories: 350.0,
                protein: 8.0,
                carbs: 65.0,
                fats: 12.0,
                fiber: 4.0,
            },
            photo_url: None,
            ai_confidence: None,
            is_verified: true,
        },
        FoodLog {
            id: "f2".to_string(),
            client_id: "c1".to_string(),
            date: now_iso(),
            meal_type: "Lunch".to_string(),
            food_name: "Chicken Biryani".to_string(),
            grams: 400.0,
            macros: Macros {
                calories: 600.0,
                protein: 35.0,
                carbs: 70.0,
                fats: 20.0,
                fiber: 5.0,
            },
            photo_url: None,
            ai_confidence: None,
            is_verified: true,
        },
    ]
}

pub fn measurements() -> Vec<MeasurementLog> {
    let entry = |id: &str, date: &str, chest, waist, hips, arms, thighs, photo: &str| {
        MeasurementLog {
            id: id.to_string(),
            client_id: "c1".to_string(),
            date: date.to_string(),
            chest: Some(chest),
            waist: Some(waist),
            hips: Some(hips),
            arms: Some(arms),
            thighs: Some(thighs),
            notes: None,
            photo_url: Some(photo.to_string()),
        }
    };

    vec![
        entry(
            "m1", "2024-05-01", 95.0, 75.0, 98.0, 30.0, 55.0,
            "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?auto=format&fit=crop&w=500&q=80",
        ),
        entry(
            "m2", "2024-05-08", 94.5, 74.0, 97.5, 30.2, 54.5,
            "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&w=500&q=80",
        ),
        entry(
            "m3", "2024-05-15", 94.0, 72.5, 97.0, 30.5, 54.0,
            "https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?auto=format&fit=crop&w=500&q=80",
        ),
    ]
}

pub fn workouts() -> Vec<Workout> {
    let exercise = |id: &str, name: &str, sets: u32, reps: &str, completed: bool| Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        weight_kg: None,
        completed,
        video_url: None,
        notes: None,
    };

    vec![
        Workout {
            id: "wk1".to_string(),
            client_id: "c1".to_string(),
            day_of_week: "Monday".to_string(),
            title: "Lower Body Power".to_string(),
            completed: true,
            exercises: vec![
                exercise("ex1", "Barbell Squat", 4, "6-8", true),
                exercise("ex2", "Romanian Deadlift", 3, "8-10", true),
                exercise("ex3", "Leg Extension", 3, "12-15", true),
            ],
        },
        Workout {
            id: "wk2".to_string(),
            client_id: "c1".to_string(),
            day_of_week: "Tuesday".to_string(),
            title: "Upper Body Push".to_string(),
            completed: false,
            exercises: vec![
                exercise("ex4", "Bench Press", 4, "6-8", false),
                exercise("ex5", "Overhead Press", 3, "8-10", false),
                exercise("ex6", "Lateral Raises", 3, "12-15", false),
            ],
        },
    ]
}

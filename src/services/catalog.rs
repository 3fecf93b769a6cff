// SPDX-License-Identifier: MIT

//! Static food and exercise catalogs.
//!
//! Immutable reference data available to all users; searched locally before
//! falling back to the AI food lookup.

use crate::models::{ExerciseDefinition, FoodItem, MuscleGroup};

/// Service holding the built-in catalogs.
#[derive(Default, Clone)]
pub struct CatalogService {
    foods: Vec<FoodItem>,
    exercises: Vec<ExerciseDefinition>,
}

impl CatalogService {
    /// Build the catalogs from the built-in tables.
    pub fn builtin() -> Self {
        Self {
            foods: food_database(),
            exercises: exercise_library(),
        }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    /// Case-insensitive substring search over food names.
    pub fn search_foods(&self, query: &str) -> Vec<&FoodItem> {
        let query = query.to_lowercase();
        self.foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query))
            .collect()
    }
}

fn food(id: &str, name: &str, cal: f64, protein: f64, carbs: f64, fats: f64, fiber: f64, image: &str) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        calories_per_100g: cal,
        protein_per_100g: protein,
        carbs_per_100g: carbs,
        fats_per_100g: fats,
        fiber_per_100g: fiber,
        image_url: image.to_string(),
    }
}

/// Nutrition lookup table (per 100g).
fn food_database() -> Vec<FoodItem> {
    vec![
        // Protein (animal)
        food("p1", "Chicken Breast (Raw)", 110.0, 23.0, 0.0, 1.2, 0.0, "https://images.unsplash.com/photo-1604503468506-a8da13d82791?auto=format&fit=crop&w=200&q=80"),
        food("p2", "Chicken Breast (Grilled)", 165.0, 31.0, 0.0, 3.6, 0.0, "https://images.unsplash.com/photo-1532550907401-a500c9a57435?auto=format&fit=crop&w=200&q=80"),
        food("p4", "Egg (Whole, Large)", 155.0, 13.0, 1.1, 11.0, 0.0, "https://images.unsplash.com/photo-1506976785307-8732e854ad03?auto=format&fit=crop&w=200&q=80"),
        food("p5", "Egg Whites (Liquid)", 52.0, 11.0, 0.7, 0.2, 0.0, "https://images.unsplash.com/photo-1498654077810-12c21d4d6dc3?auto=format&fit=crop&w=200&q=80"),
        food("p6", "Salmon (Raw)", 208.0, 20.0, 0.0, 13.0, 0.0, "https://images.unsplash.com/photo-1574781330855-d0db8cc6a79c?auto=format&fit=crop&w=200&q=80"),
        food("p8", "Lean Ground Beef (95%)", 137.0, 21.0, 0.0, 5.0, 0.0, "https://images.unsplash.com/photo-1588168333986-5078d3ae3976?auto=format&fit=crop&w=200&q=80"),
        food("p10", "Tuna (Canned in Water)", 116.0, 26.0, 0.0, 1.0, 0.0, "https://images.unsplash.com/photo-1599084993091-1cb5c0721cc6?auto=format&fit=crop&w=200&q=80"),
        // Protein (veg)
        food("v1", "Paneer (Raw)", 296.0, 18.0, 1.2, 23.0, 0.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e6/Paneer_%28Indian_cottage_cheese%29.jpg/240px-Paneer_%28Indian_cottage_cheese%29.jpg"),
        food("v2", "Tofu (Firm)", 144.0, 15.0, 3.0, 8.0, 2.0, "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?auto=format&fit=crop&w=200&q=80"),
        food("v3", "Soya Chunks", 345.0, 52.0, 33.0, 0.5, 13.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d3/Soya_Chunks_Curry.jpg/240px-Soya_Chunks_Curry.jpg"),
        food("v4", "Greek Yogurt (Non-Fat)", 59.0, 10.0, 3.6, 0.4, 0.0, "https://images.unsplash.com/photo-1488477181946-6428a0291777?auto=format&fit=crop&w=200&q=80"),
        food("v5", "Lentils (Cooked)", 116.0, 9.0, 20.0, 0.4, 8.0, "https://images.unsplash.com/photo-1547941126-3d5322b218b0?auto=format&fit=crop&w=200&q=80"),
        // Supplements
        food("sup1", "Whey Protein Isolate (Scoop)", 370.0, 90.0, 1.0, 1.0, 0.0, "https://images.unsplash.com/photo-1579722821273-0f6c7d44362f?auto=format&fit=crop&w=200&q=80"),
        food("sup3", "Casein Protein", 360.0, 85.0, 3.0, 1.5, 0.0, "https://images.unsplash.com/photo-1593095948071-474c5cc2989d?auto=format&fit=crop&w=200&q=80"),
        // Nuts & seeds
        food("ns1", "Almonds", 579.0, 21.0, 22.0, 50.0, 12.5, "https://images.unsplash.com/photo-1563546056-b09e5306d15a?auto=format&fit=crop&w=200&q=80"),
        food("ns3", "Chia Seeds", 486.0, 17.0, 42.0, 31.0, 34.0, "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?auto=format&fit=crop&w=200&q=80"),
        food("ns6", "Peanut Butter (Natural)", 588.0, 25.0, 20.0, 50.0, 6.0, "https://images.unsplash.com/photo-1563729768-6af784667808?auto=format&fit=crop&w=200&q=80"),
        // Carbohydrates
        food("c1", "White Rice (Cooked)", 130.0, 2.7, 28.0, 0.3, 0.4, "https://images.unsplash.com/photo-1586201375761-83865001e31c?auto=format&fit=crop&w=200&q=80"),
        food("c2", "Brown Rice (Cooked)", 112.0, 2.3, 23.0, 0.8, 1.8, "https://images.unsplash.com/photo-1596560548464-f010549b84d7?auto=format&fit=crop&w=200&q=80"),
        food("c3", "Oats / Oatmeal (Raw)", 389.0, 16.9, 66.0, 6.9, 10.6, "https://images.unsplash.com/photo-1517673132405-a56a62b18caf?auto=format&fit=crop&w=200&q=80"),
        food("c4", "Sweet Potato (Boiled)", 86.0, 1.6, 20.0, 0.1, 3.0, "https://images.unsplash.com/photo-1596097635121-14b63b845319?auto=format&fit=crop&w=200&q=80"),
        // Healthy fats
        food("f1", "Avocado", 160.0, 2.0, 8.5, 14.7, 6.7, "https://images.unsplash.com/photo-1523049673856-38866f8c6795?auto=format&fit=crop&w=200&q=80"),
        food("f2", "Olive Oil", 884.0, 0.0, 0.0, 100.0, 0.0, "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?auto=format&fit=crop&w=200&q=80"),
        // Fruits & veg
        food("fv1", "Banana", 89.0, 1.1, 22.8, 0.3, 2.6, "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?auto=format&fit=crop&w=200&q=80"),
        food("fv4", "Broccoli (Steamed)", 35.0, 2.4, 7.2, 0.4, 3.3, "https://images.unsplash.com/photo-1584270354949-c26b0d5b4a0c?auto=format&fit=crop&w=200&q=80"),
        food("fv5", "Spinach (Raw)", 23.0, 2.9, 3.6, 0.4, 2.2, "https://images.unsplash.com/photo-1576045057995-568f588f82fb?auto=format&fit=crop&w=200&q=80"),
        // Indian cuisine
        food("ind1", "Roti / Chapati (Whole Wheat)", 297.0, 10.0, 56.0, 3.0, 9.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c5/Roti_1.jpg/240px-Roti_1.jpg"),
        food("ind2", "Dal Tadka (Yellow Lentil)", 115.0, 6.0, 14.0, 4.0, 5.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f6/Dal_Tadka.jpg/240px-Dal_Tadka.jpg"),
        food("ind3", "Chicken Biryani", 170.0, 12.0, 22.0, 6.0, 1.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/c/cf/Biryani_of_Lahore.jpg/240px-Biryani_of_Lahore.jpg"),
        food("ind5", "Idli", 58.0, 2.0, 12.0, 0.1, 0.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/1/11/Idli_Sambar.JPG/240px-Idli_Sambar.JPG"),
        food("ind6", "Dosa (Plain)", 168.0, 3.9, 29.0, 3.7, 0.9, "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9f/Dosa_at_Sri_Ganesha_Restauran%2C_Bangkok_%284487048004%29.jpg/240px-Dosa_at_Sri_Ganesha_Restauran%2C_Bangkok_%284487048004%29.jpg"),
        food("ind15", "Tandoori Chicken", 195.0, 28.0, 2.0, 8.0, 0.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/5/53/Tandoori_chicken_laccha_pyaz1_%2836886283595%29.jpg/240px-Tandoori_chicken_laccha_pyaz1_%2836886283595%29.jpg"),
        food("ind16", "Butter Chicken", 250.0, 14.0, 8.0, 18.0, 1.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3c/Chicken_makhani.jpg/240px-Chicken_makhani.jpg"),
        food("ind18", "Palak Paneer", 180.0, 9.0, 6.0, 14.0, 3.0, "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a6/Palak_Paneer_01.jpg/240px-Palak_Paneer_01.jpg"),
    ]
}

fn exercise(id: &str, name: &str, group: MuscleGroup, gif: &str, notes: &str) -> ExerciseDefinition {
    ExerciseDefinition {
        id: id.to_string(),
        name: name.to_string(),
        muscle_group: group,
        gif_url: gif.to_string(),
        notes: notes.to_string(),
    }
}

/// Exercise library with form cues.
fn exercise_library() -> Vec<ExerciseDefinition> {
    use MuscleGroup::*;
    vec![
        exercise("ex_c1", "Barbell Bench Press", Chest, "https://media.giphy.com/media/3o7TKn6e6c4e6c4e6c/giphy.gif", "Keep back arched, feet planted. Lower bar to mid-chest."),
        exercise("ex_c2", "Incline Dumbbell Press", Chest, "https://media.giphy.com/media/26AHG5KGFxSkQLBQQ/giphy.gif", "Bench at 30-45 degrees. Press straight up."),
        exercise("ex_c3", "Cable Flys", Chest, "https://media.giphy.com/media/l41Yh18f5Tbi9HEzu/giphy.gif", "Slight bend in elbows. Squeeze chest at peak."),
        exercise("ex_b1", "Pull Ups", Back, "https://media.giphy.com/media/eM251IxZWv4qL81rTu/giphy.gif", "Full range of motion. Chin over bar."),
        exercise("ex_b2", "Barbell Row", Back, "https://media.giphy.com/media/3o7qDEq2bMbcbPRQ2c/giphy.gif", "Keep back straight. Pull to lower ribcage."),
        exercise("ex_b3", "Lat Pulldown", Back, "https://media.giphy.com/media/13HgwGsXF0aiGY/giphy.gif", "Wide grip. Pull elbows down and back."),
        exercise("ex_l1", "Barbell Squat", Legs, "https://media.giphy.com/media/1iTH1WIUjM0VATSw/giphy.gif", "Knees tracking over toes. Break parallel."),
        exercise("ex_l2", "Leg Press", Legs, "https://media.giphy.com/media/3o7TKUM3IgJBX2as9O/giphy.gif", "Do not lock knees at top. Control weight down."),
        exercise("ex_l3", "Romanian Deadlift", Legs, "https://media.giphy.com/media/3o7TKM1lP4H15oYlEI/giphy.gif", "Hinge at hips. Keep bar close to shins."),
        exercise("ex_s1", "Overhead Press", Shoulders, "https://media.giphy.com/media/3o7TKr3nzbh5WgCFxe/giphy.gif", "Core tight. Press bar vertically."),
        exercise("ex_s2", "Lateral Raises", Shoulders, "https://media.giphy.com/media/3o7TKP4tLpQd1X1lV6/giphy.gif", "Lead with elbows. Control the descent."),
        exercise("ex_a1", "Bicep Curls", Arms, "https://media.giphy.com/media/3o7TKDkDbIDJieoJsk/giphy.gif", "Keep elbows pinned to sides."),
        exercise("ex_a2", "Tricep Pushdowns", Arms, "https://media.giphy.com/media/3o7TKU5C4434l77vC8/giphy.gif", "Full extension at bottom."),
        exercise("ex_cr1", "Plank", Core, "https://media.giphy.com/media/xT8qBff8cRRFf7k2u4/giphy.gif", "Keep body in straight line. Squeeze glutes."),
        exercise("ex_cr2", "Crunches", Core, "https://media.giphy.com/media/1qfKUnW2ckL7y/giphy.gif", "Lift shoulder blades off floor."),
        exercise("ex_ca1", "Treadmill Run", Cardio, "https://media.giphy.com/media/3o7TKn6e6c4e6c4e6c/giphy.gif", "Maintain steady pace."),
        exercise("ex_ca2", "Cycling", Cardio, "https://media.giphy.com/media/3o7TKTK9J6yJ9J6yJ9/giphy.gif", "Adjust resistance."),
        exercise("ex_ca3", "Jump Rope", Cardio, "https://media.giphy.com/media/3o7TKq8i9X6i9X6i9X/giphy.gif", "Stay on toes. Keep rhythm."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = CatalogService::builtin();
        let hits = catalog.search_foods("chicken");
        assert!(hits.iter().any(|f| f.name == "Chicken Breast (Grilled)"));
        assert!(hits.iter().any(|f| f.name == "Chicken Biryani"));
    }

    #[test]
    fn test_search_no_match() {
        let catalog = CatalogService::builtin();
        assert!(catalog.search_foods("zzzz").is_empty());
    }
}

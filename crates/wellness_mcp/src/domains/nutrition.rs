//! Nutritional intake analysis over a fixed food-composition table.

use schemars::JsonSchema;
use serde::Serialize;

struct FoodData {
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
}

// Per-serving reference values.
const FOOD_TABLE: &[FoodData] = &[
    // Proteins
    FoodData { name: "chicken breast", calories: 165.0, protein: 31.0, carbs: 0.0, fat: 3.6, fiber: 0.0, sugar: 0.0 },
    FoodData { name: "salmon", calories: 208.0, protein: 22.0, carbs: 0.0, fat: 12.0, fiber: 0.0, sugar: 0.0 },
    FoodData { name: "eggs", calories: 155.0, protein: 13.0, carbs: 1.0, fat: 11.0, fiber: 0.0, sugar: 1.0 },
    FoodData { name: "tofu", calories: 94.0, protein: 10.0, carbs: 2.0, fat: 6.0, fiber: 2.0, sugar: 1.0 },
    // Carbohydrates
    FoodData { name: "rice", calories: 130.0, protein: 2.7, carbs: 28.0, fat: 0.3, fiber: 0.4, sugar: 0.0 },
    FoodData { name: "bread", calories: 265.0, protein: 9.0, carbs: 49.0, fat: 3.2, fiber: 2.7, sugar: 5.0 },
    FoodData { name: "pasta", calories: 131.0, protein: 5.0, carbs: 25.0, fat: 1.1, fiber: 1.8, sugar: 0.8 },
    FoodData { name: "oats", calories: 389.0, protein: 17.0, carbs: 66.0, fat: 7.0, fiber: 11.0, sugar: 1.0 },
    // Fruits
    FoodData { name: "apple", calories: 52.0, protein: 0.3, carbs: 14.0, fat: 0.2, fiber: 2.4, sugar: 10.0 },
    FoodData { name: "banana", calories: 89.0, protein: 1.1, carbs: 23.0, fat: 0.3, fiber: 2.6, sugar: 12.0 },
    FoodData { name: "orange", calories: 47.0, protein: 0.9, carbs: 12.0, fat: 0.1, fiber: 2.4, sugar: 9.0 },
    // Vegetables
    FoodData { name: "broccoli", calories: 34.0, protein: 2.8, carbs: 7.0, fat: 0.4, fiber: 2.6, sugar: 1.5 },
    FoodData { name: "spinach", calories: 23.0, protein: 2.9, carbs: 3.6, fat: 0.4, fiber: 2.2, sugar: 0.4 },
    FoodData { name: "carrots", calories: 41.0, protein: 0.9, carbs: 10.0, fat: 0.2, fiber: 2.8, sugar: 4.7 },
    // Dairy
    FoodData { name: "milk", calories: 42.0, protein: 3.4, carbs: 5.0, fat: 1.0, fiber: 0.0, sugar: 5.0 },
    FoodData { name: "yogurt", calories: 59.0, protein: 10.0, carbs: 3.6, fat: 0.4, fiber: 0.0, sugar: 3.2 },
    FoodData { name: "cheese", calories: 113.0, protein: 7.0, carbs: 1.0, fat: 9.0, fiber: 0.0, sugar: 1.0 },
    // Nuts and seeds
    FoodData { name: "almonds", calories: 579.0, protein: 21.0, carbs: 22.0, fat: 50.0, fiber: 12.0, sugar: 4.0 },
    FoodData { name: "walnuts", calories: 654.0, protein: 15.0, carbs: 14.0, fat: 65.0, fiber: 7.0, sugar: 3.0 },
];

#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    pub total_calories: i64,
    pub macros: Macros,
    pub analysis: Vec<String>,
    pub recommendations: Vec<String>,
    pub health_score: u8,
    pub meal_type: String,
}

fn portion_multiplier(portion: &str) -> f64 {
    let portion = portion.to_lowercase();
    if portion.contains("half") || portion.contains("0.5") {
        0.5
    } else if portion.contains("double") || portion.contains('2') {
        2.0
    } else if portion.contains("small") {
        0.7
    } else if portion.contains("large") {
        1.5
    } else {
        1.0
    }
}

fn lookup(food: &str) -> Option<&'static FoodData> {
    let normalized = food.to_lowercase().trim().to_string();
    // Later table entries win on overlapping matches.
    let mut found = None;
    for entry in FOOD_TABLE {
        if normalized.contains(entry.name) || entry.name.contains(normalized.as_str()) {
            found = Some(entry);
        }
    }
    found
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn analyze(
    foods: &[String],
    portions: Option<&[String]>,
    meal_type: Option<&str>,
    user_goals: Option<&[String]>,
) -> NutritionAnalysis {
    let meal_type = meal_type.unwrap_or("daily").to_string();

    let mut total_calories = 0.0;
    let mut total_protein = 0.0;
    let mut total_carbs = 0.0;
    let mut total_fat = 0.0;
    let mut total_fiber = 0.0;
    let mut total_sugar = 0.0;

    let mut analysis = Vec::new();
    let mut recommendations = Vec::new();

    for (index, food) in foods.iter().enumerate() {
        let Some(data) = lookup(food) else {
            analysis.push(format!(
                "Unable to find detailed nutrition data for \"{food}\". Consider logging more \
specific food items."
            ));
            continue;
        };
        let multiplier = portions
            .and_then(|p| p.get(index))
            .map(|p| portion_multiplier(p))
            .unwrap_or(1.0);
        total_calories += data.calories * multiplier;
        total_protein += data.protein * multiplier;
        total_carbs += data.carbs * multiplier;
        total_fat += data.fat * multiplier;
        total_fiber += data.fiber * multiplier;
        total_sugar += data.sugar * multiplier;
    }

    let protein_pct = if total_calories > 0.0 { total_protein * 4.0 / total_calories * 100.0 } else { 0.0 };
    let carb_pct = if total_calories > 0.0 { total_carbs * 4.0 / total_calories * 100.0 } else { 0.0 };
    let fat_pct = if total_calories > 0.0 { total_fat * 9.0 / total_calories * 100.0 } else { 0.0 };

    if protein_pct < 15.0 {
        analysis.push("Protein intake appears low. Consider adding more protein sources.".into());
        recommendations.push("Include lean proteins like chicken, fish, eggs, or legumes".into());
    } else if protein_pct > 35.0 {
        analysis.push(
            "Protein intake is quite high. Ensure you're getting enough carbs and healthy fats."
                .into(),
        );
    } else {
        analysis.push("Protein intake looks good!".into());
    }

    if carb_pct < 30.0 {
        analysis.push("Carbohydrate intake is low. Consider adding complex carbs for energy.".into());
        recommendations.push("Include whole grains, fruits, and vegetables for healthy carbs".into());
    } else if carb_pct > 65.0 {
        analysis.push(
            "Carbohydrate intake is high. Consider balancing with more protein and healthy fats."
                .into(),
        );
    }

    if fat_pct < 20.0 {
        analysis.push("Fat intake is low. Healthy fats are important for nutrient absorption.".into());
        recommendations
            .push("Include healthy fats like avocados, nuts, olive oil, and fatty fish".into());
    } else if fat_pct > 40.0 {
        analysis.push(
            "Fat intake is quite high. Consider moderating portion sizes of high-fat foods.".into(),
        );
    }

    if total_fiber < 10.0 {
        analysis.push("Fiber intake is low. Increase fruits, vegetables, and whole grains.".into());
        recommendations.push("Aim for at least 25-35g of fiber daily from whole foods".into());
    }

    if total_sugar > 50.0 {
        analysis.push("Sugar intake is high. Consider reducing added sugars and processed foods.".into());
        recommendations.push("Focus on natural sugars from fruits rather than processed foods".into());
    }

    if meal_type == "breakfast" {
        if protein_pct < 20.0 {
            recommendations.push("Add protein to your breakfast for better satiety and energy".into());
        }
        if total_fiber < 5.0 {
            recommendations
                .push("Include fiber-rich foods like oats or fruits for sustained energy".into());
        }
    }

    if let Some(goals) = user_goals {
        if goals.iter().any(|g| g == "weight loss") {
            recommendations.push("Focus on high-protein, high-fiber foods for satiety".into());
            recommendations.push("Consider portion control and mindful eating".into());
        }
        if goals.iter().any(|g| g == "muscle gain") {
            recommendations
                .push("Ensure adequate protein intake (1.6-2.2g per kg body weight)".into());
            recommendations.push("Include post-workout protein and carbs for recovery".into());
        }
    }

    let mut health_score: f64 = 50.0;
    if (15.0..=35.0).contains(&protein_pct) {
        health_score += 15.0;
    } else if (10.0..=40.0).contains(&protein_pct) {
        health_score += 10.0;
    }
    if (30.0..=65.0).contains(&carb_pct) {
        health_score += 15.0;
    } else if (25.0..=70.0).contains(&carb_pct) {
        health_score += 10.0;
    }
    if (20.0..=35.0).contains(&fat_pct) {
        health_score += 15.0;
    } else if (15.0..=40.0).contains(&fat_pct) {
        health_score += 10.0;
    }
    if total_fiber >= 10.0 {
        health_score += 10.0;
    } else if total_fiber >= 5.0 {
        health_score += 5.0;
    }
    if total_sugar > 50.0 {
        health_score -= 10.0;
    } else if total_sugar > 30.0 {
        health_score -= 5.0;
    }
    let health_score = health_score.clamp(0.0, 100.0) as u8;

    if recommendations.is_empty() {
        recommendations.push("Your nutrition looks balanced! Keep up the good work.".into());
        recommendations.push("Stay hydrated and consider meal timing for optimal energy".into());
    }
    recommendations.truncate(5);

    NutritionAnalysis {
        total_calories: total_calories.round() as i64,
        macros: Macros {
            protein: round1(total_protein),
            carbs: round1(total_carbs),
            fat: round1(total_fat),
            fiber: round1(total_fiber),
            sugar: round1(total_sugar),
        },
        analysis,
        recommendations,
        health_score,
        meal_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sums_known_foods() {
        let result = analyze(&strings(&["chicken breast", "rice"]), None, None, None);
        assert_eq!(result.total_calories, 295);
        assert_eq!(result.macros.protein, 33.7);
        assert_eq!(result.macros.carbs, 28.0);
    }

    #[test]
    fn portion_sizes_scale_totals() {
        let result = analyze(
            &strings(&["rice"]),
            Some(&strings(&["large"])),
            None,
            None,
        );
        assert_eq!(result.total_calories, 195);
    }

    #[test]
    fn unknown_food_adds_analysis_note() {
        let result = analyze(&strings(&["dragonfruit smoothie"]), None, None, None);
        assert!(result.analysis[0].contains("dragonfruit smoothie"));
        assert_eq!(result.total_calories, 0);
    }

    #[test]
    fn balanced_meal_scores_well() {
        // chicken breast + rice + broccoli: protein/carb/fat all in range
        let result = analyze(
            &strings(&["chicken breast", "rice", "broccoli", "apple", "oats"]),
            None,
            None,
            None,
        );
        assert!(result.health_score >= 80);
    }

    #[test]
    fn empty_recommendations_get_fallback_pair() {
        let result = analyze(
            &strings(&["chicken breast", "rice", "broccoli", "apple", "oats", "almonds"]),
            None,
            None,
            None,
        );
        if result.recommendations.len() == 2 {
            assert!(result.recommendations[0].contains("balanced"));
        }
        assert!(result.recommendations.len() <= 5);
    }

    #[test]
    fn weight_loss_goal_adds_recommendations() {
        let result = analyze(
            &strings(&["chicken breast", "rice", "broccoli"]),
            None,
            None,
            Some(&strings(&["weight loss"])),
        );
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("high-protein, high-fiber")));
    }

    #[test]
    fn recommendations_cap_at_five() {
        let result = analyze(
            &strings(&["apple"]),
            None,
            Some("breakfast"),
            Some(&strings(&["weight loss", "muscle gain"])),
        );
        assert!(result.recommendations.len() <= 5);
    }
}

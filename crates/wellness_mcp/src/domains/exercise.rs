//! Exercise catalogue, weekly plan generation, and workout logging.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Cardio,
    Strength,
    Flexibility,
    Balance,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExerciseKind {
    fn label(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Balance => "balance",
        }
    }
}

impl Intensity {
    fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct Exercise {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    pub duration: &'static str,
    pub intensity: Intensity,
    pub equipment: &'static [&'static str],
    pub instructions: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub day: &'static str,
    pub exercises: Vec<Exercise>,
    pub total_duration: String,
    pub calories_burned: u32,
    pub notes: Vec<String>,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    pub workouts_completed: u32,
    pub total_minutes: u32,
    pub calories_burned: u32,
    pub streak: u32,
}

pub const EXERCISE_CATALOG: &[Exercise] = &[
    Exercise {
        name: "Push-ups",
        kind: ExerciseKind::Strength,
        duration: "10-15 minutes",
        intensity: Intensity::Moderate,
        equipment: &[],
        instructions: "Start in plank position, lower body to ground, push back up. Keep core \
tight and body straight.",
        benefits: &["chest strength", "arm strength", "core stability"],
    },
    Exercise {
        name: "Squats",
        kind: ExerciseKind::Strength,
        duration: "10-15 minutes",
        intensity: Intensity::Moderate,
        equipment: &[],
        instructions: "Stand with feet shoulder-width apart, lower hips back and down, return to \
standing.",
        benefits: &["leg strength", "glute strength", "core stability"],
    },
    Exercise {
        name: "Jumping Jacks",
        kind: ExerciseKind::Cardio,
        duration: "5-10 minutes",
        intensity: Intensity::Moderate,
        equipment: &[],
        instructions: "Jump feet apart while raising arms overhead, then jump back to starting \
position.",
        benefits: &["cardiovascular health", "full body coordination", "calorie burning"],
    },
    Exercise {
        name: "Plank",
        kind: ExerciseKind::Strength,
        duration: "5-10 minutes",
        intensity: Intensity::Moderate,
        equipment: &[],
        instructions: "Hold body straight in push-up position, supporting weight on forearms and \
toes.",
        benefits: &["core strength", "shoulder stability", "posture improvement"],
    },
    Exercise {
        name: "Burpees",
        kind: ExerciseKind::Cardio,
        duration: "10-15 minutes",
        intensity: Intensity::High,
        equipment: &[],
        instructions: "Squat down, jump back to plank, do push-up, jump feet forward, jump up \
with arms overhead.",
        benefits: &["full body strength", "cardiovascular fitness", "calorie burning"],
    },
    Exercise {
        name: "Lunges",
        kind: ExerciseKind::Strength,
        duration: "10-15 minutes",
        intensity: Intensity::Moderate,
        equipment: &[],
        instructions: "Step forward into lunge position, lower back knee toward ground, return to \
standing.",
        benefits: &["leg strength", "balance", "hip flexibility"],
    },
    Exercise {
        name: "Mountain Climbers",
        kind: ExerciseKind::Cardio,
        duration: "5-10 minutes",
        intensity: Intensity::High,
        equipment: &[],
        instructions: "Start in plank position, alternate bringing knees to chest in running \
motion.",
        benefits: &["cardiovascular fitness", "core strength", "agility"],
    },
    Exercise {
        name: "Yoga Flow",
        kind: ExerciseKind::Flexibility,
        duration: "15-30 minutes",
        intensity: Intensity::Low,
        equipment: &["yoga mat"],
        instructions: "Flow through various yoga poses focusing on breath and flexibility.",
        benefits: &["flexibility", "stress relief", "balance"],
    },
    Exercise {
        name: "Brisk Walking",
        kind: ExerciseKind::Cardio,
        duration: "20-45 minutes",
        intensity: Intensity::Low,
        equipment: &[],
        instructions: "Walk at a brisk pace, maintain good posture, swing arms naturally.",
        benefits: &["cardiovascular health", "low impact", "mental health"],
    },
    Exercise {
        name: "Deadlifts",
        kind: ExerciseKind::Strength,
        duration: "15-20 minutes",
        intensity: Intensity::High,
        equipment: &["dumbbells", "barbell"],
        instructions: "Lift weight from ground to hip level, keep back straight, engage core.",
        benefits: &["posterior chain strength", "functional movement", "posture"],
    },
];

const DAYS_OF_WEEK: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

fn suitable_exercises(level: FitnessLevel, available_equipment: &[String]) -> Vec<&'static Exercise> {
    EXERCISE_CATALOG
        .iter()
        .filter(|exercise| {
            let has_equipment = exercise.equipment.is_empty()
                || exercise
                    .equipment
                    .iter()
                    .any(|eq| available_equipment.iter().any(|have| have == eq));
            let intensity_ok =
                level != FitnessLevel::Beginner || exercise.intensity != Intensity::High;
            has_equipment && intensity_ok
        })
        .collect()
}

/// Build the fixed weekly rotation: strength Tue/Thu/Sat, cardio (plus one
/// flexibility block) Mon/Wed/Fri, active recovery Sunday.
pub fn create_weekly_plan(
    level: Option<FitnessLevel>,
    available_time: Option<u32>,
    goals: Option<&[String]>,
    equipment: Option<&[String]>,
) -> (Vec<WorkoutDay>, Vec<String>) {
    let level = level.unwrap_or(FitnessLevel::Beginner);
    let time = available_time.unwrap_or(30);
    let default_goals = vec!["general fitness".to_string()];
    let goals = goals.map(|g| g.to_vec()).unwrap_or(default_goals);
    let equipment = equipment.map(|e| e.to_vec()).unwrap_or_default();

    let suitable = suitable_exercises(level, &equipment);
    let mut plan = Vec::with_capacity(DAYS_OF_WEEK.len());

    for (index, day) in DAYS_OF_WEEK.into_iter().enumerate() {
        let (exercises, total_duration, calories, note): (Vec<Exercise>, u32, u32, &str) =
            match index {
                1 | 3 | 5 => {
                    let strength: Vec<Exercise> = suitable
                        .iter()
                        .filter(|e| e.kind == ExerciseKind::Strength)
                        .take(4.min((time / 10) as usize))
                        .map(|e| (*e).clone())
                        .collect();
                    let duration = exercises_duration(&strength);
                    (strength, duration, duration * 6, "Focus on proper form over speed")
                }
                0 | 2 | 4 => {
                    let mut cardio: Vec<Exercise> = suitable
                        .iter()
                        .filter(|e| e.kind == ExerciseKind::Cardio)
                        .take(2)
                        .map(|e| (*e).clone())
                        .collect();
                    cardio.extend(
                        suitable
                            .iter()
                            .filter(|e| e.kind == ExerciseKind::Flexibility)
                            .take(1)
                            .map(|e| (*e).clone()),
                    );
                    let duration = time.min(35);
                    (cardio, duration, duration * 8, "Stay hydrated during cardio exercises")
                }
                _ => {
                    let light: Vec<Exercise> = suitable
                        .iter()
                        .filter(|e| {
                            e.kind == ExerciseKind::Flexibility || e.intensity == Intensity::Low
                        })
                        .take(2)
                        .map(|e| (*e).clone())
                        .collect();
                    (
                        light,
                        20,
                        60,
                        "Active recovery day - focus on stretching and light movement",
                    )
                }
            };

        plan.push(WorkoutDay {
            day,
            exercises,
            total_duration: format!("{total_duration} minutes"),
            calories_burned: calories,
            notes: vec![note.to_string()],
        });
    }

    let mut recommendations = Vec::new();
    if goals.iter().any(|g| g == "weight loss") {
        recommendations.push("Focus on consistency and gradually increase intensity".to_string());
        recommendations
            .push("Combine exercise with a balanced diet for best results".to_string());
    }
    if goals.iter().any(|g| g == "muscle gain") {
        recommendations
            .push("Ensure adequate protein intake and rest between strength sessions".to_string());
        recommendations.push("Progressive overload - gradually increase difficulty".to_string());
    }
    if goals.iter().any(|g| g == "endurance") {
        recommendations.push("Gradually increase workout duration and intensity".to_string());
        recommendations.push("Include both cardio and strength training".to_string());
    }
    recommendations.push("Listen to your body and rest when needed".to_string());
    recommendations.push("Stay consistent - aim for at least 3-4 workouts per week".to_string());

    (plan, recommendations)
}

fn exercises_duration(exercises: &[Exercise]) -> u32 {
    exercises.len() as u32 * 10
}

pub fn log_workout(completed: Option<bool>, duration: Option<u32>) -> (WorkoutProgress, Vec<String>) {
    let completed = completed.unwrap_or(false);
    let duration = duration.unwrap_or(0);

    // Single-session stand-in values; there is no stored history to fold
    // this into.
    let progress = WorkoutProgress {
        workouts_completed: if completed { 1 } else { 0 },
        total_minutes: duration,
        calories_burned: duration * 6,
        streak: if completed { 1 } else { 0 },
    };

    let mut recommendations = Vec::new();
    if completed {
        recommendations.push("Great job completing your workout!".to_string());
        recommendations.push("Remember to stay hydrated and get adequate rest".to_string());
        if duration < 20 {
            recommendations.push(
                "Consider gradually increasing workout duration for better results".to_string(),
            );
        }
    } else {
        recommendations.push("No worries! Every step counts toward your fitness goals".to_string());
        recommendations
            .push("Try to identify what prevented you from completing the workout".to_string());
        recommendations.push("Consider shorter workouts if time is a constraint".to_string());
    }

    (progress, recommendations)
}

pub fn exercise_info(name: &str) -> Result<String, String> {
    let normalized = name.to_lowercase();
    let found = EXERCISE_CATALOG.iter().find(|exercise| {
        let key = exercise.name.to_lowercase();
        normalized.contains(&key) || key.contains(&normalized)
    });

    match found {
        Some(exercise) => Ok(format!(
            "{name}\n\nType: {kind}\nDuration: {duration}\nIntensity: {intensity}\nEquipment \
needed: {equipment}\n\nInstructions: {instructions}\n\nBenefits: {benefits}",
            name = exercise.name,
            kind = exercise.kind.label(),
            duration = exercise.duration,
            intensity = exercise.intensity.label(),
            equipment = if exercise.equipment.is_empty() {
                "None".to_string()
            } else {
                exercise.equipment.join(", ")
            },
            instructions = exercise.instructions,
            benefits = exercise.benefits.join(", "),
        )),
        None => Err(format!(
            "Information for \"{name}\" is not available in our database. Try searching for \
common exercises like push-ups, squats, or jumping jacks."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beginner_plan_excludes_high_intensity() {
        let (plan, _) = create_weekly_plan(None, None, None, None);
        assert_eq!(plan.len(), 7);
        for day in &plan {
            for exercise in &day.exercises {
                assert_ne!(exercise.intensity, Intensity::High);
            }
        }
    }

    #[test]
    fn strength_days_land_on_tue_thu_sat() {
        let (plan, _) = create_weekly_plan(Some(FitnessLevel::Intermediate), Some(40), None, None);
        for day in &plan {
            match day.day {
                "Tuesday" | "Thursday" | "Saturday" => {
                    assert!(day.exercises.iter().all(|e| e.kind == ExerciseKind::Strength));
                    assert_eq!(day.notes, vec!["Focus on proper form over speed"]);
                }
                "Sunday" => {
                    assert_eq!(day.total_duration, "20 minutes");
                    assert_eq!(day.calories_burned, 60);
                }
                _ => {
                    assert_eq!(day.notes, vec!["Stay hydrated during cardio exercises"]);
                }
            }
        }
    }

    #[test]
    fn equipment_gates_the_catalog() {
        let with_barbell = vec!["barbell".to_string()];
        let suitable = suitable_exercises(FitnessLevel::Advanced, &with_barbell);
        assert!(suitable.iter().any(|e| e.name == "Deadlifts"));
        let bare = suitable_exercises(FitnessLevel::Advanced, &[]);
        assert!(!bare.iter().any(|e| e.name == "Deadlifts"));
        assert!(!bare.iter().any(|e| e.name == "Yoga Flow"));
    }

    #[test]
    fn short_available_time_limits_strength_exercises() {
        let (plan, _) = create_weekly_plan(Some(FitnessLevel::Beginner), Some(20), None, None);
        let tuesday = plan.iter().find(|d| d.day == "Tuesday").unwrap();
        assert_eq!(tuesday.exercises.len(), 2);
        assert_eq!(tuesday.total_duration, "20 minutes");
        assert_eq!(tuesday.calories_burned, 120);
    }

    #[test]
    fn goal_specific_recommendations() {
        let goals = vec!["weight loss".to_string()];
        let (_, recs) = create_weekly_plan(None, None, Some(&goals), None);
        assert!(recs.iter().any(|r| r.contains("balanced diet")));
        // General advice always closes the list
        assert_eq!(
            recs.last().map(String::as_str),
            Some("Stay consistent - aim for at least 3-4 workouts per week")
        );
    }

    #[test]
    fn log_completed_workout() {
        let (progress, recs) = log_workout(Some(true), Some(45));
        assert_eq!(progress.workouts_completed, 1);
        assert_eq!(progress.calories_burned, 270);
        assert_eq!(progress.streak, 1);
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn log_short_workout_suggests_longer() {
        let (_, recs) = log_workout(Some(true), Some(15));
        assert!(recs.iter().any(|r| r.contains("increasing workout duration")));
    }

    #[test]
    fn log_missed_workout_encourages() {
        let (progress, recs) = log_workout(None, None);
        assert_eq!(progress.workouts_completed, 0);
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("No worries"));
    }

    #[test]
    fn exercise_info_bidirectional_match() {
        assert!(exercise_info("push-ups").is_ok());
        // User text containing the catalogue name also matches
        assert!(exercise_info("how do I do squats").is_ok());
        let err = exercise_info("underwater basket weaving").unwrap_err();
        assert!(err.contains("not available"));
    }
}

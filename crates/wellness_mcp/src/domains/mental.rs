//! Mood tracking, guided wellness activities, and crisis support content.

use rand::{RngExt, rng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Breathing,
    Meditation,
    Mindfulness,
    Journaling,
    Relaxation,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct WellnessActivity {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub instructions: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub date: String,
    pub mood: u8,
    pub emotions: Vec<String>,
    pub stress_level: u8,
    pub notes: String,
    pub triggers: Vec<String>,
}

const ACTIVITY_CATALOG: &[WellnessActivity] = &[
    WellnessActivity {
        name: "Box Breathing",
        kind: ActivityKind::Breathing,
        duration: "5-10 minutes",
        difficulty: Difficulty::Easy,
        instructions: &[
            "Sit comfortably with your back straight",
            "Inhale slowly through your nose for 4 counts",
            "Hold your breath for 4 counts",
            "Exhale slowly through your mouth for 4 counts",
            "Hold empty for 4 counts",
            "Repeat this cycle 10-15 times",
        ],
        benefits: &["reduces anxiety", "improves focus", "calms nervous system"],
    },
    WellnessActivity {
        name: "Progressive Body Scan",
        kind: ActivityKind::Meditation,
        duration: "10-20 minutes",
        difficulty: Difficulty::Medium,
        instructions: &[
            "Lie down comfortably and close your eyes",
            "Start by focusing on your toes, notice any sensations",
            "Slowly move your attention up through each part of your body",
            "Spend 30 seconds on each body part",
            "Notice tension and consciously relax each area",
            "End by taking three deep breaths",
        ],
        benefits: &[
            "reduces physical tension",
            "improves body awareness",
            "promotes relaxation",
        ],
    },
    WellnessActivity {
        name: "Mindful Walking",
        kind: ActivityKind::Mindfulness,
        duration: "10-30 minutes",
        difficulty: Difficulty::Easy,
        instructions: &[
            "Choose a quiet path or space to walk",
            "Walk slower than your normal pace",
            "Focus on the sensation of your feet touching the ground",
            "Notice your surroundings without judgment",
            "When your mind wanders, gently return focus to walking",
            "End by standing still for a moment and taking deep breaths",
        ],
        benefits: &[
            "grounds you in the present",
            "combines exercise with mindfulness",
            "reduces rumination",
        ],
    },
    WellnessActivity {
        name: "Gratitude Journaling",
        kind: ActivityKind::Journaling,
        duration: "5-15 minutes",
        difficulty: Difficulty::Easy,
        instructions: &[
            "Find a quiet space with pen and paper or device",
            "Write down 3-5 things you are grateful for today",
            "Be specific about why you are grateful for each item",
            "Include both big and small things",
            "Reflect on how these things made you feel",
            "End by reading through your list once more",
        ],
        benefits: &[
            "improves mood",
            "shifts focus to positive aspects",
            "builds resilience",
        ],
    },
    WellnessActivity {
        name: "Progressive Muscle Relaxation",
        kind: ActivityKind::Relaxation,
        duration: "15-25 minutes",
        difficulty: Difficulty::Medium,
        instructions: &[
            "Lie down in a comfortable position",
            "Start with your toes - tense them for 5 seconds, then relax",
            "Move up to your calves, thighs, abdomen, etc.",
            "Tense each muscle group for 5 seconds, then relax for 10 seconds",
            "Notice the contrast between tension and relaxation",
            "End by lying still and enjoying the relaxed state",
        ],
        benefits: &[
            "reduces physical tension",
            "improves sleep quality",
            "teaches relaxation skills",
        ],
    },
    WellnessActivity {
        name: "Loving-Kindness Meditation",
        kind: ActivityKind::Meditation,
        duration: "10-20 minutes",
        difficulty: Difficulty::Medium,
        instructions: &[
            "Sit comfortably and close your eyes",
            "Start by sending loving thoughts to yourself: \"May I be happy, may I be healthy\"",
            "Extend these wishes to a loved one",
            "Then to a neutral person (acquaintance)",
            "Then to someone you have difficulty with",
            "Finally, extend to all beings everywhere",
        ],
        benefits: &[
            "increases compassion",
            "reduces negative emotions",
            "improves relationships",
        ],
    },
    WellnessActivity {
        name: "4-7-8 Breathing",
        kind: ActivityKind::Breathing,
        duration: "3-5 minutes",
        difficulty: Difficulty::Easy,
        instructions: &[
            "Sit with your back straight",
            "Exhale completely through your mouth",
            "Inhale through your nose for 4 counts",
            "Hold your breath for 7 counts",
            "Exhale through your mouth for 8 counts",
            "Repeat 3-4 cycles",
        ],
        benefits: &["quick stress relief", "improves sleep", "calms anxiety"],
    },
];

pub const CRISIS_RESOURCES: [&str; 5] = [
    "National Suicide Prevention Lifeline: 988 (24/7)",
    "Crisis Text Line: Text HOME to 741741",
    "National Alliance on Mental Illness (NAMI): 1-800-950-NAMI",
    "SAMHSA National Helpline: 1-800-662-4357",
    "Emergency Services: 911",
];

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Record a mood entry and derive band-based recommendations. Resources are
/// only attached at the lowest band.
pub fn track_mood(
    mood: u8,
    emotions: Option<Vec<String>>,
    stress_level: Option<u8>,
    notes: Option<String>,
    triggers: Option<Vec<String>>,
) -> (MoodEntry, Vec<String>, Vec<String>) {
    let stress = stress_level.unwrap_or(5);
    let entry = MoodEntry {
        date: today(),
        mood,
        emotions: emotions.unwrap_or_default(),
        stress_level: stress,
        notes: notes.unwrap_or_default(),
        triggers: triggers.unwrap_or_default(),
    };

    let mut recommendations = Vec::new();
    let mut resources = Vec::new();

    if mood <= 3 {
        recommendations.push(
            "Your mood seems quite low. Consider reaching out to a mental health professional."
                .to_string(),
        );
        recommendations
            .push("Try some gentle breathing exercises or mindfulness activities.".to_string());
        recommendations.push("Remember that difficult feelings are temporary.".to_string());
        resources.push("National Suicide Prevention Lifeline: 988".to_string());
        resources.push("Crisis Text Line: Text HOME to 741741".to_string());
    } else if mood <= 5 {
        recommendations.push("It sounds like you're having a challenging day.".to_string());
        recommendations
            .push("Consider doing a mood-boosting activity like gratitude journaling.".to_string());
        recommendations
            .push("Physical activity or connecting with a friend might help.".to_string());
    } else if mood <= 7 {
        recommendations.push("Your mood is in a neutral range.".to_string());
        recommendations.push("This might be a good time for some mindfulness practice.".to_string());
        recommendations.push("Consider what small things might lift your spirits.".to_string());
    } else {
        recommendations.push("Great to hear you're feeling good!".to_string());
        recommendations.push("This is a perfect time to practice gratitude.".to_string());
        recommendations.push("Consider what's contributing to your positive mood.".to_string());
    }

    if stress >= 7 {
        recommendations
            .push("Your stress level seems high. Try some stress-reduction techniques.".to_string());
        recommendations.push(
            "Consider what might be causing this stress and if anything can be addressed."
                .to_string(),
        );
    }

    (entry, recommendations, resources)
}

/// Pick a suitable activity. Selection among candidates is random, which is
/// the one non-deterministic corner of this module.
pub fn pick_activity(
    kind: Option<ActivityKind>,
    available_minutes: Option<u32>,
    experience: Option<Difficulty>,
) -> (&'static WellnessActivity, Vec<String>) {
    let time = available_minutes.unwrap_or(10);
    let experience = experience.unwrap_or(Difficulty::Easy);

    let mut candidates: Vec<&'static WellnessActivity> = ACTIVITY_CATALOG
        .iter()
        .filter(|activity| kind.is_none_or(|k| activity.kind == k))
        .filter(|activity| match experience {
            Difficulty::Easy => activity.difficulty == Difficulty::Easy,
            Difficulty::Medium => activity.difficulty != Difficulty::Advanced,
            Difficulty::Advanced => true,
        })
        .collect();

    if time < 10 {
        candidates.retain(|activity| {
            activity.duration.contains("3-") || activity.duration.contains("5-")
        });
    }

    let selected = if candidates.is_empty() {
        &ACTIVITY_CATALOG[0]
    } else {
        candidates[rng().random_range(0..candidates.len())]
    };

    let recommendations = vec![
        "Take your time with this activity and don't worry about doing it perfectly.".to_string(),
        "If your mind wanders, that's normal - gently bring your attention back.".to_string(),
        "Regular practice will make these techniques more effective over time.".to_string(),
    ];

    (selected, recommendations)
}

pub fn stress_management() -> (&'static WellnessActivity, Vec<String>, String) {
    let recommendations = [
        "Identify your stress triggers and develop coping strategies for each",
        "Practice deep breathing exercises when you feel stress building",
        "Break large tasks into smaller, manageable steps",
        "Set realistic expectations for yourself",
        "Make time for activities you enjoy",
        "Ensure you're getting adequate sleep (7-9 hours)",
        "Consider talking to someone you trust about your stress",
        "Regular exercise can significantly reduce stress levels",
    ];

    let quick_activity = ACTIVITY_CATALOG
        .iter()
        .filter(|a| a.kind == ActivityKind::Breathing || a.kind == ActivityKind::Relaxation)
        .find(|a| a.duration.contains("3-") || a.duration.contains("5-"))
        .unwrap_or(&ACTIVITY_CATALOG[0]);

    let analysis = "Stress is a normal part of life, but chronic stress can impact your physical \
and mental health. The key is developing healthy coping strategies and knowing when to seek \
additional support."
        .to_string();

    (
        quick_activity,
        recommendations[..5].iter().map(|r| r.to_string()).collect(),
        analysis,
    )
}

pub fn crisis_support() -> (Vec<String>, Vec<String>, String) {
    let recommendations = vec![
        "If you are in immediate danger, please call 911 or go to your nearest emergency room."
            .to_string(),
        "You are not alone - there are people who want to help.".to_string(),
        "Crisis feelings are temporary, even when they feel overwhelming.".to_string(),
        "Reach out to a trusted friend, family member, or mental health professional.".to_string(),
        "Remove any means of self-harm from your immediate environment.".to_string(),
        "Stay with someone or in a public place if possible.".to_string(),
    ];
    let resources = CRISIS_RESOURCES.iter().map(|r| r.to_string()).collect();
    let analysis = "If you are experiencing thoughts of self-harm or suicide, please reach out \
for immediate help. These feelings can be overwhelming, but support is available 24/7."
        .to_string();
    (recommendations, resources, analysis)
}

pub fn mood_analysis_guidance() -> (String, Vec<String>) {
    let analysis = "Mood tracking is a valuable tool for understanding your mental health \
patterns. Here are some insights:

- Look for patterns in your mood related to sleep, exercise, social interactions, or work stress
- Notice if certain days of the week or times of day affect your mood
- Pay attention to the relationship between your mood and physical symptoms
- Consider external factors like weather, news consumption, or social media use
- Track what activities or practices help improve your mood

Regular mood tracking can help you and healthcare providers identify triggers and effective \
coping strategies."
        .to_string();

    let recommendations = vec![
        "Track your mood daily for at least 2 weeks to identify patterns".to_string(),
        "Note what you were doing before mood changes occurred".to_string(),
        "Share your mood tracking data with a mental health professional".to_string(),
        "Use mood data to make informed decisions about self-care".to_string(),
    ];

    (analysis, recommendations)
}

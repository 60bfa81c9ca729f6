use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};

pub fn daily_checkin_prompt(focus: &str) -> GetPromptResult {
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Walk me through a daily check-in focused on {}.\n\nSteps:\n1. Ask for today's \
numbers (water, sleep, steps, screen time) and log them with lifestyle_tracking using action \
'log daily'\n2. Ask for my current mood (1-10) and track it with mental_health_support using \
action 'track mood'\n3. If I mention any symptoms, run analyze_symptoms\n4. Summarize the \
feedback from the tools in a few encouraging sentences and suggest one concrete improvement \
for tomorrow",
            focus
        ),
    )])
    .with_description(format!("Daily wellness check-in with a '{}' focus", focus))
}

pub fn health_assessment_prompt(goals: &str) -> GetPromptResult {
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Run a comprehensive health assessment for me, keeping my '{}' goals in mind.\n\n\
Steps:\n1. Collect my questionnaire answers: age range, goals, sleep, water, steps, exercise \
frequency, mood, stress, nutrition quality, symptoms, medications, and concerns\n2. Call \
run_health_workflow with the collected profile\n3. Present the overall and per-area scores, the \
top strengths and improvements, and the health alerts\n4. Close with the immediate actions and \
tracking suggestions, noting that missing questionnaire fields lower the data completeness",
            goals
        ),
    )])
    .with_description(format!("Comprehensive health assessment ({} goals)", goals))
}

pub fn symptom_triage_prompt(symptoms: Option<&str>) -> GetPromptResult {
    let intro = match symptoms {
        Some(symptoms) => format!("I'm experiencing: {}.", symptoms),
        None => "Ask me what symptoms I'm experiencing.".to_string(),
    };
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "{}\n\nThen:\n1. Run analyze_symptoms with the symptom list, duration, and \
severity\n2. Report the urgency level and possible causes in plain language\n3. If the tool \
recommends seeing a doctor, say so clearly and first\n4. If medications come up, check them \
with medication_reminder using action 'check interactions'\n5. Remind me that this is general \
guidance, not a medical diagnosis",
            intro
        ),
    )])
    .with_description("Symptom triage and next steps".to_string())
}

use crate::context::MEETING_CONTEXT;

/// Selects which prompt template wraps the meeting context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    General,
    Consultation,
    FollowUpQuestions,
}

impl TaskType {
    /// Maps the `context` field of a chat request to a template.
    ///
    /// The dashboard frontend sends free-form strings here, so any
    /// unrecognized value falls back to `General` instead of being
    /// rejected.
    pub fn parse(value: &str) -> Self {
        match value {
            "consultation" => Self::Consultation,
            "follow-up-questions" => Self::FollowUpQuestions,
            _ => Self::General,
        }
    }
}

pub const DEFAULT_CONSULTATION_REQUEST: &str =
    "Provide strategic insights and recommendations based on the meeting data above.";

/// Build the full text payload sent to Gemini for one request.
///
/// Pure function of its arguments; identical inputs produce identical
/// output bytes.
pub fn build_prompt(user_message: &str, task_type: TaskType) -> String {
    match task_type {
        TaskType::Consultation => {
            let request = if user_message.is_empty() {
                DEFAULT_CONSULTATION_REQUEST
            } else {
                user_message
            };

            format!(
                "{MEETING_CONTEXT}\n\
                 \n\
                 ### Consultation Request:\n\
                 {request}\n\
                 \n\
                 ### Your Role:\n\
                 You are the Chief Strategy Officer at Brain Health USA.\n\
                 \n\
                 ### Deliverables:\n\
                 1. **Executive Summary:** 2–3 sentences.\n\
                 2. **Strengths & Achievements:** Bullet points.\n\
                 3. **Critical Improvement Areas:** Detailed.\n\
                 4. **Strategic Recommendations:** Prioritized, actionable steps.\n\
                 5. **Risks & Mitigation:** Bullet points.\n\
                 \n\
                 ### Tone:\n\
                 Executive-level, data-driven, professional.\n"
            )
        }
        TaskType::FollowUpQuestions => format!(
            "{MEETING_CONTEXT}\n\
             \n\
             ### Task:\n\
             Generate exactly 3 strategic, thought-provoking follow-up questions to help Brain Health USA leadership dive deeper into their meeting outcomes.\n\
             \n\
             ### Requirements:\n\
             - Must reference specific data from the context.\n\
             - Each question should lead to actionable insights.\n\
             - Vary focus across operational, financial, and strategic areas.\n\
             - Format: 3 questions, one per line, no numbering.\n\
             \n\
             ### Tone:\n\
             Executive-level, strategic.\n"
        ),
        TaskType::General => format!(
            "{MEETING_CONTEXT}\n\
             \n\
             ### User Question:\n\
             {user_message}\n\
             \n\
             ### Your Role:\n\
             Senior healthcare business consultant specializing in operational strategy, revenue cycle management, and performance analytics.\n\
             \n\
             ### Instructions:\n\
             - Provide concise, actionable insights.\n\
             - Offer next steps or recommendations.\n\
             - Maintain a professional, consultative tone.\n"
        ),
    }
}

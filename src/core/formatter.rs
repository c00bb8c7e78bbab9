use crate::domain::model::{ClassificationResult, ExerciseRecord};

pub const REPLY_PREAMBLE: &str = "Based on your symptoms, I recommend these physiotherapy exercises:";

pub const DISCLAIMER: &str = "**Important**: Please consult with a qualified physiotherapist before starting any exercise program. These are general recommendations only.";

pub fn format_exercise(exercise: &ExerciseRecord) -> String {
    format!(
        "**{}**: {} ({}, {})",
        exercise.name, exercise.description, exercise.repetitions, exercise.duration
    )
}

/// Renders the bot reply: preamble, one block per exercise, disclaimer.
pub fn format_reply(result: &ClassificationResult) -> String {
    let exercise_text = result
        .exercises
        .iter()
        .map(format_exercise)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}\n\n{}", REPLY_PREAMBLE, exercise_text, DISCLAIMER)
}

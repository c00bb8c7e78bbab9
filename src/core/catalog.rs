use crate::domain::model::{BodyRegion, ExerciseRecord};

pub static SHOULDER_EXERCISES: &[ExerciseRecord] = &[
    ExerciseRecord {
        name: "Shoulder Circles",
        description: "Gentle circular movements to improve shoulder mobility",
        repetitions: "10-15 circles each direction",
        duration: "2-3 minutes",
    },
    ExerciseRecord {
        name: "Wall Push-Ups",
        description: "Stand arm's length from wall, push against it",
        repetitions: "10-15 repetitions",
        duration: "3 sets",
    },
    ExerciseRecord {
        name: "Arm Raises",
        description: "Slowly raise arms to shoulder height",
        repetitions: "10-12 repetitions",
        duration: "2-3 sets",
    },
];

pub static BACK_EXERCISES: &[ExerciseRecord] = &[
    ExerciseRecord {
        name: "Cat-Cow Stretch",
        description: "On hands and knees, arch and round your back",
        repetitions: "10-15 repetitions",
        duration: "5 minutes",
    },
    ExerciseRecord {
        name: "Knee-to-Chest",
        description: "Lying down, pull knees toward chest",
        repetitions: "Hold for 30 seconds each",
        duration: "3 repetitions",
    },
    ExerciseRecord {
        name: "Pelvic Tilts",
        description: "Lying on back, gently tilt pelvis",
        repetitions: "10-15 repetitions",
        duration: "2-3 sets",
    },
];

pub static KNEE_EXERCISES: &[ExerciseRecord] = &[
    ExerciseRecord {
        name: "Quad Sets",
        description: "Tighten thigh muscle while sitting",
        repetitions: "Hold for 5 seconds, 10 repetitions",
        duration: "3 sets",
    },
    ExerciseRecord {
        name: "Straight Leg Raises",
        description: "Lying down, lift straight leg",
        repetitions: "10-15 repetitions",
        duration: "2-3 sets",
    },
    ExerciseRecord {
        name: "Heel Slides",
        description: "Slide heel toward buttocks while lying down",
        repetitions: "10-15 repetitions",
        duration: "2-3 sets",
    },
];

pub static GENERAL_EXERCISES: &[ExerciseRecord] = &[ExerciseRecord {
    name: "General Mobility",
    description: "Basic stretching and movement routine",
    repetitions: "As comfortable",
    duration: "5-10 minutes daily",
}];

/// Bucket lookup. Every bucket is non-empty.
pub fn exercises_for(region: BodyRegion) -> &'static [ExerciseRecord] {
    match region {
        BodyRegion::Shoulder => SHOULDER_EXERCISES,
        BodyRegion::Back => BACK_EXERCISES,
        BodyRegion::Knee => KNEE_EXERCISES,
        BodyRegion::General => GENERAL_EXERCISES,
    }
}

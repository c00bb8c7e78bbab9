use crate::domain::model::{Difficulty, LibraryExercise};
use crate::utils::error::{AssistError, Result};
use std::fmt::Write as _;
use std::str::FromStr;

pub const LIBRARY_NOTICE: &str =
    "Always consult with a healthcare professional before beginning any exercise program";

pub static LIBRARY_EXERCISES: &[LibraryExercise] = &[
    LibraryExercise {
        id: "1",
        name: "Shoulder Pendulum Swings",
        category: "Shoulder",
        description: "Gentle passive movement to reduce shoulder stiffness and improve circulation.",
        instructions: &[
            "Stand and lean forward slightly, supporting yourself with your good arm",
            "Let the affected arm hang loose",
            "Gently swing the arm in small circles",
            "Start clockwise, then counterclockwise",
            "Keep movements small and gentle",
        ],
        repetitions: "10-15 circles each direction",
        duration: "2-3 minutes",
        difficulty: Difficulty::Beginner,
        body_parts: &["Shoulder", "Upper Arm"],
    },
    LibraryExercise {
        id: "2",
        name: "Wall Angels",
        category: "Back",
        description: "Improves posture and strengthens upper back muscles.",
        instructions: &[
            "Stand with your back against a wall",
            "Place arms against the wall in a 'W' position",
            "Slowly slide arms up to form a 'Y' shape",
            "Keep arms and back in contact with wall",
            "Return to starting position slowly",
        ],
        repetitions: "10-15 repetitions",
        duration: "3 sets",
        difficulty: Difficulty::Intermediate,
        body_parts: &["Upper Back", "Shoulders", "Neck"],
    },
    LibraryExercise {
        id: "3",
        name: "Calf Raises",
        category: "Lower Leg",
        description: "Strengthens calf muscles and improves ankle stability.",
        instructions: &[
            "Stand with feet hip-width apart",
            "Hold onto a wall or chair for support if needed",
            "Rise up onto your toes slowly",
            "Hold for 2-3 seconds at the top",
            "Lower down slowly with control",
        ],
        repetitions: "15-20 repetitions",
        duration: "2-3 sets",
        difficulty: Difficulty::Beginner,
        body_parts: &["Calves", "Ankles"],
    },
    LibraryExercise {
        id: "4",
        name: "Bird Dog",
        category: "Core",
        description: "Improves core stability and coordination.",
        instructions: &[
            "Start on hands and knees in tabletop position",
            "Keep your spine neutral and core engaged",
            "Extend opposite arm and leg simultaneously",
            "Hold for 5-10 seconds",
            "Return to start and switch sides",
        ],
        repetitions: "8-10 per side",
        duration: "2-3 sets",
        difficulty: Difficulty::Intermediate,
        body_parts: &["Core", "Lower Back", "Glutes"],
    },
    LibraryExercise {
        id: "5",
        name: "Ankle Pumps",
        category: "Ankle",
        description: "Improves circulation and ankle mobility.",
        instructions: &[
            "Sit or lie down comfortably",
            "Lift one foot slightly off the ground",
            "Point your toes away from you",
            "Flex your foot, pulling toes toward shin",
            "Repeat in a smooth pumping motion",
        ],
        repetitions: "20-30 pumps",
        duration: "Each foot, 2-3 times daily",
        difficulty: Difficulty::Beginner,
        body_parts: &["Ankles", "Calves"],
    },
    LibraryExercise {
        id: "6",
        name: "Neck Rolls",
        category: "Neck",
        description: "Relieves neck tension and improves mobility.",
        instructions: &[
            "Sit or stand with good posture",
            "Drop your chin toward your chest",
            "Slowly roll your head to the right",
            "Continue the circle backward and to the left",
            "Complete the circle by returning to center",
        ],
        repetitions: "5 circles each direction",
        duration: "2-3 minutes",
        difficulty: Difficulty::Beginner,
        body_parts: &["Neck", "Upper Shoulders"],
    },
];

/// Filters for [`ExerciseLibrary::query`]. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct LibraryQuery {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub body_part: Option<String>,
}

impl LibraryQuery {
    fn matches(&self, exercise: &LibraryExercise) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .map(|c| exercise.category.eq_ignore_ascii_case(c.trim()))
            .unwrap_or(true);

        let difficulty_ok = self
            .difficulty
            .map(|d| exercise.difficulty == d)
            .unwrap_or(true);

        let body_part_ok = self
            .body_part
            .as_ref()
            .map(|part| {
                let needle = part.trim().to_lowercase();
                exercise
                    .body_parts
                    .iter()
                    .any(|p| p.to_lowercase().contains(&needle))
            })
            .unwrap_or(true);

        category_ok && difficulty_ok && body_part_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = AssistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(AssistError::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseLibrary;

impl ExerciseLibrary {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> &'static [LibraryExercise] {
        LIBRARY_EXERCISES
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static LibraryExercise> {
        LIBRARY_EXERCISES.iter().find(|e| e.id == id)
    }

    /// Like [`Self::find_by_id`], but a miss is an error.
    pub fn get(&self, id: &str) -> Result<&'static LibraryExercise> {
        self.find_by_id(id)
            .ok_or_else(|| AssistError::ExerciseNotFound { id: id.to_string() })
    }

    pub fn query(&self, query: &LibraryQuery) -> Vec<&'static LibraryExercise> {
        let found: Vec<_> = LIBRARY_EXERCISES
            .iter()
            .filter(|e| query.matches(e))
            .collect();
        tracing::debug!("Library query {:?} matched {} exercises", query, found.len());
        found
    }

    pub fn export(&self, exercises: &[&LibraryExercise], format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Text => Ok(render_text(exercises)),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(exercises)?),
            ExportFormat::Csv => render_csv(exercises),
        }
    }
}

fn render_text(exercises: &[&LibraryExercise]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Exercise Library");
    let _ = writeln!(out, "! {}", LIBRARY_NOTICE);

    for exercise in exercises {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} [{}]", exercise.name, exercise.difficulty);
        let _ = writeln!(out, "  {}", exercise.description);
        let _ = writeln!(out, "  Body parts: {}", exercise.body_parts.join(", "));
        let _ = writeln!(out, "  Instructions:");
        for (index, step) in exercise.instructions.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", index + 1, step);
        }
        let _ = writeln!(out, "  Repetitions: {}", exercise.repetitions);
        let _ = writeln!(out, "  Duration: {}", exercise.duration);
    }

    out
}

fn render_csv(exercises: &[&LibraryExercise]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "name",
        "category",
        "difficulty",
        "description",
        "instructions",
        "repetitions",
        "duration",
        "body_parts",
    ])?;

    for e in exercises {
        let instructions = e.instructions.join("; ");
        let body_parts = e.body_parts.join("; ");
        writer.write_record([
            e.id,
            e.name,
            e.category,
            e.difficulty.as_str(),
            e.description,
            instructions.as_str(),
            e.repetitions,
            e.duration,
            body_parts.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        AssistError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| AssistError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

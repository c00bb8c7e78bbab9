use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recommended exercise inside a region bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub repetitions: &'static str,
    pub duration: &'static str,
}

/// Key of a recommendation bucket. `General` is the fallback bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRegion {
    Shoulder,
    Back,
    Knee,
    General,
}

impl BodyRegion {
    pub const ALL: [BodyRegion; 4] = [
        BodyRegion::Shoulder,
        BodyRegion::Back,
        BodyRegion::Knee,
        BodyRegion::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyRegion::Shoulder => "shoulder",
            BodyRegion::Back => "back",
            BodyRegion::Knee => "knee",
            BodyRegion::General => "general",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one line of free text. `exercises` is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub region: BodyRegion,
    /// Keyword that selected the bucket, `None` for the fallback.
    pub matched_keyword: Option<&'static str>,
    pub exercises: &'static [ExerciseRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Detailed catalog entry shown in the exercise library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryExercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub repetitions: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub body_parts: &'static [&'static str],
}

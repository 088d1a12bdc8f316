use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Tech,
    Ai,
    Jobs,
    Software,
}

impl Topic {
    /// Every topic, in digest order
    pub const ALL: [Topic; 4] = [Topic::Tech, Topic::Ai, Topic::Jobs, Topic::Software];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Tech => "tech",
            Topic::Ai => "ai",
            Topic::Jobs => "jobs",
            Topic::Software => "software",
        }
    }

    /// Section heading used in the rendered digest
    pub fn heading(&self) -> &'static str {
        match self {
            Topic::Tech => "💻 Tech",
            Topic::Ai => "🤖 AI",
            Topic::Jobs => "🧑‍💼 Jobs",
            Topic::Software => "🧩 New Software",
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tech" => Ok(Topic::Tech),
            "ai" => Ok(Topic::Ai),
            "jobs" => Ok(Topic::Jobs),
            "software" => Ok(Topic::Software),
            _ => Err(format!("Unknown topic: {}", s)),
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use serde::{Deserialize, Serialize};

/// A project as returned by the backend's project-list call.
///
/// Timestamps are opaque backend strings; the engine never interprets
/// them. `id` is nullable on the wire for rows created before the
/// backend assigned ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    #[cfg(test)]
    pub fn stub(id: &str, name: &str) -> Self {
        Project {
            id: Some(id.to_string()),
            name: name.to_string(),
            description: None,
            is_active: true,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: None,
        }
    }
}

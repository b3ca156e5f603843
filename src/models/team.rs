use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: String,
    /// Shorter label for tight UI layouts; falls back to `name` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub colors: TeamColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

impl Team {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationNode {
    pub name: String,
    /// Closed stations are excluded from every route search
    #[serde(default = "default_open")]
    pub open: bool,
}

fn default_open() -> bool {
    true
}

impl StationNode {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self { name, open: true }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_RELEVANCE: &str = "medium";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub project: String,
    pub relevance: String,
    pub content: String,
}

impl PortfolioProject {
    /// Sort key: high first, unknown tags rank alongside medium.
    pub fn priority(&self) -> u8 {
        match self.relevance.as_str() {
            "high" => 0,
            "low" => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioListing {
    pub total: usize,
    pub projects: Vec<PortfolioProject>,
}

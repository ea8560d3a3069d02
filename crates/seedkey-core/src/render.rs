//! Textual output formats

use serde::{Deserialize, Serialize};

/// How key bytes are rendered on standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracketed, comma separated decimal bytes: `[108, 75, 154, ...]`
    #[default]
    Decimal,
    /// Lower-case hex without prefix
    Hex,
}

impl OutputFormat {
    pub fn render(self, bytes: &[u8]) -> String {
        match self {
            OutputFormat::Decimal => format!("{:?}", bytes),
            OutputFormat::Hex => hex::encode(bytes),
        }
    }
}

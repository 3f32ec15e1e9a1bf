use serde::{Deserialize, Serialize};

/// Colours the assembler attaches to series. Values are CSS colour strings
/// passed through untouched to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub bullish: String,
    pub bearish: String,
    pub bullish_faded: String,
    pub bearish_faded: String,
    pub bullish_zone: String,
    pub bearish_zone: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bullish: "#22c55e".into(),
            bearish: "#ef4444".into(),
            bullish_faded: "rgba(34, 197, 94, 0.5)".into(),
            bearish_faded: "rgba(239, 68, 68, 0.5)".into(),
            bullish_zone: "rgba(34, 197, 94, 0.2)".into(),
            bearish_zone: "rgba(239, 68, 68, 0.2)".into(),
        }
    }
}

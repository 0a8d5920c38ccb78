use serde::{Deserialize, Serialize};

/// Everything a UI needs to render a tier label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPresentation {
    pub display_name: String,
    pub color_token: String,
    pub icon_glyph: String,
}

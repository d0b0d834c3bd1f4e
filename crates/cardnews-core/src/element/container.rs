//! Container block attributes.

use serde::{Deserialize, Serialize};

/// Fill, border and effect attributes of a container block.
///
/// Values are CSS fragments handed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// Backdrop blur, e.g. `blur(18px)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
}

impl ContainerProps {
    pub fn filled(background_color: impl Into<String>) -> Self {
        Self {
            background_color: Some(background_color.into()),
            ..Default::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_border(mut self, width: f64, color: impl Into<String>) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color.into());
        self
    }

    pub fn with_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.box_shadow = Some(shadow.into());
        self
    }

    pub fn with_blur(mut self, blur: impl Into<String>) -> Self {
        self.backdrop_filter = Some(blur.into());
        self
    }
}

use serde::{Deserialize, Serialize};

/// Placement of an element along one axis of its area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementAlignment {
    /// Left or top.
    #[default]
    Near,
    /// Right or bottom.
    Far,
    Center,
}

/// Direction in which lines of a text frame progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextOrientation {
    #[default]
    Horizontal,
    HorizontalRotatedFarEast,
    /// Text runs bottom to top (rotated 90 degrees counter-clockwise).
    Upward,
    /// Text runs top to bottom (rotated 90 degrees clockwise).
    Downward,
}

impl TextOrientation {
    pub fn is_rotated(self) -> bool {
        matches!(self, TextOrientation::Upward | TextOrientation::Downward)
    }
}

use crate::LayoutError;
use folio_types::Rect;

/// A rectangular region offered for content placement. Providers hand out a
/// fresh value per request and never change it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub rect: Rect,
}

impl Area {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Rejects areas without a strictly positive extent. `index` is the
    /// position of the area in the formatting session and ends up in the error.
    pub fn validate(&self, index: usize) -> Result<(), LayoutError> {
        if self.rect.has_positive_extent() {
            Ok(())
        } else {
            Err(LayoutError::InvalidArea {
                index,
                width: self.rect.width,
                height: self.rect.height,
            })
        }
    }

    /// Whether an element occupying `height` (margins included) fits an empty
    /// copy of this area.
    pub fn can_hold(&self, height: f64, tolerance: f64) -> bool {
        self.rect.has_unbounded_height() || height <= self.rect.height + tolerance
    }
}

/// Field substitution state forwarded from the provider to formatting elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldInfos {
    /// One-based number of the page the current area belongs to.
    pub page_number: usize,
    /// Zero-based index of the current area in its session.
    pub area_index: usize,
}

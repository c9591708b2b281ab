#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Slack, in points, allowed when deciding whether an element fits the
    /// remaining height of an area. Absorbs floating point drift from summing
    /// many line heights.
    ///
    /// Defaults to `0.01`.
    pub fit_tolerance: f64,

    /// The minimum number of lines a paragraph keeps on either side of a split.
    /// A paragraph that cannot honour it on both sides is moved as a whole.
    ///
    /// Defaults to `1`.
    pub min_split_lines: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fit_tolerance: 0.01,
            min_split_lines: 1,
        }
    }
}

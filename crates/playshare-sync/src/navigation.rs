use crate::collaborators::Navigation;

/// Vertical extent of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where a navigation entry sits relative to its scrolling container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryGeometry {
    pub entry: Rect,
    pub container: Rect,
    /// The container's current scroll offset.
    pub scroll_top: f64,
}

/// Scroll offset that centers the entry in its container, or `None` when
/// the entry is already fully visible.
#[must_use]
pub fn centered_scroll_top(geometry: &EntryGeometry) -> Option<f64> {
    let EntryGeometry {
        entry,
        container,
        scroll_top,
    } = geometry;
    if entry.top >= container.top && entry.bottom() <= container.bottom() {
        return None;
    }
    let offset = entry.top - container.top;
    let centered = scroll_top + offset - (container.height - entry.height) / 2.0;
    Some(centered.max(0.0))
}

/// Highlights the entry for `sample` and brings it into view.
///
/// Returns whether an entry for the sample exists.
pub(crate) fn highlight_sample(navigation: &dyn Navigation, sample: &str) -> bool {
    let Some(geometry) = navigation.activate(sample) else {
        tracing::debug!(sample, "no navigation entry for sample");
        return false;
    };
    if let Some(top) = centered_scroll_top(&geometry) {
        navigation.scroll_container(top);
    }
    true
}

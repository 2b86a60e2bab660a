//! Horizontal scrolling of the strip.
//!
//! The strip never measures the environment itself: scroll position and
//! extent come from an injected [`Viewport`].

/// Scroll measurement and control for the element that hosts the strip.
pub trait Viewport {
    /// Current horizontal scroll offset in pixels.
    fn scroll_left(&self) -> f64;
    /// Total scrollable content width.
    fn scroll_width(&self) -> f64;
    /// Visible width.
    fn client_width(&self) -> f64;
    fn scroll_by(&mut self, dx: f64);
    fn scroll_to(&mut self, x: f64);
    /// Called after layout with the freshly computed content width.
    fn content_resized(&mut self, _width: f64) {}
}

/// Visibility of the left/right scroll buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollArrows {
    pub left: bool,
    pub right: bool,
}

impl ScrollArrows {
    /// `epsilon` absorbs sub-pixel rounding at the right edge.
    pub fn measure(viewport: &dyn Viewport, epsilon: f64) -> Self {
        let max_left = viewport.scroll_width() - viewport.client_width() - epsilon;
        Self {
            left: viewport.scroll_left() > 0.0,
            right: viewport.scroll_left() < max_left,
        }
    }
}

/// Scroll offset that centers the span `[x, x + width)` in the viewport,
/// clamped to the scrollable range.
pub fn centered_scroll_offset(x: f64, width: f64, client_width: f64, scroll_width: f64) -> f64 {
    let max = (scroll_width - client_width).max(0.0);
    (x + width / 2.0 - client_width / 2.0).clamp(0.0, max)
}

/// In-memory viewport that tracks the content width reported by layout.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryViewport {
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
}

impl MemoryViewport {
    pub fn new(client_width: f64) -> Self {
        Self {
            scroll_left: 0.0,
            scroll_width: client_width,
            client_width,
        }
    }

    fn clamp(&mut self) {
        let max = (self.scroll_width - self.client_width).max(0.0);
        self.scroll_left = self.scroll_left.clamp(0.0, max);
    }
}

impl Viewport for MemoryViewport {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn scroll_by(&mut self, dx: f64) {
        self.scroll_left += dx;
        self.clamp();
    }

    fn scroll_to(&mut self, x: f64) {
        self.scroll_left = x;
        self.clamp();
    }

    fn content_resized(&mut self, width: f64) {
        self.scroll_width = width.max(self.client_width);
        self.clamp();
    }
}

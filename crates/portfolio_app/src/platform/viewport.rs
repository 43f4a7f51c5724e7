use super::layout::PageElement;

/// The visible window over the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    top: f64,
    height: f64,
    page_height: f64,
}

impl Viewport {
    pub fn new(height: f64, page_height: f64) -> Self {
        Self {
            top: 0.0,
            height,
            page_height: page_height.max(height),
        }
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    /// Scrolls to `top`, clamped so the window stays on the page.
    pub fn scroll_to(&mut self, top: f64) {
        self.top = top.clamp(0.0, self.page_height - self.height);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.top + delta);
    }

    /// Fraction of the element's height currently inside the window.
    pub fn intersection_ratio(&self, element: &PageElement) -> f64 {
        if element.height <= 0.0 {
            let inside = element.top >= self.top && element.top <= self.top + self.height;
            return if inside { 1.0 } else { 0.0 };
        }
        let start = element.top.max(self.top);
        let end = (element.top + element.height).min(self.top + self.height);
        ((end - start) / element.height).clamp(0.0, 1.0)
    }
}

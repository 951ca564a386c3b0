//! Rendering options

/// Output size and styling of a rendered plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Caption font size, 0 hides the caption
    pub caption_font_size: u32,
    /// Opacity of filled bars, in `[0, 1]`
    pub fill_opacity: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            caption_font_size: 24,
            fill_opacity: 0.6,
        }
    }
}

impl PlotConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

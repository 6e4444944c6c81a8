//! Marker styling and colors

/// Color representation (RGB, 0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn red() -> Self {
        Color(255, 0, 0)
    }
    pub fn green() -> Self {
        Color(0, 128, 0)
    }
    pub fn grey() -> Self {
        Color(128, 128, 128)
    }
}

/// Series styling
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub color: Color,
    /// Marker diameter in pixels.
    pub marker_size: f64,
    pub fill_alpha: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color(31, 119, 180),
            marker_size: 6.0,
            fill_alpha: 1.0,
        }
    }
}

impl Style {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn marker_size(mut self, size: f64) -> Self {
        self.marker_size = size;
        self
    }
}

use bon::Builder;

use crate::error::ConfigError;

/// Color representation for gauge elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const GREEN_100: Color = Color::new(0xc8, 0xe6, 0xc9);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Geometry, window and colour settings for the gauge.
#[derive(Debug, Clone, Builder)]
pub struct GaugeConfig {
    // Geometry
    #[builder(default = 150.0)]
    pub margin_from_edge: f64,
    #[builder(default = 50.0)]
    pub knob_radius: f64,
    #[builder(default = 16.0)]
    pub arc_stroke_width: f64,

    // Window
    #[builder(default = "Speedometer".to_string())]
    pub title: String,
    #[builder(default = 600)]
    pub window_width: u32,
    #[builder(default = 800)]
    pub window_height: u32,

    // Colors
    #[builder(default = Color::BLACK)]
    pub background_color: Color,
    #[builder(default = Color::GREEN_100)]
    pub arc_color: Color,
    #[builder(default = Color::WHITE)]
    pub knob_color: Color,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("margin_from_edge", self.margin_from_edge),
            ("knob_radius", self.knob_radius),
            ("arc_stroke_width", self.arc_stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidLength { field, value });
            }
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }
}

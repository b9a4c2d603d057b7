// Simple color struct. Alpha is kept as a fraction since link alphas are far
// below 1/255 steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: alpha.max(0.0).min(1.0),
            ..self
        }
    }

    // CSS color string for the 2d context fill/stroke style
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

use std::fmt;

/// Opaque 8-bit color; alpha is composed per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn transparent(self) -> Rgba {
        self.with_alpha(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

/// Formats as a CSS color, e.g. `rgba(99, 102, 241, 0.5)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        let c = Rgb::new(99, 102, 241).with_alpha(0.5);
        assert_eq!(c.to_string(), "rgba(99, 102, 241, 0.5)");
        assert_eq!(Rgb::new(1, 2, 3).transparent().to_string(), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgb::new(0, 0, 0).with_alpha(1.7).alpha, 1.0);
        assert_eq!(Rgb::new(0, 0, 0).with_alpha(-0.2).alpha, 0.0);
    }
}

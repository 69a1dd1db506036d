//! Hue / saturation / lightness model

use super::Color;

/// A color in HSL space
///
/// `h` is in degrees (`0.0..360.0`), `s` and `l` are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Same hue and saturation at a different lightness
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert back to RGB with the given alpha
    #[must_use]
    pub fn to_color(self, alpha: u8) -> Color {
        if self.s <= 0.0 {
            let v = channel(self.l);
            return Color::new(alpha, v, v, v);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h / 360.0;

        Color::new(
            alpha,
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        // Greys have no hue or saturation
        if delta <= 0.0 {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if (r - max).abs() < f64::EPSILON {
            (g - b) / delta
        } else if (g - max).abs() < f64::EPSILON {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        let mut h = sector * 60.0;

        if h < 0.0 {
            h += 360.0;
        }

        Self { h, s, l }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert!(Hsl::from(Color::from_rgb(255, 0, 0)).h.abs() < 1e-9);
        assert!((Hsl::from(Color::from_rgb(0, 255, 0)).h - 120.0).abs() < 1e-9);
        assert!((Hsl::from(Color::from_rgb(0, 0, 255)).h - 240.0).abs() < 1e-9);
        assert!((Hsl::from(Color::from_rgb(255, 0, 255)).h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_grey_has_no_saturation() {
        let hsl = Hsl::from(Color::from_rgb(128, 128, 128));
        assert!(hsl.s.abs() < f64::EPSILON);
        assert!(hsl.h.abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_trip_keeps_channels() {
        for argb in [0xFF6495ED_u32, 0xFF336699, 0x80FF8000, 0xFF000000, 0xFFFFFFFF] {
            let color = Color::from_argb(argb);
            assert_eq!(Hsl::from(color).to_color(color.a), color);
        }
    }

    #[test]
    fn test_lightness_extremes() {
        let hsl = Hsl::from(Color::from_rgb(200, 30, 90));
        assert_eq!(hsl.with_lightness(0.0).to_color(255), Color::BLACK);
        assert_eq!(hsl.with_lightness(1.0).to_color(255), Color::WHITE);
    }
}

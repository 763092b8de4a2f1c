//! Terminal theme detection and color definitions

use ratatui::style::Color;

/// Ordered palette mapping normalized values to colors, least to most
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    colors: Vec<Color>,
}

impl ColorScale {
    /// Build a scale from at least one color
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Bucket index for a normalized value: `floor(v * (len - 1))`,
    /// clamped to the palette. NaN lands in bucket 0.
    pub fn bucket(&self, normalized: f64) -> usize {
        let last = self.colors.len() - 1;
        if normalized.is_nan() {
            return 0;
        }
        let scaled = (normalized * last as f64).floor();
        if scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(last)
        }
    }

    pub fn color(&self, normalized: f64) -> Color {
        self.colors[self.bucket(normalized)]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// GitHub dark palette
const DARK_SCALE: [Color; 5] = [
    Color::Rgb(0x16, 0x1b, 0x22),
    Color::Rgb(0x0e, 0x44, 0x29),
    Color::Rgb(0x00, 0x6d, 0x32),
    Color::Rgb(0x26, 0xa6, 0x41),
    Color::Rgb(0x39, 0xd3, 0x53),
];

/// GitHub light palette
const LIGHT_SCALE: [Color; 5] = [
    Color::Rgb(0xeb, 0xed, 0xf0),
    Color::Rgb(0x9b, 0xe9, 0xa8),
    Color::Rgb(0x40, 0xc4, 0x63),
    Color::Rgb(0x30, 0xa1, 0x4e),
    Color::Rgb(0x21, 0x6e, 0x39),
];

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Primary text color
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Accent color (header, keybinding keys)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Weekday and month labels, hints
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::Rgb(0x88, 0x88, 0x88),
            Self::Light => Color::Gray,
        }
    }

    /// Date text color
    pub fn date(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Background of the selected cell
    pub fn selection(self) -> Color {
        match self {
            Self::Dark => Color::Rgb(0x99, 0x99, 0xff),
            Self::Light => Color::Rgb(0x55, 0x55, 0xcc),
        }
    }

    /// Default heatmap palette for this theme
    pub fn heatmap_scale(self) -> ColorScale {
        let colors = match self {
            Self::Dark => DARK_SCALE,
            Self::Light => LIGHT_SCALE,
        };
        ColorScale {
            colors: colors.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_colors() {
        let t = Theme::Dark;
        assert_eq!(t.text(), Color::White);
        assert_eq!(t.accent(), Color::Cyan);
        assert_eq!(t.muted(), Color::Rgb(0x88, 0x88, 0x88));
        assert_eq!(t.date(), Color::Yellow);
        assert_eq!(t.selection(), Color::Rgb(0x99, 0x99, 0xff));
    }

    #[test]
    fn test_light_theme_colors() {
        let t = Theme::Light;
        assert_eq!(t.text(), Color::Black);
        assert_eq!(t.accent(), Color::Indexed(25));
        assert_eq!(t.muted(), Color::Gray);
        assert_eq!(t.date(), Color::Indexed(130));
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    // ========== ColorScale tests ==========

    #[test]
    fn test_scale_requires_colors() {
        assert!(ColorScale::new(vec![]).is_none());
        assert_eq!(ColorScale::new(vec![Color::Red]).unwrap().colors().len(), 1);
    }

    #[test]
    fn test_five_bucket_scale() {
        let scale = Theme::Dark.heatmap_scale();
        assert_eq!(scale.colors().len(), 5);
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.bucket(0.24), 0);
        assert_eq!(scale.bucket(0.25), 1);
        assert_eq!(scale.bucket(0.5), 2);
        assert_eq!(scale.bucket(0.99), 3);
        assert_eq!(scale.bucket(1.0), 4);
    }

    #[test]
    fn test_bucket_clamps_out_of_range() {
        let scale = Theme::Dark.heatmap_scale();
        assert_eq!(scale.bucket(-0.5), 0);
        assert_eq!(scale.bucket(7.0), 4);
        assert_eq!(scale.bucket(f64::NAN), 0);
    }

    #[test]
    fn test_single_color_scale() {
        let scale = ColorScale::new(vec![Color::Green]).unwrap();
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.bucket(1.0), 0);
        assert_eq!(scale.color(0.7), Color::Green);
    }

    #[test]
    fn test_scale_color_lookup() {
        let scale = Theme::Light.heatmap_scale();
        assert_eq!(scale.color(0.0), Color::Rgb(0xeb, 0xed, 0xf0));
        assert_eq!(scale.color(1.0), Color::Rgb(0x21, 0x6e, 0x39));
    }
}

use iced_core::{
    Color,
    theme::{Custom, Palette},
};
use palette::Srgb;

use std::str::FromStr;

/// رنگ محورهای نمودار
pub const AXIS_HEX: &str = "#2a3343";
/// رنگ خط قیمت و تغییر مثبت
pub const UP_HEX: &str = "#22c55e";
/// رنگ تغییر منفی
pub const DOWN_HEX: &str = "#ef4444";

/// ساختار نگهدارنده تم برنامه (پوششی بر روی تم Iced)
#[derive(Debug, Clone)]
pub struct Theme(pub iced_core::Theme);

impl Default for Theme {
    fn default() -> Self {
        Self(iced_core::Theme::Custom(default_theme().into()))
    }
}

impl From<Theme> for iced_core::Theme {
    fn from(val: Theme) -> Self {
        val.0
    }
}

/// ایجاد تم پیش‌فرض برنامه (Mocktrade)
pub fn default_theme() -> Custom {
    Custom::new(
        "Mocktrade".to_string(),
        Palette {
            background: Color::from_rgb8(11, 15, 23),
            text: Color::from_rgb8(229, 231, 235),
            primary: Color::from_rgb8(59, 130, 246),
            success: hex_or(UP_HEX, Color::from_rgb8(34, 197, 94)),
            danger: hex_or(DOWN_HEX, Color::from_rgb8(239, 68, 68)),
            warning: Color::from_rgb8(245, 158, 11),
        },
    )
}

/// تبدیل کد رنگ هگز (Hex) به ساختار Color
///
/// هم `#rrggbb` و هم `rrggbb` پذیرفته می‌شوند.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let rgb = Srgb::<u8>::from_str(hex.trim()).ok()?;
    Some(Color::from_rgb8(rgb.red, rgb.green, rgb.blue))
}

fn hex_or(hex: &str, fallback: Color) -> Color {
    hex_to_color(hex).unwrap_or(fallback)
}

/// رنگ وابسته به علامت تغییر درصد: غیرمنفی سبز، منفی قرمز
pub fn change_color(pct: f64) -> Color {
    if pct >= 0.0 {
        hex_or(UP_HEX, Color::from_rgb8(34, 197, 94))
    } else {
        hex_or(DOWN_HEX, Color::from_rgb8(239, 68, 68))
    }
}

pub fn axis_color() -> Color {
    hex_or(AXIS_HEX, Color::from_rgb8(42, 51, 67))
}

pub fn line_color() -> Color {
    hex_or(UP_HEX, Color::from_rgb8(34, 197, 94))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_to_color("#2a3343"), Some(Color::from_rgb8(42, 51, 67)));
        assert_eq!(hex_to_color("22c55e"), Some(Color::from_rgb8(34, 197, 94)));
        assert_eq!(hex_to_color("#zzzzzz"), None);
    }

    #[test]
    fn change_color_by_sign() {
        assert_eq!(change_color(0.0), Color::from_rgb8(34, 197, 94));
        assert_eq!(change_color(3.5), Color::from_rgb8(34, 197, 94));
        assert_eq!(change_color(-0.01), Color::from_rgb8(239, 68, 68));
    }
}

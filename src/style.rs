use iced::widget::container::{self, Style};
use iced::widget::scrollable::{AutoScroll, Rail, Scroller};
use iced::{Border, Color, Shadow, Theme, widget};

/// رنگ متن عنوان بالای داشبورد
pub fn title_text(theme: &Theme) -> iced::widget::text::Style {
    let palette = theme.extended_palette();

    iced::widget::text::Style {
        color: Some(palette.background.strongest.color),
    }
}

/// متن کم‌رنگ برای برچسب‌ها و توضیحات
pub fn muted_text(theme: &Theme) -> iced::widget::text::Style {
    let palette = theme.extended_palette();

    iced::widget::text::Style {
        color: Some(palette.background.strong.text.scale_alpha(0.7)),
    }
}

/// متن رنگی بر اساس نتیجه: موفق سبز، خطا قرمز
pub fn feedback_text(theme: &Theme, is_error: bool) -> iced::widget::text::Style {
    let palette = theme.extended_palette();

    iced::widget::text::Style {
        color: Some(if is_error {
            palette.danger.base.color
        } else {
            palette.success.base.color
        }),
    }
}

pub mod button {
    use iced::{
        Border, Theme,
        widget::button::{Status, Style},
    };

    /// استایل دکمه تایید (ثبت سفارش، افزودن، محاسبه)
    pub fn confirm(theme: &Theme, status: Status, is_active: bool) -> Style {
        let palette = theme.extended_palette();

        let color_alpha = if palette.is_dark { 0.2 } else { 0.6 };

        Style {
            text_color: match status {
                Status::Active => palette.success.base.color,
                Status::Pressed => palette.success.weak.color,
                Status::Hovered => palette.success.strong.color,
                Status::Disabled => palette.background.base.text,
            },
            background: match (status, is_active) {
                (Status::Disabled, false) => {
                    Some(palette.success.weak.color.scale_alpha(color_alpha).into())
                }
                _ => Some(palette.success.weak.color.scale_alpha(0.1).into()),
            },
            border: Border {
                radius: 3.0.into(),
                width: 1.0,
                color: palette.success.weak.color.scale_alpha(0.4),
            },
            ..Default::default()
        }
    }

    /// استایل دکمه حذف
    pub fn cancel(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: match status {
                Status::Active => palette.danger.base.color,
                Status::Pressed => palette.danger.weak.color,
                Status::Hovered => palette.danger.strong.color,
                Status::Disabled => palette.background.base.text,
            },
            border: Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// دکمه‌ی شفاف؛ در حالت انتخاب شده پس‌زمینه‌ی کم‌رنگ دارد
    pub fn transparent(theme: &Theme, status: Status, is_selected: bool) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: palette.background.base.text,
            border: Border {
                radius: 3.0.into(),
                width: if is_selected { 1.0 } else { 0.0 },
                color: palette.primary.weak.color,
            },
            background: match status {
                Status::Active | Status::Disabled => {
                    if is_selected {
                        Some(palette.background.weak.color.into())
                    } else {
                        None
                    }
                }
                Status::Pressed => Some(palette.background.weak.color.into()),
                Status::Hovered => Some(palette.background.strong.color.into()),
            },
            ..Default::default()
        }
    }
}

/// کارت هر بخش داشبورد (نمودار، سفارش، سود و زیان، دیده‌بانی)
pub fn panel(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: {
            if palette.is_dark {
                Some(palette.background.weak.color.scale_alpha(0.4).into())
            } else {
                Some(palette.background.strong.color.scale_alpha(0.4).into())
            }
        },
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// نوار وضعیت برای خطاهای ذخیره‌سازی
pub fn status_bar(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        text_color: Some(palette.danger.base.text),
        background: Some(palette.danger.weak.color.scale_alpha(0.8).into()),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: palette.danger.base.color,
        },
        shadow: Shadow {
            offset: iced::Vector { x: 0.0, y: 0.0 },
            blur_radius: 2.0,
            color: Color::BLACK.scale_alpha(if palette.is_dark { 0.8 } else { 0.2 }),
        },
        snap: true,
    }
}

/// استایل ورودی متن اعتبارسنجی شده
pub fn validated_text_input(
    theme: &Theme,
    status: widget::text_input::Status,
    is_valid: bool,
) -> widget::text_input::Style {
    let palette = theme.extended_palette();

    let (background, border_color, placeholder) = match status {
        widget::text_input::Status::Active => (
            palette.background.weakest.color,
            palette.background.weak.color,
            palette.background.strongest.color,
        ),
        widget::text_input::Status::Hovered => (
            palette.background.weak.color,
            palette.background.strong.color,
            palette.background.weak.text,
        ),
        widget::text_input::Status::Focused { .. } | widget::text_input::Status::Disabled => (
            palette.background.base.color,
            palette.background.strong.color,
            palette.background.strong.color,
        ),
    };

    widget::text_input::Style {
        background: background.into(),
        border: Border {
            radius: 3.0.into(),
            width: 1.0,
            color: if is_valid {
                border_color
            } else {
                palette.danger.base.color
            },
        },
        icon: palette.background.strong.text,
        placeholder,
        value: palette.background.base.text,
        selection: palette.background.strongest.color,
    }
}

/// استایل اسکرول‌بار ستون اصلی؛ هنگام کشیدن به رنگ اصلی تم درمی‌آید
pub fn scroll_bar(theme: &Theme, status: widget::scrollable::Status) -> widget::scrollable::Style {
    let palette = theme.extended_palette();

    let scroller_color = match status {
        widget::scrollable::Status::Dragged { .. } => palette.primary.base.color,
        widget::scrollable::Status::Hovered { .. } => palette.primary.weak.color,
        _ => palette.background.strong.color.scale_alpha(0.6),
    };

    let rail = Rail {
        background: None,
        border: Border::default(),
        scroller: Scroller {
            background: scroller_color.into(),
            border: Border {
                radius: 3.0.into(),
                ..Border::default()
            },
        },
    };

    widget::scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll: AutoScroll {
            background: palette.background.weak.color.into(),
            border: Border {
                radius: 3.0.into(),
                width: 1.0,
                color: palette.primary.weak.color,
            },
            shadow: Shadow::default(),
            icon: palette.primary.base.color,
        },
    }
}

/// استایل خط‌کش جداکننده (Split Ruler)
pub fn split_ruler(theme: &Theme) -> iced::widget::rule::Style {
    let palette = theme.extended_palette();

    iced::widget::rule::Style {
        color: palette.background.strong.color.scale_alpha(0.25),
        radius: iced::border::Radius::default(),
        fill_mode: iced::widget::rule::FillMode::Full,
        snap: true,
    }
}

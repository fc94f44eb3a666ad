use crate::style;

use iced::{
    Alignment, Element,
    Length::Fill,
    widget::{button, column, container, row, text},
};

/// ورودی متنی با برچسب در سمت چپ
///
/// حاشیه‌ی ورودی در حالت نامعتبر قرمز می‌شود.
pub fn labeled_input<'a, F, Message: Clone + 'static>(
    label: &'a str,                   // برچسب ورودی
    placeholder: &str,                // متن راهنما
    raw_input_buf: &str,              // بافر ورودی خام
    is_input_valid: bool,             // آیا ورودی معتبر است؟
    on_input_changed: F,              // تابع فراخوانی هنگام تغییر ورودی
    on_submit_maybe: Option<Message>, // پیام ارسالی با Enter (اختیاری)
) -> Element<'a, Message>
where
    F: Fn(String) -> Message + 'a,
{
    let text_input_widget = iced::widget::text_input(placeholder, raw_input_buf)
        .on_input(on_input_changed)
        .on_submit_maybe(on_submit_maybe)
        .width(Fill)
        .style(move |theme, status| style::validated_text_input(theme, status, is_input_valid));

    row![text(label).width(72).style(style::muted_text), text_input_widget]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

/// ردیف دکمه‌های انتخاب یکی از چند گزینه (وضوح، جهت و نوع سفارش)
pub fn segmented<'a, T, Message>(
    options: &[T],
    selected: T,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq + std::fmt::Display,
    Message: Clone + 'a,
{
    let buttons = options.iter().map(|option| {
        let option = *option;
        let is_selected = option == selected;

        Element::from(
            button(text(option.to_string()).size(12))
                .style(move |theme, status| style::button::transparent(theme, status, is_selected))
                .on_press(on_select(option)),
        )
    });

    row(buttons).spacing(4).into()
}

/// کارت یک بخش داشبورد با عنوان
pub fn section<'a, Message: 'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        column![text(title).size(14).style(style::title_text), content.into()].spacing(12),
    )
    .padding(16)
    .width(Fill)
    .style(style::panel)
    .into()
}

#[macro_export]
/// ایجاد یک ستون که بین هر آیتم آن یک خط جداکننده افقی قرار می‌گیرد
///
/// # مثال
/// ```ignore
/// split_column![
///     text("Item 1"),
///     text("Item 2"),
/// ] ; spacing = 8
/// ```
macro_rules! split_column {
    () => {
        column![]
    };

    ($item:expr $(,)?) => {
        column![$item]
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let mut col = column![$first];
        $(
            col = col.push(iced::widget::rule::horizontal(1.0).style($crate::style::split_ruler));
            col = col.push($rest);
        )+
        col
    }};

    ($($item:expr),* $(,)?; spacing = $spacing:expr) => {{
        $crate::split_column![$($item),*].spacing($spacing)
    }};
}

use iced::{Size, Subscription, window};

pub use iced::window::{Id, Settings, open};

/// اندازه‌ی پیش‌فرض پنجره‌ی داشبورد
const DEFAULT_SIZE: Size = Size::new(960.0, 900.0);
const MIN_SIZE: Size = Size::new(640.0, 480.0);

/// رویدادهای مربوط به پنجره
#[derive(Debug, Clone, Copy)]
pub enum Event {
    CloseRequested(window::Id), // درخواست بستن پنجره
}

/// گوش دادن به رویدادهای پنجره
pub fn events() -> Subscription<Event> {
    iced::event::listen_with(filtered_events)
}

fn filtered_events(
    event: iced::Event,
    _status: iced::event::Status,
    window: window::Id,
) -> Option<Event> {
    match &event {
        iced::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Event::CloseRequested(window))
        }
        _ => None,
    }
}

/// تنظیمات پنجره؛ بستن پنجره به صورت دستی و با پیام برنامه انجام می‌شود
pub fn settings() -> Settings {
    Settings {
        size: DEFAULT_SIZE,
        min_size: Some(MIN_SIZE),
        exit_on_close_request: false,
        ..Default::default()
    }
}

use crate::{split_column, style, widget};

use data::storage::{self, KeyValueStore};
use data::util::currency;
use data::watchlist::{Added, Row, Watchlist};
use exchange::{SeedBook, Ticker};

use iced::{
    Alignment, Element,
    widget::{button, column, row, space, text},
};

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Add,
    Chart(Ticker),
    Remove(Ticker),
}

/// نتیجه‌ای که باید در سطح برنامه اعمال شود
#[derive(Debug)]
pub enum Action {
    Chart(Ticker),               // نمایش نماد در نمودار و پیمایش به آن
    StoreFailed(storage::Error), // خطای نوشتن فهرست
}

/// فهرست دیده‌بانی ماندگار و ورودی افزودن نماد
///
/// ردیف‌ها فقط پس از هر تغییر فهرست یا جدول بذرها از ذخیره‌ساز خوانده می‌شوند،
/// نه در هر بار رسم.
pub struct WatchlistPanel<S> {
    watchlist: Watchlist<S>,
    rows: Vec<Row>, // آخرین ردیف‌های خوانده شده از ذخیره‌ساز
    input: String,
}

impl<S: KeyValueStore> WatchlistPanel<S> {
    pub fn new(store: S, seeds: &SeedBook) -> Self {
        let watchlist = Watchlist::new(store);

        Self {
            rows: watchlist.rows(seeds),
            watchlist,
            input: String::new(),
        }
    }

    /// بارگذاری دوباره‌ی ردیف‌ها از داده‌ی ذخیره شده
    pub fn refresh(&mut self, seeds: &SeedBook) {
        self.rows = self.watchlist.rows(seeds);
    }

    pub fn update(&mut self, message: Message, seeds: &SeedBook) -> Option<Action> {
        let writes = matches!(message, Message::Add | Message::Remove(_));

        let action = match message {
            Message::InputChanged(input) => {
                self.input = input;
                None
            }
            Message::Add => {
                let raw = std::mem::take(&mut self.input);

                match self.watchlist.add(&raw) {
                    Ok(Added::AlreadyPresent(ticker)) => {
                        log::debug!("{ticker} is already on the watchlist");
                        None
                    }
                    Ok(Added::Inserted(_) | Added::Blank) => None,
                    Err(err) => Some(Action::StoreFailed(err)),
                }
            }
            Message::Chart(ticker) => Some(Action::Chart(ticker)),
            Message::Remove(ticker) => self.watchlist.remove(&ticker).err().map(Action::StoreFailed),
        };

        // پس از هر نوشتن، موفق یا ناموفق، فهرست از ذخیره‌ساز خوانده می‌شود
        if writes {
            self.refresh(seeds);
        }

        action
    }

    pub fn view(&self) -> Element<'_, Message> {
        let add_row = row![
            widget::labeled_input(
                "Symbol",
                "e.g. NVDA",
                &self.input,
                true,
                Message::InputChanged,
                Some(Message::Add),
            ),
            button(text("Add"))
                .style(|theme, status| style::button::confirm(theme, status, true))
                .on_press(Message::Add),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let list: Element<'_, Message> = if self.rows.is_empty() {
            text("No symbols yet.").size(12).style(style::muted_text).into()
        } else {
            column(self.rows.iter().map(|entry| {
                Element::from(
                    row![
                        text(entry.ticker.to_string()).width(80),
                        text(currency(entry.base_price)).style(style::muted_text),
                        space::horizontal(),
                        button(text("Chart").size(12))
                            .style(|theme, status| style::button::transparent(theme, status, false))
                            .on_press(Message::Chart(entry.ticker.clone())),
                        button(text("Remove").size(12))
                            .style(style::button::cancel)
                            .on_press(Message::Remove(entry.ticker.clone())),
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center),
                )
            }))
            .spacing(4)
            .into()
        };

        widget::section("Watchlist", split_column![add_row, list; spacing = 8])
    }
}

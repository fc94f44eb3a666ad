// غیرفعال کردن کنسول در ویندوز برای نسخه‌های ریلیز
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod chart;  // بوم نمودار خطی
mod logger; // سیستم ثبت وقایع (Log)
mod panel;  // فرم‌های سفارش، سود و زیان و دیده‌بانی
mod style;  // استایل‌های ظاهری
mod widget; // ویجت‌های کمکی رابط کاربری
mod window; // تنظیمات و رویدادهای پنجره

use chart::LineChart;
use data::config::theme;
use data::session::{Action, Event};
use data::{Config, FileStore, Session};
use exchange::{Resolution, Ticker};
use panel::order::{self, OrderPanel};
use panel::pnl::{self, PnlPanel};
use panel::watchlist::{self, WatchlistPanel};

use iced::widget::canvas::{Cache, Canvas};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{
    Id, button, column, container, operation, pick_list, row, scrollable, space, text,
};
use iced::{Alignment, Element, Length::Fill, Subscription, Task};

/// شناسه‌ی ستون اصلی قابل پیمایش؛ نمودار در ابتدای آن قرار دارد
const DASHBOARD_SCROLL: &str = "dashboard";
const CHART_HEIGHT: f32 = 364.0;

/// نقطه شروع برنامه
fn main() {
    logger::setup(cfg!(debug_assertions)).expect("Failed to initialize logger");

    let _ = iced::daemon(Mocktrade::new, Mocktrade::update, Mocktrade::view)
        .settings(iced::Settings {
            antialiasing: true,
            default_text_size: iced::Pixels(13.0),
            ..Default::default()
        })
        .title(Mocktrade::title)
        .theme(Mocktrade::theme)
        .subscription(Mocktrade::subscription)
        .run();
}

/// وضعیت کل برنامه
struct Mocktrade {
    main_window: window::Id,              // پنجره اصلی برنامه
    config: Config,                       // تنظیمات اجرا
    session: Session,                     // نماد، وضوح و سری قیمت فعال
    chart_cache: Cache,                   // کش هندسه‌ی نمودار
    order: OrderPanel,                    // فرم سفارش
    pnl: PnlPanel,                        // ماشین‌حساب سود و زیان
    watchlist: WatchlistPanel<FileStore>, // فهرست دیده‌بانی ماندگار
    status: Option<String>,               // آخرین خطای ذخیره‌سازی
    theme: data::Theme,                   // تم برنامه
}

/// پیام‌هایی که وضعیت برنامه را تغییر می‌دهند
#[derive(Debug, Clone)]
enum Message {
    TickerSelected(Ticker),          // انتخاب نماد از انتخابگر
    ResolutionSelected(Resolution),  // تغییر وضوح نمودار
    Tick(std::time::Instant),        // تیک تایمر به‌روزرسانی زنده
    Order(order::Message),           // پیام‌های فرم سفارش
    Pnl(pnl::Message),               // پیام‌های ماشین‌حساب
    Watchlist(watchlist::Message),   // پیام‌های فهرست دیده‌بانی
    DismissStatus,                   // بستن نوار وضعیت
    WindowEvent(window::Event),      // رویدادهای پنجره
}

impl Mocktrade {
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        let session = Session::new(&config);

        let store = FileStore::in_data_dir();
        log::info!("Watchlist storage at {}", store.root().display());

        let (main_window, open_main_window) = window::open(window::settings());

        let state = Self {
            main_window,
            order: OrderPanel::new(session.ticker()),
            pnl: PnlPanel::default(),
            watchlist: WatchlistPanel::new(store, session.seeds()),
            chart_cache: Cache::default(),
            status: None,
            theme: data::Theme::default(),
            session,
            config,
        };

        (state, open_main_window.discard())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TickerSelected(ticker) => return self.apply(Event::TickerSelected(ticker)),
            Message::ResolutionSelected(resolution) => {
                return self.apply(Event::ResolutionSelected(resolution));
            }
            Message::Tick(_) => return self.apply(Event::Tick),
            Message::Order(message) => self.order.update(message, &self.session),
            Message::Pnl(message) => self.pnl.update(message),
            Message::Watchlist(message) => {
                match self.watchlist.update(message, self.session.seeds()) {
                    Some(watchlist::Action::Chart(ticker)) => {
                        return self.apply(Event::WatchlistSelected(ticker));
                    }
                    Some(watchlist::Action::StoreFailed(err)) => {
                        log::error!("Failed to save watchlist: {err}");
                        self.status = Some(format!("Watchlist was not saved: {err}"));
                    }
                    None => {}
                }
            }
            Message::DismissStatus => self.status = None,
            Message::WindowEvent(window::Event::CloseRequested(id)) => {
                if id == self.main_window {
                    return iced::exit();
                }
            }
        }

        Task::none()
    }

    /// اعمال رویداد روی جلسه و ترجمه‌ی نتیجه به تسک رابط کاربری
    fn apply(&mut self, event: Event) -> Task<Message> {
        let selects_ticker = matches!(
            event,
            Event::TickerSelected(_) | Event::WatchlistSelected(_)
        );

        let action = self.session.update(event);

        if selects_ticker {
            self.order.sync_symbol(self.session.ticker());
            // نماد ناشناخته ممکن است بذر تازه‌ای ثبت کرده باشد
            self.watchlist.refresh(self.session.seeds());
        }

        match action {
            Some(Action::Redraw) => {
                self.chart_cache.clear();
                Task::none()
            }
            Some(Action::ScrollToChart) => {
                self.chart_cache.clear();
                operation::snap_to(Id::new(DASHBOARD_SCROLL), RelativeOffset::START)
            }
            None => Task::none(),
        }
    }

    fn view(&self, _window: window::Id) -> Element<'_, Message> {
        let mut content = column![self.view_chart()].spacing(12);

        if let Some(status) = &self.status {
            content = content.push(
                container(
                    row![
                        text(status.as_str()).size(12),
                        space::horizontal(),
                        button(text("Dismiss").size(12))
                            .style(|theme, status| style::button::transparent(theme, status, false))
                            .on_press(Message::DismissStatus),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding(8)
                .style(style::status_bar),
            );
        }

        content = content
            .push(
                row![
                    self.order.view().map(Message::Order),
                    self.pnl.view().map(Message::Pnl),
                ]
                .spacing(12),
            )
            .push(self.watchlist.view().map(Message::Watchlist));

        scrollable(container(content).padding(16).width(Fill))
            .id(Id::new(DASHBOARD_SCROLL))
            .style(style::scroll_bar)
            .height(Fill)
            .into()
    }

    /// انتخابگر نماد، دکمه‌های وضوح، نمایش قیمت و بوم نمودار
    fn view_chart(&self) -> Element<'_, Message> {
        let symbol_picker = pick_list(
            self.session.seeds().tickers(),
            Some(self.session.ticker().clone()),
            Message::TickerSelected,
        );

        let resolutions = widget::segmented(
            &Resolution::ALL,
            self.session.resolution(),
            Message::ResolutionSelected,
        );

        let readout: Element<'_, Message> = match self.session.readout() {
            Some(readout) => {
                let color = theme::change_color(readout.change_pct);
                row![
                    text(readout.last_price_text()).size(16),
                    text(readout.change_text()).size(14).color(color),
                ]
                .spacing(8)
                .align_y(Alignment::Center)
                .into()
            }
            None => space::horizontal().into(),
        };

        let header = row![symbol_picker, resolutions, space::horizontal(), readout]
            .spacing(12)
            .align_y(Alignment::Center);

        let chart = Canvas::new(LineChart::new(self.session.series(), &self.chart_cache))
            .width(Fill)
            .height(CHART_HEIGHT);

        widget::section("Chart", column![header, chart].spacing(8))
    }

    fn theme(&self, _window: window::Id) -> iced_core::Theme {
        self.theme.clone().into()
    }

    fn title(&self, _window: window::Id) -> String {
        format!("Mocktrade [{}]", self.session.ticker())
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_events = window::events().map(Message::WindowEvent);
        let tick = iced::time::every(self.config.tick_interval).map(Message::Tick);

        Subscription::batch(vec![window_events, tick])
    }
}

use crate::chart::Readout;
use crate::config::Config;

use exchange::{Resolution, SeedBook, Series, Ticker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// رویدادهای گسسته‌ای که وضعیت نمودار را تغییر می‌دهند
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TickerSelected(Ticker),        // انتخاب نماد از انتخابگر
    ResolutionSelected(Resolution), // کلیک روی دکمه‌های وضوح
    WatchlistSelected(Ticker),     // دکمه‌ی Chart در فهرست دیده‌بانی
    Tick,                          // تیک تایمر زنده
}

/// دستوری که پس از پردازش رویداد به رابط کاربری برگردانده می‌شود
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,        // نمودار باید دوباره رسم شود
    ScrollToChart, // رسم مجدد و پیمایش نما به ناحیه‌ی نمودار
}

/// وضعیت جلسه‌ی نمودار: نماد فعال، وضوح، سری قیمت و جدول بذرها
///
/// تنها مالک وضعیت قابل تغییر نمودار است؛ همه‌ی تغییرات از طریق `update`
/// و روی یک رشته‌ی اجرا انجام می‌شوند.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    seeds: SeedBook,
    ticker: Ticker,
    resolution: Resolution,
    series: Series,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: &Config, rng: R) -> Self {
        let mut session = Self {
            seeds: SeedBook::default(),
            ticker: config.default_ticker.clone(),
            resolution: config.default_resolution,
            series: Series::empty(config.default_resolution.points()),
            rng,
        };
        session.refresh();
        session
    }

    pub fn update(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::TickerSelected(ticker) => {
                self.ticker = ticker;
                self.refresh();
                Some(Action::Redraw)
            }
            Event::ResolutionSelected(resolution) => {
                self.resolution = resolution;
                self.refresh();
                Some(Action::Redraw)
            }
            Event::WatchlistSelected(ticker) => {
                self.ticker = ticker;
                self.refresh();
                Some(Action::ScrollToChart)
            }
            Event::Tick => {
                let volatility = self.seeds.ensure(&self.ticker).volatility;
                self.series
                    .step(volatility, &mut self.rng)
                    .map(|_| Action::Redraw)
            }
        }
    }

    /// تولید دوباره‌ی کل سری برای نماد و وضوح فعلی
    ///
    /// نماد ناشناخته با بذر پیش‌فرض ثبت می‌شود، از هر مسیری که انتخاب شده باشد.
    fn refresh(&mut self) {
        let seed = self.seeds.ensure(&self.ticker);
        self.series = Series::generate(seed, self.resolution.points(), &mut self.rng);

        log::debug!(
            "Generated {} points for {} (base {}, volatility {})",
            self.series.len(),
            self.ticker,
            seed.base,
            seed.volatility
        );
    }
}

impl<R> Session<R> {
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn seeds(&self) -> &SeedBook {
        &self.seeds
    }

    pub fn readout(&self) -> Option<Readout> {
        Readout::from_series(&self.series)
    }

    /// قیمت تقریبی بازار برای سفارش‌های MARKET
    ///
    /// آخرین قیمت سری فعال، هر نمادی که سفارش داشته باشد؛ برای سری خالی قیمت
    /// پایه‌ی بذر نماد سفارش و در نهایت قیمت پایه‌ی پیش‌فرض.
    pub fn market_price(&self, ticker: &Ticker) -> f64 {
        if let Some(last) = self.series.last() {
            return last;
        }

        self.seeds.base_or_default(ticker)
    }
}

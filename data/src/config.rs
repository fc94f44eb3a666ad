use exchange::{Resolution, Ticker};

use std::time::Duration;

// ماژول‌های مربوط به بخش‌های مختلف تنظیمات برنامه
pub mod theme;

/// فاصله‌ی پیش‌فرض تیک‌های به‌روزرسانی زنده
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1500);
/// متغیر محیطی برای تغییر فاصله‌ی تیک (میلی‌ثانیه)
pub const TICK_INTERVAL_ENV: &str = "MOCKTRADE_TICK_MS";

const MIN_TICK_MS: u64 = 100;
const DEFAULT_TICKER: &str = "AAPL";

/// تنظیمات اجرای برنامه
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick_interval: Duration,       // فاصله‌ی تیک تایمر زنده
    pub default_resolution: Resolution, // وضوح شروع نمودار
    pub default_ticker: Ticker,        // نماد شروع نمودار
}

impl Config {
    /// تنظیمات پیش‌فرض با اعمال متغیرهای محیطی
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(TICK_INTERVAL_ENV) {
            match parse_tick_ms(&raw) {
                Some(interval) => config.tick_interval = interval,
                None => log::warn!("Ignoring invalid {TICK_INTERVAL_ENV}={raw:?}"),
            }
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            default_resolution: Resolution::default(),
            default_ticker: Ticker::parse(DEFAULT_TICKER)
                .unwrap_or_else(|| unreachable!("default ticker is a non-empty literal")),
        }
    }
}

fn parse_tick_ms(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms >= MIN_TICK_MS)
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.tick_interval, Duration::from_millis(1500));
        assert_eq!(config.default_resolution.points(), 60);
        assert_eq!(config.default_ticker.as_str(), "AAPL");
    }

    #[test]
    fn tick_override_parsing() {
        assert_eq!(parse_tick_ms(" 250 "), Some(Duration::from_millis(250)));
        assert_eq!(parse_tick_ms("10"), None);
        assert_eq!(parse_tick_ms("fast"), None);
    }
}

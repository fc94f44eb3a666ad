use crate::Ticker;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// قیمت پایه بذر پیش‌فرض برای نمادهای ناشناخته
pub const DEFAULT_BASE: f64 = 100.0;
/// نوسان بذر پیش‌فرض برای نمادهای ناشناخته
pub const DEFAULT_VOLATILITY: f64 = 0.8;

/// بذرهای داخلی: (نماد، قیمت پایه، نوسان)
const BUILTIN: [(&str, f64, f64); 4] = [
    ("AAPL", 180.0, 0.6),
    ("MSFT", 380.0, 0.5),
    ("GOOGL", 140.0, 0.7),
    ("TSLA", 250.0, 1.2),
];

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("base price must be positive and finite, got {0}")]
    InvalidBase(f64),
    #[error("volatility must be non-negative and finite, got {0}")]
    InvalidVolatility(f64),
}

/// پیکربندی شروع شبیه‌سازی قیمت یک نماد
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Seed {
    pub base: f64,       // قیمت شروع
    pub volatility: f64, // حداکثر اندازه شوک در هر گام
}

impl Seed {
    pub fn new(base: f64, volatility: f64) -> Result<Self, SeedError> {
        if !base.is_finite() || base <= 0.0 {
            return Err(SeedError::InvalidBase(base));
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SeedError::InvalidVolatility(volatility));
        }
        Ok(Self { base, volatility })
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            volatility: DEFAULT_VOLATILITY,
        }
    }
}

/// جدول بذرها به ازای هر نماد
///
/// در زمان اجرا با بذر پیش‌فرض گسترش می‌یابد؛ هر مسیری که نمادی را رسم
/// می‌کند از `ensure` استفاده می‌کند تا رسم نماد ناشناخته هرگز شکست نخورد.
#[derive(Debug, Clone)]
pub struct SeedBook {
    seeds: FxHashMap<Ticker, Seed>,
    order: Vec<Ticker>, // ترتیب نمایش در انتخابگر نماد
}

impl SeedBook {
    pub fn empty() -> Self {
        Self {
            seeds: FxHashMap::default(),
            order: vec![],
        }
    }

    pub fn get(&self, ticker: &Ticker) -> Option<Seed> {
        self.seeds.get(ticker).copied()
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.seeds.contains_key(ticker)
    }

    pub fn insert(&mut self, ticker: Ticker, seed: Seed) {
        if self.seeds.insert(ticker.clone(), seed).is_none() {
            self.order.push(ticker);
        }
    }

    /// بذر نماد را برمی‌گرداند و در صورت نبود، بذر پیش‌فرض را ثبت می‌کند
    pub fn ensure(&mut self, ticker: &Ticker) -> Seed {
        if let Some(seed) = self.get(ticker) {
            return seed;
        }

        log::info!("No seed for {ticker}, registering default seed");
        let seed = Seed::default();
        self.insert(ticker.clone(), seed);
        seed
    }

    /// قیمت پایه نماد، یا قیمت پایه پیش‌فرض برای نمادهای ناشناخته
    pub fn base_or_default(&self, ticker: &Ticker) -> f64 {
        self.get(ticker).map_or(DEFAULT_BASE, |seed| seed.base)
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.order
    }
}

impl Default for SeedBook {
    fn default() -> Self {
        let mut book = Self::empty();

        for (symbol, base, volatility) in BUILTIN {
            if let (Some(ticker), Ok(seed)) = (Ticker::parse(symbol), Seed::new(base, volatility)) {
                book.insert(ticker, seed);
            }
        }

        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    #[test]
    fn builtin_seeds_are_present_in_order() {
        let book = SeedBook::default();

        let symbols: Vec<&str> = book.tickers().iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, ["AAPL", "MSFT", "GOOGL", "TSLA"]);
        assert_eq!(book.get(&ticker("TSLA")), Some(Seed { base: 250.0, volatility: 1.2 }));
    }

    #[test]
    fn ensure_registers_default_seed_once() {
        let mut book = SeedBook::default();
        let nvda = ticker("nvda");

        assert!(!book.contains(&nvda));
        assert_eq!(book.ensure(&nvda), Seed::default());
        assert_eq!(book.ensure(&nvda), Seed::default());

        assert_eq!(book.tickers().iter().filter(|t| **t == nvda).count(), 1);
        assert_eq!(book.tickers().last(), Some(&nvda));
    }

    #[test]
    fn ensure_keeps_known_seed() {
        let mut book = SeedBook::default();
        assert_eq!(book.ensure(&ticker("AAPL")).base, 180.0);
    }

    #[test]
    fn base_or_default_does_not_insert() {
        let book = SeedBook::default();
        assert_eq!(book.base_or_default(&ticker("ZZZ")), DEFAULT_BASE);
        assert!(!book.contains(&ticker("ZZZ")));
    }

    #[test]
    fn seed_validation() {
        assert!(Seed::new(100.0, 0.0).is_ok());
        assert_eq!(Seed::new(0.0, 1.0), Err(SeedError::InvalidBase(0.0)));
        assert_eq!(Seed::new(10.0, -0.1), Err(SeedError::InvalidVolatility(-0.1)));
        assert!(Seed::new(f64::NAN, 1.0).is_err());
        assert_eq!(
            Seed::new(f64::INFINITY, 1.0),
            Err(SeedError::InvalidBase(f64::INFINITY))
        );
        assert_eq!(
            Seed::new(100.0, f64::INFINITY),
            Err(SeedError::InvalidVolatility(f64::INFINITY))
        );
    }
}

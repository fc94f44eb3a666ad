pub mod seed;
pub mod series;
pub mod util;

pub use seed::{Seed, SeedBook};
pub use series::Series;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// نماد معاملاتی نرمال‌شده (حروف بزرگ، بدون فاصله، غیرخالی)
///
/// تنها راه ساخت آن `Ticker::parse` است؛ بنابراین هر `Ticker` موجود
/// همیشه شکل نرمال دارد.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// نرمال‌سازی ورودی کاربر؛ برای ورودی خالی `None` برمی‌گرداند
    pub fn parse(raw: &str) -> Option<Self> {
        let symbol = raw.trim().to_uppercase();

        if symbol.is_empty() {
            None
        } else {
            Some(Self(symbol))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ticker::parse(&raw).ok_or_else(|| serde::de::Error::custom("empty ticker symbol"))
    }
}

/// وضوح نمودار: تعداد نقاط سری قیمت نمایش داده شده
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Resolution {
    P30,
    #[default]
    P60,
    P120,
    P240,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::P30,
        Resolution::P60,
        Resolution::P120,
        Resolution::P240,
    ];

    /// طول سری (ظرفیت N)
    pub fn points(self) -> usize {
        match self {
            Resolution::P30 => 30,
            Resolution::P60 => 60,
            Resolution::P120 => 120,
            Resolution::P240 => 240,
        }
    }

    pub fn from_points(points: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|res| res.points() == points)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

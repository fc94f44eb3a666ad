use crate::seed::Seed;
use crate::util::{MIN_PRICE, pct_change, round_to_cents};

use rand::Rng;
use std::collections::VecDeque;

/// یک گام از گام تصادفی محدود
///
/// قیمت قبلی به اضافه شوک یکنواخت در بازه `[-volatility, +volatility]`،
/// با کف `MIN_PRICE` و گرد شده به دو رقم اعشار.
pub fn next_price<R: Rng>(prev: f64, volatility: f64, rng: &mut R) -> f64 {
    let shock = if volatility > 0.0 {
        rng.random_range(-volatility..=volatility)
    } else {
        0.0
    };

    round_to_cents((prev + shock).max(MIN_PRICE))
}

/// سری قیمت با ظرفیت ثابت (FIFO)
///
/// پس از رسیدن به ظرفیت، هر نقطه‌ی جدید قدیمی‌ترین نقطه را بیرون می‌کند.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: VecDeque<f64>,
    capacity: usize,
}

impl Series {
    pub fn empty(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// تولید `len` نقطه با شروع از قیمت پایه‌ی بذر
    pub fn generate<R: Rng>(seed: Seed, len: usize, rng: &mut R) -> Self {
        let mut series = Self::empty(len);

        let mut price = seed.base;
        for i in 0..len {
            if i > 0 {
                price = next_price(price, seed.volatility, rng);
            }
            series.points.push_back(price);
        }

        series
    }

    /// افزودن یک نقطه؛ نقطه‌ی بیرون‌رانده شده (در صورت وجود) برگردانده می‌شود
    pub fn push(&mut self, price: f64) -> Option<f64> {
        self.points.push_back(price);

        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }

    /// به‌روزرسانی زنده: یک گام از آخرین قیمت؛ برای سری خالی کاری انجام نمی‌شود
    pub fn step<R: Rng>(&mut self, volatility: f64, rng: &mut R) -> Option<f64> {
        let last = self.last()?;
        let next = next_price(last, volatility, rng);
        self.push(next);
        Some(next)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first(&self) -> Option<f64> {
        self.points.front().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + Clone + '_ {
        self.points.iter().copied()
    }

    /// درصد تغییر از اولین تا آخرین نقطه
    pub fn change_pct(&self) -> Option<f64> {
        Some(pct_change(self.first()?, self.last()?))
    }
}

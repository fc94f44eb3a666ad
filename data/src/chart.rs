use crate::util;

use exchange::Series;
use iced_core::{Point, Size};

/// فاصله‌ی ثابت محورها از لبه‌های سطح رسم
pub const PADDING: f32 = 32.0;

/// دو محور عمود بر هم: افقی در پایین و عمودی در سمت چپ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub x: (Point, Point),
    pub y: (Point, Point),
}

impl Axes {
    /// برای سطحی کوچک‌تر از دو برابر فاصله‌ی لبه چیزی رسم نمی‌شود
    pub fn new(size: Size, padding: f32) -> Option<Self> {
        if size.width <= padding * 2.0 || size.height <= padding * 2.0 {
            return None;
        }

        let bottom = size.height - padding;

        Some(Self {
            x: (Point::new(padding, bottom), Point::new(size.width - padding, bottom)),
            y: (Point::new(padding, padding), Point::new(padding, bottom)),
        })
    }
}

/// مختصات آماده‌ی رسم یک سری قیمت
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub axes: Axes,
    pub points: Vec<Point>,
}

impl Plot {
    /// نگاشت خطی سری به سطح رسم
    ///
    /// اندیس به `[padding, width - padding]` و مقدار به `[padding, height - padding]`
    /// نگاشت می‌شود (کمینه پایین، بیشینه بالا). حالت‌های خاص:
    /// - سری تخت (`min == max`): همه‌ی نقاط در ارتفاع میانی
    /// - بازه‌ی نامتناهی (مثلاً `[-f64::MAX, f64::MAX]` یا مقدار `inf`): مانند سری تخت
    /// - سری تک‌نقطه‌ای: نقطه در وسط افقی
    /// - سری خالی یا سطح خیلی کوچک: `None`
    pub fn project<I>(values: I, size: Size, padding: f32) -> Option<Self>
    where
        I: ExactSizeIterator<Item = f64> + Clone,
    {
        let len = values.len();
        if len == 0 {
            return None;
        }
        let axes = Axes::new(size, padding)?;

        let (min, max) = values
            .clone()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;

        let left = f64::from(padding);
        let top = f64::from(padding);
        let width = f64::from(size.width) - left * 2.0;
        let height = f64::from(size.height) - top * 2.0;

        let points = values
            .enumerate()
            .map(|(i, value)| {
                let x = if len > 1 {
                    left + (i as f64 / (len - 1) as f64) * width
                } else {
                    left + width / 2.0
                };

                let y = if range > 0.0 && range.is_finite() {
                    top + (1.0 - (value - min) / range) * height
                } else {
                    f64::from(size.height) / 2.0
                };

                Point::new(x as f32, y as f32)
            })
            .collect();

        Some(Self { axes, points })
    }
}

/// نمایش آخرین قیمت و درصد تغییر کنار نمودار
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub last_price: f64,
    pub change_pct: f64,
}

impl Readout {
    pub fn from_series(series: &Series) -> Option<Self> {
        Some(Self {
            last_price: series.last()?,
            change_pct: series.change_pct()?,
        })
    }

    pub fn is_up(&self) -> bool {
        self.change_pct >= 0.0
    }

    pub fn last_price_text(&self) -> String {
        util::currency(self.last_price)
    }

    pub fn change_text(&self) -> String {
        util::signed_pct(self.change_pct)
    }
}

/// کمترین قیمت مجاز در شبیه‌سازی؛ قیمت‌ها هرگز به صفر یا منفی نمی‌رسند
pub const MIN_PRICE: f64 = 1.0;

/// گرد کردن به دو رقم اعشار (سنت)
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// درصد تغییر از `first` تا `last`
///
/// برای `first == 0` مقدار صفر برمی‌گردد تا خروجی هرگز NaN نشود.
pub fn pct_change(first: f64, last: f64) -> f64 {
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}

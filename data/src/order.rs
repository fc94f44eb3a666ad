use exchange::Ticker;

use std::fmt;

/// جهت سفارش
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Buy, Side::Sell];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        })
    }
}

/// نوع سفارش؛ فیلدهای قیمت و ماشه به آن وابسته‌اند
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    #[default]
    Market,
    Limit,
    StopLoss,
}

impl OrderKind {
    pub const ALL: [OrderKind; 3] = [OrderKind::Market, OrderKind::Limit, OrderKind::StopLoss];

    /// آیا فیلد قیمت نمایش داده و الزامی است؟
    pub fn requires_price(self) -> bool {
        !matches!(self, OrderKind::Market)
    }

    /// آیا فیلد ماشه (Trigger) نمایش داده و الزامی است؟
    pub fn requires_trigger(self) -> bool {
        matches!(self, OrderKind::StopLoss)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::StopLoss => "STOP_LOSS",
        })
    }
}

/// خطاهای اعتبارسنجی فرم سفارش، به ترتیب بررسی
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Enter a valid symbol.")]
    Symbol,
    #[error("Quantity must be at least 1.")]
    Quantity,
    #[error("Enter a valid price.")]
    Price,
    #[error("Enter a valid trigger.")]
    Trigger,
}

/// سفارش شبیه‌سازی شده‌ی معتبر؛ فقط برای نمایش خلاصه ساخته می‌شود
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: u32,
    pub price: Option<f64>,   // برای MARKET همیشه None
    pub trigger: Option<f64>, // فقط برای STOP_LOSS
    pub ticker: Ticker,
}

impl Order {
    /// خلاصه‌ی قابل خواندن سفارش
    ///
    /// برای سفارش MARKET از `market_price` به عنوان قیمت تقریبی استفاده می‌شود.
    pub fn summary(&self, market_price: f64) -> String {
        let price = match self.price {
            Some(price) if self.kind.requires_price() => format!("${price:.2}"),
            _ => format!("Market (~${market_price:.2})"),
        };

        let mut parts = vec![
            format!("Order: {} {}", self.side, self.ticker),
            format!("Type: {}", self.kind),
            format!("Qty: {}", self.quantity),
            format!("Price: {price}"),
        ];

        if let Some(trigger) = self.trigger {
            parts.push(format!("Trigger: ${trigger:.2}"));
        }

        parts.join(" | ")
    }

    /// پیام تایید ثبت سفارش
    pub fn confirmation(&self, market_price: f64) -> String {
        format!("Submitted ✅ {}", self.summary(market_price))
    }
}

/// وضعیت خام فرم سفارش، همان‌طور که کاربر وارد کرده است
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Draft {
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: String,
    pub price: String,
    pub trigger: String,
    pub symbol: String,
}

impl Draft {
    pub fn new(symbol: &Ticker) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Self::default()
        }
    }

    /// اعتبارسنجی با توقف در اولین خطا: نماد، تعداد، قیمت، ماشه
    pub fn validate(&self) -> Result<Order, OrderError> {
        let ticker = Ticker::parse(&self.symbol).ok_or(OrderError::Symbol)?;

        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|qty| *qty >= 1)
            .ok_or(OrderError::Quantity)?;

        let price = if self.kind.requires_price() {
            Some(parse_positive(&self.price).ok_or(OrderError::Price)?)
        } else {
            None
        };

        let trigger = if self.kind.requires_trigger() {
            Some(parse_positive(&self.trigger).ok_or(OrderError::Trigger)?)
        } else {
            None
        };

        Ok(Order {
            side: self.side,
            kind: self.kind,
            quantity,
            price,
            trigger,
            ticker,
        })
    }

    /// پاک کردن فرم پس از ثبت؛ نماد به نماد فعال نمودار برمی‌گردد و نوع سفارش
    /// (و در نتیجه نمایش فیلدهای وابسته) به حالت اولیه
    pub fn reset(&mut self, active: &Ticker) {
        *self = Self::new(active);
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(kind: OrderKind, qty: &str, price: &str, trigger: &str) -> Draft {
        Draft {
            side: Side::Buy,
            kind,
            quantity: qty.to_string(),
            price: price.to_string(),
            trigger: trigger.to_string(),
            symbol: "aapl".to_string(),
        }
    }

    #[test]
    fn field_requirements_per_kind() {
        assert!(!OrderKind::Market.requires_price());
        assert!(!OrderKind::Market.requires_trigger());
        assert!(OrderKind::Limit.requires_price());
        assert!(!OrderKind::Limit.requires_trigger());
        assert!(OrderKind::StopLoss.requires_price());
        assert!(OrderKind::StopLoss.requires_trigger());
    }

    #[test]
    fn limit_with_zero_price_is_rejected() {
        let result = draft(OrderKind::Limit, "10", "0", "").validate();
        assert_eq!(result, Err(OrderError::Price));
        assert_eq!(OrderError::Price.to_string(), "Enter a valid price.");
    }

    #[test]
    fn market_ignores_price() {
        let order = draft(OrderKind::Market, "10", "0", "").validate().unwrap();

        assert_eq!(order.price, None);
        assert_eq!(order.trigger, None);
        assert_eq!(order.ticker.as_str(), "AAPL");
    }

    #[test]
    fn validation_is_fail_fast_in_order() {
        let mut bad = draft(OrderKind::StopLoss, "0", "-1", "x");
        bad.symbol = "   ".to_string();
        assert_eq!(bad.validate(), Err(OrderError::Symbol));

        bad.symbol = "tsla".to_string();
        assert_eq!(bad.validate(), Err(OrderError::Quantity));

        bad.quantity = "3".to_string();
        assert_eq!(bad.validate(), Err(OrderError::Price));

        bad.price = "250".to_string();
        assert_eq!(bad.validate(), Err(OrderError::Trigger));

        bad.trigger = "245.5".to_string();
        assert!(bad.validate().is_ok());
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        for qty in ["", "0", "-2", "1.5", "abc"] {
            assert_eq!(
                draft(OrderKind::Market, qty, "", "").validate(),
                Err(OrderError::Quantity),
                "qty {qty:?}"
            );
        }
        assert!(draft(OrderKind::Market, " 1 ", "", "").validate().is_ok());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        for price in ["", "abc", "NaN", "inf"] {
            assert_eq!(
                draft(OrderKind::Limit, "1", price, "").validate(),
                Err(OrderError::Price)
            );
        }
    }

    #[test]
    fn limit_summary() {
        let order = draft(OrderKind::Limit, "10", "180", "").validate().unwrap();

        assert_eq!(
            order.confirmation(999.0),
            "Submitted ✅ Order: BUY AAPL | Type: LIMIT | Qty: 10 | Price: $180.00"
        );
    }

    #[test]
    fn market_summary_uses_price_proxy() {
        let mut d = draft(OrderKind::Market, "2", "", "");
        d.side = Side::Sell;
        let order = d.validate().unwrap();

        assert_eq!(
            order.summary(181.234),
            "Order: SELL AAPL | Type: MARKET | Qty: 2 | Price: Market (~$181.23)"
        );
    }

    #[test]
    fn stop_loss_summary_includes_trigger() {
        let order = draft(OrderKind::StopLoss, "5", "175.5", "176")
            .validate()
            .unwrap();

        assert_eq!(
            order.summary(0.0),
            "Order: BUY AAPL | Type: STOP_LOSS | Qty: 5 | Price: $175.50 | Trigger: $176.00"
        );
    }

    #[test]
    fn reset_restores_defaults_with_active_symbol() {
        let mut d = draft(OrderKind::StopLoss, "5", "1", "2");
        d.side = Side::Sell;

        d.reset(&Ticker::parse("msft").unwrap());

        assert_eq!(d, Draft { symbol: "MSFT".to_string(), ..Draft::default() });
        assert!(!d.kind.requires_price());
    }
}

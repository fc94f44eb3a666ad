/// ورودی ناقص ماشین‌حساب سود و زیان
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Enter entry, exit, and qty.")]
pub struct MissingInput;

/// نتیجه‌ی محاسبه‌ی سود و زیان
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitAndLoss {
    pub profit: f64,  // (خروج - ورود) × تعداد
    pub percent: f64, // (خروج - ورود) / ورود × ۱۰۰
}

impl ProfitAndLoss {
    pub fn compute(entry: f64, exit: f64, quantity: f64) -> Self {
        Self {
            profit: (exit - entry) * quantity,
            percent: (exit - entry) / entry * 100.0,
        }
    }

    /// محاسبه از ورودی خام فرم؛ هر ورودی خالی، صفر یا غیرعددی محاسبه را متوقف می‌کند
    pub fn from_inputs(entry: &str, exit: &str, quantity: &str) -> Result<Self, MissingInput> {
        let (Some(entry), Some(exit), Some(quantity)) =
            (parse_required(entry), parse_required(exit), parse_required(quantity))
        else {
            return Err(MissingInput);
        };

        Ok(Self::compute(entry, exit, quantity))
    }
}

impl std::fmt::Display for ProfitAndLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P&L: ${:.2} ({:.2}%)", self.profit, self.percent)
    }
}

fn parse_required(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_gain() {
        let pnl = ProfitAndLoss::from_inputs("100", "110", "10").unwrap();

        assert!((pnl.profit - 100.0).abs() < 1e-9);
        assert!((pnl.percent - 10.0).abs() < 1e-9);
        assert_eq!(pnl.to_string(), "P&L: $100.00 (10.00%)");
    }

    #[test]
    fn loss_is_negative() {
        let pnl = ProfitAndLoss::from_inputs("200", "150", "4").unwrap();

        assert_eq!(pnl.to_string(), "P&L: $-200.00 (-25.00%)");
    }

    #[test]
    fn missing_or_zero_input_aborts() {
        for (entry, exit, qty) in [
            ("", "110", "10"),
            ("100", "", "10"),
            ("100", "110", ""),
            ("0", "110", "10"),
            ("100", "110", "0"),
            ("abc", "110", "10"),
        ] {
            assert_eq!(ProfitAndLoss::from_inputs(entry, exit, qty), Err(MissingInput));
        }
        assert_eq!(MissingInput.to_string(), "Enter entry, exit, and qty.");
    }
}

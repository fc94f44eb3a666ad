/// فرمت مبلغ دلاری با دو رقم اعشار (مثلاً $180.00)
pub fn currency(value: f64) -> String {
    format!("${value:.2}")
}

/// فرمت‌بندی درصد تغییرات (با علامت + برای مقادیر غیرمنفی)
pub fn signed_pct(change: f64) -> String {
    match change {
        c if c >= 0.0 => format!("+{c:.2}%"),
        _ => format!("{change:.2}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(currency(100.0), "$100.00");
        assert_eq!(currency(0.456), "$0.46");
    }

    #[test]
    fn signed_pct_prefixes_non_negative() {
        assert_eq!(signed_pct(0.0), "+0.00%");
        assert_eq!(signed_pct(1.234), "+1.23%");
        assert_eq!(signed_pct(-4.5), "-4.50%");
    }
}

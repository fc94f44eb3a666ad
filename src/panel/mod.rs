//! بخش‌های فرم داشبورد؛ هر بخش پیام، به‌روزرسانی و نمای خود را دارد

pub mod order;
pub mod pnl;
pub mod watchlist;

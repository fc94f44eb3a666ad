pub mod chart;
pub mod config;
pub mod log;
pub mod order;
pub mod pnl;
pub mod session;
pub mod storage;
pub mod util;
pub mod watchlist;

pub use config::Config;
pub use config::theme::Theme;
pub use session::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use watchlist::Watchlist;

use std::path::PathBuf;

/// متغیر محیطی برای تغییر پوشه‌ی داده‌های برنامه
pub const DATA_PATH_ENV: &str = "MOCKTRADE_DATA_PATH";

const APP_DIR: &str = "mocktrade";

/// مسیر پوشه‌ی داده‌های برنامه (یا فایلی درون آن)
///
/// اگر `MOCKTRADE_DATA_PATH` تنظیم شده باشد همان استفاده می‌شود، وگرنه پوشه‌ی
/// داده‌ی سیستم‌عامل. در نبود هر دو، پوشه‌ی جاری.
pub fn data_path(path_name: Option<&str>) -> PathBuf {
    let root = std::env::var_os(DATA_PATH_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs_next::data_dir().map(|dir| dir.join(APP_DIR)))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR));

    match path_name {
        Some(name) => root.join(name),
        None => root,
    }
}

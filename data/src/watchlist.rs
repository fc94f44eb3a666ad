use crate::storage::{self, KeyValueStore};

use exchange::{SeedBook, Ticker};

/// کلید ثابت فهرست دیده‌بانی در ذخیره‌ساز
pub const WATCHLIST_KEY: &str = "watchlist";

/// نتیجه‌ی افزودن یک نماد
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Added {
    Inserted(Ticker),       // نماد جدید اضافه و ذخیره شد
    AlreadyPresent(Ticker), // نماد از قبل وجود داشت؛ تغییری ذخیره نشد
    Blank,                  // ورودی خالی بود
}

/// یک ردیف قابل نمایش از فهرست دیده‌بانی
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub ticker: Ticker,
    pub base_price: f64, // قیمت پایه‌ی بذر، یا ۱۰۰ برای نمادهای ناشناخته
}

/// فهرست دیده‌بانی ماندگار
///
/// ذخیره‌ساز تنها منبع حقیقت است: هر خواندن از آن بارگذاری می‌شود و هر تغییر
/// بلافاصله در آن نوشته می‌شود. هیچ کپی درون‌حافظه‌ای بین عملیات نگه داشته
/// نمی‌شود.
#[derive(Debug)]
pub struct Watchlist<S> {
    store: S,
}

impl<S: KeyValueStore> Watchlist<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// خواندن فهرست؛ خطای خواندن یا داده‌ی خراب به فهرست خالی تبدیل می‌شود
    pub fn list(&self) -> Vec<Ticker> {
        let raw = match self.store.get(WATCHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return vec![],
            Err(err) => {
                log::warn!("Failed to read watchlist, treating as empty: {err}");
                return vec![];
            }
        };

        match serde_json::from_str::<Option<Vec<Ticker>>>(&raw) {
            Ok(list) => list.unwrap_or_default(),
            Err(err) => {
                log::warn!("Corrupt watchlist data, treating as empty: {err}");
                vec![]
            }
        }
    }

    /// افزودن نماد پس از نرمال‌سازی (trim و حروف بزرگ)
    pub fn add(&mut self, raw: &str) -> Result<Added, storage::Error> {
        let Some(ticker) = Ticker::parse(raw) else {
            return Ok(Added::Blank);
        };

        let mut list = self.list();
        if list.contains(&ticker) {
            return Ok(Added::AlreadyPresent(ticker));
        }

        list.push(ticker.clone());
        self.persist(&list)?;

        log::info!("Added {ticker} to watchlist");
        Ok(Added::Inserted(ticker))
    }

    /// حذف نماد؛ فهرست حاصل همیشه ذخیره می‌شود، حتی اگر تغییری نکرده باشد
    pub fn remove(&mut self, ticker: &Ticker) -> Result<(), storage::Error> {
        let list: Vec<Ticker> = self
            .list()
            .into_iter()
            .filter(|t| t != ticker)
            .collect();

        self.persist(&list)?;

        log::info!("Removed {ticker} from watchlist");
        Ok(())
    }

    /// ردیف‌های نمایشی، همیشه از روی داده‌ی ذخیره شده
    pub fn rows(&self, seeds: &SeedBook) -> Vec<Row> {
        self.list()
            .into_iter()
            .map(|ticker| Row {
                base_price: seeds.base_or_default(&ticker),
                ticker,
            })
            .collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, list: &[Ticker]) -> Result<(), storage::Error> {
        let json = serde_json::to_string(list)?;
        self.store.set(WATCHLIST_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    fn watchlist() -> Watchlist<MemoryStore> {
        Watchlist::new(MemoryStore::new())
    }

    /// ذخیره‌سازی که همه‌ی عملیات آن شکست می‌خورد
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, storage::Error> {
            Err(std::io::Error::other("disk on fire").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), storage::Error> {
            Err(std::io::Error::other("disk on fire").into())
        }
    }

    #[test]
    fn empty_when_nothing_stored() {
        assert!(watchlist().list().is_empty());
    }

    #[test]
    fn add_normalizes_and_persists_json_array() {
        let mut list = watchlist();

        assert_eq!(list.add("  aapl ").unwrap(), Added::Inserted(ticker("AAPL")));
        assert_eq!(list.add("msft").unwrap(), Added::Inserted(ticker("MSFT")));

        assert_eq!(
            list.store().get(WATCHLIST_KEY).unwrap().as_deref(),
            Some(r#"["AAPL","MSFT"]"#)
        );
        assert_eq!(list.list(), vec![ticker("AAPL"), ticker("MSFT")]);
    }

    #[test]
    fn add_is_idempotent() {
        let mut list = watchlist();

        list.add("tsla").unwrap();
        assert_eq!(list.add(" TSLA").unwrap(), Added::AlreadyPresent(ticker("TSLA")));

        assert_eq!(list.list(), vec![ticker("TSLA")]);
    }

    #[test]
    fn blank_add_is_ignored() {
        let mut list = watchlist();

        assert_eq!(list.add("   ").unwrap(), Added::Blank);
        assert!(list.store().get(WATCHLIST_KEY).unwrap().is_none());
    }

    #[test]
    fn remove_missing_symbol_keeps_content_and_still_persists() {
        let mut store = MemoryStore::new();
        store.set(WATCHLIST_KEY, r#"["AAPL","GOOGL"]"#).unwrap();
        let mut list = Watchlist::new(store);

        list.remove(&ticker("NVDA")).unwrap();
        assert_eq!(list.list(), vec![ticker("AAPL"), ticker("GOOGL")]);

        let mut empty = watchlist();
        empty.remove(&ticker("NVDA")).unwrap();
        assert_eq!(empty.store().get(WATCHLIST_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_filters_exact_match() {
        let mut list = watchlist();
        list.add("AAPL").unwrap();
        list.add("MSFT").unwrap();

        list.remove(&ticker("AAPL")).unwrap();
        assert_eq!(list.list(), vec![ticker("MSFT")]);
    }

    #[test]
    fn corrupt_data_lists_as_empty() {
        for corrupt in ["{not json", r#"{"a":1}"#, "42", r#"["", "AAPL"]"#] {
            let mut store = MemoryStore::new();
            store.set(WATCHLIST_KEY, corrupt).unwrap();

            assert!(Watchlist::new(store).list().is_empty(), "input: {corrupt}");
        }
    }

    #[test]
    fn null_lists_as_empty() {
        let mut store = MemoryStore::new();
        store.set(WATCHLIST_KEY, "null").unwrap();

        assert!(Watchlist::new(store).list().is_empty());
    }

    #[test]
    fn read_failure_lists_as_empty_and_write_failure_is_reported() {
        let mut list = Watchlist::new(BrokenStore);

        assert!(list.list().is_empty());
        assert!(list.add("AAPL").is_err());
        assert!(list.remove(&ticker("AAPL")).is_err());
    }

    #[test]
    fn corrupt_data_is_replaced_on_next_add() {
        let mut store = MemoryStore::new();
        store.set(WATCHLIST_KEY, "garbage").unwrap();
        let mut list = Watchlist::new(store);

        list.add("aapl").unwrap();
        assert_eq!(list.list(), vec![ticker("AAPL")]);
    }

    #[test]
    fn rows_use_seed_base_or_default() {
        let mut list = watchlist();
        list.add("AAPL").unwrap();
        list.add("zzz").unwrap();

        let rows = list.rows(&SeedBook::default());
        assert_eq!(
            rows,
            vec![
                Row { ticker: ticker("AAPL"), base_price: 180.0 },
                Row { ticker: ticker("ZZZ"), base_price: 100.0 },
            ]
        );
    }
}

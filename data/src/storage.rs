use rustc_hash::FxHashMap;

use std::path::{Path, PathBuf};
use std::{fs, io};

const STORAGE_DIR: &str = "storage";

/// خطاهای لایه‌ی ذخیره‌سازی کلید-مقدار
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// ذخیره‌ساز ساده‌ی کلید-مقدار (رشته به رشته)
///
/// هسته‌ی برنامه فقط از طریق همین رابط با حافظه‌ی ماندگار کار می‌کند؛
/// در تست‌ها `MemoryStore` جایگزین فایل‌ها می‌شود.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// کلیدها فقط شامل حروف و ارقام اسکی، `-` و `_`
fn validate_key(key: &str) -> Result<(), Error> {
    let is_valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if is_valid {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.to_string()))
    }
}

/// ذخیره‌ساز فایلی: هر کلید در فایل `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// ذخیره‌ساز در پوشه‌ی `storage` داخل پوشه‌ی داده‌های برنامه
    pub fn in_data_dir() -> Self {
        Self::new(crate::data_path(Some(STORAGE_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, Error> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.key_path(key)?;

        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        // نوشتن در فایل موقت و سپس جابجایی، تا فایل نیمه‌نوشته باقی نماند
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        log::debug!("Stored {} bytes under {key:?}", value.len());
        Ok(())
    }
}

/// ذخیره‌ساز درون‌حافظه‌ای
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();

        assert!(store.get("watchlist").unwrap().is_none());
        store.set("watchlist", r#"["AAPL"]"#).unwrap();
        assert_eq!(store.get("watchlist").unwrap().as_deref(), Some(r#"["AAPL"]"#));
    }

    #[test]
    fn file_store_roundtrip_and_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert!(store.get("watchlist").unwrap().is_none());

        store.set("watchlist", r#"["MSFT","TSLA"]"#).unwrap();
        assert_eq!(
            store.get("watchlist").unwrap().as_deref(),
            Some(r#"["MSFT","TSLA"]"#)
        );
        assert!(dir.path().join("nested").join("watchlist.json").exists());

        store.set("watchlist", "[]").unwrap();
        assert_eq!(store.get("watchlist").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "white space"] {
            assert!(matches!(store.get(key), Err(Error::InvalidKey(_))));
            assert!(matches!(store.set(key, "x"), Err(Error::InvalidKey(_))));
        }
    }
}

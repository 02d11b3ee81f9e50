//! FileSlot - ディレクトリ配下のファイルを key-value スロットとして使う
//!
//! key `k` は `<dir>/k.json` に保存されます。書き込みは `k.json.tmp` に書いてから
//! rename するので、読み手が書きかけの値を見ることはありません。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::slot::{KeyValueSlot, SlotError, validate_key};

#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, SlotError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SlotError + '_ {
    move |source| SlotError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;
        std::fs::write(&tmp_path, value).map_err(io_error(&tmp_path))?;
        std::fs::rename(&tmp_path, &path).map_err(io_error(&path))?;

        debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

// Key-value store - 선호 설정 저장소
//
// 문자열 키/값만 다루는 저장소와, 그 위에서 테마/언어를 읽고 쓰는 PreferenceStore.
// 저장소를 쓸 수 없으면 읽기는 기본값, 쓰기는 무시됩니다.

use crate::models::{Category, Language, Preference, Theme};
use crate::utils::error::{LandpageError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 문자열 전용 키/값 저장소
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// 테스트용 메모리 저장소
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 항상 실패하는 저장소 (브라우저 저장소가 비활성화된 상황)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(LandpageError::StorageUnavailable("store disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(LandpageError::StorageUnavailable("store disabled".to_string()))
    }
}

/// TOML 파일 저장소
///
/// 열 때 한 번 읽고, `set`마다 파일 전체를 다시 씁니다.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// 파일이 없거나 해석할 수 없으면 빈 저장소로 시작
    pub fn open(path: PathBuf) -> Self {
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable storage file");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    fn write_entries(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(&self.entries)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write_entries()
    }
}

/// 테마/언어 선호 설정 저장소
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// 저장된 값 (없음/인식 불가/저장소 오류 시 기본값)
    pub fn get(&self, category: Category) -> String {
        match self.backend.get(category.storage_key()) {
            Ok(Some(value)) if category.accepts(&value) => value,
            Ok(_) => category.default_value().to_string(),
            Err(err) => {
                tracing::debug!(key = category.storage_key(), error = %err, "store read failed, using default");
                category.default_value().to_string()
            }
        }
    }

    /// 최선 노력 저장 (실패는 로그만 남김)
    pub fn set(&mut self, category: Category, value: &str) {
        if let Err(err) = self.backend.set(category.storage_key(), value) {
            tracing::warn!(key = category.storage_key(), error = %err, "store write failed");
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.get(Category::Theme)).unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.get(Category::Language)).unwrap_or_default()
    }

    pub fn preference(&self) -> Preference {
        Preference {
            theme: self.theme(),
            language: self.language(),
        }
    }
}

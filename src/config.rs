// Runtime configuration - 실행 환경 설정
//
// 환경 변수가 우선이며, 없으면 설정 디렉토리 아래 기본 경로를 사용합니다.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "landpage";
const STORAGE_FILE_ENV: &str = "LANDPAGE_STORAGE_FILE";
const LOG_FILE_ENV: &str = "LANDPAGE_LOG_FILE";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 선호 설정 저장 파일 (None이면 저장소 사용 불가)
    pub storage_file: Option<PathBuf>,
    /// 로그 파일 (None이면 로그를 남기지 않음)
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            storage_file: path_from_env(STORAGE_FILE_ENV)
                .or_else(|| app_dir().map(|dir| dir.join("storage.toml"))),
            log_file: path_from_env(LOG_FILE_ENV)
                .or_else(|| app_dir().map(|dir| dir.join("landpage.log"))),
        }
    }
}

fn path_from_env(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn app_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| env::var_os("HOME").map(PathBuf::from))
        .map(|dir| dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_live_in_app_dir() {
        if let Some(dir) = app_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }

    #[test]
    fn test_unset_env_is_none() {
        assert_eq!(path_from_env("LANDPAGE_TEST_DEFINITELY_UNSET"), None);
    }
}

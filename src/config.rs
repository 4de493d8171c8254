use crate::error::{PersonDetectError, Result};
use log::warn;
use person_detect_common::{BackendConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルは警告して既定値（`config` コマンドで上書きできるように）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("設定ファイルを読めません（既定値を使用）: {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PersonDetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("person-detect").join("config.json"))
    }

    /// 保存前にURLを検証する
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let backend = BackendConfig::new(url)?;
        self.base_url = backend.base_url().to_string();
        Ok(())
    }

    /// `--base-url` があればそちらを優先
    pub fn backend(&self, override_url: Option<&str>) -> Result<BackendConfig> {
        let url = override_url.unwrap_or(&self.base_url);
        Ok(BackendConfig::new(url)?)
    }
}

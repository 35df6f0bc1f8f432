use crate::error::{PaperSummaryError, Result};
use paper_summary_common::{ClientConfig, ResponseSchema};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_ENDPOINT: &str = "PAPER_SUMMARY_ENDPOINT";
pub const ENV_SCHEMA: &str = "PAPER_SUMMARY_SCHEMA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub client: ClientConfig,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(
            std::env::var(ENV_ENDPOINT).ok(),
            std::env::var(ENV_SCHEMA).ok(),
        )?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルは警告して既定値にする（`config` コマンドで直せるように）
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("設定ファイルを読めないため既定値を使用: {} ({})", path.display(), e);
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
            .ok_or_else(|| PaperSummaryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("paper-summary").join("config.json"))
    }

    /// 環境変数・コマンドライン引数による上書き（スキーマを先に適用）
    pub fn apply_overrides(&mut self, endpoint: Option<String>, schema: Option<String>) -> Result<()> {
        if let Some(schema) = schema.filter(|s| !s.trim().is_empty()) {
            let schema: ResponseSchema = schema.parse().map_err(PaperSummaryError::Config)?;
            self.client = self.client.clone().with_schema(schema);
        }
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.client.endpoint = endpoint.trim().to_string();
        }
        Ok(())
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.client.endpoint = endpoint;
        self.save()
    }

    pub fn set_schema(&mut self, schema: ResponseSchema) -> Result<()> {
        self.client = self.client.clone().with_schema(schema);
        self.save()
    }
}

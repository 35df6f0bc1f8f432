//! クライアント設定
//!
//! CLIとWebで共通の設定値。CLIは設定ファイル、Webは localStorage で上書きする。

use serde::{Deserialize, Serialize};

/// 解析エンドポイント（canonicalスキーマ）
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/analyze";

/// 解析エンドポイント（legacyスキーマ）
pub const LEGACY_ENDPOINT: &str = "http://localhost:8000/upload";

/// multipartのフィールド名
pub const DEFAULT_FIELD_NAME: &str = "file";

/// トースト表示時間（ミリ秒）
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// 同時に表示するトーストの最大数
pub const DEFAULT_TOAST_CAPACITY: usize = 5;

/// サーバーレスポンスのスキーマ
///
/// レスポンスごとに形を推測せず、設定で一つに決める。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSchema {
    /// `schema_version` 付きの構造化形式
    #[default]
    Canonical,
    /// `summary` / `summaries` 形式
    Legacy,
}

impl ResponseSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSchema::Canonical => "canonical",
            ResponseSchema::Legacy => "legacy",
        }
    }

    /// スキーマに対応する既定エンドポイント
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ResponseSchema::Canonical => DEFAULT_ENDPOINT,
            ResponseSchema::Legacy => LEGACY_ENDPOINT,
        }
    }
}

impl std::fmt::Display for ResponseSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResponseSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "canonical" | "v1" => Ok(ResponseSchema::Canonical),
            "legacy" => Ok(ResponseSchema::Legacy),
            _ => Err(format!("Unknown schema: {}. Use canonical or legacy", s)),
        }
    }
}

/// クライアント設定
///
/// `endpoint` を省略した場合は `schema` の既定エンドポイントになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredClientConfig")]
pub struct ClientConfig {
    pub endpoint: String,
    pub field_name: String,
    pub schema: ResponseSchema,
    pub toast_duration_ms: u32,
    pub toast_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            field_name: DEFAULT_FIELD_NAME.into(),
            schema: ResponseSchema::Canonical,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            toast_capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}

/// 保存された設定（省略可能な項目を含む）
#[derive(Deserialize)]
#[serde(default)]
struct StoredClientConfig {
    endpoint: Option<String>,
    field_name: String,
    schema: ResponseSchema,
    toast_duration_ms: u32,
    toast_capacity: usize,
}

impl Default for StoredClientConfig {
    fn default() -> Self {
        let defaults = ClientConfig::default();
        Self {
            endpoint: None,
            field_name: defaults.field_name,
            schema: defaults.schema,
            toast_duration_ms: defaults.toast_duration_ms,
            toast_capacity: defaults.toast_capacity,
        }
    }
}

impl From<StoredClientConfig> for ClientConfig {
    fn from(stored: StoredClientConfig) -> Self {
        let endpoint = stored
            .endpoint
            .unwrap_or_else(|| stored.schema.default_endpoint().to_string());
        Self {
            endpoint,
            field_name: stored.field_name,
            schema: stored.schema,
            toast_duration_ms: stored.toast_duration_ms,
            toast_capacity: stored.toast_capacity,
        }
    }
}

impl ClientConfig {
    /// スキーマを切り替える
    ///
    /// エンドポイントが旧スキーマの既定値のままなら新スキーマの既定値に合わせる。
    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        if self.endpoint == self.schema.default_endpoint() {
            self.endpoint = schema.default_endpoint().into();
        }
        self.schema = schema;
        self
    }
}

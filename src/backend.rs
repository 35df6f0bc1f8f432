//! 解析サーバーへのアップロード（reqwest multipart）

use crate::config::Config;
use crate::error::{PaperSummaryError, Result};
use paper_summary_common::{AnalysisBackend, Error, HttpReply, UploadFile};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ローカルのPDFファイル
///
/// MIMEタイプは拡張子から決める。
#[derive(Debug, Clone)]
pub struct LocalPdf {
    path: PathBuf,
    name: String,
    media_type: String,
}

impl LocalPdf {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PaperSummaryError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let media_type = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => "application/pdf",
            _ => "application/octet-stream",
        };

        Ok(Self {
            path: path.to_path_buf(),
            name,
            media_type: media_type.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UploadFile for LocalPdf {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

/// reqwestでPDFを送るバックエンド
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    field_name: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.client.endpoint.clone(),
            field_name: config.client.field_name.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisBackend for HttpBackend {
    type File = LocalPdf;

    async fn send(&self, file: &LocalPdf) -> paper_summary_common::Result<HttpReply> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| Error::Transport(format!("{}: {}", file.path.display(), e)))?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|e| Error::Transport(e.to_string()))?;
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        log::debug!("POST {} -> {}", self.endpoint, status);
        Ok(HttpReply { status, body })
    }
}

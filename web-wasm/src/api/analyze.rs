//! 解析サーバーへのアップロード（fetch + FormData）

use paper_summary_common::{AnalysisBackend, ClientConfig, Error, HttpReply, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::platform::BrowserFile;

/// fetchでPDFを送るバックエンド
pub struct FetchBackend {
    endpoint: String,
    field_name: String,
}

impl FetchBackend {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
        }
    }
}

impl AnalysisBackend for FetchBackend {
    type File = BrowserFile;

    async fn send(&self, file: &BrowserFile) -> Result<HttpReply> {
        post_multipart(&self.endpoint, &self.field_name, file.as_file())
            .await
            .map_err(|e| Error::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e))))
    }
}

/// multipartでPOSTし、ステータスと本文を返す
///
/// 2xx以外もエラーにはしない（判定は呼び出し側）。
async fn post_multipart(endpoint: &str, field_name: &str, file: &File) -> std::result::Result<HttpReply, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(field_name, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();

    log::debug!("POST {} -> {}", endpoint, status);
    Ok(HttpReply { status, body })
}

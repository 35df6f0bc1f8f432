//! プレビューURLの貸し出し
//!
//! ブラウザの object URL は明示的に revoke しないと解放されない。
//! `PreviewUrl` は解放処理を抱え、drop 時に一度だけ呼ぶ。

use std::fmt;

/// 解放処理付きのプレビューURL
pub struct PreviewUrl {
    url: String,
    release: Option<Box<dyn FnOnce(&str)>>,
}

impl PreviewUrl {
    /// `release` は drop 時にURLを渡して一度だけ呼ばれる
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    /// 解放不要なURL（ローカルファイルパスなど）
    pub fn unmanaged(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            release: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("releasing preview url {}", self.url);
            release(&self.url);
        }
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewUrl")
            .field("url", &self.url)
            .field("managed", &self.release.is_some())
            .finish()
    }
}

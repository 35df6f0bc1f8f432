//! クリップボード・音声読み上げ
//!
//! プラットフォームAPIはトレイトで抽象化し、テストでは差し替える。

use std::future::Future;

use crate::error::Result;
use crate::notify::{Notice, Notifier};

/// コピー成功時の通知文
pub const COPIED_MESSAGE: &str = "Text copied to clipboard!";

/// システムクリップボード
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<()>>;
}

/// 音声合成エンジン
///
/// 完了通知もキャンセルもしない（投げっぱなし）。
pub trait SpeechEngine {
    fn speak(&self, text: &str) -> Result<()>;
}

/// テキストをクリップボードへコピー
///
/// 成功時は通知を1回出す。失敗はログのみでユーザーには見せない。
pub async fn copy_text<C, N>(clipboard: &C, notifier: &N, text: &str) -> bool
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.notify(Notice::success(COPIED_MESSAGE));
            true
        }
        Err(e) => {
            log::error!("Error copying text: {}", e);
            false
        }
    }
}

/// テキストを読み上げる
pub fn speak_text<S>(engine: &S, text: &str)
where
    S: SpeechEngine + ?Sized,
{
    if let Err(e) = engine.speak(text) {
        log::error!("Error starting speech: {}", e);
    }
}

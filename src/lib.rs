//! 論文PDF要約クライアント（CLI）
//!
//! 状態遷移とレスポンス解釈は `paper-summary-common` に任せ、
//! このクレートはファイル読み込み・HTTP送信・端末表示を受け持つ。

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod render;

//! Paper Summary Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態遷移・レスポンスパーサー。
//! 通信やDOMには触れず、プラットフォーム依存部分はトレイトで受け取る。

pub mod types;
pub mod config;
pub mod error;
pub mod parser;
pub mod notify;
pub mod preview;
pub mod drag;
pub mod presentation;
pub mod services;
pub mod session;
pub mod backend;

pub use types::{
    is_pdf_media_type, AnalysisResult, SummaryEntry, SummaryPayload, SummaryViewMode, UploadFile,
    UploadState,
};
pub use config::{ClientConfig, ResponseSchema};
pub use error::{Error, Result};
pub use parser::parse_response;
pub use notify::{Notice, NoticeKind, Notifier, Toast, ToastQueue};
pub use preview::PreviewUrl;
pub use drag::{first_file, DragEventKind, DragTracker};
pub use presentation::{mode_switched_message, select_view, SummaryView};
pub use services::{copy_text, speak_text, Clipboard, SpeechEngine};
pub use session::{Session, UploadOutcome, UploadRejection, UploadTicket};
pub use backend::{read_reply, submit, AnalysisBackend, HttpReply};

//! アップロードセッション（画面状態の中心）
//!
//! 1つのコンポーネントが持つ状態をまとめて管理する:
//! - アップロード状態（Idle → Uploading → Ready / Failed）
//! - 同時に1件だけのアップロード（チケットで古い応答を捨てる）
//! - 解析結果とプレビューURLの所有
//! - 表示モード
//!
//! 通信そのものは行わない。`begin_upload` でチケットを受け取り、
//! 呼び出し側が送信した結果を `complete_upload` に渡す。

use crate::backend::{read_reply, HttpReply};
use crate::config::ResponseSchema;
use crate::drag::{DragEventKind, DragTracker};
use crate::error::{Error, Result};
use crate::notify::{Notice, Notifier};
use crate::presentation::{mode_switched_message, select_view, SummaryView};
use crate::preview::PreviewUrl;
use crate::types::{is_pdf_media_type, AnalysisResult, SummaryViewMode, UploadFile, UploadState};

pub const REJECT_NOT_PDF: &str = "Please upload a PDF file";
pub const REJECT_BUSY: &str = "An analysis is already in progress";
pub const UPLOAD_FAILED: &str = "Error analyzing file. Please try again.";
pub const UPLOAD_CANCELLED: &str = "Upload cancelled";

/// 受け付けたアップロードの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

/// アップロードを受け付けなかった理由
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("not a PDF file (media type: {media_type:?})")]
    NotPdf { media_type: String },

    #[error("an upload is already in flight")]
    Busy,
}

/// 応答を反映した結果
#[derive(Debug)]
pub enum UploadOutcome {
    Ready,
    Failed(Error),
    /// キャンセル済み・置き換え済みのチケットへの応答
    Stale,
}

#[derive(Debug)]
struct InFlight {
    ticket: UploadTicket,
    file_name: String,
    /// 送信時点のスキーマ（応答はこれで読む）
    schema: ResponseSchema,
}

/// アップロードセッション
#[derive(Debug)]
pub struct Session {
    schema: ResponseSchema,
    phase: UploadState,
    drag: DragTracker,
    in_flight: Option<InFlight>,
    next_ticket: u64,
    result: Option<AnalysisResult>,
    preview: Option<PreviewUrl>,
    view_mode: SummaryViewMode,
    last_error: Option<String>,
}

impl Session {
    pub fn new(schema: ResponseSchema) -> Self {
        Self {
            schema,
            phase: UploadState::Idle,
            drag: DragTracker::default(),
            in_flight: None,
            next_ticket: 0,
            result: None,
            preview: None,
            view_mode: SummaryViewMode::default(),
            last_error: None,
        }
    }

    /// 現在の状態（アップロード中でなければドラッグ中を優先）
    pub fn state(&self) -> UploadState {
        if self.phase != UploadState::Uploading && self.drag.is_dragging() {
            UploadState::Dragging
        } else {
            self.phase
        }
    }

    pub fn schema(&self) -> ResponseSchema {
        self.schema
    }

    pub fn set_schema(&mut self, schema: ResponseSchema) {
        self.schema = schema;
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(|p| p.url())
    }

    pub fn view_mode(&self) -> SummaryViewMode {
        self.view_mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// ドラッグイベントを反映し、ドラッグ中かを返す
    pub fn handle_drag(&mut self, event: DragEventKind) -> bool {
        self.drag.handle(event)
    }

    /// アップロードを開始
    ///
    /// PDF以外、またはアップロード中なら通知して拒否する（送信しない）。
    /// 受け付けた場合は前回の結果とプレビューURLを解放する。
    pub fn begin_upload<F, N>(&mut self, file: &F, notifier: &N) -> std::result::Result<UploadTicket, UploadRejection>
    where
        F: UploadFile + ?Sized,
        N: Notifier + ?Sized,
    {
        let media_type = file.media_type();
        if !is_pdf_media_type(&media_type) {
            log::info!("rejected {} ({:?}): not a PDF", file.name(), media_type);
            notifier.notify(Notice::error(REJECT_NOT_PDF));
            return Err(UploadRejection::NotPdf { media_type });
        }

        if let Some(current) = &self.in_flight {
            log::info!("rejected {}: {} is still uploading", file.name(), current.file_name);
            notifier.notify(Notice::error(REJECT_BUSY));
            return Err(UploadRejection::Busy);
        }

        self.result = None;
        self.preview = None;
        self.last_error = None;

        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(InFlight {
            ticket,
            file_name: file.name(),
            schema: self.schema,
        });
        self.phase = UploadState::Uploading;
        log::info!("uploading {} (ticket {})", file.name(), ticket.0);
        Ok(ticket)
    }

    /// 送信結果を反映
    ///
    /// `make_preview` は成功時だけ呼ばれる。
    pub fn complete_upload<N, P>(
        &mut self,
        ticket: UploadTicket,
        reply: Result<HttpReply>,
        notifier: &N,
        make_preview: P,
    ) -> UploadOutcome
    where
        N: Notifier + ?Sized,
        P: FnOnce() -> Option<PreviewUrl>,
    {
        let in_flight = match self.in_flight.take() {
            Some(current) if current.ticket == ticket => current,
            other => {
                self.in_flight = other;
                log::debug!("discarding stale reply for ticket {}", ticket.0);
                return UploadOutcome::Stale;
            }
        };

        let schema = in_flight.schema;
        match reply.and_then(|r| read_reply(&r, schema)) {
            Ok(summary) => {
                let preview = make_preview();
                self.result = Some(AnalysisResult {
                    file_name: in_flight.file_name,
                    summary,
                    preview_url: preview.as_ref().map(|p| p.url().to_string()),
                });
                self.preview = preview;
                self.phase = UploadState::Ready;
                log::info!("analysis ready (ticket {})", ticket.0);
                UploadOutcome::Ready
            }
            Err(e) => {
                log::error!("Error analyzing file {}: {}", in_flight.file_name, e);
                self.phase = UploadState::Failed;
                self.last_error = Some(e.to_string());
                notifier.notify(Notice::error(UPLOAD_FAILED));
                UploadOutcome::Failed(e)
            }
        }
    }

    /// アップロード中ならキャンセルしてIdleに戻す
    pub fn cancel<N>(&mut self, notifier: &N) -> bool
    where
        N: Notifier + ?Sized,
    {
        match self.in_flight.take() {
            Some(current) => {
                log::info!("cancelled upload of {} (ticket {})", current.file_name, current.ticket.0);
                self.phase = UploadState::Idle;
                notifier.notify(Notice::info(UPLOAD_CANCELLED));
                true
            }
            None => false,
        }
    }

    /// 表示モードを切り替える（通信なし）
    pub fn set_view_mode<N>(&mut self, mode: SummaryViewMode, notifier: &N)
    where
        N: Notifier + ?Sized,
    {
        self.view_mode = mode;
        notifier.notify(Notice::info(mode_switched_message(mode)));
    }

    /// 現在の表示モードで描画する内容
    pub fn view(&self) -> SummaryView {
        match &self.result {
            Some(result) => select_view(result, self.view_mode),
            None => SummaryView::Empty,
        }
    }

    /// アップロード画面へ戻る（結果とプレビューURLを解放）
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.result = None;
        self.preview = None;
        self.last_error = None;
        self.phase = UploadState::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ResponseSchema::default())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::types::UploadFile;

    /// テスト用のファイル
    #[derive(Debug, Clone)]
    pub struct FakeFile {
        pub name: String,
        pub media_type: String,
    }

    impl FakeFile {
        pub fn pdf(name: &str) -> Self {
            Self { name: name.into(), media_type: "application/pdf".into() }
        }

        pub fn other(name: &str, media_type: &str) -> Self {
            Self { name: name.into(), media_type: media_type.into() }
        }
    }

    impl UploadFile for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }
    }
}

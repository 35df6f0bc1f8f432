//! 解析サーバーとの境界
//!
//! 送信手段（ブラウザの fetch、CLIの reqwest）は `AnalysisBackend` の実装が持つ。

use std::future::Future;

use crate::config::ResponseSchema;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::parser::parse_response;
use crate::preview::PreviewUrl;
use crate::session::{Session, UploadOutcome, UploadRejection};
use crate::types::{SummaryPayload, UploadFile};

/// HTTPレスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 2xx以外はエラー、2xxは本文をスキーマに従ってパース
pub fn read_reply(reply: &HttpReply, schema: ResponseSchema) -> Result<SummaryPayload> {
    if !reply.is_success() {
        return Err(Error::Http { status: reply.status });
    }
    parse_response(&reply.body, schema)
}

/// PDFをmultipartで送信する手段
pub trait AnalysisBackend {
    type File: UploadFile;

    fn send(&self, file: &Self::File) -> impl Future<Output = Result<HttpReply>>;
}

/// 受付 → 送信 → 反映 を順に行う
///
/// 拒否された場合は送信しない。
pub async fn submit<B, N, P>(
    session: &mut Session,
    backend: &B,
    file: &B::File,
    notifier: &N,
    make_preview: P,
) -> std::result::Result<UploadOutcome, UploadRejection>
where
    B: AnalysisBackend,
    N: Notifier + ?Sized,
    P: FnOnce(&B::File) -> Option<PreviewUrl>,
{
    let ticket = session.begin_upload(file, notifier)?;
    let reply = backend.send(file).await;
    Ok(session.complete_upload(ticket, reply, notifier, || make_preview(file)))
}

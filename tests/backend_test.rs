//! アップロードテスト
//!
//! ローカルのTCPスタブサーバーに対して multipart 送信と結果反映を検証

use paper_summary::backend::{HttpBackend, LocalPdf};
use paper_summary::config::Config;
use paper_summary::notifier::TerminalNotifier;
use paper_summary_common::{
    submit, Error, PreviewUrl, ResponseSchema, Session, SummaryEntry, SummaryView, SummaryViewMode,
    UploadOutcome, UploadRejection, UploadState,
};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// ヘッダーと本文を最後まで読む
async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = find(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            if headers.contains("transfer-encoding: chunked") {
                if buf.ends_with(b"0\r\n\r\n") {
                    break;
                }
                continue;
            }
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    buf
}

/// 1回だけ応答するスタブサーバー
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write failed");
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}/analyze", addr), handle)
}

fn config_for(endpoint: &str, schema: ResponseSchema) -> Config {
    let mut config = Config::default();
    config.client.endpoint = endpoint.to_string();
    config.client.schema = schema;
    config.timeout_seconds = 10;
    config
}

fn write_pdf(dir: &Path, name: &str) -> LocalPdf {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.4\n%fake paper\n").unwrap();
    LocalPdf::open(&path).expect("open failed")
}

/// 成功レスポンスがそのまま結果になる
#[tokio::test]
async fn test_upload_success_canonical() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"schema_version": 1, "final_summary": "Overall.", "section_summaries": {"Method": "m", "Abstract": "a"}, "image_summaries": {"Figure 2": "plot"}}"#,
    )
    .await;

    let dir = tempdir().expect("Failed to create temp dir");
    let file = write_pdf(dir.path(), "paper.pdf");
    let config = config_for(&endpoint, ResponseSchema::Canonical);
    let backend = HttpBackend::new(&config).unwrap();
    let mut session = Session::new(config.client.schema);

    let outcome = submit(&mut session, &backend, &file, &TerminalNotifier, |file| {
        Some(PreviewUrl::unmanaged(file.path().display().to_string()))
    })
    .await
    .expect("upload rejected");

    assert!(matches!(outcome, UploadOutcome::Ready));
    assert_eq!(session.state(), UploadState::Ready);

    let result = session.result().unwrap();
    assert_eq!(result.file_name, "paper.pdf");
    assert_eq!(result.summary.final_summary.as_deref(), Some("Overall."));
    assert_eq!(
        result.summary.section_summaries,
        vec![SummaryEntry::new("Method", "m"), SummaryEntry::new("Abstract", "a")]
    );
    assert_eq!(result.summary.image_summaries, vec![SummaryEntry::new("Figure 2", "plot")]);
    assert!(result.preview_url.as_deref().unwrap().ends_with("paper.pdf"));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /analyze HTTP/1.1"));
    let lower = request.to_lowercase();
    assert!(lower.contains("content-type: multipart/form-data"));
    assert!(lower.contains("name=\"file\"; filename=\"paper.pdf\""));
    assert!(lower.contains("content-type: application/pdf"));
    assert!(request.contains("%PDF-1.4"));
}

/// legacyスキーマの `summaries` 文字列
#[tokio::test]
async fn test_upload_success_legacy() {
    let (endpoint, server) = serve_once("200 OK", r#"{"summaries": "Flat summary."}"#).await;

    let dir = tempdir().expect("Failed to create temp dir");
    let file = write_pdf(dir.path(), "legacy.pdf");
    let config = config_for(&endpoint, ResponseSchema::Legacy);
    let backend = HttpBackend::new(&config).unwrap();
    let mut session = Session::new(config.client.schema);

    submit(&mut session, &backend, &file, &TerminalNotifier, |_| None)
        .await
        .expect("upload rejected");

    assert_eq!(session.view(), SummaryView::Full("Flat summary.".into()));
    server.await.unwrap();
}

/// 500応答では結果が残らず、アップロード中も解除される
#[tokio::test]
async fn test_upload_server_error() {
    let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;

    let dir = tempdir().expect("Failed to create temp dir");
    let file = write_pdf(dir.path(), "paper.pdf");
    let config = config_for(&endpoint, ResponseSchema::Canonical);
    let backend = HttpBackend::new(&config).unwrap();
    let mut session = Session::new(config.client.schema);

    let outcome = submit(&mut session, &backend, &file, &TerminalNotifier, |_| None)
        .await
        .expect("upload rejected");

    assert!(matches!(outcome, UploadOutcome::Failed(Error::Http { status: 500 })));
    assert_eq!(session.state(), UploadState::Failed);
    assert!(!session.is_uploading());
    assert!(session.result().is_none());
    server.await.unwrap();
}

/// 接続できない場合は通信エラー
#[tokio::test]
async fn test_upload_connection_refused() {
    // 一度bindして閉じたポートへ送る
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempdir().expect("Failed to create temp dir");
    let file = write_pdf(dir.path(), "paper.pdf");
    let config = config_for(&format!("http://{}/analyze", addr), ResponseSchema::Canonical);
    let backend = HttpBackend::new(&config).unwrap();
    let mut session = Session::new(config.client.schema);

    let outcome = submit(&mut session, &backend, &file, &TerminalNotifier, |_| None)
        .await
        .expect("upload rejected");

    assert!(matches!(outcome, UploadOutcome::Failed(Error::Transport(_))));
    assert_eq!(session.state(), UploadState::Failed);
}

/// PDF以外は送信しない
#[tokio::test]
async fn test_non_pdf_is_never_sent() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "plain text").unwrap();
    let file = LocalPdf::open(&path).unwrap();

    let config = config_for(&format!("http://{}/analyze", addr), ResponseSchema::Canonical);
    let backend = HttpBackend::new(&config).unwrap();
    let mut session = Session::new(config.client.schema);

    let result = submit(&mut session, &backend, &file, &TerminalNotifier, |_| None).await;
    assert!(matches!(result, Err(UploadRejection::NotPdf { .. })));
    assert_eq!(session.state(), UploadState::Idle);

    let accepted = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
    assert!(accepted.is_err(), "request should not have been sent");
}

/// 表示モード切替は再送信しない
#[tokio::test]
async fn test_view_mode_toggle_uses_fetched_data() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"final_summary": "f", "section_summaries": {"Intro": "i"}}"#,
    )
    .await;

    let dir = tempdir().expect("Failed to create temp dir");
    let file = write_pdf(dir.path(), "paper.pdf");
    let config = config_for(&endpoint, ResponseSchema::Canonical);
    let backend = HttpBackend::new(&config).unwrap();
    let mut session = Session::new(config.client.schema);

    submit(&mut session, &backend, &file, &TerminalNotifier, |_| None)
        .await
        .expect("upload rejected");
    server.await.unwrap();

    // スタブは1回で終了済み。以降の切替が通信すれば失敗する
    session.set_view_mode(SummaryViewMode::Section, &TerminalNotifier);
    assert_eq!(session.view(), SummaryView::Entries(vec![SummaryEntry::new("Intro", "i")]));
    session.set_view_mode(SummaryViewMode::Image, &TerminalNotifier);
    assert!(session.view().is_empty());
    session.set_view_mode(SummaryViewMode::Full, &TerminalNotifier);
    assert_eq!(session.view(), SummaryView::Full("f".into()));
    assert_eq!(session.state(), UploadState::Ready);
}

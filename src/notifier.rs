//! 端末への通知出力

use paper_summary_common::{Notice, NoticeKind, Notifier};

/// 通知を標準エラー出力へ書く
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        let mark = match notice.kind {
            NoticeKind::Info => "ℹ",
            NoticeKind::Success => "✔",
            NoticeKind::Error => "✖",
        };
        eprintln!("{} {}", mark, notice.message);
    }
}

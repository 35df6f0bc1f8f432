//! ユーザー通知（トースト）
//!
//! 通知の発行元は `Notifier` トレイト越しに通知するだけで、
//! 表示方法（ブラウザのトースト、端末への出力）は実装側が決める。

use serde::{Deserialize, Serialize};

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// ユーザーに見せる通知1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// 通知の送り先
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// 表示中のトースト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// 表示中トーストのキュー
///
/// 容量を超えると古いものから捨てる。期限切れ・手動クローズはIDで消す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    capacity: usize,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: 0,
            toasts: Vec::new(),
        }
    }

    /// 通知を追加し、割り当てたIDを返す
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > self.capacity {
            let overflow = self.toasts.len() - self.capacity;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// IDのトーストを消す。既に無ければ false
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOAST_CAPACITY)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(Notice::info("a"));
        let b = queue.push(Notice::info("b"));
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_push_evicts_oldest_over_capacity() {
        let mut queue = ToastQueue::new(2);
        queue.push(Notice::info("first"));
        queue.push(Notice::info("second"));
        queue.push(Notice::error("third"));

        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.notice.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::new(5);
        let a = queue.push(Notice::info("a"));
        let b = queue.push(Notice::success("b"));

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn test_dismiss_after_eviction_is_noop() {
        let mut queue = ToastQueue::new(1);
        let a = queue.push(Notice::info("a"));
        queue.push(Notice::info("b"));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut queue = ToastQueue::new(0);
        queue.push(Notice::info("only"));
        assert_eq!(queue.len(), 1);
    }
}

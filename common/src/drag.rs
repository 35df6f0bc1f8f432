//! ドラッグ&ドロップの状態遷移

/// ドロップゾーンで受け取るイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEventKind {
    /// DOMイベント名から変換（"dragenter" など）
    pub fn from_dom_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragEventKind::Enter),
            "dragover" => Some(DragEventKind::Over),
            "dragleave" => Some(DragEventKind::Leave),
            "drop" => Some(DragEventKind::Drop),
            _ => None,
        }
    }
}

/// NotDragging / Dragging の2状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    dragging: bool,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// イベントを適用し、遷移後にドラッグ中かを返す
    pub fn handle(&mut self, event: DragEventKind) -> bool {
        self.dragging = matches!(event, DragEventKind::Enter | DragEventKind::Over);
        self.dragging
    }
}

/// ドロップされたファイルのうち最初の1件だけを取り出す
pub fn first_file<I>(files: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    files.into_iter().next()
}

//! ブラウザAPIの実装（ファイル、クリップボード、音声合成、トースト、object URL）

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use paper_summary_common::{
    Clipboard, Error, Notice, Notifier, PreviewUrl, Result, SpeechEngine, ToastQueue, UploadFile,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, SpeechSynthesisUtterance, Url};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// ドロップまたは選択された `File`
#[derive(Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl UploadFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

/// ファイルからblob URLを作り、drop時にrevokeする
pub fn create_preview(file: &BrowserFile) -> Option<PreviewUrl> {
    match Url::create_object_url_with_blob(file.as_file()) {
        Ok(url) => Some(PreviewUrl::new(url, |url| {
            if let Err(e) = Url::revoke_object_url(url) {
                log::warn!("failed to revoke {}: {}", url, js_error(e));
            }
        })),
        Err(e) => {
            log::warn!("failed to create preview url: {}", js_error(e));
            None
        }
    }
}

/// `navigator.clipboard`
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Clipboard("window unavailable".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| Error::Clipboard(js_error(e)))
    }
}

/// `window.speechSynthesis`
pub struct BrowserSpeech;

impl SpeechEngine for BrowserSpeech {
    fn speak(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Speech("window unavailable".into()))?;
        let synth = window.speech_synthesis().map_err(|e| Error::Speech(js_error(e)))?;
        let utterance = SpeechSynthesisUtterance::new_with_text(text).map_err(|e| Error::Speech(js_error(e)))?;
        synth.speak(&utterance);
        Ok(())
    }
}

/// トーストキューへ通知し、一定時間後に消す
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastQueue>, duration_ms: u32) -> Self {
        Self { toasts, duration_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let toasts = self.toasts;
        if let Some(id) = toasts.try_update(|queue| queue.push(notice)) {
            Timeout::new(self.duration_ms, move || {
                toasts.update(|queue| {
                    queue.dismiss(id);
                });
            })
            .forget();
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use js_sys::Array;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pdf_file(name: &str) -> BrowserFile {
        let parts = Array::new();
        parts.push(&JsValue::from_str("%PDF-1.4"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type("application/pdf");
        let file = File::new_with_str_sequence_and_options(&parts, name, &options).expect("file");
        BrowserFile::new(file)
    }

    #[wasm_bindgen_test]
    fn wasm_browser_file_reports_media_type() {
        let file = pdf_file("paper.pdf");
        assert_eq!(file.name(), "paper.pdf");
        assert_eq!(file.media_type(), "application/pdf");
    }

    #[wasm_bindgen_test]
    fn wasm_preview_is_blob_url() {
        let file = pdf_file("paper.pdf");
        let preview = create_preview(&file).expect("preview url");
        assert!(preview.url().starts_with("blob:"));
    }

    #[wasm_bindgen_test]
    fn wasm_preview_release_runs_once() {
        let released = Rc::new(RefCell::new(0));
        let counter = released.clone();
        let preview = PreviewUrl::new("blob:test", move |_| *counter.borrow_mut() += 1);
        drop(preview);
        assert_eq!(*released.borrow(), 1);
    }
}

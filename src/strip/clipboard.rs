use serde::Serialize;

use crate::core::{Page, PageIcon};

/// One-way text sink for the "copy page" action.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Text placed on the clipboard when a page is copied.
#[derive(Debug, Serialize)]
struct PagePayload<'a> {
    name: &'a str,
    icon: PageIcon,
}

pub fn page_payload(page: &Page) -> String {
    let payload = PagePayload {
        name: &page.name,
        icon: page.icon,
    };
    // Serializing a borrowed str and a unit enum cannot fail.
    serde_json::to_string(&payload).unwrap_or_default()
}

/// Writes the page payload to `sink`. Failures are logged and swallowed.
pub fn copy_page(sink: &mut dyn ClipboardSink, page: &Page) -> bool {
    match sink.write_text(&page_payload(page)) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("copy of page {} not written to clipboard: {err:#}", page.id);
            false
        }
    }
}

/// The operating system clipboard. Unavailable clipboards turn writes into errors.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                log::debug!("system clipboard unavailable: {err}");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("no system clipboard"))?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// Clipboard that remembers the last written text.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

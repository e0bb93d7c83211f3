use folio_core::DocumentRoot;
use tracing::warn;
use web_sys::Element;

/// `<html>` 元素
#[derive(Debug, Default)]
pub struct HtmlRoot {
    element: Option<Element>,
}

impl HtmlRoot {
    pub fn new() -> Self {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if element.is_none() {
            warn!(
                "document element unavailable, attributes will not be reflected"
            );
        }
        Self { element }
    }
}

impl DocumentRoot for HtmlRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(element) = &self.element
            && let Err(e) = element.set_attribute(name, value)
        {
            warn!(error = ?e, name, "failed to set root attribute");
        }
    }
}

use crate::constants::STATUS_ID;
use crate::dom;
use web_sys as web;

/// Show the playing track in the page status line.
pub fn set_status(document: &web::Document, title: &str) {
    dom::set_text(document, STATUS_ID, &format!("{}{}", crate::constants::STATUS_PREFIX, title));
}

/// Echo a slider value into its result label.
#[inline]
pub fn set_label(document: &web::Document, label_id: &str, value: &str) {
    dom::set_text(document, label_id, value);
}

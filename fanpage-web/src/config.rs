//! Page-provided configuration overrides.
use fanpage_core::PageConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_SCRIPT_ID: &str = "fanpage-config";

/// Built-in configuration merged with the page's override block, if any.
#[must_use]
pub fn page_config(doc: &Document) -> PageConfig {
    doc.get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .filter(|raw| !raw.trim().is_empty())
        .map_or_else(PageConfig::load_from_static, |raw| {
            PageConfig::from_json_or_static(&raw)
        })
}

//! Configuration for the frontend behavior layer

use custom_theme_shared::ThemeConfig;

use crate::dom;

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

/// Read overrides from the page, falling back to defaults.
pub fn load() -> ThemeConfig {
    let raw = dom::document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        return ThemeConfig::default();
    };

    match ThemeConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("Ignoring #{CONFIG_ELEMENT_ID}, using defaults: {err}").into(),
            );
            ThemeConfig::default()
        },
    }
}

use std::sync::Arc;

use ck_blogsite_core::config::load_or_default;
use ck_blogsite_core::MockConfig;
use once_cell::sync::Lazy;

/// Id of the optional `<script type="application/json">` holding mock backend overrides.
const CONFIG_ELEMENT_ID: &str = "ck-config";

pub static CONFIG: Lazy<Arc<MockConfig>> = Lazy::new(|| {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    load_or_default(raw.as_deref())
});

//! Runtime Configuration
//!
//! `index.html` may carry an inline JSON document overriding the defaults:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "carousel": { "autoplay_interval_ms": 7000 } }
//! </script>
//! ```

use anyhow::Context;
use landing_core::SiteConfig;
use leptos::prelude::*;

const CONFIG_ELEMENT_ID: &str = "site-config";

/// Read the inline config element, or defaults when there is none
pub fn load() -> anyhow::Result<SiteConfig> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SiteConfig::default());
    };
    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    SiteConfig::from_json(&json).with_context(|| format!("invalid #{CONFIG_ELEMENT_ID} document"))
}

/// Config provided by `App`
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

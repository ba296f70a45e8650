use shared::{DocsConfig, NavError};

/// Navigation config compiled into the frontend.
pub const DOCS_NAV_TOML: &str = include_str!("../docs_nav.toml");

pub fn load_docs_config() -> Result<DocsConfig, NavError> {
    DocsConfig::from_toml_str(DOCS_NAV_TOML)
}

/// Path of the page currently shown, used to highlight its nav entry.
pub fn current_path() -> Option<String> {
    web_sys::window().and_then(|window| window.location().pathname().ok())
}

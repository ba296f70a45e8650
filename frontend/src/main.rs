//! Documentation site entry point

use zoon::*;

mod app;
mod config;

pub fn main() {
    let docs_config = match config::load_docs_config() {
        Ok(docs_config) => docs_config,
        Err(error) => {
            zoon::eprintln!("❌ Failed to load navigation config: {}", error);
            panic!("Failed to load navigation config: {}", error);
        }
    };
    zoon::println!(
        "📚 Loaded '{}' with {} routes",
        docs_config.app.title,
        docs_config.routes.len()
    );

    moonzoon_navui::init_theme(Some(moonzoon_navui::Theme::from_name(&docs_config.ui.theme)));

    let app = app::DocsApp::new(docs_config);
    start_app("app", move || app.root());
}

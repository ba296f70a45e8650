//! DocsApp - documentation shell with the side navigation

use moonzoon_navui::*;
use shared::DocsConfig;
use zoon::*;

use crate::config::current_path;

pub struct DocsApp {
    config: DocsConfig,
    /// Latest query reported by the side navigation
    last_search: Mutable<String>,
}

impl DocsApp {
    pub fn new(config: DocsConfig) -> Self {
        Self {
            config,
            last_search: Mutable::new(String::new()),
        }
    }

    pub fn root(&self) -> impl Element {
        Row::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Align::new().top())
            .s(Font::new().family([FontFamily::new(FONT_FAMILY_SANS)]))
            .s(Background::new().color_signal(nav_background_color()))
            .item(
                El::new()
                    .s(Width::exact(280))
                    .s(Height::fill())
                    .s(Scrollbars::both())
                    .child(self.side_nav()),
            )
            .item(self.content())
    }

    fn side_nav(&self) -> impl Element {
        let nav = &self.config.nav;
        let mut builder = side_nav()
            .routes(self.config.routes.clone())
            .route_tree(self.config.route_tree())
            .searchable(nav.searchable)
            .placeholder(nav.placeholder.clone())
            .aria_label(nav.aria_label.clone())
            .default_expanded(nav.default_expanded.clone())
            .on_search({
                let last_search = self.last_search.clone();
                move |query| {
                    zoon::println!("🔍 Search changed: '{}'", query);
                    last_search.set_neq(query);
                }
            });
        if let Some(path) = current_path() {
            builder = builder.active_path(path);
        }
        builder.build()
    }

    fn content(&self) -> impl Element {
        let title = self.config.app.title.clone();
        Column::new()
            .s(Width::fill())
            .s(Padding::all(SPACING_12))
            .s(Gap::new().y(SPACING_8))
            .s(Font::new().color_signal(nav_text_color()))
            .item(
                El::new()
                    .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Number(FONT_WEIGHT_6)))
                    .child(Text::new(title)),
            )
            .item(El::new().child_signal(self.last_search.signal_cloned().map(|query| {
                (!query.is_empty()).then(|| Text::new(format!("Filtering pages by '{}'", query)))
            })))
            .item(
                Button::new()
                    .label("Toggle theme")
                    .on_press(toggle_theme),
            )
    }
}

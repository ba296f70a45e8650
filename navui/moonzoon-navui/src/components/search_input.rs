// SearchInput Component
// Single text field that reports its current value on every change

use crate::tokens::*;
use zoon::*;

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";

pub struct SearchInputBuilder {
    placeholder: String,
    value: String,
    on_change: Option<Box<dyn Fn(String)>>,
}

impl SearchInputBuilder {
    pub fn new() -> Self {
        Self {
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            value: String::new(),
            on_change: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Initial text of the field.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Called synchronously with the field's full value after every edit.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let on_change = self.on_change;
        let (focused, focused_signal) = Mutable::new_and_signal(false);

        TextInput::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_8).y(SPACING_4))
            .s(Font::new()
                .size(FONT_SIZE_14)
                .family([FontFamily::new(FONT_FAMILY_SANS)])
                .color_signal(nav_text_color()))
            .s(Background::new().color_signal(nav_background_color()))
            .s(RoundedCorners::all(SPACING_4))
            .s(Outline::with_signal_self(focused_signal.map(|focused| {
                focused.then(|| Outline::inner().width(1).color(FOCUS_RING_COLOR_PRIMARY))
            })))
            .label_hidden(self.placeholder.clone())
            .placeholder(Placeholder::new(self.placeholder))
            .text(self.value)
            .on_change(move |value| {
                if let Some(handler) = &on_change {
                    handler(value);
                }
            })
            .on_focus({
                let focused = focused.clone();
                move || focused.set_neq(true)
            })
            .on_blur(move || focused.set_neq(false))
            // Plain text type: `type=search` makes the browser fire its own
            // detail-less `search` event, which would bubble into the host.
            .update_raw_el(|raw_el| raw_el.class("search-input"))
    }
}

impl Default for SearchInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point mirroring the other component constructors.
pub fn search_input() -> SearchInputBuilder {
    SearchInputBuilder::new()
}

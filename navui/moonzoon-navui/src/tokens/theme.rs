// Theme Management System

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parses a config theme name; anything other than "light" is dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Dark));

/// Initialize theme, falling back to localStorage when no theme is given
pub fn init_theme(initial_theme: Option<Theme>) {
    let theme_to_use = if let Some(theme) = initial_theme {
        theme
    } else {
        let stored_theme = local_storage()
            .get("navui-theme")
            .unwrap_or(Ok(String::new()))
            .unwrap_or_default();
        Theme::from_name(&stored_theme)
    };

    THEME.set(theme_to_use);
}

/// Get the current theme as a signal for reactive updates
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Set the current theme and persist it to localStorage
pub fn set_theme(new_theme: Theme) {
    THEME.set(new_theme);
    let theme_str = match new_theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    if let Err(error) = local_storage().insert("navui-theme", theme_str) {
        zoon::eprintln!("navui: failed to persist theme '{}': {:?}", theme_str, error);
    }
}

pub fn current_theme() -> Theme {
    THEME.get()
}

pub fn toggle_theme() {
    let new_theme = match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    set_theme(new_theme);
}

// Colors used by the navigation tree

pub fn nav_text_color() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(30% 0.07 255)",
        Theme::Dark => "oklch(92% 0.07 255)",
    })
}

pub fn nav_group_color() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(45% 0.09 255)",
        Theme::Dark => "oklch(80% 0.09 255)",
    })
}

pub fn nav_link_color() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.16 250)",
        Theme::Dark => "oklch(75% 0.16 250)",
    })
}

pub fn nav_background_color() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.025 255)",
        Theme::Dark => "oklch(12% 0.025 255)",
    })
}


#[cfg(all(test, target_arch = "wasm32"))]
mod storage_tests {
    use super::*;
    use wasm_bindgen_test::*;

    // Browser mode is configured once for the crate in side_nav's DOM tests.
    #[wasm_bindgen_test]
    fn set_theme_persists_choice() {
        set_theme(Theme::Light);
        let stored: Option<String> = local_storage().get("navui-theme").and_then(Result::ok);
        assert_eq!(stored.as_deref(), Some("light"));

        toggle_theme();
        assert_eq!(current_theme(), Theme::Dark);
        let stored: Option<String> = local_storage().get("navui-theme").and_then(Result::ok);
        assert_eq!(stored.as_deref(), Some("dark"));
    }
}

//! Persisted UI preferences, stored as plain strings in localStorage so they
//! outlive the page session. Missing or unreadable values fall back to the
//! defaults; failed writes are ignored.

use web_sys::Storage;

pub const THEME_KEY: &str = "vyla_theme";
pub const PROXY_KEY: &str = "vyla_proxy_enabled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything but a stored "light" reads as the dark default.
    pub fn from_stored(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown inside the theme toggle: the sun offers leaving dark mode,
    /// the moon offers going back.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn read_pref(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn write_pref(key: &str, value: &str) {
    if let Some(store) = storage() {
        let _ = store.set_item(key, value);
    }
}

pub fn load_theme() -> Theme {
    Theme::from_stored(read_pref(THEME_KEY))
}

pub fn save_theme(theme: Theme) {
    write_pref(THEME_KEY, theme.as_str());
}

/// Stored as the literal strings "true"/"false"; anything else reads as off.
pub fn load_proxy_enabled() -> bool {
    read_pref(PROXY_KEY).as_deref() == Some("true")
}

pub fn save_proxy_enabled(enabled: bool) {
    write_pref(PROXY_KEY, if enabled { "true" } else { "false" });
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn theme_persists_through_storage() {
        save_theme(Theme::Light);
        assert_eq!(load_theme(), Theme::Light);
        save_theme(Theme::Dark);
        assert_eq!(load_theme(), Theme::Dark);
    }

    #[wasm_bindgen_test]
    fn double_toggle_restores_the_persisted_value() {
        save_theme(Theme::Dark);
        let before = read_pref(THEME_KEY);
        save_theme(load_theme().toggled());
        save_theme(load_theme().toggled());
        assert_eq!(read_pref(THEME_KEY), before);
    }

    #[wasm_bindgen_test]
    fn proxy_flag_stores_literal_strings() {
        save_proxy_enabled(true);
        assert_eq!(read_pref(PROXY_KEY).as_deref(), Some("true"));
        assert!(load_proxy_enabled());
        save_proxy_enabled(false);
        assert_eq!(read_pref(PROXY_KEY).as_deref(), Some("false"));
        assert!(!load_proxy_enabled());
    }
}

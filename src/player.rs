//! Play-URL resolution and window/frame launching for the game player.

use crate::util::{cerror, js_err};
use wasm_bindgen::JsCast;
use web_sys::{HtmlIFrameElement, Url};

/// Proxy-routing prefix; the absolute game URL is appended as-is.
pub const PROXY_URL: &str = "https://ovala.vercel.app/proxy/";

pub const BLANK_PAGE: &str = "about:blank";

/// Delay before the player frame gets its real URL, so a rapid reopen never
/// paints leftovers of the previous game.
pub const FRAME_LOAD_DELAY_MS: u32 = 100;

/// Resolve a catalog `url` field against a base origin into an absolute URL.
pub fn resolve_game_url(raw: &str, base: &str) -> Result<String, String> {
    Url::new_with_base(raw, base)
        .map(|url| url.href())
        .map_err(js_err)
}

/// Resolve a record URL against the current page origin.
pub fn resolve_against_page_origin(raw: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(js_err)?;
    resolve_game_url(raw, &origin)
}

/// The URL actually loaded into the frame: proxied when the proxy preference
/// is on, direct otherwise.
pub fn effective_play_url(absolute_url: &str, proxy_enabled: bool) -> String {
    if proxy_enabled {
        format!("{PROXY_URL}{absolute_url}")
    } else {
        absolute_url.to_string()
    }
}

/// Open `url` in a new window wrapped in a borderless full-viewport frame
/// titled after the game.
pub fn open_in_new_window(title: &str, url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let new_window = match window.open_with_url_and_target(BLANK_PAGE, "_blank") {
        Ok(Some(w)) => w,
        // Popup blocked; nothing to do.
        _ => return,
    };
    let Some(document) = new_window.document() else {
        return;
    };
    document.set_title(title);
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.style().set_property("margin", "0");
    let _ = body.style().set_property("overflow", "hidden");
    let Ok(element) = document.create_element("iframe") else {
        return;
    };
    let Ok(frame) = element.dyn_into::<HtmlIFrameElement>() else {
        return;
    };
    frame.style().set_css_text(
        "border: none; width: 100%; height: 100%; margin: 0; padding: 0; overflow: hidden;",
    );
    frame.set_src(url);
    let _ = body.append_child(&frame);
}

/// Open a download link in a new tab.
pub fn open_download(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            cerror(&format!("failed to open download: {}", js_err(err)));
        }
    }
}

/// Request fullscreen on the player frame. Failure is diagnostic-only; the
/// overlay keeps working windowed.
pub fn request_frame_fullscreen(frame: &HtmlIFrameElement) {
    if let Err(err) = frame.request_fullscreen() {
        cerror(&format!(
            "error attempting to enable full-screen mode: {}",
            js_err(err)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_url_passes_through() {
        assert_eq!(
            effective_play_url("https://site.example/g/foo", false),
            "https://site.example/g/foo"
        );
    }

    #[test]
    fn proxied_url_gets_the_fixed_prefix() {
        assert_eq!(
            effective_play_url("https://site.example/g/foo", true),
            "https://ovala.vercel.app/proxy/https://site.example/g/foo"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn relative_urls_resolve_against_the_origin() {
        assert_eq!(
            resolve_game_url("/g/foo", "https://site.example").unwrap(),
            "https://site.example/g/foo"
        );
    }

    #[wasm_bindgen_test]
    fn absolute_urls_survive_resolution() {
        assert_eq!(
            resolve_game_url("https://cdn.example/game/", "https://site.example").unwrap(),
            "https://cdn.example/game/"
        );
    }

    #[wasm_bindgen_test]
    fn proxy_scenario_matches_the_routing_contract() {
        let absolute = resolve_game_url("/g/foo", "https://site.example").unwrap();
        assert_eq!(
            effective_play_url(&absolute, true),
            "https://ovala.vercel.app/proxy/https://site.example/g/foo"
        );
        assert_eq!(effective_play_url(&absolute, false), absolute);
    }
}

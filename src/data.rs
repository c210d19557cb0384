//! Catalog fetch. `games.json` is served same-origin next to the page.

use crate::model::GameRecord;
use crate::util::js_err;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub const GAMES_URL: &str = "/games.json";

pub async fn fetch_games() -> Result<Vec<GameRecord>, String> {
    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_str(GAMES_URL))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(format!("games.json returned status {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or("games.json body was not text")?;
    serde_json::from_str(&text).map_err(|err| err.to_string())
}

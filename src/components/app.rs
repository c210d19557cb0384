use super::background_scroller::BackgroundScroller;
use super::game_grid::GameGrid;
use super::player_overlay::PlayerOverlay;
use crate::data::fetch_games;
use crate::model::{CatalogAction, CatalogPhase, CatalogState, GameRecord, filter_by_title};
use crate::prefs::{self, Theme};
use crate::util::clog;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

/// Mirror the theme onto the document element, where the stylesheet's
/// color-scheme inversion hooks in.
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = match theme {
        Theme::Light => root.class_list().add_1("color-revert-active"),
        Theme::Dark => root.class_list().remove_1("color-revert-active"),
    };
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_reducer(CatalogState::loading);
    let query = use_state(String::new);
    let theme = use_state(prefs::load_theme);
    let proxy_enabled = use_state(prefs::load_proxy_enabled);
    let active_game = use_state(|| None::<GameRecord>);

    // Fetch the catalog once; search and the toggles stay live while the
    // request is outstanding.
    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_games().await {
                    Ok(games) => catalog.dispatch(CatalogAction::Loaded(games)),
                    Err(err) => {
                        clog(&format!("failed to load games: {err}"));
                        catalog.dispatch(CatalogAction::LoadFailed);
                    }
                }
            });
            || ()
        });
    }

    // Apply and persist the theme on startup and on every toggle.
    {
        let theme = *theme;
        use_effect_with(theme, move |theme| {
            apply_theme_class(*theme);
            prefs::save_theme(*theme);
            || ()
        });
    }

    {
        let enabled = *proxy_enabled;
        use_effect_with(enabled, move |enabled| {
            prefs::save_proxy_enabled(*enabled);
            || ()
        });
    }

    let on_search_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let on_proxy_toggle = {
        let proxy_enabled = proxy_enabled.clone();
        Callback::from(move |_: MouseEvent| proxy_enabled.set(!*proxy_enabled))
    };

    let on_open = {
        let active_game = active_game.clone();
        Callback::from(move |game: GameRecord| active_game.set(Some(game)))
    };

    let on_close = {
        let active_game = active_game.clone();
        Callback::from(move |_: ()| active_game.set(None))
    };

    let filtered = filter_by_title(&catalog.games, &query);
    let game_count = match catalog.phase {
        CatalogPhase::Ready => format!("Games: {}", catalog.games.len()),
        _ => String::new(),
    };
    let proxy_class = if *proxy_enabled { "active" } else { "" };

    html! {
        <>
            <BackgroundScroller games={catalog.games.clone()} />
            <nav id="top-bar">
                <input
                    id="navSearchInput"
                    type="search"
                    placeholder="Search games..."
                    oninput={on_search_input}
                />
                <span id="gameCount">{ game_count }</span>
                <button id="theme-toggle-button" title="Toggle theme" onclick={on_theme_toggle}>
                    <i class={theme.icon_class()}></i>
                </button>
                <button
                    id="proxy-toggle-button"
                    class={proxy_class}
                    title="Toggle proxy routing"
                    onclick={on_proxy_toggle}
                >
                    <i class="fas fa-shield-halved"></i>
                </button>
            </nav>
            <GameGrid phase={catalog.phase} games={filtered} on_open={on_open} />
            <PlayerOverlay
                game={(*active_game).clone()}
                proxy_enabled={*proxy_enabled}
                on_close={on_close}
            />
        </>
    }
}

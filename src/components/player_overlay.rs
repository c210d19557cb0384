use crate::model::GameRecord;
use crate::player::{
    BLANK_PAGE, FRAME_LOAD_DELAY_MS, effective_play_url, open_download, open_in_new_window,
    request_frame_fullscreen, resolve_against_page_origin,
};
use crate::util::cerror;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlIFrameElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerOverlayProps {
    /// The game currently open in the player, if any. The overlay element
    /// stays mounted either way; a new game restarts the load sequence.
    pub game: Option<GameRecord>,
    pub proxy_enabled: bool,
    pub on_close: Callback<()>,
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}

#[function_component(PlayerOverlay)]
pub fn player_overlay(props: &PlayerOverlayProps) -> Html {
    let frame_ref = use_node_ref();
    let frame_src = use_state(|| AttrValue::from(BLANK_PAGE));
    // Effective URL of the open game, kept around for the new-window action.
    let display_url = use_state(|| None::<String>);

    {
        let frame_src = frame_src.clone();
        let display_url = display_url.clone();
        // Proxy routing is decided when a game opens, like the rest of the
        // load sequence; flipping the toggle mid-game takes effect next open.
        let proxy_enabled = props.proxy_enabled;
        use_effect_with(props.game.clone(), move |game| {
            frame_src.set(AttrValue::from(BLANK_PAGE));
            match game {
                Some(game) => {
                    set_body_scroll_locked(true);
                    match resolve_against_page_origin(&game.url) {
                        Ok(absolute) => {
                            let url = effective_play_url(&absolute, proxy_enabled);
                            display_url.set(Some(url.clone()));
                            let frame_src = frame_src.clone();
                            Timeout::new(FRAME_LOAD_DELAY_MS, move || {
                                frame_src.set(AttrValue::from(url));
                            })
                            .forget();
                        }
                        Err(err) => {
                            display_url.set(None);
                            cerror(&format!("could not resolve game url: {err}"));
                        }
                    }
                }
                None => {
                    set_body_scroll_locked(false);
                    display_url.set(None);
                }
            }
            || ()
        });
    }

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // Clicks inside the modal content bubble up with a different
            // target; only a direct backdrop hit closes.
            let on_backdrop = e
                .target()
                .zip(e.current_target())
                .map(|(target, current)| target == current)
                .unwrap_or(false);
            if on_backdrop {
                on_close.emit(());
            }
        })
    };

    let on_fullscreen = {
        let frame_ref = frame_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(frame) = frame_ref.cast::<HtmlIFrameElement>() {
                request_frame_fullscreen(&frame);
            }
        })
    };

    let title = props
        .game
        .as_ref()
        .map(|game| game.title.clone())
        .unwrap_or_default();

    let on_new_window = {
        let display_url = display_url.clone();
        let title = title.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(url) = (*display_url).as_deref() {
                open_in_new_window(&title, url);
            }
        })
    };

    let download_button = match props
        .game
        .as_ref()
        .and_then(|game| game.download_url.clone())
        .filter(|url| !url.is_empty())
    {
        Some(url) => {
            let on_download = Callback::from(move |_: MouseEvent| open_download(&url));
            html! {
                <button id="downloadBtn" title="Download" onclick={on_download}>
                    <i class="fas fa-download"></i>
                </button>
            }
        }
        None => html! {},
    };

    let overlay_class = if props.game.is_some() {
        "details-overlay-backdrop active"
    } else {
        "details-overlay-backdrop"
    };

    html! {
        <div id="game-player-overlay" class={overlay_class} onclick={on_backdrop_click}>
            <div class="game-player-content">
                <div class="game-player-header">
                    <h2 id="gamePlayerTitle">{ title }</h2>
                    <div class="game-player-actions">
                        <button id="fullscreenBtn" title="Fullscreen" onclick={on_fullscreen}>
                            <i class="fas fa-expand"></i>
                        </button>
                        <button id="aboutBlankBtn" title="Open in new window" onclick={on_new_window}>
                            <i class="fas fa-external-link-alt"></i>
                        </button>
                        { download_button }
                        <button id="closeGamePlayer" title="Close" onclick={on_close_click}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>
                <iframe
                    id="gameFrame"
                    ref={frame_ref}
                    src={(*frame_src).clone()}
                    allowfullscreen=true
                ></iframe>
            </div>
        </div>
    }
}

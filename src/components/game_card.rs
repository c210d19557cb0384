use crate::model::{GameRecord, truncate_description};
use crate::state::{GlowState, HideTimerSlot, cancel_hide, schedule_hide};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::prelude::*;

/// Poster shown when a record has no image or its image fails to load.
pub const DEFAULT_POSTER: &str = "images/default-game-poster.png";

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: GameRecord,
    pub on_open: Callback<GameRecord>,
}

fn event_element(target: Option<web_sys::EventTarget>) -> Option<Element> {
    target.and_then(|t| t.dyn_into::<Element>().ok())
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let glow = use_state(GlowState::default);
    let hide_timer: HideTimerSlot = use_mut_ref(|| None);
    let image_failed = use_state(|| false);

    {
        // A recycled card instance may show a new game; forget the old
        // poster failure.
        let image_failed = image_failed.clone();
        use_effect_with(props.game.clone(), move |_| {
            image_failed.set(false);
            || ()
        });
    }

    let on_click = {
        let game = props.game.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(game.clone()))
    };

    let on_mouse_move = {
        let glow = glow.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |e: MouseEvent| {
            cancel_hide(&hide_timer);
            if let Some(card) = event_element(e.current_target()) {
                let rect = card.get_bounding_client_rect();
                glow.set(GlowState::at(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                ));
            }
        })
    };

    let on_mouse_leave = {
        let glow = glow.clone();
        Callback::from(move |_: MouseEvent| glow.set(glow.hidden()))
    };

    // Shared by touchstart and touchmove; movement also cancels a pending
    // touch-end hide.
    let on_touch_move = {
        let glow = glow.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |e: TouchEvent| {
            cancel_hide(&hide_timer);
            if let (Some(touch), Some(card)) =
                (e.touches().item(0), event_element(e.current_target()))
            {
                let rect = card.get_bounding_client_rect();
                glow.set(GlowState::at(
                    touch.client_x() as f64 - rect.left(),
                    touch.client_y() as f64 - rect.top(),
                ));
            }
        })
    };

    let on_touch_end = {
        let glow = glow.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: TouchEvent| {
            let glow = glow.clone();
            schedule_hide(&hide_timer, move || glow.set(glow.hidden()));
        })
    };

    let poster = if *image_failed {
        DEFAULT_POSTER.to_string()
    } else {
        props
            .game
            .image
            .clone()
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| DEFAULT_POSTER.to_string())
    };
    let on_image_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    html! {
        <div
            class="content-card interactive-border"
            style={glow.style_vars()}
            onclick={on_click}
            onmousemove={on_mouse_move}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_move.clone()}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
        >
            <div class="card-image">
                <img src={poster} alt={props.game.title.clone()} loading="lazy" onerror={on_image_error} />
            </div>
            <div class="card-content">
                <div class="card-header">
                    <h2 class="card-title">{ &props.game.title }</h2>
                </div>
                <p class="card-description">{ truncate_description(&props.game.description) }</p>
            </div>
        </div>
    }
}

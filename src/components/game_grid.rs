use super::game_card::GameCard;
use crate::model::{CatalogPhase, GameRecord};
use yew::prelude::*;

/// Placeholder cards shown while the catalog fetch is outstanding.
pub const SKELETON_CARD_COUNT: usize = 24;

const PLACEHOLDER_STYLE: &str = "grid-column: 1 / -1; text-align: center;";

#[derive(Properties, PartialEq, Clone)]
pub struct GameGridProps {
    pub phase: CatalogPhase,
    /// Already filtered by the search query; rendered in order.
    pub games: Vec<GameRecord>,
    pub on_open: Callback<GameRecord>,
}

#[function_component(GameGrid)]
pub fn game_grid(props: &GameGridProps) -> Html {
    let content: Html = match props.phase {
        CatalogPhase::Loading => (0..SKELETON_CARD_COUNT)
            .map(|i| html! { <div key={i.to_string()} class="skeleton-card"></div> })
            .collect(),
        CatalogPhase::Failed => html! {
            <p style={PLACEHOLDER_STYLE}>{ "Could not load games. Please try again later." }</p>
        },
        CatalogPhase::Ready if props.games.is_empty() => html! {
            <p style={PLACEHOLDER_STYLE}>{ "No games found." }</p>
        },
        CatalogPhase::Ready => props
            .games
            .iter()
            .map(|game| {
                html! {
                    <GameCard
                        key={game.url.clone()}
                        game={game.clone()}
                        on_open={props.on_open.clone()}
                    />
                }
            })
            .collect(),
    };

    html! {
        <div id="gameContainer">{ content }</div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::model::filter_by_title;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn record(title: &str) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            description: "d".to_string(),
            url: format!("/g/{}", title.to_lowercase()),
            image: None,
            download_url: None,
        }
    }

    async fn mount(props: GameGridProps) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let _handle = yew::Renderer::<GameGrid>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(0).await;
        root
    }

    #[wasm_bindgen_test(async)]
    async fn renders_one_card_per_game() {
        let games = vec![record("Foo"), record("Bar"), record("Baz")];
        let root = mount(GameGridProps {
            phase: CatalogPhase::Ready,
            games,
            on_open: Callback::noop(),
        })
        .await;
        assert_eq!(
            root.query_selector_all(".content-card").unwrap().length(),
            3
        );
    }

    #[wasm_bindgen_test(async)]
    async fn empty_catalog_shows_the_placeholder() {
        let root = mount(GameGridProps {
            phase: CatalogPhase::Ready,
            games: Vec::new(),
            on_open: Callback::noop(),
        })
        .await;
        assert_eq!(root.query_selector_all(".content-card").unwrap().length(), 0);
        assert!(
            root.text_content()
                .unwrap_or_default()
                .contains("No games found.")
        );
    }

    #[wasm_bindgen_test(async)]
    async fn search_miss_shows_the_placeholder() {
        let catalog = vec![record("Foo")];
        let root = mount(GameGridProps {
            phase: CatalogPhase::Ready,
            games: filter_by_title(&catalog, "zzz"),
            on_open: Callback::noop(),
        })
        .await;
        assert_eq!(root.query_selector_all(".content-card").unwrap().length(), 0);
        assert!(
            root.text_content()
                .unwrap_or_default()
                .contains("No games found.")
        );
    }

    #[wasm_bindgen_test(async)]
    async fn loading_phase_shows_the_skeleton_grid() {
        let root = mount(GameGridProps {
            phase: CatalogPhase::Loading,
            games: Vec::new(),
            on_open: Callback::noop(),
        })
        .await;
        assert_eq!(
            root.query_selector_all(".skeleton-card").unwrap().length() as usize,
            SKELETON_CARD_COUNT
        );
    }

    #[wasm_bindgen_test(async)]
    async fn failed_fetch_shows_the_error_message() {
        let root = mount(GameGridProps {
            phase: CatalogPhase::Failed,
            games: Vec::new(),
            on_open: Callback::noop(),
        })
        .await;
        assert!(
            root.text_content()
                .unwrap_or_default()
                .contains("Could not load games.")
        );
    }
}

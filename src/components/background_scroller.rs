use crate::model::{GameRecord, scroller_rows, shuffled_catalog_images};
use crate::util::on_next_frame;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BackgroundScrollerProps {
    pub games: Vec<GameRecord>,
}

#[function_component(BackgroundScroller)]
pub fn background_scroller(props: &BackgroundScrollerProps) -> Html {
    let rows = use_state(Vec::<Vec<String>>::new);
    let animated = use_state(|| false);

    {
        let rows = rows.clone();
        let animated = animated.clone();
        use_effect_with(props.games.clone(), move |games| {
            let images = shuffled_catalog_images(games);
            rows.set(scroller_rows(&images));
            // Start scrolling one frame after the rows exist, so the first
            // paint happens at the loop origin instead of mid-jump.
            animated.set(false);
            let animated = animated.clone();
            on_next_frame(move || animated.set(true));
            || ()
        });
    }

    let scroller_class = if *animated { "animations-active" } else { "" };

    html! {
        <div id="background-scroller" class={scroller_class}>
            { for rows.iter().enumerate().map(|(index, row)| {
                // Each row renders its images twice so the loop wraps
                // seamlessly.
                html! {
                    <div class={format!("scroller-row scroller-row-{}", index + 1)}>
                        { for row.iter().chain(row.iter()).map(|image| html! {
                            <img src={image.clone()} loading="lazy" alt="" aria-hidden="true" />
                        }) }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::model::{SCROLLER_IMAGES_PER_ROW, SCROLLER_ROWS};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn game_with_image(i: usize) -> GameRecord {
        GameRecord {
            title: format!("Game {i}"),
            description: "d".to_string(),
            url: format!("/g/{i}"),
            image: Some(format!("img-{i}.png")),
            download_url: None,
        }
    }

    async fn mount(games: Vec<GameRecord>) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let _handle = yew::Renderer::<BackgroundScroller>::with_root_and_props(
            root.clone(),
            BackgroundScrollerProps { games },
        )
        .render();
        TimeoutFuture::new(0).await;
        root
    }

    #[wasm_bindgen_test(async)]
    async fn rows_hold_the_doubled_image_count() {
        let root = mount((0..6).map(game_with_image).collect()).await;
        // One extra tick for the rows state set by the populate effect.
        TimeoutFuture::new(0).await;
        let rows = root.query_selector_all(".scroller-row").unwrap();
        assert_eq!(rows.length() as usize, SCROLLER_ROWS);
        assert_eq!(
            root.query_selector_all(".scroller-row img").unwrap().length() as usize,
            SCROLLER_ROWS * SCROLLER_IMAGES_PER_ROW * 2
        );
    }

    #[wasm_bindgen_test(async)]
    async fn scroller_stays_empty_without_images() {
        let games = vec![GameRecord {
            title: "Foo".to_string(),
            description: "d".to_string(),
            url: "/g/foo".to_string(),
            image: None,
            download_url: None,
        }];
        let root = mount(games).await;
        TimeoutFuture::new(0).await;
        assert_eq!(
            root.query_selector_all(".scroller-row").unwrap().length(),
            0
        );
    }
}

//! Core data model for the catalog page: the fetched game list, the pure
//! view-model helpers (search filter, description truncation) and the
//! background-scroller row builder.

use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

/// One entry of the fetched `games.json` catalog. A session-long snapshot;
/// never written back.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub description: String,
    /// Playable URL, usually relative to the page origin.
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "downloadUrl")]
    pub download_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogPhase {
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub phase: CatalogPhase,
    pub games: Vec<GameRecord>,
}

impl CatalogState {
    pub fn loading() -> Self {
        Self {
            phase: CatalogPhase::Loading,
            games: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum CatalogAction {
    Loaded(Vec<GameRecord>),
    LoadFailed,
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CatalogAction::Loaded(games) => Rc::new(Self {
                phase: CatalogPhase::Ready,
                games,
            }),
            CatalogAction::LoadFailed => Rc::new(Self {
                phase: CatalogPhase::Failed,
                games: Vec::new(),
            }),
        }
    }
}

pub const DESCRIPTION_LIMIT: usize = 100;

/// Truncate a card description to `DESCRIPTION_LIMIT` characters with an
/// ellipsis suffix. Counts chars, not bytes, so multi-byte text never splits.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let mut truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        truncated.push_str("...");
        truncated
    } else {
        description.to_string()
    }
}

/// Case-insensitive substring filter on titles, preserving catalog order.
/// An empty query matches every game.
pub fn filter_by_title(games: &[GameRecord], query: &str) -> Vec<GameRecord> {
    let query = query.to_lowercase();
    games
        .iter()
        .filter(|game| game.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub const SCROLLER_ROWS: usize = 8;
pub const SCROLLER_IMAGES_PER_ROW: usize = 25;

/// Fisher-Yates shuffle driven by `rand`, which must yield values in [0, 1).
pub fn shuffle_in_place<T, F: FnMut() -> f64>(items: &mut [T], mut rand: F) {
    for i in (1..items.len()).rev() {
        let j = (rand() * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
}

/// Build the scroller rows: `SCROLLER_ROWS` rows of `SCROLLER_IMAGES_PER_ROW`
/// entries picked cyclically from `images`. Rows are numbered from 1 to match
/// the `scroller-row-N` style hooks. An empty image set yields no rows.
pub fn scroller_rows(images: &[String]) -> Vec<Vec<String>> {
    if images.is_empty() {
        return Vec::new();
    }
    (1..=SCROLLER_ROWS)
        .map(|row| {
            (0..SCROLLER_IMAGES_PER_ROW)
                .map(|slot| images[(row * SCROLLER_IMAGES_PER_ROW + slot) % images.len()].clone())
                .collect()
        })
        .collect()
}

/// The catalog's usable scroller images, shuffled uniformly.
pub fn shuffled_catalog_images(games: &[GameRecord]) -> Vec<String> {
    let mut images: Vec<String> = games
        .iter()
        .filter_map(|game| game.image.clone())
        .filter(|image| !image.is_empty())
        .collect();
    shuffle_in_place(&mut images, js_sys::Math::random);
    images
}

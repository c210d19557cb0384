mod components;
mod data;
mod model;
mod player;
mod prefs;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

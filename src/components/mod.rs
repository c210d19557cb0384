pub mod app;
pub mod background_scroller;
pub mod game_card;
pub mod game_grid;
pub mod player_overlay;

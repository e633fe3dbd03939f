pub mod app;
pub mod hint_bar;
pub mod hud_bar;
pub mod play_overlay;
pub mod snake_view;

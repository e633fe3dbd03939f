mod components;
mod config;
mod model;
mod render;
mod shell;
mod state;
mod util;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    util::init_logging(level);
    yew::Renderer::<components::app::App>::new().render();
}

use super::snake_view::SnakeView;
use crate::config::GameConfig;
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::bundled());
    let show_game = use_state(|| true);

    // Lock page scroll while the game covers it; restore whatever was there.
    {
        let show_game = *show_game;
        use_effect_with(show_game, move |shown| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            let previous = match (&body, *shown) {
                (Some(body), true) => {
                    let style = body.style();
                    let prev = style.get_property_value("overflow").unwrap_or_default();
                    let _ = style.set_property("overflow", "hidden");
                    Some(prev)
                }
                _ => None,
            };
            move || {
                if let (Some(body), Some(prev)) = (body, previous) {
                    let _ = body.style().set_property("overflow", &prev);
                }
            }
        });
    }

    let on_exit = {
        let show_game = show_game.clone();
        Callback::from(move |()| show_game.set(false))
    };

    let section = "min-height:100svh; padding:96px 24px; color:#e5e7eb; background:#0a0a0a; border-top:1px solid rgba(255,255,255,0.05);";
    html! {
        <>
            if *show_game {
                <SnakeView config={Rc::clone(&config)} on_exit={on_exit} />
            }
            <main>
                <section id="about" style={section}>
                    <h2>{"About"}</h2>
                </section>
                <section id="projects" style={section}>
                    <h2>{"Projects"}</h2>
                </section>
                <section id="contact" style={section}>
                    <h2>{"Contact"}</h2>
                </section>
            </main>
        </>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayOverlayProps {
    pub show: bool,
    pub on_play: Callback<()>,
}

#[function_component(PlayOverlay)]
pub fn play_overlay(props: &PlayOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let play_cb = {
        let cb = props.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button onclick={play_cb} style="position:absolute; left:50%; top:50%; transform:translate(-50%, -50%); padding:20px 32px; border-radius:16px; font-size:20px; font-weight:700; color:#fff; background:rgba(255,255,255,0.1); border:1px solid rgba(255,255,255,0.15); box-shadow:0 25px 50px rgba(0,0,0,0.5); backdrop-filter:blur(8px); cursor:pointer;">
            {"▶ Play"}
        </button>
    }
}

use crate::state::{Hud, Phase};
use yew::prelude::*;

/// Label for the pause toggle, or `None` when it should be hidden.
pub fn pause_label(hud: &Hud) -> Option<&'static str> {
    match hud.phase {
        Phase::NotStarted | Phase::Countdown(_) => None,
        _ if hud.exiting => None,
        Phase::Running => Some("Pause"),
        _ => Some("Play"),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HudBarProps {
    pub score: u32,
    pub best: u32,
    pub pause_label: Option<&'static str>,
    pub on_toggle_pause: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component]
pub fn HudBar(props: &HudBarProps) -> Html {
    let chip = "padding:4px 8px; border-radius:999px; border:1px solid rgba(255,255,255,0.1); color:rgba(255,255,255,0.9);";
    let button = "padding:4px 10px; border-radius:999px; background:rgba(255,255,255,0.1); border:1px solid rgba(255,255,255,0.1); color:#fff; cursor:pointer;";
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:16px; left:16px; right:16px; display:flex; align-items:center; justify-content:space-between; font-size:14px; font-weight:500;">
            <div style="display:flex; align-items:center; gap:8px;">
                <span style={format!("{} background:rgba(255,255,255,0.15);", chip)}>{ format!("Score: {}", props.score) }</span>
                <span style={format!("{} background:rgba(255,255,255,0.05);", chip)}>{ format!("Best: {}", props.best) }</span>
            </div>
            <div style="display:flex; align-items:center; gap:8px;">
                if let Some(label) = props.pause_label {
                    <button onclick={pause_cb} style={button}>{ label }</button>
                }
                <button onclick={restart_cb} style={button}>{"Restart"}</button>
            </div>
        </div>
    }
}

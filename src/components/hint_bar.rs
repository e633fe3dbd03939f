use crate::state::Phase;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HintBarProps {
    pub phase: Phase,
}

pub fn hint_text(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "Space = Play • WASD/Arrows",
        Phase::Countdown(_) => "Starting… (press an arrow to start now)",
        _ => "Eat a badge to navigate ↓",
    }
}

#[function_component(HintBar)]
pub fn hint_bar(props: &HintBarProps) -> Html {
    html! {
        <div style="pointer-events:none; user-select:none; position:absolute; bottom:12px; left:0; right:0; text-align:center; font-size:12px; color:rgba(255,255,255,0.7);">
            { hint_text(props.phase) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_follows_phase() {
        assert_eq!(hint_text(Phase::NotStarted), "Space = Play • WASD/Arrows");
        assert!(hint_text(Phase::Countdown(2)).starts_with("Starting"));
        assert_eq!(hint_text(Phase::Running), hint_text(Phase::Paused));
        assert_eq!(hint_text(Phase::GameOver), "Eat a badge to navigate ↓");
    }
}

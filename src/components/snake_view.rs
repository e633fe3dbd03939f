use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    HtmlCanvasElement, HtmlElement, KeyboardEvent, MediaQueryList, MediaQueryListEvent,
    ResizeObserver, TouchEvent, Window,
};
use yew::prelude::*;

use super::hint_bar::HintBar;
use super::hud_bar::{HudBar, pause_label};
use super::play_overlay::PlayOverlay;
use crate::config::GameConfig;
use crate::shell::GameShell;
use crate::state::{Hud, Phase, Session, Surface, browser_store};

#[derive(Properties, PartialEq, Clone)]
pub struct SnakeViewProps {
    pub config: Rc<GameConfig>,
    /// Fired after a badge has navigated somewhere.
    pub on_exit: Callback<()>,
}

#[function_component(SnakeView)]
pub fn snake_view(props: &SnakeViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let wrapper_ref = use_node_ref();
    let shell_ref = use_mut_ref(|| None::<Rc<GameShell>>);
    let hud = use_state(|| Hud {
        score: 0,
        best: 0,
        phase: Phase::NotStarted,
        exiting: false,
    });

    {
        let canvas_ref = canvas_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let shell_ref = shell_ref.clone();
        let config = props.config.clone();
        let on_exit = props.on_exit.clone();
        let on_hud = {
            let hud = hud.clone();
            Callback::from(move |h: Hud| hud.set(h))
        };
        use_effect_with((), move |_| -> Box<dyn FnOnce()> {
            let mounted = mount(
                &canvas_ref,
                &wrapper_ref,
                &shell_ref,
                &config,
                on_hud,
                on_exit,
            );
            mounted.unwrap_or_else(|| {
                log::warn!("game canvas unavailable");
                Box::new(|| ())
            })
        });
    }

    let with_shell = |f: fn(&mut Session)| {
        let shell_ref = shell_ref.clone();
        Callback::from(move |()| {
            let shell = shell_ref.borrow().clone();
            if let Some(shell) = shell {
                shell.dispatch(f);
            }
        })
    };
    let on_play = with_shell(|s| s.start());
    let on_toggle_pause = with_shell(|s| s.toggle_pause());
    let on_restart = with_shell(|s| s.restart());

    let started = hud.phase != Phase::NotStarted;
    html! {
        <div style="position:fixed; inset:0; z-index:60; width:100%; height:100svh; overflow:hidden; background:#000;">
            <div style="pointer-events:none; position:absolute; inset:-160px; background:radial-gradient(circle at 50% -20%, rgba(99,102,241,0.25), transparent 60%), radial-gradient(circle at 80% 120%, rgba(34,197,94,0.15), transparent 55%);" aria-hidden="true"></div>
            <div ref={wrapper_ref} style="position:absolute; inset:0; display:grid; place-items:center; touch-action:none;">
                <canvas ref={canvas_ref} style="display:block; width:100%; height:100%;"></canvas>
            </div>
            <HudBar
                score={hud.score}
                best={hud.best}
                pause_label={pause_label(&hud)}
                on_toggle_pause={on_toggle_pause}
                on_restart={on_restart}
            />
            <PlayOverlay show={!started} on_play={on_play} />
            <HintBar phase={hud.phase} />
        </div>
    }
}

fn measure(window: &Window, wrapper: &HtmlElement) -> Surface {
    Surface::new(
        wrapper.client_width() as f64,
        wrapper.client_height() as f64,
        window.device_pixel_ratio(),
    )
}

fn apply_surface(canvas: &HtmlCanvasElement, surface: Surface) {
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", surface.width));
    let _ = style.set_property("height", &format!("{}px", surface.height));
    let (bw, bh) = surface.backing_size();
    canvas.set_width(bw);
    canvas.set_height(bh);
}

fn reduced_motion_query(window: &Window) -> Option<MediaQueryList> {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
}

/// Builds the session and wires every listener. Returns the teardown.
fn mount(
    canvas_ref: &NodeRef,
    wrapper_ref: &NodeRef,
    shell_ref: &Rc<RefCell<Option<Rc<GameShell>>>>,
    config: &GameConfig,
    on_hud: Callback<Hud>,
    on_exit: Callback<()>,
) -> Option<Box<dyn FnOnce()>> {
    let window = web_sys::window()?;
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let wrapper = wrapper_ref.cast::<HtmlElement>()?;

    let surface = measure(&window, &wrapper);
    apply_surface(&canvas, surface);
    let motion_query = reduced_motion_query(&window);
    let session = Session::new(
        config.clone(),
        browser_store(),
        surface.grid(),
        motion_query.as_ref().is_some_and(|m| m.matches()),
    );
    let shell = GameShell::new(session, surface, on_hud, on_exit);
    *shell_ref.borrow_mut() = Some(shell.clone());
    shell.draw(&canvas);

    // Resize
    let resize_cb = {
        let shell = shell.clone();
        let window = window.clone();
        let wrapper = wrapper.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            let surface = shell.resize(measure(&window, &wrapper));
            apply_surface(&canvas, surface);
            shell.draw(&canvas);
        }) as Box<dyn FnMut(_)>)
    };
    let observer = match ResizeObserver::new(resize_cb.as_ref().unchecked_ref()) {
        Ok(o) => {
            o.observe(&wrapper);
            Some(o)
        }
        Err(e) => {
            log::warn!("ResizeObserver unavailable: {e:?}");
            None
        }
    };

    let motion_cb = {
        let shell = shell.clone();
        Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
            let reduced = e.matches();
            shell.dispatch(|s| s.set_reduced_motion(reduced));
        }) as Box<dyn FnMut(_)>)
    };
    if let Some(q) = &motion_query {
        q.add_event_listener_with_callback("change", motion_cb.as_ref().unchecked_ref())
            .ok();
    }

    // RAF loop
    let raf_id = Rc::new(RefCell::new(None::<i32>));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id = raf_id.clone();
        let shell = shell.clone();
        let canvas = canvas.clone();
        let window_loop = window.clone();
        let closure_cell_loop = closure_cell.clone();
        *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            shell.frame(now, &canvas);
            if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let Some(cb) = closure_cell.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *raf_id.borrow_mut() = Some(id);
        }
    }

    // Keyboard
    let keydown_cb = {
        let shell = shell.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            shell.key_down(&e);
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
        .ok();

    // Touch swipes
    let touch_start_cb = {
        let shell = shell.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(t) = e.changed_touches().item(0) {
                shell.touch_start(t.client_x() as f64, t.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let touch_move_cb = {
        let shell = shell.clone();
        Closure::wrap(Box::new(move |_e: TouchEvent| {
            shell.touch_move();
        }) as Box<dyn FnMut(_)>)
    };
    let touch_end_cb = {
        let shell = shell.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(t) = e.changed_touches().item(0) {
                shell.touch_end(t.client_x() as f64, t.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>)
    };
    for (name, cb) in [
        ("touchstart", &touch_start_cb),
        ("touchmove", &touch_move_cb),
        ("touchend", &touch_end_cb),
    ] {
        wrapper
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .ok();
    }

    let shell_slot = shell_ref.clone();
    Some(Box::new(move || {
        let _ = window
            .remove_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        for (name, cb) in [
            ("touchstart", &touch_start_cb),
            ("touchmove", &touch_move_cb),
            ("touchend", &touch_end_cb),
        ] {
            let _ = wrapper.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
        if let Some(q) = &motion_query {
            let _ = q.remove_event_listener_with_callback("change", motion_cb.as_ref().unchecked_ref());
        }
        if let Some(o) = &observer {
            o.disconnect();
        }
        if let Some(id) = raf_id.borrow_mut().take() {
            let _ = window.cancel_animation_frame(id);
        }
        closure_cell.borrow_mut().take();
        shell.teardown();
        shell_slot.borrow_mut().take();
        drop(resize_cb);
    }))
}

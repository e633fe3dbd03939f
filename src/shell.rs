//! Glue between a `Session` and the browser: timers, navigation and painting.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::Callback;

use crate::model::{Direction, NavIntent};
use crate::render::{Frame, paint};
use crate::state::{Effect, Hud, Session, Surface, SwipeTracker, key_command};

/// A browser timer that is cleared when dropped.
struct Timer {
    id: i32,
    repeat: bool,
    _cb: Closure<dyn FnMut()>,
}

impl Timer {
    fn start(ms: i32, repeat: bool, f: impl FnMut() + 'static) -> Option<Self> {
        let win = web_sys::window()?;
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let handler = cb.as_ref().unchecked_ref();
        let id = if repeat {
            win.set_interval_with_callback_and_timeout_and_arguments_0(handler, ms)
        } else {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(handler, ms)
        };
        match id {
            Ok(id) => Some(Self {
                id,
                repeat,
                _cb: cb,
            }),
            Err(e) => {
                log::warn!("could not start timer: {e:?}");
                None
            }
        }
    }

    /// Stops the timer without releasing its callback; safe from inside it.
    fn cancel(&self) {
        if let Some(win) = web_sys::window() {
            if self.repeat {
                win.clear_interval_with_handle(self.id);
            } else {
                win.clear_timeout_with_handle(self.id);
            }
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
struct Timers {
    countdown: Option<Timer>,
    exit: Option<Timer>,
}

pub struct GameShell {
    session: RefCell<Session>,
    timers: RefCell<Timers>,
    swipe: RefCell<SwipeTracker>,
    surface: Cell<Surface>,
    hud: Cell<Option<Hud>>,
    on_hud: Callback<Hud>,
    on_exit: Callback<()>,
}

impl GameShell {
    pub fn new(
        session: Session,
        surface: Surface,
        on_hud: Callback<Hud>,
        on_exit: Callback<()>,
    ) -> Rc<Self> {
        let shell = Rc::new(Self {
            session: RefCell::new(session),
            timers: RefCell::new(Timers::default()),
            swipe: RefCell::new(SwipeTracker::default()),
            surface: Cell::new(surface),
            hud: Cell::new(None),
            on_hud,
            on_exit,
        });
        shell.publish_hud();
        shell
    }

    /// Mutates the session, then carries out whatever it asked for.
    pub fn dispatch(self: &Rc<Self>, f: impl FnOnce(&mut Session)) {
        {
            let mut session = self.session.borrow_mut();
            f(&mut session);
        }
        self.run_effects();
        self.publish_hud();
    }

    fn run_effects(self: &Rc<Self>) {
        let effects = self.session.borrow_mut().take_effects();
        for effect in effects {
            match effect {
                Effect::StartCountdown { epoch } => {
                    let weak = Rc::downgrade(self);
                    let timer = Timer::start(1000, true, move || {
                        with_shell(&weak, |shell| shell.dispatch(|s| s.countdown_tick(epoch)));
                    });
                    self.timers.borrow_mut().countdown = timer;
                }
                Effect::StopCountdown => {
                    // Usually raised from inside the countdown callback itself.
                    if let Some(t) = &self.timers.borrow().countdown {
                        t.cancel();
                    }
                }
                Effect::ScheduleExit { epoch, delay_ms } => {
                    let weak = Rc::downgrade(self);
                    let timer = Timer::start(delay_ms, false, move || {
                        with_shell(&weak, |shell| shell.finish_exit(epoch));
                    });
                    self.timers.borrow_mut().exit = timer;
                }
                Effect::CancelTimers => {
                    let mut timers = self.timers.borrow_mut();
                    timers.countdown = None;
                    timers.exit = None;
                }
            }
        }
    }

    fn finish_exit(self: &Rc<Self>, epoch: u64) {
        let order = self.session.borrow_mut().complete_exit(epoch);
        let Some(order) = order else {
            return;
        };
        if let Some(intent) = &order.intent {
            navigate(intent);
        } else {
            log::warn!("target `{}` has nowhere to go", order.target_key);
        }
        self.publish_hud();
        self.on_exit.emit(());
    }

    fn publish_hud(&self) {
        let hud = self.session.borrow().hud();
        if self.hud.get() != Some(hud) {
            self.hud.set(Some(hud));
            self.on_hud.emit(hud);
        }
    }

    pub fn key_down(self: &Rc<Self>, e: &KeyboardEvent) {
        let Some(cmd) = key_command(&e.key()) else {
            return;
        };
        if cmd.swallows_key() {
            e.prevent_default();
        }
        self.dispatch(|s| s.apply(cmd));
    }

    pub fn touch_start(&self, x: f64, y: f64) {
        self.swipe.borrow_mut().begin(x, y);
    }

    pub fn touch_move(&self) {
        self.swipe.borrow_mut().mark_moved();
    }

    pub fn touch_end(self: &Rc<Self>, x: f64, y: f64) {
        let dir: Option<Direction> = self.swipe.borrow_mut().finish(x, y);
        if let Some(dir) = dir {
            self.dispatch(|s| {
                s.steer(dir);
            });
        }
    }

    /// Container resized; returns the new surface so the canvas can follow.
    pub fn resize(self: &Rc<Self>, surface: Surface) -> Surface {
        self.surface.set(surface);
        self.dispatch(|s| s.resize(surface.grid()));
        surface
    }

    /// One animation frame: step the simulation, then paint.
    pub fn frame(self: &Rc<Self>, now: f64, canvas: &HtmlCanvasElement) {
        self.dispatch(|s| {
            s.frame(now);
        });
        self.draw(canvas);
    }

    pub fn draw(&self, canvas: &HtmlCanvasElement) {
        if !canvas.is_connected() {
            return;
        }
        let Some(mut ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };
        let surface = self.surface.get();
        let _ = ctx.set_transform(surface.dpr, 0.0, 0.0, surface.dpr, 0.0, 0.0);
        let session = self.session.borrow();
        paint(
            &mut ctx,
            &Frame {
                width: surface.width,
                height: surface.height,
                board: session.board(),
                phase: session.phase(),
            },
        );
    }

    /// Drops every outstanding timer.
    pub fn teardown(&self) {
        let mut timers = self.timers.borrow_mut();
        timers.countdown = None;
        timers.exit = None;
    }
}

fn with_shell(weak: &Weak<GameShell>, f: impl FnOnce(&Rc<GameShell>)) {
    if let Some(shell) = weak.upgrade() {
        f(&shell);
    }
}

fn navigate(intent: &NavIntent) {
    let Some(win) = web_sys::window() else {
        return;
    };
    match intent {
        NavIntent::Scroll(id) => {
            let Some(el) = win.document().and_then(|d| d.get_element_by_id(id)) else {
                log::warn!("no section #{id} to scroll to");
                return;
            };
            log::info!("scrolling to #{id}");
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        NavIntent::Open(href) => {
            log::info!("opening {href}");
            if let Err(e) =
                win.open_with_url_and_target_and_features(href, "_blank", "noopener,noreferrer")
            {
                log::warn!("could not open {href}: {e:?}");
            }
        }
    }
}

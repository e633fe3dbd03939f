//! Canvas painting. Reads the board, never changes it.

use crate::model::{Board, Cell};
use crate::state::Phase;
use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

const BG_FROM: &str = "#0a0a0a";
const BG_TO: &str = "#0f172a";
const GRID_LINE: &str = "#141826";
const BADGE_FILL: &str = "rgba(99,102,241,0.28)";
const BADGE_STROKE: &str = "rgba(99,102,241,0.6)";
const BADGE_TEXT: &str = "#e5e7eb";
const BADGE_LABEL: &str = "#a5b4fc";
const HEAD: &str = "#60a5fa";
const BODY: &str = "#1f2937";
const EYE: &str = "#e5e7eb";
const EMOJI_FONT: &str = "'Segoe UI Emoji','Noto Color Emoji','Apple Color Emoji',system-ui,sans-serif";
const UI_FONT: &str = "ui-sans-serif, system-ui";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape<'a> {
    pub fill: &'a str,
    pub stroke: Option<(&'a str, f64)>,
    /// Shadow colour and blur radius.
    pub glow: Option<(&'a str, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle<'a> {
    pub font: &'a str,
    pub color: &'a str,
    /// Canvas `textBaseline`; alignment is always centred.
    pub baseline: &'static str,
}

/// The drawing operations the game needs from a 2D surface.
pub trait Painter {
    fn gradient_rect(&mut self, r: Rect, from: &str, to: &str);
    fn fill_rect(&mut self, r: Rect, color: &str);
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64);
    fn round_rect(&mut self, r: Rect, radius: f64, shape: Shape<'_>);
    fn dot(&mut self, cx: f64, cy: f64, radius: f64, color: &str);
    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle<'_>);
}

/// Everything needed to paint one frame, in CSS pixels.
pub struct Frame<'a> {
    pub width: f64,
    pub height: f64,
    pub board: &'a Board,
    pub phase: Phase,
}

pub fn paint<P: Painter>(p: &mut P, f: &Frame<'_>) {
    let (w, h) = (f.width, f.height);
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let cols = f.board.dims.columns.max(1);
    let rows = f.board.dims.rows.max(1);
    p.gradient_rect(Rect { x: 0.0, y: 0.0, w, h }, BG_FROM, BG_TO);

    for i in 0..=cols {
        let x = (i as f64 / cols as f64 * w).floor() + 0.5;
        p.line(x, 0.0, x, h, GRID_LINE, 1.0);
    }
    for j in 0..=rows {
        let y = (j as f64 / rows as f64 * h).floor() + 0.5;
        p.line(0.0, y, w, y, GRID_LINE, 1.0);
    }

    let cell_w = w / cols as f64;
    let cell_h = h / rows as f64;
    paint_badges(p, f.board, cell_w, cell_h);
    paint_snake(p, f.board.snake.iter().copied(), cell_w, cell_h);
    paint_overlay(p, f.phase, w, h);
}

fn style<'a>(font: &'a str, color: &'a str, baseline: &'static str) -> TextStyle<'a> {
    TextStyle {
        font,
        color,
        baseline,
    }
}

fn paint_badges<P: Painter>(p: &mut P, board: &Board, cell_w: f64, cell_h: f64) {
    for b in board.badges.iter().filter(|b| !b.consumed) {
        let cx = b.x as f64 * cell_w + cell_w / 2.0;
        let cy = b.y as f64 * cell_h + cell_h / 2.0;
        let bw = (cell_w * 2.0).max(64.0);
        let bh = (cell_h * 1.1).max(36.0);
        p.round_rect(
            Rect {
                x: cx - bw / 2.0,
                y: cy - bh / 2.0,
                w: bw,
                h: bh,
            },
            (bh / 2.0).min(16.0),
            Shape {
                fill: BADGE_FILL,
                stroke: Some((BADGE_STROKE, 2.0)),
                glow: None,
            },
        );

        let icon_font = format!("{}px {}", (bh * 0.55).floor(), EMOJI_FONT);
        let code_font = format!("{}px {}", (bh * 0.4).floor(), UI_FONT);
        let label_font = format!("{}px {}", (bh * 0.3).floor().max(10.0), UI_FONT);
        p.text(&b.target.icon, cx - bw * 0.22, cy, style(&icon_font, BADGE_TEXT, "middle"));
        p.text(&b.target.code(), cx + bw * 0.2, cy, style(&code_font, BADGE_TEXT, "middle"));
        p.text(
            &b.target.label,
            cx,
            cy + bh * 0.95,
            style(&label_font, BADGE_LABEL, "middle"),
        );
    }
}

fn paint_snake<P: Painter>(
    p: &mut P,
    cells: impl Iterator<Item = Cell>,
    cell_w: f64,
    cell_h: f64,
) {
    let short = cell_w.min(cell_h);
    for (i, c) in cells.enumerate() {
        let x = c.x as f64 * cell_w + 1.0;
        let y = c.y as f64 * cell_h + 1.0;
        let rect = Rect {
            x,
            y,
            w: cell_w - 2.0,
            h: cell_h - 2.0,
        };
        if i == 0 {
            p.round_rect(
                rect,
                short * 0.28,
                Shape {
                    fill: HEAD,
                    stroke: None,
                    glow: Some((HEAD, short * 0.6)),
                },
            );
            p.dot(
                x + cell_w * 0.7,
                y + cell_h * 0.35,
                (short * 0.07).max(2.0),
                EYE,
            );
        } else {
            p.round_rect(
                rect,
                short * 0.28,
                Shape {
                    fill: BODY,
                    stroke: None,
                    glow: None,
                },
            );
        }
    }
}

fn paint_overlay<P: Painter>(p: &mut P, phase: Phase, w: f64, h: f64) {
    let full = Rect { x: 0.0, y: 0.0, w, h };
    fn white(font: &str) -> TextStyle<'_> {
        style(font, "#fff", "alphabetic")
    }
    match phase {
        Phase::NotStarted => {
            p.fill_rect(full, "rgba(0,0,0,0.50)");
            let font = format!("700 {}px {}", (w * 0.07).floor(), UI_FONT);
            p.text("Ready to Play?", w / 2.0, h / 2.0 - w * 0.06, white(&font));
        }
        Phase::Countdown(n) => {
            p.fill_rect(full, "rgba(0,0,0,0.35)");
            let font = format!("800 {}px {}", (w * 0.12).floor(), UI_FONT);
            p.text(&n.to_string(), w / 2.0, h / 2.0, white(&font));
        }
        Phase::GameOver => {
            p.fill_rect(full, "rgba(0,0,0,0.45)");
            let title = format!("bold {}px {}", (w * 0.06).floor(), UI_FONT);
            p.text("Oops!", w / 2.0, h / 2.0 - h * 0.04, white(&title));
            let hint = format!("500 {}px {}", (w * 0.028).floor(), UI_FONT);
            p.text(
                "Press R to try again",
                w / 2.0,
                h / 2.0 + h * 0.02,
                white(&hint),
            );
        }
        Phase::Running | Phase::Paused => {}
    }
}

impl Painter for CanvasRenderingContext2d {
    fn gradient_rect(&mut self, r: Rect, from: &str, to: &str) {
        let g = self.create_linear_gradient(r.x, r.y, r.x + r.w, r.y + r.h);
        let _ = g.add_color_stop(0.0, from);
        let _ = g.add_color_stop(1.0, to);
        self.set_fill_style_canvas_gradient(&g);
        CanvasRenderingContext2d::fill_rect(self, r.x, r.y, r.w, r.h);
    }

    fn fill_rect(&mut self, r: Rect, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, r.x, r.y, r.w, r.h);
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.stroke();
    }

    fn round_rect(&mut self, r: Rect, radius: f64, shape: Shape<'_>) {
        self.begin_path();
        self.move_to(r.x + radius, r.y);
        let _ = self.arc_to(r.x + r.w, r.y, r.x + r.w, r.y + r.h, radius);
        let _ = self.arc_to(r.x + r.w, r.y + r.h, r.x, r.y + r.h, radius);
        let _ = self.arc_to(r.x, r.y + r.h, r.x, r.y, radius);
        let _ = self.arc_to(r.x, r.y, r.x + r.w, r.y, radius);
        self.close_path();

        self.set_fill_style_str(shape.fill);
        if let Some((color, blur)) = shape.glow {
            self.set_shadow_color(color);
            self.set_shadow_blur(blur);
        }
        self.fill();
        self.set_shadow_blur(0.0);
        if let Some((color, width)) = shape.stroke {
            self.set_stroke_style_str(color);
            self.set_line_width(width);
            self.stroke();
        }
    }

    fn dot(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        let _ = self.arc(cx, cy, radius, 0.0, PI * 2.0);
        self.fill();
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle<'_>) {
        self.set_font(style.font);
        self.set_text_align("center");
        self.set_text_baseline(style.baseline);
        self.set_fill_style_str(style.color);
        let _ = self.fill_text(text, x, y);
    }
}

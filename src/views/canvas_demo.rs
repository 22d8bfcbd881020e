//! Canvas Demo View
//!
//! Draws an orbiting dot on a 2D canvas until the view unmounts.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const WIDTH: u32 = 480;
const HEIGHT: u32 = 320;
const FRAME_MS: u32 = 16;

#[component]
pub fn CanvasDemoView() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let running = Arc::new(AtomicBool::new(true));

    on_cleanup({
        let running = running.clone();
        move || running.store(false, Ordering::Relaxed)
    });

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        let Some(ctx) = context_2d(&canvas) else {
            log::warn!("[CANVAS] 2d context unavailable");
            return;
        };
        let running = running.clone();
        spawn_local(async move {
            while running.load(Ordering::Relaxed) {
                draw_frame(&ctx, js_sys::Date::now());
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    view! {
        <section class="canvas-demo">
            <h1>"Canvas Demo"</h1>
            <canvas node_ref=canvas_ref width={WIDTH.to_string()} height={HEIGHT.to_string()}></canvas>
        </section>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_frame(ctx: &CanvasRenderingContext2d, now_ms: f64) {
    let (w, h) = (WIDTH as f64, HEIGHT as f64);
    let angle = (now_ms / 1000.0) % 1.0 * TAU;
    let radius = h / 3.0;
    let (x, y) = (w / 2.0 + radius * angle.cos(), h / 2.0 + radius * angle.sin());

    ctx.set_fill_style_str("#1e1e2e");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#3498db");
    ctx.begin_path();
    if ctx.arc(x, y, 12.0, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}

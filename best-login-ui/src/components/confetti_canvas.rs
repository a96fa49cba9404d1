use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use best_login_common::config::ConfettiConfig;
use best_login_common::confetti::ConfettiBurst;
use best_login_common::AppConfig;
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FRAME_MS: u32 = 16;

/// Full-screen overlay firing one confetti burst after the configured delay
#[component]
pub fn ConfettiCanvas() -> impl IntoView {
    let config = expect_context::<AppConfig>().confetti;
    let show: Rc<RefCell<Option<ConfettiShow>>> = Rc::default();

    let canvas_ref = create_node_ref::<html::Canvas>();
    canvas_ref.on_load({
        let show = Rc::clone(&show);
        move |canvas| match ConfettiShow::schedule((*canvas).clone(), config) {
            Ok(scheduled) => *show.borrow_mut() = Some(scheduled),
            Err(err) => warn!(?err, "confetti unavailable"),
        }
    });

    // Leaving the page cancels the burst whether or not it started
    on_cleanup(move || {
        show.borrow_mut().take();
    });

    view! { <canvas class="confetti-canvas" aria-hidden="true" node_ref=canvas_ref></canvas> }
}

/// Pending or running animation; dropping it stops the timers and clears
/// the canvas.
struct ConfettiShow {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    start: Option<Timeout>,
    ticker: Rc<RefCell<Option<Interval>>>,
}

impl ConfettiShow {
    fn schedule(canvas: HtmlCanvasElement, config: ConfettiConfig) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let ticker = Rc::new(RefCell::new(None));
        let start = Timeout::new(config.delay_ms, {
            let canvas = canvas.clone();
            let context = context.clone();
            let ticker = Rc::clone(&ticker);
            move || {
                let burst = launch(&canvas, &config);
                debug!(particles = burst.particles().len(), "confetti launched");
                *ticker.borrow_mut() = Some(animate(context, burst, Rc::clone(&ticker)));
            }
        });

        Ok(Self {
            canvas,
            context,
            start: Some(start),
            ticker,
        })
    }
}

impl Drop for ConfettiShow {
    fn drop(&mut self) {
        self.start.take();
        self.ticker.borrow_mut().take();
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }
}

fn launch(canvas: &HtmlCanvasElement, config: &ConfettiConfig) -> ConfettiBurst {
    let (width, height) = web_sys::window()
        .map(|window| (dimension(window.inner_width()), dimension(window.inner_height())))
        .unwrap_or_else(|| (f64::from(canvas.width()), f64::from(canvas.height())));

    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    ConfettiBurst::new(config, width, height, &mut fastrand::Rng::new())
}

fn dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
}

fn animate(
    context: CanvasRenderingContext2d,
    mut burst: ConfettiBurst,
    ticker: Rc<RefCell<Option<Interval>>>,
) -> Interval {
    Interval::new(FRAME_MS, move || {
        burst.step(f64::from(FRAME_MS));
        draw(&context, &burst);

        if burst.is_finished() {
            // The interval cannot be dropped from inside its own tick
            let ticker = Rc::clone(&ticker);
            Timeout::new(0, move || {
                ticker.borrow_mut().take();
            })
            .forget();
        }
    })
}

fn draw(context: &CanvasRenderingContext2d, burst: &ConfettiBurst) {
    let (width, height) = burst.size();
    context.clear_rect(0.0, 0.0, width, height);

    for particle in burst.particles() {
        context.begin_path();
        context.set_fill_style_str(burst.color_of(particle));
        if context
            .arc(particle.x, particle.y, particle.radius, 0.0, TAU)
            .is_ok()
        {
            context.fill();
        }
    }
}

//! Circular progress ring for one macronutrient.
//!
//! DESIGN
//! ======
//! The percentage, remaining amount and caption are pure functions of the
//! props so the guard rails (no NaN, never outside 0..=100) are testable.

#[cfg(test)]
#[path = "macro_ring_test.rs"]
mod macro_ring_test;

use std::f64::consts::PI;

use leptos::prelude::*;

/// SVG radius of the ring, in view-box units.
pub const RING_RADIUS: f64 = 52.0;

fn usable_target(target: Option<f64>) -> Option<f64> {
    target.filter(|t| t.is_finite() && *t > 0.0)
}

/// `clamp(round(current / target * 100), 0, 100)`; 0 for unusable targets.
pub fn ring_percentage(current: f64, target: Option<f64>) -> u32 {
    let Some(target) = usable_target(target) else {
        return 0;
    };
    let pct = (current / target * 100.0).round();
    if !pct.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = pct.clamp(0.0, 100.0) as u32;
    pct
}

/// `max(0, target - current)`; 0 for unusable targets.
pub fn ring_remaining(current: f64, target: Option<f64>) -> f64 {
    match usable_target(target) {
        Some(target) if current.is_finite() => (target - current).max(0.0),
        Some(target) => target,
        None => 0.0,
    }
}

/// Caption like `"75 / 150g"`.
pub fn ring_label(current: f64, target: Option<f64>) -> String {
    format!("{} / {}g", round_for_display(current), round_for_display(target.unwrap_or(0.0)))
}

/// Stroke offset that leaves `pct` percent of the circumference drawn.
pub fn dash_offset(pct: u32) -> f64 {
    let circumference = 2.0 * PI * RING_RADIUS;
    circumference * (1.0 - f64::from(pct.min(100)) / 100.0)
}

fn round_for_display(value: f64) -> i64 {
    if value.is_finite() {
        #[allow(clippy::cast_possible_truncation)]
        let rounded = value.round() as i64;
        rounded
    } else {
        0
    }
}

/// Ring showing `current` against `target` grams.
#[component]
pub fn MacroRing(
    #[prop(into)] label: String,
    #[prop(into)] current: Signal<f64>,
    #[prop(into)] target: Signal<Option<f64>>,
    #[prop(into)] color: String,
) -> impl IntoView {
    let pct = move || ring_percentage(current.get(), target.get());
    let circumference = 2.0 * PI * RING_RADIUS;

    view! {
        <div class="macro-ring">
            <div class="macro-ring__dial">
                <svg class="macro-ring__svg" viewBox="0 0 120 120" aria-hidden="true">
                    <circle class="macro-ring__track" cx="60" cy="60" r=RING_RADIUS.to_string()></circle>
                    <circle
                        class="macro-ring__value"
                        cx="60"
                        cy="60"
                        r=RING_RADIUS.to_string()
                        stroke=color
                        stroke-dasharray=format!("{circumference:.2}")
                        stroke-dashoffset=move || format!("{:.2}", dash_offset(pct()))
                        transform="rotate(-90 60 60)"
                    ></circle>
                </svg>
                <div class="macro-ring__center">
                    <span class="macro-ring__pct">{move || format!("{}%", pct())}</span>
                    <span class="macro-ring__name">{label}</span>
                </div>
            </div>
            <p class="macro-ring__caption">{move || ring_label(current.get(), target.get())}</p>
            <p class="macro-ring__remaining">
                {move || format!("{:.0}g left", ring_remaining(current.get(), target.get()))}
            </p>
        </div>
    }
}

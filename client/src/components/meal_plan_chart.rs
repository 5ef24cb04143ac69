//! Grouped bar chart of carbs, protein and fat per meal.

#[cfg(test)]
#[path = "meal_plan_chart_test.rs"]
mod meal_plan_chart_test;

use leptos::prelude::*;
use schema::MealPlanEntry;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 240.0;
/// Space under the plot reserved for meal names.
pub const LABEL_BAND: f64 = 24.0;

/// Series drawn for each meal, left to right.
pub const SERIES: [(&str, &str); 3] =
    [("Carbs", "chart-bar--carbs"), ("Protein", "chart-bar--protein"), ("Fat", "chart-bar--fat")];

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealLabel {
    pub x: f64,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
    pub bars: Vec<Bar>,
    pub labels: Vec<MealLabel>,
}

/// Lay out three bars per meal in a `width` x `height` box, scaled so the
/// largest value fills the plot height. Negative or non-finite values draw
/// as empty bars.
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(meals: &[MealPlanEntry], width: f64, height: f64) -> ChartLayout {
    if meals.is_empty() {
        return ChartLayout::default();
    }
    let plot_height = (height - LABEL_BAND).max(0.0);
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let max = meals
        .iter()
        .flat_map(|m| [m.carbs, m.protein, m.fat])
        .map(clean)
        .fold(0.0_f64, f64::max);

    let group_width = width / meals.len() as f64;
    let bar_width = group_width * 0.8 / SERIES.len() as f64;

    let mut layout = ChartLayout::default();
    for (i, meal) in meals.iter().enumerate() {
        let group_x = i as f64 * group_width;
        for (j, (value, (_, class))) in [meal.carbs, meal.protein, meal.fat].into_iter().zip(SERIES).enumerate() {
            let value = clean(value);
            let bar_height = if max > 0.0 { value / max * plot_height } else { 0.0 };
            let x = group_x + group_width * 0.1 + j as f64 * bar_width;
            layout.bars.push(Bar { x, y: plot_height - bar_height, width: bar_width, height: bar_height, class, value });
        }
        layout.labels.push(MealLabel { x: group_x + group_width / 2.0, text: meal.name.clone() });
    }
    layout
}

#[component]
pub fn MealPlanChart(#[prop(into)] meals: Signal<Vec<MealPlanEntry>>) -> impl IntoView {
    let layout = Memo::new(move |_| bar_layout(&meals.get(), CHART_WIDTH, CHART_HEIGHT));

    view! {
        <div class="meal-chart">
            <svg
                class="meal-chart__svg"
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                role="img"
                aria-label="Macros per meal"
            >
                {move || {
                    layout
                        .get()
                        .bars
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect
                                    class=format!("chart-bar {}", bar.class)
                                    x=format!("{:.1}", bar.x)
                                    y=format!("{:.1}", bar.y)
                                    width=format!("{:.1}", bar.width)
                                    height=format!("{:.1}", bar.height)
                                    data-value=format!("{:.0}", bar.value)
                                ></rect>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    layout
                        .get()
                        .labels
                        .into_iter()
                        .map(|label| {
                            view! {
                                <text
                                    class="meal-chart__label"
                                    x=format!("{:.1}", label.x)
                                    y=format!("{:.1}", CHART_HEIGHT - 6.0)
                                    text-anchor="middle"
                                >
                                    {label.text}
                                </text>
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <ul class="meal-chart__legend">
                {SERIES
                    .into_iter()
                    .map(|(name, class)| {
                        view! {
                            <li>
                                <span class=format!("meal-chart__swatch {class}")></span>
                                {name}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

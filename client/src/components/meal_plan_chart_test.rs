use super::*;

fn meal(name: &str, carbs: f64, protein: f64, fat: f64) -> MealPlanEntry {
    MealPlanEntry { name: name.to_owned(), calories: 0.0, protein, carbs, fat }
}

#[test]
fn empty_plan_has_no_bars() {
    assert_eq!(bar_layout(&[], CHART_WIDTH, CHART_HEIGHT), ChartLayout::default());
}

#[test]
fn three_bars_per_meal_in_series_order() {
    let layout = bar_layout(&[meal("A", 60.0, 30.0, 10.0), meal("B", 50.0, 40.0, 20.0)], 600.0, 240.0);
    assert_eq!(layout.bars.len(), 6);
    assert_eq!(layout.labels.len(), 2);
    let classes: Vec<_> = layout.bars.iter().take(3).map(|b| b.class).collect();
    assert_eq!(classes, vec!["chart-bar--carbs", "chart-bar--protein", "chart-bar--fat"]);
}

#[test]
fn tallest_bar_fills_plot_height() {
    let layout = bar_layout(&[meal("A", 60.0, 30.0, 15.0)], 600.0, 240.0);
    let plot = 240.0 - LABEL_BAND;
    assert!((layout.bars[0].height - plot).abs() < 1e-9);
    assert!(layout.bars[0].y.abs() < 1e-9);
    assert!((layout.bars[1].height - plot / 2.0).abs() < 1e-9);
    assert!((layout.bars[2].height - plot / 4.0).abs() < 1e-9);
}

#[test]
fn bars_stay_inside_width() {
    let meals: Vec<_> = (0..5).map(|i| meal(&format!("M{i}"), 10.0, 20.0, 30.0)).collect();
    let layout = bar_layout(&meals, 600.0, 240.0);
    for bar in &layout.bars {
        assert!(bar.x >= 0.0 && bar.x + bar.width <= 600.0 + 1e-9);
    }
}

#[test]
fn bad_values_draw_empty() {
    let layout = bar_layout(&[meal("A", f64::NAN, -5.0, 0.0)], 600.0, 240.0);
    assert!(layout.bars.iter().all(|b| b.height.abs() < f64::EPSILON));
    assert!(layout.bars.iter().all(|b| b.y.is_finite()));
}

#[test]
fn labels_center_on_groups() {
    let layout = bar_layout(&[meal("A", 1.0, 1.0, 1.0), meal("B", 1.0, 1.0, 1.0)], 600.0, 240.0);
    assert!((layout.labels[0].x - 150.0).abs() < 1e-9);
    assert!((layout.labels[1].x - 450.0).abs() < 1e-9);
    assert_eq!(layout.labels[1].text, "B");
}

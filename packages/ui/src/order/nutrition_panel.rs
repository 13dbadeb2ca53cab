use api::{NutritionGoal, NutritionTotals};
use dioxus::prelude::*;

/// Percent-of-goal bars next to the wizard. Pure derived state: recomputed
/// from the running totals on every selection change.
#[component]
pub fn NutritionPanel(totals: NutritionTotals, goal: NutritionGoal) -> Element {
    let pct = totals.percent_of(&goal);

    rsx! {
        aside {
            class: "nutrition-panel",
            h3 { "Nutrition" }
            MacroBar { label: "Calories", value: totals.calories, target: goal.calories, percent: pct.calories, unit: "kcal" }
            MacroBar { label: "Protein", value: totals.protein, target: goal.protein, percent: pct.protein, unit: "g" }
            MacroBar { label: "Carbs", value: totals.carbs, target: goal.carbs, percent: pct.carbs, unit: "g" }
            MacroBar { label: "Fat", value: totals.fat, target: goal.fat, percent: pct.fat, unit: "g" }
        }
    }
}

#[component]
fn MacroBar(label: String, value: f64, target: f64, percent: f64, unit: String) -> Element {
    let full = percent >= 100.0;

    rsx! {
        div {
            class: "macro-bar",
            div {
                class: "macro-bar-head",
                span { "{label}" }
                span { class: "macro-bar-figures", "{value:.0} / {target:.0} {unit}" }
            }
            div {
                class: "macro-bar-track",
                div {
                    class: if full { "macro-bar-fill macro-bar-full" } else { "macro-bar-fill" },
                    style: "width: {percent}%",
                }
            }
        }
    }
}

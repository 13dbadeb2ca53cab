//! Individual wizard stages. Each is a controlled component: it receives
//! the accumulated draft and emits deltas, never owning state of its own.

use api::{GoalCode, Ingredient, NutritionGoal, TemplateStep};
use dioxus::prelude::*;

use super::draft::BowlDraft;
use crate::components::{Button, ButtonVariant};

/// Goal selection cards.
#[component]
pub fn GoalStep(selected: GoalCode, onselect: EventHandler<GoalCode>) -> Element {
    rsx! {
        div {
            class: "goal-step",
            h2 { "What's your goal?" }
            p { class: "step-hint", "We'll track your bowl against per-meal targets." }
            div {
                class: "goal-cards",
                for goal in GoalCode::ALL {
                    GoalCard {
                        goal: goal,
                        selected: goal == selected,
                        onselect: move |_| onselect.call(goal),
                    }
                }
            }
        }
    }
}

#[component]
fn GoalCard(goal: GoalCode, selected: bool, onselect: EventHandler<()>) -> Element {
    let targets = NutritionGoal::for_goal(goal);

    rsx! {
        button {
            class: if selected { "goal-card goal-card-selected" } else { "goal-card" },
            onclick: move |_| onselect.call(()),
            span { class: "goal-card-title", "{goal.label()}" }
            span { class: "goal-card-detail", "{targets.calories:.0} kcal · {targets.protein:.0}g protein" }
        }
    }
}

/// One ingredient-selection step: a grid of the step's category with
/// quantity controls per item.
#[component]
pub fn SelectStep(
    step: TemplateStep,
    ingredients: Vec<Ingredient>,
    draft: BowlDraft,
    onchange: EventHandler<(Ingredient, u32)>,
) -> Element {
    let picked = draft.selected_in_category(&step.category_id);

    rsx! {
        div {
            class: "select-step",
            h2 { "{step.label}" }
            p {
                class: "step-hint",
                if step.min_selections == step.max_selections {
                    "Pick {step.min_selections}"
                } else {
                    "Pick {step.min_selections} to {step.max_selections}"
                }
                " · {picked} selected"
            }

            if ingredients.is_empty() {
                p { class: "empty-state", "Nothing available in this category right now." }
            }

            div {
                class: "ingredient-grid",
                for ingredient in ingredients.iter().filter(|i| i.available) {
                    IngredientCard {
                        key: "{ingredient.id}",
                        ingredient: ingredient.clone(),
                        quantity: draft.quantity_of(&ingredient.id),
                        onchange: onchange,
                    }
                }
            }
        }
    }
}

#[component]
fn IngredientCard(
    ingredient: Ingredient,
    quantity: u32,
    onchange: EventHandler<(Ingredient, u32)>,
) -> Element {
    let inc = {
        let ingredient = ingredient.clone();
        move |_| onchange.call((ingredient.clone(), quantity + 1))
    };
    let dec = {
        let ingredient = ingredient.clone();
        move |_| onchange.call((ingredient.clone(), quantity.saturating_sub(1)))
    };

    rsx! {
        div {
            class: if quantity > 0 { "ingredient-card ingredient-card-selected" } else { "ingredient-card" },
            if let Some(url) = &ingredient.image_url {
                img { class: "ingredient-image", src: "{url}", alt: "{ingredient.name}" }
            }
            div {
                class: "ingredient-body",
                span { class: "ingredient-name", "{ingredient.name}" }
                span { class: "ingredient-meta", "${ingredient.price:.2} / {ingredient.unit} · {ingredient.nutrition.calories:.0} kcal" }
            }
            div {
                class: "quantity-controls",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: quantity == 0,
                    onclick: dec,
                    "−"
                }
                span { class: "quantity", "{quantity}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: inc,
                    "+"
                }
            }
        }
    }
}

/// Review stage: line items, price, and the final confirm button.
#[component]
pub fn ReviewStep(draft: BowlDraft, onconfirm: EventHandler<()>) -> Element {
    let price = draft.price();
    let ready = draft.all_steps_satisfied();

    rsx! {
        div {
            class: "review-step",
            h2 { "Review your bowl" }
            ul {
                class: "review-lines",
                li {
                    class: "review-line",
                    span { "{draft.template.name} (base)" }
                    span { "${draft.template.base_price:.2}" }
                }
                for (ingredient, quantity) in draft.selections.iter() {
                    li {
                        key: "{ingredient.id}",
                        class: "review-line",
                        span { "{ingredient.name} × {quantity}" }
                        span { {format!("${:.2}", ingredient.price * *quantity as f64)} }
                    }
                }
            }
            div {
                class: "review-total",
                span { "Total" }
                span { "${price:.2}" }
            }
            if !ready {
                p { class: "form-error", "Some steps still need a selection." }
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: !ready,
                onclick: move |_| onconfirm.call(()),
                "Add bowl to order"
            }
        }
    }
}

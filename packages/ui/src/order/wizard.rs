use api::{GoalCode, Ingredient, NewBowl};
use dioxus::prelude::*;

use super::draft::{BowlDraft, WizardStage};
use super::nutrition_panel::NutritionPanel;
use super::steps::{GoalStep, ReviewStep, SelectStep};
use crate::components::{Button, ButtonVariant};

/// The whole wizard for one bowl: goal, one selection step per template
/// step, then review. Emits the finished bowl through `on_complete`.
#[component]
pub fn BowlBuilder(
    template: api::BowlTemplate,
    initial_goal: Option<GoalCode>,
    on_complete: EventHandler<NewBowl>,
) -> Element {
    let step_count = template.steps.len();
    let mut draft = use_signal({
        let template = template.clone();
        move || BowlDraft::new(template.clone(), initial_goal.unwrap_or(GoalCode::Maintain))
    });
    let mut stage = use_signal(|| WizardStage::Goal);

    // Ingredients for the active selection step. Re-runs whenever the stage
    // signal changes; a stale response for a previous step resolves into a
    // resource that has already been dropped.
    let ingredients = use_resource(move || async move {
        let WizardStage::Select(index) = stage() else {
            return Vec::new();
        };
        let Some(step) = draft().template.steps.get(index).cloned() else {
            return Vec::new();
        };
        match api::services::ingredients::ingredients_by_category(step.category_id.clone()).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("failed to load ingredients: {e}");
                Vec::new()
            }
        }
    });

    let current_satisfied = match stage() {
        WizardStage::Select(i) => draft().step_satisfied(i),
        _ => true,
    };

    let onchange = move |(ingredient, quantity): (Ingredient, u32)| {
        draft.write().set_quantity(&ingredient, quantity);
    };

    rsx! {
        div {
            class: "bowl-builder",

            div {
                class: "wizard-main",

                WizardHeader { stage: stage(), template: draft().template.clone() }

                match stage() {
                    WizardStage::Goal => rsx! {
                        GoalStep {
                            selected: draft().goal,
                            onselect: move |goal| draft.write().goal = goal,
                        }
                    },
                    WizardStage::Select(index) => rsx! {
                        SelectStep {
                            step: draft().template.steps[index].clone(),
                            ingredients: ingredients().unwrap_or_default(),
                            draft: draft(),
                            onchange: onchange,
                        }
                    },
                    WizardStage::Review => rsx! {
                        ReviewStep {
                            draft: draft(),
                            onconfirm: move |_| on_complete.call(draft().to_new_bowl()),
                        }
                    },
                }

                div {
                    class: "wizard-nav",
                    if stage() != WizardStage::Goal {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| stage.set(stage().back(step_count)),
                            "Back"
                        }
                    }
                    if stage() != WizardStage::Review {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: !current_satisfied,
                            onclick: move |_| stage.set(stage().next(step_count)),
                            "Next"
                        }
                    }
                }
            }

            if stage() != WizardStage::Goal {
                NutritionPanel {
                    totals: draft().totals(),
                    goal: draft().goal_targets(),
                }
            }
        }
    }
}

#[component]
fn WizardHeader(stage: WizardStage, template: api::BowlTemplate) -> Element {
    let step_count = template.steps.len();
    let position = match stage {
        WizardStage::Goal => 0,
        WizardStage::Select(i) => i + 1,
        WizardStage::Review => step_count + 1,
    };
    let total = step_count + 2;

    rsx! {
        header {
            class: "wizard-header",
            h1 { "{template.name}" }
            span { class: "wizard-progress", "Step {position + 1} of {total}" }
        }
    }
}

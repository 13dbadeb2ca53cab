//! The bowl-building wizard: goal selection, one ingredient step per
//! template step, then review/submit, with a live nutrition panel alongside.

mod draft;
mod nutrition_panel;
mod steps;
mod wizard;

pub use draft::{BowlDraft, WizardStage};
pub use nutrition_panel::NutritionPanel;
pub use wizard::BowlBuilder;

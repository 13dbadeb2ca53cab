//! Wizard state: the linear stage machine and the accumulating bowl draft.

use api::{
    BowlItem, BowlTemplate, GoalCode, Ingredient, NewBowl, NutritionGoal, NutritionTotals,
};

/// Where the wizard currently is. Stages advance linearly; `Select(i)`
/// indexes into the template's ordered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    Goal,
    Select(usize),
    Review,
}

impl WizardStage {
    /// Advance one stage. `step_count` is the number of template steps.
    pub fn next(self, step_count: usize) -> Self {
        match self {
            WizardStage::Goal if step_count == 0 => WizardStage::Review,
            WizardStage::Goal => WizardStage::Select(0),
            WizardStage::Select(i) if i + 1 < step_count => WizardStage::Select(i + 1),
            WizardStage::Select(_) => WizardStage::Review,
            WizardStage::Review => WizardStage::Review,
        }
    }

    /// Step back one stage.
    pub fn back(self, step_count: usize) -> Self {
        match self {
            WizardStage::Goal => WizardStage::Goal,
            WizardStage::Select(0) => WizardStage::Goal,
            WizardStage::Select(i) => WizardStage::Select(i - 1),
            WizardStage::Review if step_count == 0 => WizardStage::Goal,
            WizardStage::Review => WizardStage::Select(step_count - 1),
        }
    }
}

/// The accumulating selection across the wizard. Each step emits deltas via
/// [`BowlDraft::set_quantity`]; everything else is derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct BowlDraft {
    pub template: BowlTemplate,
    pub goal: GoalCode,
    /// Selected ingredients with quantities, in selection order.
    pub selections: Vec<(Ingredient, u32)>,
}

impl BowlDraft {
    pub fn new(template: BowlTemplate, goal: GoalCode) -> Self {
        Self {
            template,
            goal,
            selections: Vec::new(),
        }
    }

    pub fn quantity_of(&self, ingredient_id: &str) -> u32 {
        self.selections
            .iter()
            .find(|(i, _)| i.id == ingredient_id)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }

    /// Set an ingredient's quantity; zero removes it.
    pub fn set_quantity(&mut self, ingredient: &Ingredient, quantity: u32) {
        match self.selections.iter_mut().find(|(i, _)| i.id == ingredient.id) {
            Some((_, q)) if quantity > 0 => *q = quantity,
            Some(_) => self.selections.retain(|(i, _)| i.id != ingredient.id),
            None if quantity > 0 => self.selections.push((ingredient.clone(), quantity)),
            None => {}
        }
    }

    /// Distinct selections within one category (template steps constrain
    /// selection count, not quantity).
    pub fn selected_in_category(&self, category_id: &str) -> usize {
        self.selections
            .iter()
            .filter(|(i, _)| i.category_id == category_id)
            .count()
    }

    /// Whether the template step at `index` has a valid selection count.
    pub fn step_satisfied(&self, index: usize) -> bool {
        let Some(step) = self.template.steps.get(index) else {
            return true;
        };
        let picked = self.selected_in_category(&step.category_id) as u32;
        picked >= step.min_selections && picked <= step.max_selections
    }

    pub fn all_steps_satisfied(&self) -> bool {
        (0..self.template.steps.len()).all(|i| self.step_satisfied(i))
    }

    /// Running macro totals across the whole draft. Pure derived state, the
    /// nutrition panel never fetches anything of its own.
    pub fn totals(&self) -> NutritionTotals {
        let mut totals = NutritionTotals::default();
        for (ingredient, quantity) in &self.selections {
            totals.add(&ingredient.nutrition, *quantity);
        }
        totals
    }

    pub fn goal_targets(&self) -> NutritionGoal {
        NutritionGoal::for_goal(self.goal)
    }

    /// Price: template base plus ingredient lines.
    pub fn price(&self) -> f64 {
        self.template.base_price
            + self
                .selections
                .iter()
                .map(|(i, q)| i.price * *q as f64)
                .sum::<f64>()
    }

    /// Submission payload for this bowl.
    pub fn to_new_bowl(&self) -> NewBowl {
        NewBowl {
            template_id: self.template.id.clone(),
            items: self
                .selections
                .iter()
                .map(|(i, q)| BowlItem {
                    ingredient_id: i.id.clone(),
                    ingredient_name: Some(i.name.clone()),
                    quantity: *q,
                    unit_price: i.price,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{NutritionFacts, TemplateStep};

    fn template() -> BowlTemplate {
        BowlTemplate {
            id: "t1".into(),
            name: "Classic".into(),
            description: None,
            base_price: 5.0,
            steps: vec![
                TemplateStep {
                    id: "s1".into(),
                    label: "Pick your starch".into(),
                    category_id: "starch".into(),
                    position: 0,
                    min_selections: 1,
                    max_selections: 1,
                },
                TemplateStep {
                    id: "s2".into(),
                    label: "Pick your protein".into(),
                    category_id: "protein".into(),
                    position: 1,
                    min_selections: 1,
                    max_selections: 2,
                },
            ],
        }
    }

    fn ingredient(id: &str, category: &str, price: f64, calories: f64) -> Ingredient {
        Ingredient {
            id: id.into(),
            name: id.into(),
            unit: "g".into(),
            price,
            category_id: category.into(),
            image_url: None,
            image_public_id: None,
            nutrition: NutritionFacts {
                calories,
                protein: 10.0,
                carbs: 5.0,
                fat: 2.0,
            },
            available: true,
        }
    }

    #[test]
    fn test_stage_walks_forward_through_steps() {
        let stage = WizardStage::Goal;
        let stage = stage.next(2);
        assert_eq!(stage, WizardStage::Select(0));
        let stage = stage.next(2);
        assert_eq!(stage, WizardStage::Select(1));
        let stage = stage.next(2);
        assert_eq!(stage, WizardStage::Review);
        assert_eq!(stage.next(2), WizardStage::Review);
    }

    #[test]
    fn test_stage_back_from_first_step_is_goal() {
        assert_eq!(WizardStage::Select(0).back(2), WizardStage::Goal);
        assert_eq!(WizardStage::Select(1).back(2), WizardStage::Select(0));
        assert_eq!(WizardStage::Review.back(2), WizardStage::Select(1));
        assert_eq!(WizardStage::Goal.back(2), WizardStage::Goal);
    }

    #[test]
    fn test_stage_skips_selection_for_empty_template() {
        assert_eq!(WizardStage::Goal.next(0), WizardStage::Review);
        assert_eq!(WizardStage::Review.back(0), WizardStage::Goal);
    }

    #[test]
    fn test_set_quantity_adds_updates_removes() {
        let mut draft = BowlDraft::new(template(), GoalCode::Maintain);
        let rice = ingredient("rice", "starch", 1.5, 200.0);

        draft.set_quantity(&rice, 1);
        assert_eq!(draft.quantity_of("rice"), 1);
        draft.set_quantity(&rice, 3);
        assert_eq!(draft.quantity_of("rice"), 3);
        draft.set_quantity(&rice, 0);
        assert_eq!(draft.quantity_of("rice"), 0);
        assert!(draft.selections.is_empty());
    }

    #[test]
    fn test_step_satisfaction_tracks_selection_counts() {
        let mut draft = BowlDraft::new(template(), GoalCode::Maintain);
        assert!(!draft.step_satisfied(0));

        draft.set_quantity(&ingredient("rice", "starch", 1.5, 200.0), 1);
        assert!(draft.step_satisfied(0));
        assert!(!draft.all_steps_satisfied());

        draft.set_quantity(&ingredient("tofu", "protein", 2.0, 120.0), 1);
        draft.set_quantity(&ingredient("chicken", "protein", 3.0, 160.0), 1);
        assert!(draft.all_steps_satisfied());

        // A third protein exceeds max_selections.
        draft.set_quantity(&ingredient("beef", "protein", 4.0, 220.0), 1);
        assert!(!draft.step_satisfied(1));
    }

    #[test]
    fn test_totals_and_price_accumulate() {
        let mut draft = BowlDraft::new(template(), GoalCode::Maintain);
        draft.set_quantity(&ingredient("rice", "starch", 1.5, 200.0), 2);
        draft.set_quantity(&ingredient("tofu", "protein", 2.0, 120.0), 1);

        let totals = draft.totals();
        assert_eq!(totals.calories, 520.0);
        assert_eq!(totals.protein, 30.0);
        assert_eq!(draft.price(), 5.0 + 3.0 + 2.0);
    }

    #[test]
    fn test_to_new_bowl_carries_lines() {
        let mut draft = BowlDraft::new(template(), GoalCode::GainMuscle);
        draft.set_quantity(&ingredient("rice", "starch", 1.5, 200.0), 2);

        let bowl = draft.to_new_bowl();
        assert_eq!(bowl.template_id, "t1");
        assert_eq!(bowl.items.len(), 1);
        assert_eq!(bowl.items[0].quantity, 2);
        assert_eq!(bowl.items[0].unit_price, 1.5);
    }
}

//! Nutrition facts, goals, and the running tally behind the wizard's
//! progress panel. Pure data and arithmetic; the backend owns the actual
//! nutrition computation for submitted orders.

use serde::{Deserialize, Serialize};

/// The dietary goal a customer picked during onboarding or in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalCode {
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl GoalCode {
    pub fn label(&self) -> &'static str {
        match self {
            GoalCode::LoseWeight => "Lose weight",
            GoalCode::Maintain => "Maintain",
            GoalCode::GainMuscle => "Gain muscle",
        }
    }

    pub const ALL: [GoalCode; 3] = [GoalCode::LoseWeight, GoalCode::Maintain, GoalCode::GainMuscle];
}

/// Per-serving macros for an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Per-meal macro targets for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoal {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionGoal {
    /// Default per-meal targets per goal; the backend recommendation engine
    /// may override these, this table is only the display fallback.
    pub fn for_goal(goal: GoalCode) -> Self {
        match goal {
            GoalCode::LoseWeight => Self {
                calories: 500.0,
                protein: 35.0,
                carbs: 45.0,
                fat: 15.0,
            },
            GoalCode::Maintain => Self {
                calories: 650.0,
                protein: 40.0,
                carbs: 65.0,
                fat: 20.0,
            },
            GoalCode::GainMuscle => Self {
                calories: 800.0,
                protein: 55.0,
                carbs: 80.0,
                fat: 25.0,
            },
        }
    }
}

/// Running macro totals across a draft bowl.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn add(&mut self, facts: &NutritionFacts, quantity: u32) {
        let q = quantity as f64;
        self.calories += facts.calories * q;
        self.protein += facts.protein * q;
        self.carbs += facts.carbs * q;
        self.fat += facts.fat * q;
    }

    /// Percent-of-goal per macro, each clamped to 100 once the accumulated
    /// value meets or exceeds its target.
    pub fn percent_of(&self, goal: &NutritionGoal) -> NutritionPercent {
        NutritionPercent {
            calories: percent(self.calories, goal.calories),
            protein: percent(self.protein, goal.protein),
            carbs: percent(self.carbs, goal.carbs),
            fat: percent(self.fat, goal.fat),
        }
    }
}

/// Progress-bar widths, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionPercent {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

fn percent(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> NutritionGoal {
        NutritionGoal {
            calories: 500.0,
            protein: 40.0,
            carbs: 50.0,
            fat: 20.0,
        }
    }

    #[test]
    fn test_percent_below_target() {
        let totals = NutritionTotals {
            calories: 250.0,
            protein: 10.0,
            carbs: 25.0,
            fat: 5.0,
        };
        let pct = totals.percent_of(&goal());
        assert_eq!(pct.calories, 50.0);
        assert_eq!(pct.protein, 25.0);
        assert_eq!(pct.carbs, 50.0);
        assert_eq!(pct.fat, 25.0);
    }

    #[test]
    fn test_percent_clamps_at_100_per_macro() {
        // Protein over target, everything else under: only protein clamps.
        let totals = NutritionTotals {
            calories: 400.0,
            protein: 80.0,
            carbs: 10.0,
            fat: 30.0,
        };
        let pct = totals.percent_of(&goal());
        assert_eq!(pct.calories, 80.0);
        assert_eq!(pct.protein, 100.0);
        assert_eq!(pct.carbs, 20.0);
        assert_eq!(pct.fat, 100.0);
    }

    #[test]
    fn test_percent_at_exact_target_is_100() {
        let totals = NutritionTotals {
            calories: 500.0,
            protein: 40.0,
            carbs: 50.0,
            fat: 20.0,
        };
        let pct = totals.percent_of(&goal());
        assert_eq!(pct.calories, 100.0);
        assert_eq!(pct.protein, 100.0);
    }

    #[test]
    fn test_zero_target_yields_zero() {
        let totals = NutritionTotals {
            calories: 100.0,
            ..Default::default()
        };
        let zero = NutritionGoal {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        };
        assert_eq!(totals.percent_of(&zero).calories, 0.0);
    }

    #[test]
    fn test_add_scales_by_quantity() {
        let mut totals = NutritionTotals::default();
        let facts = NutritionFacts {
            calories: 120.0,
            protein: 8.0,
            carbs: 14.0,
            fat: 3.0,
        };
        totals.add(&facts, 2);
        assert_eq!(totals.calories, 240.0);
        assert_eq!(totals.protein, 16.0);
        totals.add(&facts, 1);
        assert_eq!(totals.carbs, 42.0);
    }
}

use crate::config::settings::ScoringSettings;
use crate::models::matches::Score;

/// Point awards per prediction. Exact score beats correct outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub exact_points: u32,
    pub result_points: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            exact_points: 5,
            result_points: 3,
        }
    }
}

impl From<ScoringSettings> for ScoringRules {
    fn from(settings: ScoringSettings) -> Self {
        Self {
            exact_points: settings.exact_points,
            result_points: settings.result_points,
        }
    }
}

/// Points for one prediction against the final result. Exact score pays
/// `exact_points`; matching outcome (winner/loser/draw, i.e. equal three-way
/// sign of the goal difference) pays `result_points`; anything else pays 0.
pub fn score_prediction(prediction: Score, result: Score, rules: ScoringRules) -> u32 {
    if prediction == result {
        return rules.exact_points;
    }
    if prediction.outcome_sign() == result.outcome_sign() {
        rules.result_points
    } else {
        0
    }
}

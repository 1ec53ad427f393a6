//! Pre-match goal model. Expected goals are blended from each side's attacking record and the
//! opponent's defensive record; the scoreline distribution is the product of two independent
//! Poisson distributions truncated at [`MAX_GOALS`] per side.

use serde::{Deserialize, Serialize};

use crate::domain::{GoalAverages, Score, Side};
use crate::factorial::Lookup;
use crate::linear::Matrix;
use crate::scoregrid;
use crate::scoregrid::Outcome;

/// Highest goal count modelled for either side.
pub const MAX_GOALS: u8 = 8;

/// Number of ranked scorelines reported.
pub const TOP_SCORES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbableScore {
    pub score: Score,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoissonPrediction {
    pub expected_goals_home: f64,
    pub expected_goals_away: f64,
    pub prob_home_win: f64,
    pub prob_draw: f64,
    pub prob_away_win: f64,
    pub prob_over_2_5: f64,
    pub prob_btts: f64,
    pub most_probable_scores: Vec<ProbableScore>,
}

/// Predicts from home goals for/against and away goals for/against.
pub fn predict(
    home_goals_for: f64,
    home_goals_against: f64,
    away_goals_for: f64,
    away_goals_against: f64,
) -> PoissonPrediction {
    let home_rate = (home_goals_for + away_goals_against) / 2.0;
    let away_rate = (away_goals_for + home_goals_against) / 2.0;

    let dim = MAX_GOALS as usize + 1;
    let mut grid = Matrix::allocate(dim, dim);
    scoregrid::from_univariate_poisson(home_rate, away_rate, &Lookup::default(), &mut grid);

    let mut scores = (0..=MAX_GOALS)
        .flat_map(|home| (0..=MAX_GOALS).map(move |away| Score::new(home, away)))
        .map(|score| ProbableScore {
            score,
            probability: Outcome::CorrectScore(score).gather(&grid),
        })
        .collect::<Vec<_>>();
    // stable, so equiprobable scorelines keep their grid order
    scores.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    scores.truncate(TOP_SCORES);

    PoissonPrediction {
        expected_goals_home: home_rate,
        expected_goals_away: away_rate,
        prob_home_win: Outcome::Win(Side::Home).gather(&grid),
        prob_draw: Outcome::Draw.gather(&grid),
        prob_away_win: Outcome::Win(Side::Away).gather(&grid),
        prob_over_2_5: Outcome::GoalsOver(2).gather(&grid),
        prob_btts: Outcome::BothTeamsToScore.gather(&grid),
        most_probable_scores: scores,
    }
}

/// As [`predict`], taking already-coerced averages.
pub fn predict_from(averages: &GoalAverages) -> PoissonPrediction {
    predict(
        averages.home_goals_for,
        averages.home_goals_against,
        averages.away_goals_for,
        averages.away_goals_against,
    )
}

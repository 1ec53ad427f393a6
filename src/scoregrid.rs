//! The joint distribution of full-time scores, held as a matrix indexed by `(home goals, away goals)`.

use crate::domain::{Score, Side};
use crate::factorial::Factorial;
use crate::linear::Matrix;
use crate::poisson;

/// Populates `scoregrid` with the product of two independent Poisson distributions. Goal counts
/// beyond the grid's bounds are not modelled, so the grid's mass may fall short of 1.
pub fn from_univariate_poisson(
    home_rate: f64,
    away_rate: f64,
    factorial: &impl Factorial,
    scoregrid: &mut Matrix,
) {
    let home_probs = (0..scoregrid.rows())
        .map(|goals| poisson::univariate(goals as u8, home_rate, factorial))
        .collect::<Vec<_>>();
    let away_probs = (0..scoregrid.cols())
        .map(|goals| poisson::univariate(goals as u8, away_rate, factorial))
        .collect::<Vec<_>>();
    for (home_goals, &home_prob) in home_probs.iter().enumerate() {
        for (away_goals, &away_prob) in away_probs.iter().enumerate() {
            scoregrid[(home_goals, away_goals)] = home_prob * away_prob;
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
    GoalsOver(u8),
    BothTeamsToScore,
    CorrectScore(Score),
}
impl Outcome {
    pub fn gather(&self, scoregrid: &Matrix) -> f64 {
        match self {
            Outcome::Win(side) => Self::gather_win(side, scoregrid),
            Outcome::Draw => Self::gather_draw(scoregrid),
            Outcome::GoalsOver(goals) => Self::gather_goals_over(*goals, scoregrid),
            Outcome::BothTeamsToScore => Self::gather_both_teams_to_score(scoregrid),
            Outcome::CorrectScore(score) => Self::gather_correct_score(score, scoregrid),
        }
    }

    fn gather_win(side: &Side, scoregrid: &Matrix) -> f64 {
        let mut prob = 0.0;
        match side {
            Side::Home => {
                for row in 1..scoregrid.rows() {
                    for col in 0..usize::min(row, scoregrid.cols()) {
                        prob += scoregrid[(row, col)];
                    }
                }
            }
            Side::Away => {
                for row in 0..scoregrid.rows() {
                    for col in (row + 1)..scoregrid.cols() {
                        prob += scoregrid[(row, col)];
                    }
                }
            }
        }
        prob
    }

    fn gather_draw(scoregrid: &Matrix) -> f64 {
        let mut prob = 0.0;
        for index in 0..usize::min(scoregrid.rows(), scoregrid.cols()) {
            prob += scoregrid[(index, index)];
        }
        prob
    }

    /// Strictly more than `goals` in total; `GoalsOver(2)` is the over-2.5 market.
    fn gather_goals_over(goals: u8, scoregrid: &Matrix) -> f64 {
        let goals = goals as usize;
        scoregrid
            .cells()
            .filter(|&(row, col, _)| row + col > goals)
            .map(|(_, _, prob)| prob)
            .sum()
    }

    fn gather_both_teams_to_score(scoregrid: &Matrix) -> f64 {
        scoregrid
            .cells()
            .filter(|&(row, col, _)| row > 0 && col > 0)
            .map(|(_, _, prob)| prob)
            .sum()
    }

    fn gather_correct_score(score: &Score, scoregrid: &Matrix) -> f64 {
        scoregrid[(score.home as usize, score.away as usize)]
    }
}

#[cfg(test)]
mod tests;

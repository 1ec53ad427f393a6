use assert_float_eq::*;

use super::*;
use crate::factorial::Lookup;

fn create_test_4x4_scoregrid() -> Matrix {
    let mut scoregrid = Matrix::allocate(4, 4);
    let rows = [
        [0.04, 0.03, 0.02, 0.01],
        [0.08, 0.06, 0.04, 0.02],
        [0.12, 0.09, 0.06, 0.03],
        [0.16, 0.12, 0.08, 0.04],
    ];
    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            scoregrid[(row, col)] = value;
        }
    }
    scoregrid
}

fn total_mass(scoregrid: &Matrix) -> f64 {
    scoregrid.cells().map(|(_, _, prob)| prob).sum()
}

#[test]
pub fn outcome_win_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.65, Outcome::Win(Side::Home).gather(&scoregrid), 1e-12);
    assert_float_absolute_eq!(0.15, Outcome::Win(Side::Away).gather(&scoregrid), 1e-12);
}

#[test]
pub fn outcome_draw_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.2, Outcome::Draw.gather(&scoregrid), 1e-12);
}

#[test]
pub fn outcome_goals_over_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.65, Outcome::GoalsOver(2).gather(&scoregrid), 1e-12);
    assert_float_absolute_eq!(0.04, Outcome::GoalsOver(5).gather(&scoregrid), 1e-12);
}

#[test]
pub fn outcome_both_teams_to_score_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    // everything outside the first row and the first column
    assert_float_absolute_eq!(0.54, Outcome::BothTeamsToScore.gather(&scoregrid), 1e-12);
}

#[test]
pub fn outcome_correct_score_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_eq!(
        0.04,
        Outcome::CorrectScore(Score::new(0, 0)).gather(&scoregrid)
    );
    assert_eq!(
        0.08,
        Outcome::CorrectScore(Score::new(3, 2)).gather(&scoregrid)
    );
}

#[test]
pub fn univariate_poisson_grid() {
    let mut scoregrid = Matrix::allocate(9, 9);
    from_univariate_poisson(1.5, 1.0, &Lookup::default(), &mut scoregrid);
    let mass = total_mass(&scoregrid);
    assert!(mass <= 1.0);
    assert_float_absolute_eq!(1.0, mass, 1e-3);
    // P(0) for each rate, multiplied
    assert_float_relative_eq!(
        f64::exp(-1.5) * f64::exp(-1.0),
        scoregrid[(0, 0)],
        1e-12
    );

    let h2h = Outcome::Win(Side::Home).gather(&scoregrid)
        + Outcome::Draw.gather(&scoregrid)
        + Outcome::Win(Side::Away).gather(&scoregrid);
    assert_float_absolute_eq!(mass, h2h, 1e-12);
}

#[test]
pub fn grid_mass_approaches_one_for_small_rates() {
    let mut scoregrid = Matrix::allocate(9, 9);
    from_univariate_poisson(0.2, 0.1, &Lookup::default(), &mut scoregrid);
    assert_float_absolute_eq!(1.0, total_mass(&scoregrid), 1e-10);
}

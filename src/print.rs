//! Console tables for odds, predictions and live analysis.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::domain::PreMatchOdds;
use crate::live::LiveAnalysis;
use crate::predictor::PoissonPrediction;

pub fn tabulate_probs(odds: &PreMatchOdds) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Price".into(), "Probability".into()],
        ));
    let probs = odds.probs.map(|probs| [probs.home, probs.draw, probs.away]);
    for (index, (outcome, price)) in [("Home", odds.home), ("Draw", odds.draw), ("Away", odds.away)]
        .into_iter()
        .enumerate()
    {
        let prob = probs
            .map(|probs| format!("{:.1}%", probs[index] * 100.0))
            .unwrap_or_else(|| "-".into());
        table.push_row(Row::new(
            Styles::default(),
            vec![outcome.into(), format!("{price:.2}").into(), prob.into()],
        ));
    }
    if let Some(probs) = odds.probs {
        table.push_row(Row::new(
            Styles::default(),
            vec!["Margin".into(), "".into(), format!("{:.2}%", probs.margin).into()],
        ));
    }
    table
}

pub fn tabulate_prediction(prediction: &PoissonPrediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Market".into(), "Value".into()],
        ));
    let rows = [
        ("xG home", format!("{:.2}", prediction.expected_goals_home)),
        ("xG away", format!("{:.2}", prediction.expected_goals_away)),
        ("Home win", percent(prediction.prob_home_win)),
        ("Draw", percent(prediction.prob_draw)),
        ("Away win", percent(prediction.prob_away_win)),
        ("Over 2.5", percent(prediction.prob_over_2_5)),
        ("BTTS", percent(prediction.prob_btts)),
    ];
    for (market, value) in rows {
        table.push_row(Row::new(Styles::default(), vec![market.into(), value.into()]));
    }
    for probable in &prediction.most_probable_scores {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("Score {}", probable.score).into(),
                percent(probable.probability).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_analysis(analysis: &LiveAnalysis) -> Table {
    let dominance = &analysis.dominance;
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["".into(), "Home".into(), "Away".into()],
        ));
    let rows = [
        ("Intensity", format!("{:.2}", dominance.home), format!("{:.2}", dominance.away)),
        (
            "Momentum",
            format!("{:+.2}", analysis.momentum.home),
            format!("{:+.2}", analysis.momentum.away),
        ),
        (
            "Precision",
            format!("{:.1}%", analysis.precision.home),
            format!("{:.1}%", analysis.precision.away),
        ),
        (
            "Peak",
            peak(dominance.max_home, dominance.new_max_home),
            peak(dominance.max_away, dominance.new_max_away),
        ),
    ];
    for (label, home, away) in rows {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), home.into(), away.into()],
        ));
    }
    table
}

fn percent(prob: f64) -> String {
    format!("{:.1}%", prob * 100.0)
}

fn peak(value: f64, new: bool) -> String {
    if new {
        format!("{value:.2}*")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use super::*;
    use crate::domain::PreMatchProbs;
    use crate::live;
    use crate::live::tests::first_half_stats;
    use crate::predictor::predict;

    fn render(table: &Table) -> String {
        Console::default().render(table).to_string()
    }

    #[test]
    fn probs_without_derivation() {
        let odds = PreMatchOdds {
            home: 2.1,
            draw: 3.4,
            away: 3.6,
            probs: None,
        };
        let rendered = render(&tabulate_probs(&odds));
        assert!(rendered.contains("2.10"), "{rendered}");
        assert!(!rendered.contains("Margin"), "{rendered}");
    }

    #[test]
    fn probs_with_margin() {
        let odds = PreMatchOdds {
            home: 2.0,
            draw: 3.0,
            away: 4.0,
            probs: Some(PreMatchProbs {
                home: 0.4615,
                draw: 0.3077,
                away: 0.2308,
                margin: 8.3333,
            }),
        };
        let rendered = render(&tabulate_probs(&odds));
        assert!(rendered.contains("46.1%"), "{rendered}");
        assert!(rendered.contains("8.33%"), "{rendered}");
    }

    #[test]
    fn prediction_lists_top_scores() {
        let rendered = render(&tabulate_prediction(&predict(1.5, 1.0, 1.0, 1.5)));
        assert!(rendered.contains("Home win"), "{rendered}");
        assert!(rendered.contains("48.8%"), "{rendered}");
        assert!(rendered.contains("Score 1-0"), "{rendered}");
    }

    #[test]
    fn analysis_marks_new_peaks() {
        let analysis = live::update(&first_half_stats(), None);
        let rendered = render(&tabulate_analysis(&analysis));
        assert!(rendered.contains("0.63"), "{rendered}");
        assert!(rendered.contains("0.43*"), "{rendered}");
        assert!(rendered.contains("71.4%"), "{rendered}");
    }
}

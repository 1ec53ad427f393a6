//! Plain-text commentary on the live analysis, alone and against the pre-match prediction.

use std::fmt::{Display, Formatter};

use crate::domain::{LiveStats, Side};
use crate::live::LiveAnalysis;
use crate::predictor::PoissonPrediction;

/// Stage of the match, by elapsed minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Initial,
    #[strum(serialize = "First Half")]
    FirstHalf,
    Decisive,
    #[strum(serialize = "Final Stretch")]
    FinalStretch,
}
impl Phase {
    pub fn at(minute: u32) -> Self {
        match minute {
            0..=14 => Phase::Initial,
            15..=44 => Phase::FirstHalf,
            45..=74 => Phase::Decisive,
            _ => Phase::FinalStretch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominanceBand {
    Crushing(Side),
    Clear(Side),
    Slight(Side),
    Balanced,
}
impl DominanceBand {
    pub fn classify(difference: f64) -> Self {
        let side = if difference > 0.0 { Side::Home } else { Side::Away };
        let magnitude = difference.abs();
        if magnitude > 0.4 {
            DominanceBand::Crushing(side)
        } else if magnitude > 0.2 {
            DominanceBand::Clear(side)
        } else if magnitude > 0.05 {
            DominanceBand::Slight(side)
        } else {
            DominanceBand::Balanced
        }
    }
}

impl Display for DominanceBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DominanceBand::Crushing(side) => write!(f, "CRUSHING DOMINANCE by {side}"),
            DominanceBand::Clear(side) => write!(f, "CLEAR DOMINANCE by {side}"),
            DominanceBand::Slight(side) => write!(f, "SLIGHT SUPERIORITY of {side}"),
            DominanceBand::Balanced => write!(f, "Balanced Match"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum MomentumBand {
    #[strum(serialize = "Strong Rise")]
    StrongRise,
    Improving,
    Stable,
}
impl MomentumBand {
    pub fn classify(momentum: f64) -> Self {
        if momentum > 0.1 {
            MomentumBand::StrongRise
        } else if momentum > 0.02 {
            MomentumBand::Improving
        } else {
            MomentumBand::Stable
        }
    }
}

/// How the scoreboard squares with the run of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreReading {
    /// Level on goals while one side clearly dominates.
    Mismatch(Side),
    /// The team behind on goals is on top.
    Surprise,
    Consistent,
}
impl ScoreReading {
    pub fn classify(stats: &LiveStats, analysis: &LiveAnalysis) -> Self {
        let difference = analysis.dominance.difference;
        let score = &stats.score;
        if score.home == score.away && difference.abs() > 0.2 {
            let side = if difference > 0.0 { Side::Home } else { Side::Away };
            ScoreReading::Mismatch(side)
        } else if (score.home > score.away && difference < -0.15) || (score.away > score.home && difference > 0.15) {
            ScoreReading::Surprise
        } else {
            ScoreReading::Consistent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Leader {
    Home,
    Away,
    Balanced,
}
impl Leader {
    /// The pre-match favourite needs a win probability more than 0.15 above the other side's.
    pub fn favourite(prediction: &PoissonPrediction) -> Self {
        if prediction.prob_home_win > prediction.prob_away_win + 0.15 {
            Leader::Home
        } else if prediction.prob_away_win > prediction.prob_home_win + 0.15 {
            Leader::Away
        } else {
            Leader::Balanced
        }
    }

    pub fn on_the_run_of_play(analysis: &LiveAnalysis) -> Self {
        let difference = analysis.dominance.difference;
        if difference > 0.1 {
            Leader::Home
        } else if difference < -0.1 {
            Leader::Away
        } else {
            Leader::Balanced
        }
    }
}

/// The match script, judged by the favourite, the live leader and the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Confirmed(Leader),
    Inverted(Leader),
    UnrewardedDominance(Leader),
    Open,
}
impl Script {
    pub fn classify(stats: &LiveStats, analysis: &LiveAnalysis, prediction: &PoissonPrediction) -> Self {
        let favourite = Leader::favourite(prediction);
        let live = Leader::on_the_run_of_play(analysis);
        let score = &stats.score;
        if favourite == live && favourite != Leader::Balanced {
            Script::Confirmed(favourite)
        } else if favourite != Leader::Balanced && live != Leader::Balanced {
            Script::Inverted(live)
        } else if (live == Leader::Home && score.home <= score.away) || (live == Leader::Away && score.away <= score.home) {
            Script::UnrewardedDominance(live)
        } else {
            Script::Open
        }
    }
}

/// Goals each side would have by `minute` at its expected full-time rate, capped at full time.
pub fn expected_to_date(prediction: &PoissonPrediction, minute: u32) -> (f64, f64) {
    let progress = f64::min(minute as f64 / 90.0, 1.0);
    (
        prediction.expected_goals_home * progress,
        prediction.expected_goals_away * progress,
    )
}

/// Formats `value` with `digits` decimals, rounding a value that lies exactly halfway away from
/// zero rather than to even. Negative zero prints unsigned.
pub(crate) fn to_fixed(value: f64, digits: u8) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    if value == 0.0 {
        return format!("{:.*}", digits as usize, 0.0);
    }
    // an exact tie at `digits` decimals is an odd multiple of 2^-(digits + 1)
    let scaled = value * f64::powi(2.0, digits as i32 + 1);
    let tie = scaled.fract() == 0.0 && scaled.abs() % 2.0 == 1.0;
    let value = if tie {
        // one ulp further from zero
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{:.*}", digits as usize, value)
}

pub fn describe_performance(stats: &LiveStats, analysis: &LiveAnalysis) -> String {
    let dominance = &analysis.dominance;
    let momentum = &analysis.momentum;
    let mut text = vec![];

    text.push(format!("▶ PHASE (Min {}): {}", stats.minute, Phase::at(stats.minute)));
    text.push(format!(
        "▶ DOMINANCE (Intensity/Min): {}",
        DominanceBand::classify(dominance.difference)
    ));
    text.push(format!(
        "  Scores: H {} | A {} | Diff: {}",
        to_fixed(dominance.home, 2),
        to_fixed(dominance.away, 2),
        to_fixed(dominance.difference, 2)
    ));
    text.push(format!(
        "▶ MOMENTUM: H {} | A {}",
        MomentumBand::classify(momentum.home),
        MomentumBand::classify(momentum.away)
    ));

    text.push("▶ SCORE vs STATS:".to_string());
    text.push(match ScoreReading::classify(stats, analysis) {
        ScoreReading::Mismatch(side) => format!("  - MISMATCH: Score is level, but {side} is dominating."),
        ScoreReading::Surprise => "  - SURPRISE: The losing team is statistically dominating.".to_string(),
        ScoreReading::Consistent => "  - The score seems consistent with performance.".to_string(),
    });

    text.join("\n")
}

pub fn compare_to_expectation(stats: &LiveStats, analysis: &LiveAnalysis, prediction: &PoissonPrediction) -> String {
    let score = &stats.score;
    let (expected_home, expected_away) = expected_to_date(prediction, stats.minute);
    let home_excess = score.home as f64 - expected_home;
    let away_excess = score.away as f64 - expected_away;
    let mut text = vec![];

    text.push(format!("▶ GOAL PERFORMANCE (vs Expected for min {})", stats.minute));
    text.push(format!(
        "  - HOME: Actual {} vs Exp {} (Diff: {})",
        score.home,
        to_fixed(expected_home, 2),
        to_fixed(home_excess, 2)
    ));
    text.push(format!(
        "  - AWAY: Actual {} vs Exp {} (Diff: {})",
        score.away,
        to_fixed(expected_away, 2),
        to_fixed(away_excess, 2)
    ));
    if home_excess > 0.5 {
        text.push("    ↳ Home is overperforming goal expectation.".to_string());
    }
    if away_excess > 0.5 {
        text.push("    ↳ Away is overperforming goal expectation.".to_string());
    }

    text.push("\n▶ MATCH SCRIPT ANALYSIS:".to_string());
    text.push(match Script::classify(stats, analysis, prediction) {
        Script::Confirmed(favourite) => {
            format!("  - LOGIC CONFIRMED: The pre-match favorite ({favourite}) is dominating as expected.")
        }
        Script::Inverted(underdog) => {
            format!("  - SCRIPT INVERTED: The underdog ({underdog}) is controlling the game, against predictions.")
        }
        Script::UnrewardedDominance(leader) => {
            format!("  - DOMINANCE W/O REWARD: {leader} is dominating but failing to convert.")
        }
        Script::Open => {
            "  - OPEN MATCH: No clear pattern has emerged, or the match is balanced as predicted.".to_string()
        }
    });

    text.join("\n")
}

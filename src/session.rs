//! A single match followed over time. The session owns everything the pure stages need between
//! calls: the latest report, the odds and averages entered so far, the current live counters and
//! the analysis chain that is threaded back into each live update.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{DominancePoint, GoalAverages, HistoricalAverages, LiveStats, PreMatchOdds, PreMatchProbs};
use crate::extract::{extract, ExtractError, Extraction};
use crate::live::LiveAnalysis;
use crate::predictor::PoissonPrediction;
use crate::{live, market, narrative, predictor};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("cannot read the report: {0}")]
    Extract(#[from] ExtractError),

    #[error("odds {home}/{draw}/{away} are invalid; all three prices must be positive")]
    InvalidOdds { home: f64, draw: f64, away: f64 },

    #[error("all four historical averages must be non-zero")]
    MissingAverages,
}

impl HistoricalAverages {
    /// Coerces the averages, requiring every value to be a non-zero number.
    pub fn validate(&self) -> Result<GoalAverages, SessionError> {
        let averages = self.parse();
        if averages.values().iter().any(|&value| value == 0.0 || !value.is_finite()) {
            return Err(SessionError::MissingAverages);
        }
        Ok(averages)
    }
}

/// Dominance difference sampled by minute, one point per minute with the last write winning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DominanceHistory {
    points: Vec<DominancePoint>,
}
impl DominanceHistory {
    pub fn record(&mut self, point: DominancePoint) {
        self.points.retain(|existing| existing.minute != point.minute);
        self.points.push(point);
    }

    pub fn points(&self) -> &[DominancePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSession {
    pub text: String,
    pub odds: PreMatchOdds,
    pub averages: HistoricalAverages,
    pub stats: LiveStats,
    pub prediction: Option<PoissonPrediction>,
    pub analysis: Option<LiveAnalysis>,
    pub history: DominanceHistory,
}
impl MatchSession {
    /// Fills the session from a pasted report. Extracted odds are merged over the current ones
    /// and the live counters are replaced, starting a fresh analysis chain. On error the session
    /// is left as it was.
    pub fn autofill(&mut self, text: &str) -> Result<(), SessionError> {
        self.ingest(text)?;
        self.analysis = None;
        info!("autofilled minute {} with score {}-{}", self.stats.minute, self.stats.score.home, self.stats.score.away);
        Ok(())
    }

    /// As [`MatchSession::autofill`], but treats the report as a later snapshot of the same
    /// match, so the analysis chain carries over into the next update.
    pub fn advance(&mut self, text: &str) -> Result<(), SessionError> {
        self.ingest(text)?;
        info!("advanced to minute {} with score {}-{}", self.stats.minute, self.stats.score.home, self.stats.score.away);
        Ok(())
    }

    fn ingest(&mut self, text: &str) -> Result<(), SessionError> {
        let Extraction {
            pre_match_odds,
            live_stats,
        } = extract(text).map_err(|err| {
            warn!("report rejected: {err}");
            err
        })?;
        if let Some(partial) = pre_match_odds {
            self.odds.merge(&partial);
        }
        self.text = text.to_owned();
        self.stats = live_stats;
        Ok(())
    }

    /// Derives fair probabilities from the current odds and stores them alongside.
    pub fn calculate_probabilities(&mut self) -> Result<PreMatchProbs, SessionError> {
        let PreMatchOdds { home, draw, away, .. } = self.odds;
        if [home, draw, away].iter().any(|&price| price <= 0.0 || !price.is_finite()) {
            return Err(SessionError::InvalidOdds { home, draw, away });
        }
        let probs = market::normalise(home, draw, away);
        debug!("fair probabilities {probs:?}");
        self.odds.probs = Some(probs);
        Ok(probs)
    }

    pub fn generate_prediction(&mut self) -> Result<&PoissonPrediction, SessionError> {
        let averages = self.averages.validate()?;
        let prediction = predictor::predict_from(&averages);
        info!(
            "predicted xG {:.2}-{:.2}, 1X2 {:.3}/{:.3}/{:.3}",
            prediction.expected_goals_home,
            prediction.expected_goals_away,
            prediction.prob_home_win,
            prediction.prob_draw,
            prediction.prob_away_win
        );
        Ok(&*self.prediction.insert(prediction))
    }

    /// Analyses the current counters against the previous analysis and samples the dominance
    /// history, unless the match has not started.
    pub fn update_analysis(&mut self) -> &LiveAnalysis {
        let analysis = live::update(&self.stats, self.analysis.as_ref());
        if self.stats.minute > 0 {
            self.history.record(DominancePoint {
                minute: self.stats.minute,
                difference: analysis.dominance.difference,
            });
        }
        info!(
            "minute {}: dominance {:.2} (H {:.2} | A {:.2})",
            self.stats.minute, analysis.dominance.difference, analysis.dominance.home, analysis.dominance.away
        );
        self.analysis.insert(analysis)
    }

    /// Commentary on the latest analysis, if one has been made.
    pub fn describe_performance(&self) -> Option<String> {
        self.analysis
            .as_ref()
            .map(|analysis| narrative::describe_performance(&self.stats, analysis))
    }

    /// Commentary on the latest analysis against the prediction, if both are present.
    pub fn compare_to_expectation(&self) -> Option<String> {
        match (&self.analysis, &self.prediction) {
            (Some(analysis), Some(prediction)) => {
                Some(narrative::compare_to_expectation(&self.stats, analysis, prediction))
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        info!("session reset");
    }
}

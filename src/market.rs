//! De-vigging of bookmaker prices.

use serde::{Deserialize, Serialize};

use crate::domain::PreMatchProbs;
use crate::probs::SliceExt;

/// The sum of implied probabilities of a market; 1.0 for a fair book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overround {
    pub value: f64,
}
impl Overround {
    /// The bookmaker's edge, in percent.
    pub fn margin(&self) -> f64 {
        (self.value - 1.0) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub probs: Vec<f64>,
    pub prices: Vec<f64>,
    pub overround: Overround,
}
impl Market {
    /// Fits a market by the multiplicative method: each implied probability is divided by the
    /// overround. Prices are assumed positive; zero prices yield non-finite probabilities.
    pub fn fit(prices: Vec<f64>) -> Self {
        let mut probs: Vec<_> = prices.invert().collect();
        let overround = probs.normalise(1.0);
        Self {
            probs,
            prices,
            overround: Overround { value: overround },
        }
    }
}

/// Converts home/draw/away decimal odds into fair probabilities and the bookmaker margin.
pub fn normalise(home: f64, draw: f64, away: f64) -> PreMatchProbs {
    let market = Market::fit(vec![home, draw, away]);
    PreMatchProbs {
        home: market.probs[0],
        draw: market.probs[1],
        away: market.probs[2],
        margin: market.overround.margin(),
    }
}

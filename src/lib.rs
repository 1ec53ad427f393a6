//! A deterministic in-play soccer analytics engine. Free-text match reports are parsed into live
//! counters and pre-match odds; odds are de-vigged into fair probabilities; historical scoring
//! averages drive an independent-Poisson scoreline model; and successive live snapshots are
//! tracked for dominance, momentum and peaks, with plain-text commentary on top.

pub mod domain;
pub mod extract;
pub mod factorial;
pub mod linear;
pub mod live;
pub mod market;
pub mod narrative;
pub mod poisson;
pub mod predictor;
pub mod print;
pub mod probs;
pub mod scoregrid;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}

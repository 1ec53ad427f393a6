//! Plain records shared by every stage of the pipeline.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, strum_macros::Display, EnumIter)]
pub enum Side {
    Home,
    Away,
}

/// A per-team statistic. There are always exactly two teams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPair<T> {
    pub home: T,
    pub away: T,
}
impl<T> TeamPair<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TeamPair<U> {
        TeamPair {
            home: f(&self.home),
            away: f(&self.away),
        }
    }

    pub fn zip<U, V>(&self, other: &TeamPair<U>, mut f: impl FnMut(&T, &U) -> V) -> TeamPair<V> {
        TeamPair {
            home: f(&self.home, &other.home),
            away: f(&self.away, &other.away),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStats {
    pub attacks: TeamPair<u32>,
    pub dangerous_attacks: TeamPair<u32>,
    pub on_target: TeamPair<u32>,
    pub off_target: TeamPair<u32>,
    pub corners: TeamPair<u32>,
    pub possession: TeamPair<u32>,
    pub yellow_cards: TeamPair<u32>,
    pub red_cards: TeamPair<u32>,
    pub score: TeamPair<u32>,
    pub minute: u32,
}

/// The counters that may appear in the live-stats section of a report.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, strum_macros::Display, EnumIter)]
pub enum StatKind {
    Attacks,
    DangerousAttacks,
    OnTarget,
    OffTarget,
    Corners,
    Possession,
    YellowCards,
    RedCards,
}

/// A `LiveStats` under construction. Every field is optional until merged onto defaults
/// with [`PartialLiveStats::complete`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialLiveStats {
    pub attacks: Option<TeamPair<u32>>,
    pub dangerous_attacks: Option<TeamPair<u32>>,
    pub on_target: Option<TeamPair<u32>>,
    pub off_target: Option<TeamPair<u32>>,
    pub corners: Option<TeamPair<u32>>,
    pub possession: Option<TeamPair<u32>>,
    pub yellow_cards: Option<TeamPair<u32>>,
    pub red_cards: Option<TeamPair<u32>>,
    pub score: Option<TeamPair<u32>>,
    pub minute: Option<u32>,
}
impl PartialLiveStats {
    pub fn stat(&self, kind: StatKind) -> Option<&TeamPair<u32>> {
        match kind {
            StatKind::Attacks => self.attacks.as_ref(),
            StatKind::DangerousAttacks => self.dangerous_attacks.as_ref(),
            StatKind::OnTarget => self.on_target.as_ref(),
            StatKind::OffTarget => self.off_target.as_ref(),
            StatKind::Corners => self.corners.as_ref(),
            StatKind::Possession => self.possession.as_ref(),
            StatKind::YellowCards => self.yellow_cards.as_ref(),
            StatKind::RedCards => self.red_cards.as_ref(),
        }
    }

    pub fn set_stat(&mut self, kind: StatKind, values: TeamPair<u32>) {
        let slot = match kind {
            StatKind::Attacks => &mut self.attacks,
            StatKind::DangerousAttacks => &mut self.dangerous_attacks,
            StatKind::OnTarget => &mut self.on_target,
            StatKind::OffTarget => &mut self.off_target,
            StatKind::Corners => &mut self.corners,
            StatKind::Possession => &mut self.possession,
            StatKind::YellowCards => &mut self.yellow_cards,
            StatKind::RedCards => &mut self.red_cards,
        };
        *slot = Some(values);
    }

    /// Merges the parsed fields onto `defaults`, yielding a fully-populated record.
    pub fn complete(self, defaults: &LiveStats) -> LiveStats {
        LiveStats {
            attacks: self.attacks.unwrap_or(defaults.attacks),
            dangerous_attacks: self.dangerous_attacks.unwrap_or(defaults.dangerous_attacks),
            on_target: self.on_target.unwrap_or(defaults.on_target),
            off_target: self.off_target.unwrap_or(defaults.off_target),
            corners: self.corners.unwrap_or(defaults.corners),
            possession: self.possession.unwrap_or(defaults.possession),
            yellow_cards: self.yellow_cards.unwrap_or(defaults.yellow_cards),
            red_cards: self.red_cards.unwrap_or(defaults.red_cards),
            score: self.score.unwrap_or(defaults.score),
            minute: self.minute.unwrap_or(defaults.minute),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreMatchProbs {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
    /// Bookmaker margin, in percent.
    pub margin: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreMatchOdds {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
    pub probs: Option<PreMatchProbs>,
}
impl PreMatchOdds {
    /// Overlays whichever prices are present in `partial`, keeping the derived probabilities.
    pub fn merge(&mut self, partial: &PartialOdds) {
        if let Some(home) = partial.home {
            self.home = home;
        }
        if let Some(draw) = partial.draw {
            self.draw = draw;
        }
        if let Some(away) = partial.away {
            self.away = away;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialOdds {
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
}

/// Historical scoring averages as typed by the user, before numeric coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalAverages {
    pub home_goals_for: String,
    pub home_goals_against: String,
    pub away_goals_for: String,
    pub away_goals_against: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalAverages {
    pub home_goals_for: f64,
    pub home_goals_against: f64,
    pub away_goals_for: f64,
    pub away_goals_against: f64,
}
impl GoalAverages {
    pub fn values(&self) -> [f64; 4] {
        [
            self.home_goals_for,
            self.home_goals_against,
            self.away_goals_for,
            self.away_goals_against,
        ]
    }
}

impl HistoricalAverages {
    pub fn new(
        home_goals_for: impl Into<String>,
        home_goals_against: impl Into<String>,
        away_goals_for: impl Into<String>,
        away_goals_against: impl Into<String>,
    ) -> Self {
        Self {
            home_goals_for: home_goals_for.into(),
            home_goals_against: home_goals_against.into(),
            away_goals_for: away_goals_for.into(),
            away_goals_against: away_goals_against.into(),
        }
    }

    /// Coerces each field to a float. A comma decimal separator is accepted; anything that
    /// does not begin with a number becomes 0.
    pub fn parse(&self) -> GoalAverages {
        GoalAverages {
            home_goals_for: coerce_decimal(&self.home_goals_for),
            home_goals_against: coerce_decimal(&self.home_goals_against),
            away_goals_for: coerce_decimal(&self.away_goals_for),
            away_goals_against: coerce_decimal(&self.away_goals_against),
        }
    }
}

fn coerce_decimal(field: &str) -> f64 {
    let normalised = field.replacen(',', ".", 1);
    leading_float(&normalised).unwrap_or(0.0)
}

/// Parses the longest numeric prefix of `s` (after leading whitespace), in the manner of a
/// lenient float reader. An exponent is taken only if it has digits. Returns `None` if `s` does
/// not begin with a number.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Parses the leading integer of `s` (after leading whitespace). Returns `None` if `s` does not
/// begin with an integer.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self { home: 0, away: 0 }
    }

    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Debug, Error)]
#[error("malformed score {0:?}")]
pub struct ScoreParseError(String);

impl FromStr for Score {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (home, away) = s.split_once('-').ok_or_else(|| ScoreParseError(s.into()))?;
        let home = home.trim().parse().map_err(|_| ScoreParseError(s.into()))?;
        let away = away.trim().parse().map_err(|_| ScoreParseError(s.into()))?;
        Ok(Self { home, away })
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One sample of the dominance time series kept by the session for charting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DominancePoint {
    pub minute: u32,
    pub difference: f64,
}

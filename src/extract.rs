//! Best-effort extraction of pre-match odds and live counters from a pasted match report.
//!
//! Reports arrive in either English or Spanish. Anything that cannot be located or parsed falls
//! back to zero; only an empty input is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::{leading_float, leading_integer, LiveStats, PartialLiveStats, PartialOdds, StatKind, TeamPair};

static PRE_MATCH_ODDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:Pre-partido|Pre-match)[\s\S]*?1\s+X\s+2[^\n\r]*\n\s*([0-9]+\.[0-9]+)\s+([0-9]+\.[0-9]+)\s+([0-9]+\.[0-9]+)").unwrap()
});

/// Score, a bracketed line, then the match clock.
static HEADER_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*([0-9]+):([0-9]+)\s*\n\s*\(.*?\)\n\s*([0-9]{1,2}):[0-9]{2}").unwrap()
});

static STATS_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Estadísticas en vivo|Stats Live").unwrap());

static LABELLED_SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Marcador\s*([0-9]+)\s*-\s*([0-9]+)").unwrap());

static UNLABELLED_SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*-\s*([0-9]+)").unwrap());

static LABELLED_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Minuto de Juego\s*([0-9]+)").unwrap());

static CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2}):[0-9]{2}").unwrap());

static MINUTE_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})'").unwrap());

/// Stat labels in match order. A label matches a line if the line contains it, so the
/// dangerous-attacks labels must precede the plain attacks labels.
const STAT_LABELS: [(&str, StatKind); 16] = [
    ("Ataques Peligrosos", StatKind::DangerousAttacks),
    ("Dangerous Attacks", StatKind::DangerousAttacks),
    ("Ataques", StatKind::Attacks),
    ("Attacks", StatKind::Attacks),
    ("Tiros a Portería", StatKind::OnTarget),
    ("Shots On Target", StatKind::OnTarget),
    ("Tiros Fuera", StatKind::OffTarget),
    ("Shots Off Target", StatKind::OffTarget),
    ("Córners", StatKind::Corners),
    ("Corners", StatKind::Corners),
    ("Posesión del Balón", StatKind::Possession),
    ("Ball Possession", StatKind::Possession),
    ("Tarjetas Amarillas", StatKind::YellowCards),
    ("Yellow Cards", StatKind::YellowCards),
    ("Tarjetas Rojas", StatKind::RedCards),
    ("Red Cards", StatKind::RedCards),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("input text is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub pre_match_odds: Option<PartialOdds>,
    pub live_stats: LiveStats,
}

pub fn extract(text: &str) -> Result<Extraction, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let pre_match_odds = pre_match_odds(text);
    let mut partial = PartialLiveStats::default();
    header_block(text, &mut partial);
    stats_section(text, &mut partial);
    if partial.score.is_none() || partial.minute.unwrap_or(0) == 0 {
        fallbacks(text, &mut partial);
    }

    let live_stats = partial.complete(&LiveStats::default());
    debug!("extracted odds: {pre_match_odds:?}, stats: {live_stats:?}");
    Ok(Extraction {
        pre_match_odds,
        live_stats,
    })
}

/// Maps a line of the live-stats section to the counter it names.
pub fn stat_kind(line: &str) -> Option<StatKind> {
    STAT_LABELS
        .iter()
        .find(|(label, _)| line.contains(label))
        .map(|&(_, kind)| kind)
}

fn pre_match_odds(text: &str) -> Option<PartialOdds> {
    let captures = PRE_MATCH_ODDS.captures(text)?;
    Some(PartialOdds {
        home: captures[1].parse().ok(),
        draw: captures[2].parse().ok(),
        away: captures[3].parse().ok(),
    })
}

fn header_block(text: &str, partial: &mut PartialLiveStats) {
    if let Some(captures) = HEADER_BLOCK.captures(text) {
        partial.score = Some(TeamPair::new(integer(&captures[1]), integer(&captures[2])));
        partial.minute = Some(integer(&captures[3]));
    }
}

fn stats_section(text: &str, partial: &mut PartialLiveStats) {
    let Some(section) = STATS_SECTION.find(text) else {
        debug!("no live stats section");
        return;
    };
    let lines = text[section.start()..]
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    let mut index = 0;
    while index < lines.len() {
        if let Some(&[name, home, away]) = lines.get(index..index + 3) {
            if leading_float(name).is_none() && leading_float(home).is_some() && leading_float(away).is_some() {
                match stat_kind(name) {
                    Some(StatKind::Attacks) if partial.dangerous_attacks.is_some() => {
                        trace!("ignoring {name:?} after dangerous attacks");
                    }
                    Some(kind) => {
                        partial.set_stat(kind, TeamPair::new(counter(home), counter(away)));
                    }
                    None => {
                        trace!("unrecognised stat {name:?}");
                    }
                }
                index += 3;
                continue;
            }
        }
        index += 1;
    }
}

fn fallbacks(text: &str, partial: &mut PartialLiveStats) {
    if partial.score.is_none() {
        let score = LABELLED_SCORE
            .captures(text)
            .map(|captures| team_pair(&captures[1], &captures[2]))
            .or_else(|| unlabelled_score(text));
        if let Some(score) = score {
            debug!("fallback score {score:?}");
            partial.score = Some(score);
        }
    }

    if partial.minute.unwrap_or(0) == 0 {
        let minute = [&*LABELLED_MINUTE, &*CLOCK, &*MINUTE_MARK]
            .into_iter()
            .find_map(|regex| regex.captures(text))
            .map(|captures| integer(&captures[1]));
        if let Some(minute) = minute {
            debug!("fallback minute {minute}");
            partial.minute = Some(minute);
        }
    }
}

/// The first `<int> - <int>` pair not immediately followed by a colon. If the away digits run
/// into a colon, the last of them is given back, as a backtracking matcher would.
fn unlabelled_score(text: &str) -> Option<TeamPair<u32>> {
    let mut start = 0;
    while let Some(captures) = UNLABELLED_SCORE.captures_at(text, start) {
        let whole = captures.get(0)?;
        if !text[whole.end()..].starts_with(':') {
            return Some(team_pair(&captures[1], &captures[2]));
        }
        let away = &captures[2];
        if away.len() > 1 {
            return Some(team_pair(&captures[1], &away[..away.len() - 1]));
        }
        // matches begin on an ASCII digit
        start = whole.start() + 1;
    }
    None
}

fn team_pair(home: &str, away: &str) -> TeamPair<u32> {
    TeamPair::new(integer(home), integer(away))
}

/// Digits captured by a pattern; only an out-of-range value can fail.
fn integer(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}

/// A counter line such as `58%`. Negative or unparsable counters are taken as 0.
fn counter(line: &str) -> u32 {
    leading_integer(line)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}

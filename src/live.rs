//! Live dominance tracking. Weighted attacking counters are normalised by the elapsed minutes
//! into an intensity per team; successive snapshots are chained by the caller, who passes the
//! previous [`LiveAnalysis`] back in to obtain momentum and running peaks.

use serde::{Deserialize, Serialize};

use crate::domain::{LiveStats, TeamPair};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub on_target: f64,
    pub off_target: f64,
    pub corner: f64,
    pub attack: f64,
    pub dangerous_attack: f64,
}

pub const WEIGHTS: Weights = Weights {
    on_target: 3.0,
    off_target: 0.5,
    corner: 1.0,
    attack: 0.2,
    dangerous_attack: 0.75,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dominance {
    pub home: f64,
    pub away: f64,
    /// Home intensity less away intensity.
    pub difference: f64,
    /// Largest positive difference seen in the session.
    pub max_home: f64,
    /// Most negative difference seen in the session.
    pub max_away: f64,
    pub new_max_home: bool,
    pub new_max_away: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveAnalysis {
    pub dominance: Dominance,
    pub momentum: TeamPair<f64>,
    /// Shots on target as a percentage of all shots; 0 when no shots were taken.
    pub precision: TeamPair<f64>,
}

impl Weights {
    /// Cumulative weighted attacking output of one team. Dangerous attacks are removed from the
    /// plain attack count so that they are not counted twice.
    pub fn raw_intensity(&self, on_target: u32, off_target: u32, corners: u32, attacks: u32, dangerous_attacks: u32) -> f64 {
        let non_dangerous = attacks.saturating_sub(dangerous_attacks);
        let attack_points = dangerous_attacks as f64 * self.dangerous_attack + non_dangerous as f64 * self.attack;
        on_target as f64 * self.on_target + off_target as f64 * self.off_target + corners as f64 * self.corner + attack_points
    }
}

/// Intensity per minute for both teams. The minute is floored at 1.
pub fn intensity(stats: &LiveStats, weights: &Weights) -> TeamPair<f64> {
    let minutes = u32::max(stats.minute, 1) as f64;
    let raw = TeamPair {
        home: weights.raw_intensity(
            stats.on_target.home,
            stats.off_target.home,
            stats.corners.home,
            stats.attacks.home,
            stats.dangerous_attacks.home,
        ),
        away: weights.raw_intensity(
            stats.on_target.away,
            stats.off_target.away,
            stats.corners.away,
            stats.attacks.away,
            stats.dangerous_attacks.away,
        ),
    };
    raw.map(|points| points / minutes)
}

pub fn precision(stats: &LiveStats) -> TeamPair<f64> {
    stats.on_target.zip(&stats.off_target, |&on_target, &off_target| {
        let shots = on_target as f64 + off_target as f64;
        if shots > 0.0 {
            on_target as f64 / shots * 100.0
        } else {
            0.0
        }
    })
}

/// Analyses `stats` against the previous snapshot of the same session, if any.
pub fn update(stats: &LiveStats, previous: Option<&LiveAnalysis>) -> LiveAnalysis {
    update_weighted(stats, previous, &WEIGHTS)
}

pub fn update_weighted(stats: &LiveStats, previous: Option<&LiveAnalysis>, weights: &Weights) -> LiveAnalysis {
    let intensity = intensity(stats, weights);
    let difference = intensity.home - intensity.away;

    let momentum = match previous {
        None => TeamPair::default(),
        Some(previous) => TeamPair {
            home: intensity.home - previous.dominance.home,
            away: intensity.away - previous.dominance.away,
        },
    };

    let (mut max_home, mut max_away) = previous
        .map(|previous| (previous.dominance.max_home, previous.dominance.max_away))
        .unwrap_or((0.0, 0.0));
    let new_max_home = difference > 0.0 && difference > max_home;
    if new_max_home {
        max_home = difference;
    }
    let new_max_away = difference < 0.0 && difference < max_away;
    if new_max_away {
        max_away = difference;
    }

    LiveAnalysis {
        dominance: Dominance {
            home: intensity.home,
            away: intensity.away,
            difference,
            max_home,
            max_away,
            new_max_home,
            new_max_away,
        },
        momentum,
        precision: precision(stats),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use assert_float_eq::*;

    use super::*;
    use crate::extract::extract;

    pub(crate) fn first_half_stats() -> LiveStats {
        LiveStats {
            on_target: TeamPair::new(5, 1),
            off_target: TeamPair::new(2, 3),
            corners: TeamPair::new(4, 1),
            attacks: TeamPair::new(20, 10),
            dangerous_attacks: TeamPair::new(8, 3),
            minute: 45,
            ..LiveStats::default()
        }
    }

    #[test]
    fn dominance_at_half_time() {
        let analysis = update(&first_half_stats(), None);
        assert_float_relative_eq!(28.4 / 45.0, analysis.dominance.home, 1e-12);
        assert_float_relative_eq!(9.15 / 45.0, analysis.dominance.away, 1e-12);
        assert_float_absolute_eq!(0.428, analysis.dominance.difference, 0.001);
        assert_float_absolute_eq!(71.43, analysis.precision.home, 0.01);
        assert_float_absolute_eq!(25.0, analysis.precision.away, 1e-12);
        assert!(analysis.dominance.new_max_home);
        assert!(!analysis.dominance.new_max_away);
        assert_eq!(analysis.dominance.difference, analysis.dominance.max_home);
        assert_eq!(0.0, analysis.dominance.max_away);
    }

    #[test]
    fn no_momentum_without_previous() {
        let analysis = update(&first_half_stats(), None);
        assert_eq!(TeamPair::new(0.0, 0.0), analysis.momentum);
    }

    #[test]
    fn momentum_is_change_in_intensity() {
        let previous = update(&first_half_stats(), None);
        let mut stats = first_half_stats();
        stats.minute = 60;
        stats.on_target.away = 6;
        let fresh = update(&stats, None);
        let chained = update(&stats, Some(&previous));
        assert_eq!(fresh.dominance.home - previous.dominance.home, chained.momentum.home);
        assert_eq!(fresh.dominance.away - previous.dominance.away, chained.momentum.away);
        assert!(chained.momentum.home < 0.0);
        assert!(chained.momentum.away > 0.0);
    }

    #[test]
    fn kickoff_uses_one_minute() {
        let stats = LiveStats {
            corners: TeamPair::new(1, 0),
            minute: 0,
            ..LiveStats::default()
        };
        let analysis = update(&stats, None);
        assert_eq!(1.0, analysis.dominance.home);
        assert_eq!(0.0, analysis.dominance.away);
        assert_eq!(TeamPair::new(0.0, 0.0), analysis.precision);
    }

    #[test]
    fn dangerous_attacks_not_counted_twice() {
        let stats = LiveStats {
            attacks: TeamPair::new(3, 2),
            dangerous_attacks: TeamPair::new(5, 2),
            minute: 1,
            ..LiveStats::default()
        };
        let analysis = update(&stats, None);
        // more dangerous than total attacks: none are non-dangerous
        assert_eq!(5.0 * 0.75, analysis.dominance.home);
        assert_eq!(2.0 * 0.75, analysis.dominance.away);
    }

    #[test]
    fn peaks_persist_and_move_monotonically() {
        let minutes_and_shots = [(10, 4, 0), (20, 4, 1), (30, 4, 9), (40, 12, 9), (50, 12, 20), (60, 13, 20)];
        let mut previous: Option<LiveAnalysis> = None;
        let mut last_max = (0.0, 0.0);
        for (minute, home_shots, away_shots) in minutes_and_shots {
            let stats = LiveStats {
                on_target: TeamPair::new(home_shots, away_shots),
                minute,
                ..LiveStats::default()
            };
            let analysis = update(&stats, previous.as_ref());
            assert!(analysis.dominance.max_home >= last_max.0);
            assert!(analysis.dominance.max_away <= last_max.1);
            assert_eq!(analysis.dominance.new_max_home, analysis.dominance.max_home > last_max.0);
            assert_eq!(analysis.dominance.new_max_away, analysis.dominance.max_away < last_max.1);
            last_max = (analysis.dominance.max_home, analysis.dominance.max_away);
            previous = Some(analysis);
        }
        let last = previous.unwrap();
        // home peaked at minute 10 with 4 shots
        assert_eq!(12.0 / 10.0, last.dominance.max_home);
        assert!(last.dominance.max_away < 0.0);
    }

    #[test]
    fn extreme_counters_do_not_overflow() {
        let report = "Stats Live\nShots On Target\n4294967295\n1\nShots Off Target\n1\n1\n";
        let stats = extract(report).unwrap().live_stats;
        assert_eq!(TeamPair::new(u32::MAX, 1), stats.on_target);
        let analysis = update(&stats, None);
        assert_float_absolute_eq!(100.0, analysis.precision.home, 1e-6);
        assert_float_absolute_eq!(50.0, analysis.precision.away, 1e-12);
        assert!(analysis.dominance.home.is_finite());
        assert!(analysis.dominance.difference > 0.0);
    }

    #[test]
    fn custom_weights() {
        let weights = Weights {
            on_target: 1.0,
            off_target: 0.0,
            corner: 0.0,
            attack: 0.0,
            dangerous_attack: 0.0,
        };
        let analysis = update_weighted(&first_half_stats(), None, &weights);
        assert_eq!(5.0 / 45.0, analysis.dominance.home);
        assert_eq!(1.0 / 45.0, analysis.dominance.away);
    }
}

use crate::model::{ClassData, GamemodeEntry, RankProgress, Vehicle, Weapon};

pub const TOP_WEAPONS: usize = 5;
pub const TOP_VEHICLES: usize = 4;
pub const EXCLUDED_CLASS: &str = "Commander";

/// Highest-kill weapons first. Equal kills keep their input order.
pub fn top_weapons(weapons: &[Weapon]) -> Vec<&Weapon> {
    top_by_kills(weapons, TOP_WEAPONS, |w| w.kills)
}

pub fn top_vehicles(vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    top_by_kills(vehicles, TOP_VEHICLES, |v| v.kills)
}

fn top_by_kills<T>(items: &[T], limit: usize, kills: impl Fn(&T) -> u64) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| kills(b).cmp(&kills(a)));
    sorted.truncate(limit);
    sorted
}

/// Every class except the commander aggregate, in input order.
pub fn playable_classes(classes: &[ClassData]) -> Vec<&ClassData> {
    classes
        .iter()
        .filter(|c| c.class_name != EXCLUDED_CLASS)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamemodeRow<'a> {
    pub entry: &'a GamemodeEntry,
    pub percent: f64,
}

/// Played gamemodes, best first, each scaled against the top score of the
/// whole input (zero-score modes included in that max).
pub fn gamemode_rows(gamemodes: &[GamemodeEntry]) -> Vec<GamemodeRow<'_>> {
    let Some(max_score) = gamemodes.iter().map(|g| g.score).reduce(f64::max) else {
        return Vec::new();
    };
    if max_score <= 0.0 || !max_score.is_finite() {
        return Vec::new();
    }

    let mut played: Vec<&GamemodeEntry> = gamemodes.iter().filter(|g| g.score > 0.0).collect();
    played.sort_by(|a, b| b.score.total_cmp(&a.score));
    played
        .into_iter()
        .map(|entry| GamemodeRow {
            entry,
            percent: entry.score / max_score * 100.0,
        })
        .collect()
}

pub fn rank_progress_percent(progress: &RankProgress) -> f64 {
    progress.current / progress.total * 100.0
}

pub fn win_loss_ratio(wins: u64, loses: u64) -> f64 {
    wins as f64 / loses.max(1) as f64
}

/// Weapon card bar width: accuracy doubled, capped at 100.
pub fn accuracy_bar_percent(accuracy: f64) -> f64 {
    (accuracy * 2.0).min(100.0)
}

/// Not clamped; `current` may run past `total`.
pub fn progress_percent(current: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    current / total * 100.0
}

pub fn hours_played(seconds: f64) -> u64 {
    if seconds <= 0.0 || !seconds.is_finite() {
        return 0;
    }
    (seconds / 3600.0).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_bar_caps_at_hundred() {
        assert_eq!(accuracy_bar_percent(20.0), 40.0);
        assert_eq!(accuracy_bar_percent(73.0), 100.0);
    }

    #[test]
    fn progress_percent_guards_zero_total() {
        assert_eq!(progress_percent(5.0, 0.0), 0.0);
        assert_eq!(progress_percent(15.0, 10.0), 150.0);
    }

    #[test]
    fn hours_played_floors() {
        assert_eq!(hours_played(7199.0), 1);
        assert_eq!(hours_played(-5.0), 0);
    }
}

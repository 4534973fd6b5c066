//! Display-ready strings for the profile screen.
//!
//! Every default for a missing field is applied here, at the point of display,
//! so the renderer never has to look at raw model values.

use crate::derive::{
    accuracy_bar_percent, gamemode_rows, hours_played, playable_classes, progress_percent,
    rank_progress_percent, top_vehicles, top_weapons, win_loss_ratio,
};
use crate::model::{ClassData, PlayerDocument, PlayerStats, ProgressEntry, Vehicle, Weapon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Accent,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBox {
    pub label: &'static str,
    pub value: String,
    pub subtext: Option<String>,
    pub tone: Tone,
}

impl StatBox {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            subtext: None,
            tone: Tone::Normal,
        }
    }

    fn subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankProgressView {
    pub percent_label: String,
    pub ratio: f64,
    pub current: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeaponCard {
    pub position: usize,
    pub name: String,
    pub kills: String,
    pub accuracy: String,
    pub accuracy_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCard {
    pub name: String,
    pub kills: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassCard {
    pub name: String,
    pub service_stars: String,
    pub score: String,
    pub time_played: String,
    pub star_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressCard {
    pub label: String,
    pub counts: String,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamemodeBar {
    pub name: String,
    pub score: String,
    pub percent: f64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub title: String,
    pub rank: String,
    pub avatar: Option<String>,
    pub emblem: Option<String>,
    pub rank_progress: Option<RankProgressView>,
    pub time_played: String,
    pub score_per_minute: String,
    pub headline: Vec<StatBox>,
    pub combat: Vec<StatBox>,
    pub support: Vec<StatBox>,
    pub top_weapons: Vec<WeaponCard>,
    pub top_vehicles: Vec<VehicleCard>,
    pub classes: Vec<ClassCard>,
    pub progress: Vec<ProgressCard>,
    pub gamemodes: Vec<GamemodeBar>,
}

impl ProfileView {
    pub fn build(doc: &PlayerDocument) -> Self {
        let stats = &doc.stats;
        let tag = doc.platoon.as_ref().and_then(|p| p.tag.as_deref());
        let name = if stats.user_name.is_empty() {
            "UNKNOWN SOLDIER"
        } else {
            stats.user_name.as_str()
        };
        let title = match tag {
            Some(tag) => format!("[{tag}] {name}"),
            None => name.to_string(),
        };

        let rank_progress = doc.rank_progress.as_ref().map(|rp| {
            let percent = rank_progress_percent(rp);
            RankProgressView {
                percent_label: format!("{percent:.1}%"),
                ratio: gauge_ratio(percent),
                current: locale_number(rp.current),
                total: locale_number(rp.total),
            }
        });

        Self {
            title,
            rank: format!("RANK {}", stats.rank),
            avatar: stats.avatar.clone(),
            emblem: doc.platoon.as_ref().and_then(|p| p.emblem.clone()),
            rank_progress,
            time_played: format!("{}h", thousands(hours_played(stats.seconds_played))),
            score_per_minute: locale_number(stats.score_per_minute),
            headline: headline_boxes(stats),
            combat: combat_boxes(stats),
            support: support_boxes(stats),
            top_weapons: top_weapons(&doc.weapons)
                .into_iter()
                .enumerate()
                .map(|(i, w)| weapon_card(i, w))
                .collect(),
            top_vehicles: top_vehicles(&doc.vehicles)
                .into_iter()
                .map(vehicle_card)
                .collect(),
            classes: playable_classes(&doc.classes)
                .into_iter()
                .map(class_card)
                .collect(),
            progress: doc.progress.iter().map(progress_card).collect(),
            gamemodes: gamemode_rows(&doc.gamemodes)
                .into_iter()
                .map(|row| GamemodeBar {
                    name: row.entry.gamemode_name.clone(),
                    score: locale_number(row.entry.score),
                    percent: row.percent,
                    ratio: gauge_ratio(row.percent),
                })
                .collect(),
        }
    }
}

/// Every weapon in served order, for the weapons modal.
pub fn all_weapon_cards(weapons: &[Weapon]) -> Vec<WeaponCard> {
    weapons
        .iter()
        .enumerate()
        .map(|(i, w)| weapon_card(i, w))
        .collect()
}

pub fn weapon_total_label(count: usize) -> String {
    format!("{} weapons total", thousands(count as u64))
}

fn headline_boxes(stats: &PlayerStats) -> Vec<StatBox> {
    vec![
        StatBox::new("Kill / Death Ratio", plain_number(stats.kill_death)).subtext(format!(
            "{} Kills / {} Deaths",
            thousands(stats.kills),
            thousands(stats.deaths)
        )),
        StatBox::new("Accuracy", text_or(&stats.accuracy, "0.0%")),
        StatBox::new("Wins", thousands(stats.wins)).subtext(format!(
            "{:.2} W/L",
            win_loss_ratio(stats.wins, stats.loses)
        )),
        StatBox::new("Headshots", text_or(&stats.headshots, "0%")),
        StatBox::new(
            "Longest HS",
            format!("{}m", plain_number(stats.longest_head_shot)),
        ),
        StatBox::new("Skill", plain_number(stats.skill)),
        StatBox::new("Kill Streak", stats.highest_kill_streak.to_string()),
        StatBox::new("Quit Rate", text_or(&stats.quits, "0%")).tone(Tone::Danger),
        StatBox::new("Best Class", text_or(&stats.best_class, "N/A")),
    ]
}

fn combat_boxes(stats: &PlayerStats) -> Vec<StatBox> {
    vec![
        StatBox::new("Avenger Kills", thousands(stats.avenger_kills)),
        StatBox::new("Savior Kills", thousands(stats.savior_kills)),
        StatBox::new("Kill Assists", thousands(stats.kill_assists)),
        StatBox::new("Win %", text_or(&stats.win_percent, "0%")).tone(Tone::Accent),
    ]
}

fn support_boxes(stats: &PlayerStats) -> Vec<StatBox> {
    vec![
        StatBox::new("Heals", thousands(stats.heals)),
        StatBox::new("Revives", thousands(stats.revives)),
        StatBox::new("Repairs", thousands(stats.repairs)),
        StatBox::new("Resupplies", thousands(stats.resupplies)),
    ]
}

fn weapon_card(index: usize, weapon: &Weapon) -> WeaponCard {
    WeaponCard {
        position: index + 1,
        name: weapon.weapon_name.to_uppercase(),
        kills: format!("{} KILLS", thousands(weapon.kills)),
        accuracy: format!("{}% ACC", plain_number(weapon.accuracy)),
        accuracy_ratio: gauge_ratio(accuracy_bar_percent(weapon.accuracy)),
    }
}

fn vehicle_card(vehicle: &Vehicle) -> VehicleCard {
    VehicleCard {
        name: vehicle.vehicle_name.to_uppercase(),
        kills: thousands(vehicle.kills),
        time: text_or(&vehicle.time_in, "-"),
    }
}

fn class_card(class: &ClassData) -> ClassCard {
    ClassCard {
        name: class.class_name.to_uppercase(),
        service_stars: format!("{} ★", class.service_star_amount),
        score: thousands(class.score),
        time_played: text_or(&class.time_played, "-"),
        star_ratio: gauge_ratio(class.service_star_progress_amount),
    }
}

fn progress_card(entry: &ProgressEntry) -> ProgressCard {
    ProgressCard {
        label: entry.progress_name.clone(),
        counts: format!(
            "{}/{}",
            plain_number(entry.current),
            plain_number(entry.total)
        ),
        ratio: gauge_ratio(progress_percent(entry.current, entry.total)),
    }
}

fn text_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Percent to a [0, 1] gauge ratio.
pub fn gauge_ratio(percent: f64) -> f64 {
    if !percent.is_finite() {
        return 0.0;
    }
    (percent / 100.0).clamp(0.0, 1.0)
}

pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped digits with up to three decimals, trailing zeros dropped.
pub fn locale_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let millis = (value.abs() * 1000.0).round() as u64;
    let whole = thousands(millis / 1000);
    let frac = millis % 1000;
    let sign = if value < 0.0 && millis > 0 { "-" } else { "" };
    if frac == 0 {
        return format!("{sign}{whole}");
    }
    let frac = format!("{frac:03}");
    format!("{sign}{whole}.{}", frac.trim_end_matches('0'))
}

/// Shortest round-trip form; integral values print without a decimal point.
pub fn plain_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    format!("{value}")
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(deserialize_with = "lenient::name")]
    pub user_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub rank: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub kill_death: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub kills: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub deaths: u64,
    // Percent strings as served, e.g. "23.4%".
    #[serde(deserialize_with = "lenient::text")]
    pub accuracy: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub wins: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub loses: u64,
    #[serde(deserialize_with = "lenient::text")]
    pub headshots: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub longest_head_shot: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub skill: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub highest_kill_streak: u64,
    #[serde(deserialize_with = "lenient::text")]
    pub quits: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub best_class: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub score_per_minute: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub seconds_played: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub win_percent: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub avenger_kills: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub savior_kills: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub kill_assists: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub heals: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub revives: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub repairs: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub resupplies: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platoon {
    #[serde(deserialize_with = "lenient::text")]
    pub tag: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub emblem: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    pub current: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weapon {
    #[serde(deserialize_with = "lenient::name")]
    pub weapon_name: String,
    #[serde(deserialize_with = "lenient::count")]
    pub kills: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub accuracy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(deserialize_with = "lenient::name")]
    pub vehicle_name: String,
    #[serde(deserialize_with = "lenient::count")]
    pub kills: u64,
    #[serde(deserialize_with = "lenient::text")]
    pub time_in: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassData {
    #[serde(deserialize_with = "lenient::name")]
    pub class_name: String,
    #[serde(deserialize_with = "lenient::count")]
    pub service_star_amount: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub service_star_progress_amount: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub score: u64,
    #[serde(deserialize_with = "lenient::text")]
    pub time_played: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(deserialize_with = "lenient::name")]
    pub progress_name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub current: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GamemodeEntry {
    #[serde(deserialize_with = "lenient::name")]
    pub gamemode_name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub score: f64,
}

/// The `/full` response normalized to one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDocument {
    pub stats: PlayerStats,
    pub platoon: Option<Platoon>,
    pub rank_progress: Option<RankProgress>,
    pub weapons: Vec<Weapon>,
    pub vehicles: Vec<Vehicle>,
    pub classes: Vec<ClassData>,
    pub progress: Vec<ProgressEntry>,
    pub gamemodes: Vec<GamemodeEntry>,
}

/// The `/history` response. Kept as-is; nothing on screen depends on its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct History(pub Value);

impl History {
    pub fn entry_count(&self) -> usize {
        match &self.0 {
            Value::Array(items) => items.len(),
            Value::Object(map) => map
                .get("data")
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or_else(|| map.len()),
            _ => 0,
        }
    }
}

/// A JSON `null` is an all-default document. An empty body is not JSON and
/// fails like any other malformed payload.
pub fn parse_player_document(raw: &str) -> Result<PlayerDocument, FetchError> {
    let root: Value = serde_json::from_str(raw.trim())?;
    if root.is_null() {
        return Ok(PlayerDocument::default());
    }
    Ok(document_from_value(&root))
}

pub fn document_from_value(root: &Value) -> PlayerDocument {
    PlayerDocument {
        stats: resolve_stats(root),
        platoon: parse_platoon(root),
        rank_progress: parse_rank_progress(root),
        weapons: parse_list(root, "weapons"),
        vehicles: parse_list(root, "vehicles"),
        classes: parse_list(root, "classes"),
        progress: parse_list(root, "progress"),
        gamemodes: parse_list(root, "gamemodes"),
    }
}

pub fn parse_history_json(raw: &str) -> Result<History, FetchError> {
    let root: Value = serde_json::from_str(raw.trim())?;
    Ok(History(root))
}

/// Stats live either at the root (recognized by a non-empty `userName`) or
/// under `stats`. Anything else resolves to an all-default record.
pub fn resolve_stats(root: &Value) -> PlayerStats {
    let has_root_name = root
        .get("userName")
        .and_then(lenient::as_text)
        .is_some();
    let source = if has_root_name {
        Some(root)
    } else {
        root.get("stats").filter(|v| v.is_object())
    };
    source
        .and_then(|v| PlayerStats::deserialize(v).ok())
        .unwrap_or_default()
}

fn parse_platoon(root: &Value) -> Option<Platoon> {
    let value = root.get("platoon").filter(|v| v.is_object())?;
    let platoon = Platoon::deserialize(value).ok()?;
    if platoon.tag.is_none() && platoon.emblem.is_none() {
        return None;
    }
    Some(platoon)
}

fn parse_rank_progress(root: &Value) -> Option<RankProgress> {
    let current = root.get("currentRankProgress").filter(|v| !v.is_null())?;
    let total = root
        .get("totalRankProgress")
        .and_then(lenient::as_f64)
        .filter(|t| *t != 0.0 && t.is_finite())?;
    Some(RankProgress {
        current: lenient::as_f64(current).unwrap_or_default(),
        total,
    })
}

fn parse_list<T: DeserializeOwned>(root: &Value, key: &str) -> Vec<T> {
    root.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| T::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Field decoders that never fail on a wrong type; they fall back to the
/// field default instead.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_f64(&value).unwrap_or_default())
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let value = Value::deserialize(d)?;
        if let Some(n) = value.as_u64() {
            return Ok(n);
        }
        let n = as_f64(&value).unwrap_or_default();
        if n > 0.0 {
            Ok(n.trunc() as u64)
        } else {
            Ok(0)
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_text(&value))
    }

    pub fn name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_text(&value).unwrap_or_default())
    }

    pub fn as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s
                .trim()
                .trim_end_matches('%')
                .replace(',', "")
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

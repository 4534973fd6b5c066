use std::fs;
use std::path::PathBuf;

use bf4_terminal::model::{PlayerDocument, parse_player_document};
use bf4_terminal::view::{ProfileView, StatBox, Tone, all_weapon_cards, weapon_total_label};

fn fixture_doc(name: &str) -> PlayerDocument {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    parse_player_document(&raw).expect("fixture should parse")
}

fn stat<'a>(boxes: &'a [StatBox], label: &str) -> &'a StatBox {
    boxes
        .iter()
        .find(|b| b.label == label)
        .unwrap_or_else(|| panic!("missing stat box {label}"))
}

#[test]
fn hero_section_from_full_fixture() {
    let view = ProfileView::build(&fixture_doc("player_full_root.json"));
    assert_eq!(view.title, "[DUST] SgtMarlow");
    assert_eq!(view.rank, "RANK 140");
    assert_eq!(
        view.emblem.as_deref(),
        Some("https://cdn.example/emblems/dust.png")
    );
    assert_eq!(view.time_played, "552h");
    assert_eq!(view.score_per_minute, "712.25");

    let progress = view.rank_progress.expect("rank progress shown");
    assert_eq!(progress.percent_label, "25.0%");
    assert_eq!(progress.ratio, 0.25);
    assert_eq!(progress.current, "1,250,000");
    assert_eq!(progress.total, "5,000,000");
}

#[test]
fn headline_boxes_from_full_fixture() {
    let view = ProfileView::build(&fixture_doc("player_full_root.json"));
    let kd = stat(&view.headline, "Kill / Death Ratio");
    assert_eq!(kd.value, "1.87");
    assert_eq!(kd.subtext.as_deref(), Some("48,213 Kills / 25,782 Deaths"));

    let wins = stat(&view.headline, "Wins");
    assert_eq!(wins.value, "1,830");
    assert_eq!(wins.subtext.as_deref(), Some("1.31 W/L"));

    assert_eq!(stat(&view.headline, "Longest HS").value, "1204.5m");
    assert_eq!(stat(&view.headline, "Quit Rate").tone, Tone::Danger);
    assert_eq!(stat(&view.combat, "Win %").value, "56.6%");
    assert_eq!(stat(&view.support, "Heals").value, "90,211");
}

#[test]
fn card_collections_from_full_fixture() {
    let view = ProfileView::build(&fixture_doc("player_full_root.json"));

    let weapons: Vec<&str> = view.top_weapons.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(weapons, vec!["AK-12", "ACE 23", "M16A4", "M98B", "M320 HE"]);
    assert_eq!(view.top_weapons[0].position, 1);
    assert_eq!(view.top_weapons[4].accuracy, "61.5% ACC");
    assert_eq!(view.top_weapons[4].accuracy_ratio, 1.0);

    let vehicles: Vec<&str> = view.top_vehicles.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(vehicles, vec!["AH-1Z VIPER", "M1 ABRAMS", "F-35", "LAV-25"]);
    assert_eq!(view.top_vehicles[0].kills, "4,880");

    let classes: Vec<&str> = view.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(classes, vec!["ASSAULT", "ENGINEER", "SUPPORT", "RECON"]);
    assert_eq!(view.classes[0].service_stars, "100 ★");

    assert_eq!(view.progress[1].counts, "640/512");
    assert_eq!(view.progress[1].ratio, 1.0);

    let modes: Vec<(&str, f64)> = view
        .gamemodes
        .iter()
        .map(|g| (g.name.as_str(), g.percent))
        .collect();
    assert_eq!(
        modes,
        vec![("Conquest", 100.0), ("Domination", 50.0), ("Rush", 25.0)]
    );
}

#[test]
fn weapons_modal_lists_everything_in_served_order() {
    let doc = fixture_doc("player_full_root.json");
    let cards = all_weapon_cards(&doc.weapons);
    assert_eq!(cards.len(), doc.weapons.len());
    assert_eq!(cards[0].name, "AK-12");
    assert_eq!(cards[1].name, "M16A4");
    assert_eq!(cards[6].position, 7);
    assert_eq!(weapon_total_label(cards.len()), "7 weapons total");
}

#[test]
fn sparse_fixture_renders_defaults() {
    let view = ProfileView::build(&fixture_doc("player_full_sparse.json"));
    assert_eq!(view.title, "Rookie");
    assert!(view.avatar.is_none());
    assert!(view.emblem.is_none());
    assert_eq!(stat(&view.headline, "Accuracy").value, "0.0%");
    assert_eq!(stat(&view.headline, "Headshots").value, "0%");
    assert_eq!(stat(&view.headline, "Quit Rate").value, "0%");
    assert_eq!(stat(&view.headline, "Best Class").value, "N/A");
    assert_eq!(stat(&view.headline, "Longest HS").value, "0m");
    assert_eq!(
        stat(&view.headline, "Wins").subtext.as_deref(),
        Some("0.00 W/L")
    );
    assert_eq!(stat(&view.combat, "Win %").value, "0%");
    assert_eq!(view.time_played, "0h");
    assert_eq!(
        view.rank_progress.map(|p| p.percent_label).as_deref(),
        Some("0.0%")
    );
    assert!(view.top_weapons.is_empty());
    assert!(view.gamemodes.is_empty());
}

#[test]
fn empty_document_still_builds() {
    let view = ProfileView::build(&PlayerDocument::default());
    assert_eq!(view.title, "UNKNOWN SOLDIER");
    assert!(view.rank_progress.is_none());
    assert_eq!(view.headline.len(), 9);
}

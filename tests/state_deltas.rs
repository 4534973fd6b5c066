use bf4_terminal::error::FetchError;
use bf4_terminal::model::{History, PlayerDocument, PlayerStats};
use bf4_terminal::profile_fetch::LoadedProfile;
use bf4_terminal::routes::{ProfileTarget, Route};
use bf4_terminal::state::{AppState, Delta, Platform, ProviderCommand, Screen, apply_delta};

fn loaded(name: &str, history: Option<History>) -> LoadedProfile {
    LoadedProfile {
        document: PlayerDocument {
            stats: PlayerStats {
                user_name: name.to_string(),
                ..PlayerStats::default()
            },
            ..PlayerDocument::default()
        },
        history,
    }
}

fn open_profile(state: &mut AppState, platform: &str, name: &str) -> u64 {
    match state.navigate(Route::Profile(ProfileTarget::new(platform, name))) {
        Some(ProviderCommand::LoadProfile { request_id, .. }) => request_id,
        None => panic!("profile navigation should request a load"),
    }
}

#[test]
fn blank_search_does_not_navigate() {
    let mut state = AppState::new();
    state.search.name = "   ".to_string();
    assert!(state.submit_search().is_none());
    assert_eq!(state.screen, Screen::Search);
}

#[test]
fn search_submit_uses_selected_platform() {
    let mut state = AppState::new();
    state.search.name = " Medic Main ".to_string();
    state.search.next_platform();
    assert_eq!(state.search.platform, Platform::Ps4);

    let cmd = state.submit_search().expect("valid search should load");
    let target = ProfileTarget::new("ps4", "Medic Main");
    assert_eq!(
        cmd,
        ProviderCommand::LoadProfile {
            request_id: 1,
            target: target.clone()
        }
    );
    assert_eq!(state.screen, Screen::Profile { target });
    assert!(state.profile.loading);
    assert_eq!(state.current_route().path(), "/player/ps4/Medic%20Main");
}

#[test]
fn primary_failure_sets_error_and_clears_stats() {
    let mut state = AppState::new();
    let id = open_profile(&mut state, "pc", "Ghost");
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: id,
            result: Err(FetchError::NotFound { status: 404 }),
        },
    );
    assert!(!state.profile.loading);
    assert_eq!(state.profile.error.as_deref(), Some("Player not found"));
    assert!(state.profile.document.is_none());
    assert!(state.profile.history.is_none());
}

#[test]
fn secondary_failure_keeps_stats() {
    let mut state = AppState::new();
    let id = open_profile(&mut state, "pc", "Ghost");
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: id,
            result: Ok(loaded("Ghost", None)),
        },
    );
    assert!(!state.profile.loading);
    assert!(state.profile.error.is_none());
    assert_eq!(
        state.profile.document.as_ref().map(|d| d.stats.user_name.as_str()),
        Some("Ghost")
    );
    assert!(state.profile.history.is_none());
    assert!(state.profile.fetched_at.is_some());
}

#[test]
fn stale_response_does_not_overwrite_newer_profile() {
    let mut state = AppState::new();
    let first = open_profile(&mut state, "pc", "First");
    let second = open_profile(&mut state, "pc", "Second");
    assert!(second > first);

    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: second,
            result: Ok(loaded("Second", Some(History(serde_json::json!([]))))),
        },
    );
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: first,
            result: Ok(loaded("First", None)),
        },
    );

    let doc = state.profile.document.as_ref().expect("second profile kept");
    assert_eq!(doc.stats.user_name, "Second");
    assert!(state.profile.history.is_some());
    assert!(state.logs.iter().any(|l| l.contains("stale")));
}

#[test]
fn new_identity_resets_previous_data() {
    let mut state = AppState::new();
    let id = open_profile(&mut state, "pc", "Alpha");
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: id,
            result: Ok(loaded("Alpha", None)),
        },
    );
    state.open_weapons_modal();
    assert!(state.weapons_modal);

    open_profile(&mut state, "xboxone", "Bravo");
    assert!(state.profile.loading);
    assert!(state.profile.document.is_none());
    assert!(state.profile.error.is_none());
    assert!(!state.weapons_modal);
}

#[test]
fn result_after_leaving_profile_is_ignored() {
    let mut state = AppState::new();
    let id = open_profile(&mut state, "pc", "Alpha");
    assert!(state.navigate(Route::Search).is_none());
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: id,
            result: Ok(loaded("Alpha", None)),
        },
    );
    assert_eq!(state.screen, Screen::Search);
    assert!(state.profile.document.is_none());
}

#[test]
fn reload_starts_a_fresh_request_for_same_target() {
    let mut state = AppState::new();
    let id = open_profile(&mut state, "pc", "Alpha");
    match state.reload() {
        Some(ProviderCommand::LoadProfile { request_id, target }) => {
            assert!(request_id > id);
            assert_eq!(target, ProfileTarget::new("pc", "Alpha"));
        }
        None => panic!("reload should request a load"),
    }
}

#[test]
fn modal_toggle_needs_document_and_scroll_is_bounded() {
    let mut state = AppState::new();
    let id = open_profile(&mut state, "pc", "Alpha");
    state.open_weapons_modal();
    assert!(!state.weapons_modal);

    let mut profile = loaded("Alpha", None);
    profile.document.weapons = vec![Default::default(), Default::default()];
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request_id: id,
            result: Ok(profile),
        },
    );
    state.open_weapons_modal();
    assert!(state.weapons_modal);
    for _ in 0..5 {
        state.scroll_modal_down();
    }
    assert_eq!(state.modal_scroll, 1);
    state.scroll_modal_up();
    state.scroll_modal_up();
    assert_eq!(state.modal_scroll, 0);

    state.close_weapons_modal();
    assert!(!state.weapons_modal);
    assert!(state.profile.document.is_some());
    assert!(!state.profile.loading);
}

#[test]
fn log_delta_is_capped() {
    let mut state = AppState::new();
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] 249"));
}

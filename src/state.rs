use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::error::FetchError;
use crate::model::{History, PlayerDocument};
use crate::profile_fetch::LoadedProfile;
use crate::routes::{ProfileTarget, Route};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Pc,
    Ps4,
    XboxOne,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Pc, Platform::Ps4, Platform::XboxOne];

    /// Path segment the API expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Ps4 => "ps4",
            Platform::XboxOne => "xboxone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Ps4 => "PS4",
            Platform::XboxOne => "XBOX ONE",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Platform::Pc => Platform::Ps4,
            Platform::Ps4 => Platform::XboxOne,
            Platform::XboxOne => Platform::Pc,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Platform::Pc => Platform::XboxOne,
            Platform::Ps4 => Platform::Pc,
            Platform::XboxOne => Platform::Ps4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name: String,
    pub platform: Platform,
}

impl SearchForm {
    pub fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.name.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    pub fn clear(&mut self) {
        self.name.clear();
    }

    pub fn next_platform(&mut self) {
        self.platform = self.platform.next();
    }

    pub fn prev_platform(&mut self) {
        self.platform = self.platform.prev();
    }

    /// Profile route for the current input, or `None` while the name is blank.
    pub fn submit(&self) -> Option<Route> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Route::Profile(ProfileTarget::new(
            self.platform.as_str(),
            name,
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Search,
    Profile { target: ProfileTarget },
}

/// Result slots for the profile currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub request_id: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub document: Option<PlayerDocument>,
    pub history: Option<History>,
    pub fetched_at: Option<DateTime<Local>>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub search: SearchForm,
    pub profile: ProfileState,
    pub weapons_modal: bool,
    pub modal_scroll: u16,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Search,
            search: SearchForm::default(),
            profile: ProfileState::default(),
            weapons_modal: false,
            modal_scroll: 0,
            help_overlay: false,
            logs: VecDeque::with_capacity(MAX_LOGS),
            next_request_id: 0,
        }
    }

    /// Switches screens. Entering a profile always starts a fresh load and
    /// returns the command that performs it.
    pub fn navigate(&mut self, route: Route) -> Option<ProviderCommand> {
        self.weapons_modal = false;
        self.modal_scroll = 0;
        match route {
            Route::Search => {
                self.screen = Screen::Search;
                // Late results for the abandoned profile no longer match.
                self.profile = ProfileState::default();
                None
            }
            Route::Profile(target) => {
                self.next_request_id += 1;
                let request_id = self.next_request_id;
                self.profile = ProfileState {
                    request_id,
                    loading: true,
                    ..ProfileState::default()
                };
                self.screen = Screen::Profile {
                    target: target.clone(),
                };
                self.push_log(format!("[INFO] Loading {target}"));
                Some(ProviderCommand::LoadProfile { request_id, target })
            }
        }
    }

    pub fn submit_search(&mut self) -> Option<ProviderCommand> {
        let Some(route) = self.search.submit() else {
            self.push_log("[INFO] Enter a soldier name first");
            return None;
        };
        self.navigate(route)
    }

    pub fn reload(&mut self) -> Option<ProviderCommand> {
        let target = self.current_target()?.clone();
        self.navigate(Route::Profile(target))
    }

    pub fn current_target(&self) -> Option<&ProfileTarget> {
        match &self.screen {
            Screen::Profile { target } => Some(target),
            Screen::Search => None,
        }
    }

    pub fn current_route(&self) -> Route {
        match self.current_target() {
            Some(target) => Route::Profile(target.clone()),
            None => Route::Search,
        }
    }

    pub fn open_weapons_modal(&mut self) {
        if self.profile.document.is_some() {
            self.weapons_modal = true;
            self.modal_scroll = 0;
        }
    }

    pub fn close_weapons_modal(&mut self) {
        self.weapons_modal = false;
        self.modal_scroll = 0;
    }

    pub fn scroll_modal_down(&mut self) {
        let count = self
            .profile
            .document
            .as_ref()
            .map(|d| d.weapons.len())
            .unwrap_or(0);
        let max = count.saturating_sub(1).min(u16::MAX as usize) as u16;
        self.modal_scroll = self.modal_scroll.saturating_add(1).min(max);
    }

    pub fn scroll_modal_up(&mut self) {
        self.modal_scroll = self.modal_scroll.saturating_sub(1);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCommand {
    LoadProfile {
        request_id: u64,
        target: ProfileTarget,
    },
}

#[derive(Debug, Clone)]
pub enum Delta {
    ProfileLoaded {
        request_id: u64,
        result: Result<LoadedProfile, FetchError>,
    },
    Log(String),
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::ProfileLoaded { request_id, result } => {
            let current = state.current_target().is_some() && state.profile.request_id == request_id;
            if !current {
                state.push_log(format!("[INFO] Dropped stale response #{request_id}"));
                return;
            }

            state.profile.loading = false;
            match result {
                Ok(loaded) => {
                    if loaded.history.is_none() {
                        state.push_log("[INFO] No history for this soldier");
                    }
                    state.profile.error = None;
                    state.profile.document = Some(loaded.document);
                    state.profile.history = loaded.history;
                    state.profile.fetched_at = Some(Local::now());
                }
                Err(err) => {
                    state.push_log(format!("[WARN] Profile load failed: {err}"));
                    state.profile.error = Some(err.to_string());
                    state.profile.document = None;
                    state.profile.history = None;
                    state.profile.fetched_at = None;
                    state.weapons_modal = false;
                }
            }
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_cycles_through_all() {
        let mut p = Platform::default();
        for expected in [Platform::Ps4, Platform::XboxOne, Platform::Pc] {
            p = p.next();
            assert_eq!(p, expected);
        }
        assert_eq!(Platform::Pc.prev(), Platform::XboxOne);
        assert_eq!(Platform::ALL.map(Platform::as_str), ["pc", "ps4", "xboxone"]);
    }

    #[test]
    fn search_form_ignores_control_chars() {
        let mut form = SearchForm::default();
        form.push_char('a');
        form.push_char('\n');
        form.push_char('b');
        assert_eq!(form.name, "ab");
        form.backspace();
        assert_eq!(form.name, "a");
    }
}

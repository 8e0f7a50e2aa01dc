//! Stateless projection from [`AppState`] to a renderable view.
//!
//! Frontends (terminal or desktop) consume the `View` and draw it; none of
//! the gating or clearing logic lives in a render layer.

use crate::{
    app::{AppState, Page},
    i18n::UiLang,
    languages::SummaryLanguage,
    storage::KvStore,
    types::{HistoryEntry, SummaryLength, Theme, User, VideoDetails},
};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Missing OAuth client id: full-screen configuration error, nothing
    /// else renders.
    ConfigError,
    Home(HomeView),
    Settings(SettingsView),
    History(HistoryView),
    /// A gated page was requested without a session. Offers only the
    /// return-to-login action; there is no auto-redirect to home.
    AccessDenied,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub user: Option<User>,
    pub link: String,
    pub language: SummaryLanguage,
    pub length: SummaryLength,
    pub loading: bool,
    pub error: Option<String>,
    pub summary: Option<String>,
    pub video_details: Option<VideoDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub theme: Theme,
    pub ui_lang: UiLang,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub entries: Vec<HistoryEntry>,
}

impl HistoryView {
    /// An empty list renders the explicit "no history" presentation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn project<S: KvStore>(state: &AppState<S>) -> View {
    if state.config_missing() {
        return View::ConfigError;
    }
    match state.page {
        Page::Home => View::Home(HomeView {
            user: state.user.clone(),
            link: state.link.clone(),
            language: state.summary_language,
            length: state.length,
            loading: state.loading,
            error: state.error.clone(),
            summary: state.summary.clone(),
            video_details: state.video_details.clone(),
        }),
        Page::Settings if state.user.is_none() => View::AccessDenied,
        Page::Settings => View::Settings(SettingsView {
            theme: state.theme,
            ui_lang: state.ui_lang,
        }),
        Page::History if state.user.is_none() => View::AccessDenied,
        Page::History => View::History(HistoryView {
            entries: state.history_entries(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::AuthStatus,
        config::{AppConfig, DEFAULT_BACKEND_URL},
        storage::MemoryStore,
    };

    fn state_with(client_id: Option<&str>) -> AppState<MemoryStore> {
        let config = AppConfig::new(DEFAULT_BACKEND_URL, client_id.map(String::from));
        AppState::new(config, MemoryStore::new())
    }

    fn sign_in(state: &mut AppState<MemoryStore>) {
        state.apply_auth_status(Some(AuthStatus {
            logged_in: true,
            user: Some(User {
                email: "u@example.com".into(),
                name: "U".into(),
                picture: "p".into(),
            }),
        }));
    }

    #[test]
    fn missing_client_id_wins_over_everything() {
        let mut state = state_with(None);
        sign_in(&mut state);
        state.navigate(Page::Settings);
        assert_eq!(project(&state), View::ConfigError);
    }

    #[test]
    fn gated_pages_deny_access_without_a_session() {
        let mut state = state_with(Some("client-123"));

        state.navigate(Page::Settings);
        assert_eq!(project(&state), View::AccessDenied);

        state.navigate(Page::History);
        assert_eq!(project(&state), View::AccessDenied);

        // Home stays reachable either way.
        state.navigate(Page::Home);
        assert!(matches!(project(&state), View::Home(_)));
    }

    #[test]
    fn gated_pages_open_with_a_session() {
        let mut state = state_with(Some("client-123"));
        sign_in(&mut state);

        state.navigate(Page::Settings);
        assert!(matches!(project(&state), View::Settings(_)));

        state.navigate(Page::History);
        match project(&state) {
            View::History(history) => assert!(history.is_empty()),
            other => panic!("expected history view, got {other:?}"),
        }
    }
}

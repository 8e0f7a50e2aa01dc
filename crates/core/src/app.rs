//! Application state and its transitions.
//!
//! The state is owned by a single logical owner and mutated only by these
//! synchronous transitions; async work (the session check, logout, and
//! summarize calls) happens outside and feeds its result back in through an
//! `apply_*` transition. Rendering is a separate projection in [`crate::view`].

use chrono::Utc;

use crate::{
    client::{self, AuthStatus, SummarizeResponse},
    config::AppConfig,
    error::{CompentubeError, Result},
    history,
    i18n::{self, UiLang},
    languages::{self, SummaryLanguage},
    storage::KvStore,
    types::{HistoryEntry, SummaryLength, Theme, User, VideoDetails},
};

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// The closed set of pages. `Settings` and `History` are login-gated at
/// projection time; navigation itself is never refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Settings,
    History,
}

pub struct AppState<S: KvStore> {
    pub config: AppConfig,
    store: S,
    pub user: Option<User>,
    pub page: Page,
    pub theme: Theme,
    pub ui_lang: UiLang,

    // Home page form fields.
    pub link: String,
    pub summary_language: SummaryLanguage,
    pub length: SummaryLength,

    // Transient summarization state, cleared by every navigation.
    pub summary: Option<String>,
    pub video_details: Option<VideoDetails>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<S: KvStore> AppState<S> {
    /// Build the initial state from config and persisted preferences. The
    /// session itself is established by exactly one `auth_status` call per
    /// application load, applied via [`AppState::apply_auth_status`].
    pub fn new(config: AppConfig, store: S) -> Self {
        let theme = store
            .get(THEME_KEY)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default();
        let ui_lang = store
            .get(LANGUAGE_KEY)
            .map(|v| UiLang::parse(&v))
            .unwrap_or_default();
        Self {
            config,
            store,
            user: None,
            page: Page::Home,
            theme,
            ui_lang,
            link: String::new(),
            summary_language: languages::default_language(),
            length: SummaryLength::default(),
            summary: None,
            video_details: None,
            loading: false,
            error: None,
        }
    }

    /// Missing OAuth client id: the whole app renders a configuration error
    /// screen and nothing else initializes.
    pub fn config_missing(&self) -> bool {
        self.config.google_client_id.is_none()
    }

    /// Interface string for the current language.
    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::t(self.ui_lang, key)
    }

    /// Result of the startup session check. Anything short of a positive
    /// logged-in flag with a user leaves the session unset; there is no retry.
    pub fn apply_auth_status(&mut self, status: Option<AuthStatus>) {
        if let Some(AuthStatus {
            logged_in: true,
            user: Some(user),
        }) = status
        {
            self.user = Some(user);
        }
    }

    /// The external OAuth flow: a full page navigation to this URL. No in-app
    /// state transition happens; the session resumes via the status check on
    /// the next load.
    pub fn login_url(&self) -> Result<String> {
        let client_id = self.config.require_client_id()?;
        Ok(client::google_auth_url(&self.config.backend_url, client_id))
    }

    /// Called when the logout request completes, successfully or not.
    pub fn logout_complete(&mut self) {
        self.user = None;
        self.page = Page::Home;
        self.clear_transient();
    }

    /// Every navigation clears the transient summarization state, regardless
    /// of origin and destination.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.clear_transient();
    }

    fn clear_transient(&mut self) {
        self.summary = None;
        self.video_details = None;
        self.error = None;
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = link.into();
    }

    pub fn set_summary_language(&mut self, language: SummaryLanguage) {
        self.summary_language = language;
    }

    pub fn set_length(&mut self, length: SummaryLength) {
        self.length = length;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    pub fn set_ui_lang(&mut self, lang: UiLang) {
        self.ui_lang = lang;
        self.store.set(LANGUAGE_KEY, lang.as_str());
    }

    /// Local preconditions for a summarize request. Checked before anything
    /// touches the network.
    pub fn validate_summarize(&self) -> Result<()> {
        if self.user.is_none() {
            return Err(CompentubeError::SignInRequired);
        }
        if self.link.is_empty() {
            return Err(CompentubeError::MissingLink);
        }
        Ok(())
    }

    /// Enter the loading state for a submission. Returns false (and surfaces
    /// the validation error) when preconditions fail or a request is already
    /// in flight; the caller only issues the network call on true.
    pub fn begin_summarize(&mut self) -> bool {
        if self.loading {
            return false;
        }
        if let Err(e) = self.validate_summarize() {
            self.error = Some(self.error_message(&e));
            return false;
        }
        self.loading = true;
        self.error = None;
        self.summary = None;
        self.video_details = None;
        true
    }

    /// Completion of the summarize request. On success the result becomes
    /// page state and a derived entry is prepended to the user's history,
    /// synchronously and without rollback. On failure nothing stored changes.
    pub fn apply_summarize(&mut self, result: Result<SummarizeResponse>) {
        self.loading = false;
        match result {
            Ok(response) => {
                self.summary = Some(response.summary.clone());
                self.video_details = Some(response.video_details.clone());
                if let Some(user) = self.user.clone() {
                    let now = Utc::now();
                    let entry = HistoryEntry {
                        id: now.timestamp_millis(),
                        video_details: response.video_details,
                        summary: response.summary,
                        date: now.to_rfc3339(),
                    };
                    history::append(&mut self.store, &user.email, entry);
                }
            }
            Err(e) => {
                self.error = Some(self.error_message(&e));
            }
        }
    }

    /// History list for the current user, newest first.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        match &self.user {
            Some(user) => history::load(&self.store, &user.email),
            None => Vec::new(),
        }
    }

    pub fn delete_history_entry(&mut self, id: i64) -> bool {
        let Some(user) = self.user.clone() else {
            return false;
        };
        history::delete(&mut self.store, &user.email, id)
    }

    /// User-facing text for a failure: local validation errors are
    /// translated, backend messages are shown verbatim.
    fn error_message(&self, error: &CompentubeError) -> String {
        match error {
            CompentubeError::SignInRequired => self.t("summaryError").to_string(),
            CompentubeError::MissingLink => self.t("linkError").to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DEFAULT_BACKEND_URL,
        storage::MemoryStore,
        types::VideoDetails,
    };

    fn configured() -> AppConfig {
        AppConfig::new(DEFAULT_BACKEND_URL, Some("client-123".into()))
    }

    fn signed_in_state() -> AppState<MemoryStore> {
        let mut state = AppState::new(configured(), MemoryStore::new());
        state.apply_auth_status(Some(AuthStatus {
            logged_in: true,
            user: Some(User {
                email: "u@example.com".into(),
                name: "U".into(),
                picture: "p".into(),
            }),
        }));
        state
    }

    fn response(id: &str, summary: &str) -> SummarizeResponse {
        SummarizeResponse {
            summary: summary.to_string(),
            video_details: VideoDetails {
                id: id.to_string(),
                title: "T".into(),
                channel: "C".into(),
                channel_id: "CID".into(),
                thumbnail: "U".into(),
            },
        }
    }

    #[test]
    fn negative_or_failed_status_leaves_user_unset() {
        let mut state = AppState::new(configured(), MemoryStore::new());
        state.apply_auth_status(None);
        assert!(state.user.is_none());
        state.apply_auth_status(Some(AuthStatus::logged_out()));
        assert!(state.user.is_none());
    }

    #[test]
    fn navigation_always_clears_transient_state() {
        let mut state = signed_in_state();
        state.summary = Some("old".into());
        state.video_details = Some(response("x", "s").video_details);
        state.error = Some("stale".into());

        state.navigate(Page::History);
        assert_eq!(state.page, Page::History);
        assert!(state.summary.is_none());
        assert!(state.video_details.is_none());
        assert!(state.error.is_none());

        state.summary = Some("old".into());
        state.navigate(Page::Home);
        assert!(state.summary.is_none());
    }

    #[test]
    fn submit_without_session_fails_locally() {
        let mut state = AppState::new(configured(), MemoryStore::new());
        state.set_link("https://youtu.be/abc123");

        assert!(!state.begin_summarize());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Please sign in to generate a summary.")
        );
    }

    #[test]
    fn submit_with_empty_link_fails_locally() {
        let mut state = signed_in_state();

        assert!(!state.begin_summarize());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Please paste a YouTube link first.")
        );
    }

    #[test]
    fn validation_errors_are_translated() {
        let mut state = signed_in_state();
        state.set_ui_lang(UiLang::Tr);

        assert!(!state.begin_summarize());
        assert_eq!(
            state.error.as_deref(),
            Some("Lütfen önce bir YouTube bağlantısı yapıştırın.")
        );
    }

    #[test]
    fn second_submission_is_blocked_while_loading() {
        let mut state = signed_in_state();
        state.set_link("https://youtu.be/abc123");

        assert!(state.begin_summarize());
        assert!(state.loading);
        assert!(!state.begin_summarize());
    }

    #[test]
    fn success_stores_result_and_prepends_history() {
        let mut state = signed_in_state();
        state.set_link("abc123");
        state.set_summary_language(languages::by_code("fr").unwrap());
        state.set_length(SummaryLength::Short);

        assert!(state.begin_summarize());
        state.apply_summarize(Ok(response("abc123", "Résumé...")));

        assert!(!state.loading);
        assert_eq!(state.summary.as_deref(), Some("Résumé..."));
        assert_eq!(state.video_details.as_ref().unwrap().id, "abc123");

        let entries = state.history_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary, "Résumé...");
        assert_eq!(entries[0].video_details.id, "abc123");
    }

    #[test]
    fn new_entries_land_at_the_front_and_keep_prior_order() {
        let mut state = signed_in_state();
        state.set_link("one");
        assert!(state.begin_summarize());
        state.apply_summarize(Ok(response("one", "s1")));
        assert!(state.begin_summarize());
        state.apply_summarize(Ok(response("two", "s2")));
        assert!(state.begin_summarize());
        state.apply_summarize(Ok(response("three", "s3")));

        let entries = state.history_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries
                .iter()
                .map(|e| e.video_details.id.as_str())
                .collect::<Vec<_>>(),
            vec!["three", "two", "one"]
        );
    }

    #[test]
    fn backend_error_is_shown_verbatim_and_changes_nothing() {
        let mut state = signed_in_state();
        state.set_link("abc123");

        assert!(state.begin_summarize());
        state.apply_summarize(Err(CompentubeError::Backend {
            message: "quota exceeded".into(),
        }));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("quota exceeded"));
        assert!(state.summary.is_none());
        assert!(state.video_details.is_none());
        assert!(state.history_entries().is_empty());
    }

    #[test]
    fn logout_resets_to_home_and_clears_transients() {
        let mut state = signed_in_state();
        state.navigate(Page::Settings);
        state.summary = Some("s".into());
        state.video_details = Some(response("x", "s").video_details);

        state.logout_complete();
        assert!(state.user.is_none());
        assert_eq!(state.page, Page::Home);
        assert!(state.summary.is_none());
        assert!(state.video_details.is_none());
    }

    #[test]
    fn preferences_persist_through_the_store() {
        let mut state = AppState::new(configured(), MemoryStore::new());
        state.set_theme(Theme::Dark);
        state.set_ui_lang(UiLang::Tr);

        // A fresh state over the same store picks the preferences back up.
        let store = std::mem::take(&mut state.store);
        let state = AppState::new(configured(), store);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.ui_lang, UiLang::Tr);
    }

    #[test]
    fn login_url_needs_the_client_id() {
        let state = AppState::new(AppConfig::new(DEFAULT_BACKEND_URL, None), MemoryStore::new());
        assert!(state.login_url().is_err());

        let state = AppState::new(configured(), MemoryStore::new());
        assert!(state.login_url().unwrap().contains("client_id=client-123"));
    }
}

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod i18n;
pub mod languages;
pub mod storage;
pub mod types;
pub mod view;

pub use app::{AppState, Page, LANGUAGE_KEY, THEME_KEY};
pub use client::{
    google_auth_url, ApiClient, AuthStatus, SummarizeRequest, SummarizeResponse,
};
pub use config::{AppConfig, DEFAULT_BACKEND_URL};
pub use error::{CompentubeError, Result};
pub use i18n::{t, UiLang};
pub use languages::{SummaryLanguage, SUMMARY_LANGUAGES};
pub use storage::{FileStore, KvStore, MemoryStore};
pub use types::{HistoryEntry, SummaryLength, Theme, User, VideoDetails};
pub use view::{project, HistoryView, HomeView, SettingsView, View};

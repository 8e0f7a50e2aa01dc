use std::sync::Arc;

use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Task};

use compentube_core::{
    project, ApiClient, AppConfig, AppState, AuthStatus, CompentubeError, FileStore, Page,
    SummarizeRequest, SummarizeResponse, View,
};

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("Compentube")
        .run()
}

struct App {
    state: AppState<FileStore>,
    client: Option<Arc<ApiClient>>,
}

#[derive(Debug, Clone)]
enum Message {
    AuthChecked(Option<AuthStatus>),
    Navigate(Page),
    LinkChanged(String),
    Summarize,
    Summarized(Result<SummarizeResponse, String>),
    Logout,
    LoggedOut,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::from_env();
        let client = ApiClient::new(&config.backend_url).ok().map(Arc::new);
        let state = AppState::new(config, FileStore::open_default());

        // One session check per application load; skipped entirely when the
        // configuration-error screen is all that will render.
        let task = match &client {
            Some(_) if state.config_missing() => Task::none(),
            Some(client) => {
                let client = Arc::clone(client);
                Task::perform(
                    async move { client.auth_status().await.ok() },
                    Message::AuthChecked,
                )
            }
            None => Task::none(),
        };
        (Self { state, client }, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AuthChecked(status) => self.state.apply_auth_status(status),
            Message::Navigate(page) => self.state.navigate(page),
            Message::LinkChanged(link) => self.state.set_link(link),
            Message::Summarize => {
                if self.state.begin_summarize() {
                    if let Some(client) = &self.client {
                        let client = Arc::clone(client);
                        let link = self.state.link.clone();
                        let language = self.state.summary_language.name;
                        let length = self.state.length;
                        return Task::perform(
                            async move {
                                let request = SummarizeRequest {
                                    youtube_link: &link,
                                    language,
                                    length,
                                };
                                client.summarize(&request).await.map_err(|e| e.to_string())
                            },
                            Message::Summarized,
                        );
                    }
                }
            }
            Message::Summarized(result) => {
                self.state.apply_summarize(
                    result.map_err(|message| CompentubeError::Backend { message }),
                );
            }
            Message::Logout => {
                if let Some(client) = &self.client {
                    let client = Arc::clone(client);
                    return Task::perform(
                        async move {
                            let _ = client.logout().await;
                        },
                        |_| Message::LoggedOut,
                    );
                }
            }
            Message::LoggedOut => self.state.logout_complete(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let nav = row![
            button(text("Compentube")).on_press(Message::Navigate(Page::Home)),
            button(text(self.state.t("settings"))).on_press(Message::Navigate(Page::Settings)),
            button(text(self.state.t("history"))).on_press(Message::Navigate(Page::History)),
            button(text(self.state.t("logout"))).on_press(Message::Logout),
        ]
        .spacing(10);

        let body: Element<'_, Message> = match project(&self.state) {
            View::ConfigError => column![
                text("Configuration Error").size(24),
                text("The Google Client ID is missing. Set GOOGLE_CLIENT_ID and restart."),
            ]
            .spacing(10)
            .into(),
            View::AccessDenied => column![
                text(self.state.t("accessDenied")).size(24),
                text(self.state.t("loginToAccess")),
            ]
            .spacing(10)
            .into(),
            View::Home(home) => {
                let mut page = column![
                    text("Compentube").size(24),
                    text_input(self.state.t("pasteLink"), &self.state.link)
                        .on_input(Message::LinkChanged),
                    button(text(self.state.t("generateSummary")))
                        .on_press_maybe((!home.loading).then_some(Message::Summarize)),
                ]
                .spacing(10);
                if let Some(error) = home.error {
                    page = page.push(text(error));
                }
                if home.loading {
                    page = page.push(text(self.state.t("fetchingTranscript")));
                }
                if let Some(details) = home.video_details {
                    page = page.push(text(details.title));
                }
                if let Some(summary) = home.summary {
                    page = page.push(text(summary));
                }
                page.into()
            }
            View::Settings(settings) => column![
                text(self.state.t("settings")).size(24),
                text(format!("{}: {}", self.state.t("theme"), settings.theme.as_str())),
                text(format!(
                    "{}: {}",
                    self.state.t("interfaceLanguage"),
                    settings.ui_lang.as_str()
                )),
            ]
            .spacing(10)
            .into(),
            View::History(history) => {
                let mut page =
                    column![text(self.state.t("summaryHistory")).size(24)].spacing(10);
                if history.is_empty() {
                    page = page.push(text(self.state.t("noHistory")));
                } else {
                    for entry in history.entries {
                        page = page.push(text(format!(
                            "{} — {}",
                            entry.video_details.title, entry.date
                        )));
                    }
                }
                page.into()
            }
        };

        column![nav, body].padding(20).spacing(20).into()
    }
}

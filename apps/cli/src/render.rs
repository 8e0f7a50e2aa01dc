//! Terminal rendering of the projected view. Pure output: every decision
//! about what is visible was already made by the core projection.

use compentube_core::{
    i18n::{t, UiLang},
    view::{HistoryView, HomeView, SettingsView, View},
    Theme,
};
use console::style;

pub fn render(view: &View, lang: UiLang) {
    println!("{}", style("─".repeat(60)).dim());
    match view {
        View::ConfigError => render_config_error(),
        View::Home(home) => render_home(home, lang),
        View::Settings(settings) => render_settings(settings, lang),
        View::History(history) => render_history(history, lang),
        View::AccessDenied => render_access_denied(lang),
    }
}

fn render_config_error() {
    println!(
        "{} The Google Client ID is missing.",
        style("Configuration Error:").red().bold()
    );
    println!("Set {} in the environment and restart.", style("GOOGLE_CLIENT_ID").yellow());
}

fn render_home(home: &HomeView, lang: UiLang) {
    match &home.user {
        Some(user) => println!(
            "{} {} <{}>",
            style(t(lang, "signedInAs")).dim(),
            style(&user.name).bold(),
            user.email
        ),
        None => println!("{}", style(t(lang, "signInToGetStarted")).yellow()),
    }

    println!(
        "{} {}",
        style(t(lang, "youtubeLink")).bold(),
        if home.link.is_empty() {
            style(t(lang, "pasteLink")).dim().to_string()
        } else {
            home.link.clone()
        }
    );
    println!(
        "{} {}   {} {}",
        style(t(lang, "language")).bold(),
        home.language.name,
        style(t(lang, "summaryLength")).bold(),
        home.length.as_str()
    );

    if let Some(error) = &home.error {
        println!("{} {}", style("✗").red().bold(), style(error).red());
    }

    if home.loading {
        println!("{}", style(t(lang, "fetchingTranscript")).dim());
        return;
    }

    if let Some(details) = &home.video_details {
        println!(
            "\n{} {} {}",
            style("▶").red(),
            style(&details.title).bold(),
            style(format!("by {}", details.channel)).dim()
        );
        println!("  {}", style(details.watch_url()).underlined().dim());
    }

    if let Some(summary) = &home.summary {
        println!("\n{}", style(t(lang, "generatedSummary")).cyan().bold());
        println!("{summary}");
    }
}

fn render_settings(settings: &SettingsView, lang: UiLang) {
    println!("{}", style(t(lang, "settings")).cyan().bold());
    let theme_label = match settings.theme {
        Theme::Dark => t(lang, "darkMode"),
        Theme::Light => t(lang, "lightMode"),
    };
    println!("{} {}", style(t(lang, "theme")).bold(), theme_label);
    println!(
        "{} {}",
        style(t(lang, "interfaceLanguage")).bold(),
        match settings.ui_lang {
            UiLang::En => "English",
            UiLang::Tr => "Türkçe",
        }
    );
}

fn render_history(history: &HistoryView, lang: UiLang) {
    println!("{}", style(t(lang, "summaryHistory")).cyan().bold());
    if history.is_empty() {
        println!("{}", style(t(lang, "noHistory")).dim());
        return;
    }
    for entry in &history.entries {
        println!(
            "\n{} {} {}",
            style(format!("[{}]", entry.id)).dim(),
            style(&entry.video_details.title).bold(),
            style(&entry.date).dim()
        );
        println!("  {}", truncate(&entry.summary, 120));
        println!(
            "  {} {}",
            style(t(lang, "viewOnYouTube")).dim(),
            style(entry.video_details.watch_url()).underlined().dim()
        );
    }
}

fn render_access_denied(lang: UiLang) {
    println!("{}", style(t(lang, "accessDenied")).red().bold());
    println!("{}", t(lang, "loginToAccess"));
    println!(
        "{} {}",
        style("→").dim(),
        style(format!("{}: login", t(lang, "signInToContinue"))).bold()
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use compentube_core::{
    languages, project, ApiClient, AppConfig, AppState, FileStore, SummarizeRequest,
};

use crate::commands::{parse, Command, HELP};
use crate::render::render;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "compentube")]
#[command(about = "Summarize YouTube videos through the Compentube backend")]
struct Cli {
    /// Backend server URL (defaults to COMPENTUBE_BACKEND_URL or http://localhost:5000)
    #[arg(long)]
    backend_url: Option<String>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(url) = cli.backend_url {
        config = AppConfig::new(url, config.google_client_id);
    }

    let client = ApiClient::new(&config.backend_url)?;
    let mut state = AppState::new(config, FileStore::open_default());

    println!(
        "\n{}  {}\n",
        style("compentube").cyan().bold(),
        style("YouTube Summarizer").dim()
    );

    // The session check runs exactly once per application load. With no
    // client id configured nothing else initializes; only the
    // configuration-error screen renders.
    if !state.config_missing() {
        state.apply_auth_status(client.auth_status().await.ok());
    }
    render(&project(&state), state.ui_lang);

    let stdin = io::stdin();
    loop {
        print!("\n{} ", style(">").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                eprintln!("{} {}", style("✗").red().bold(), usage);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Languages => {
                for language in languages::SUMMARY_LANGUAGES {
                    println!("  {}  {}", style(language.code).yellow(), language.name);
                }
                continue;
            }
            Command::Navigate(page) => state.navigate(page),
            Command::Login => match state.login_url() {
                Ok(url) => {
                    println!("Open this URL in a browser to sign in with Google:");
                    println!("  {}", style(&url).underlined());
                    println!("Then restart compentube to pick up the session.");
                    continue;
                }
                Err(e) => {
                    eprintln!("{} {}", style("✗").red().bold(), e);
                    continue;
                }
            },
            Command::Logout => {
                if let Err(e) = client.logout().await {
                    debug!(error = %e, "logout request failed");
                }
                state.logout_complete();
                println!("{} Logged out", style("✓").green().bold());
            }
            Command::SetLink(url) => state.set_link(url),
            Command::SetLanguage(code) => match languages::by_code(&code) {
                Some(language) => state.set_summary_language(language),
                None => {
                    eprintln!(
                        "{} unknown language code: {code} (see `languages`)",
                        style("✗").red().bold()
                    );
                    continue;
                }
            },
            Command::SetLength(length) => state.set_length(length),
            Command::SetUiLang(lang) => state.set_ui_lang(lang),
            Command::ToggleTheme => state.toggle_theme(),
            Command::Delete(id) => {
                if state.delete_history_entry(id) {
                    println!("{} Deleted {id}", style("✓").green().bold());
                } else {
                    println!("{} No entry with id {id}", style("·").dim());
                }
            }
            Command::Summarize(link) => {
                if let Some(link) = link {
                    state.set_link(link);
                }
                if state.begin_summarize() {
                    let spinner = create_spinner(state.t("fetchingTranscript"));
                    let link = state.link.clone();
                    let request = SummarizeRequest {
                        youtube_link: &link,
                        language: state.summary_language.name,
                        length: state.length,
                    };
                    let result = client.summarize(&request).await;
                    state.apply_summarize(result);
                    spinner.finish_and_clear();
                }
            }
        }

        render(&project(&state), state.ui_lang);
    }

    Ok(())
}

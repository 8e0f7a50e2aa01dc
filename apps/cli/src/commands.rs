//! Command language for the interactive prompt.

use compentube_core::{i18n::UiLang, types::SummaryLength, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Page),
    Login,
    Logout,
    /// Submit the current form, optionally setting the link first.
    Summarize(Option<String>),
    SetLink(String),
    SetLanguage(String),
    SetLength(SummaryLength),
    SetUiLang(UiLang),
    ToggleTheme,
    Delete(i64),
    Languages,
    Help,
    Quit,
}

/// Parse one prompt line. Returns `Err` with a short usage hint on anything
/// malformed; blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest = words.collect::<Vec<_>>();

    let command = match head {
        "home" | "h" => Command::Navigate(Page::Home),
        "settings" | "s" => Command::Navigate(Page::Settings),
        "history" => Command::Navigate(Page::History),
        "login" => Command::Login,
        "logout" => Command::Logout,
        "summarize" | "sum" => Command::Summarize(rest.first().map(|s| s.to_string())),
        "link" => match rest.first() {
            Some(url) => Command::SetLink(url.to_string()),
            None => return Err("usage: link <url>".into()),
        },
        "language" | "lang" => match rest.first() {
            Some(code) => Command::SetLanguage(code.to_string()),
            None => return Err("usage: language <code> (see `languages`)".into()),
        },
        "length" => match rest.first().copied() {
            Some("short") => Command::SetLength(SummaryLength::Short),
            Some("detailed") => Command::SetLength(SummaryLength::Detailed),
            _ => return Err("usage: length short|detailed".into()),
        },
        "ui-lang" => match rest.first().copied() {
            Some("en") => Command::SetUiLang(UiLang::En),
            Some("tr") => Command::SetUiLang(UiLang::Tr),
            _ => return Err("usage: ui-lang en|tr".into()),
        },
        "theme" => Command::ToggleTheme,
        "delete" | "del" => match rest.first().and_then(|s| s.parse().ok()) {
            Some(id) => Command::Delete(id),
            None => return Err("usage: delete <id>".into()),
        },
        "languages" => Command::Languages,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Some(command))
}

pub const HELP: &str = "\
  home | settings | history   switch page
  summarize [url]             generate a summary (uses the stored link if omitted)
  link <url>                  set the link without submitting
  language <code>             summary language (see `languages`)
  length short|detailed       summary length
  login | logout              session
  theme                       toggle light/dark
  ui-lang en|tr               interface language
  delete <id>                 remove a history entry
  quit                        leave";

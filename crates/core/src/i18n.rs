//! Interface translations. The summary itself is generated in whatever
//! language the user picked; this table only covers the client chrome.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLang {
    #[default]
    En,
    Tr,
}

impl UiLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiLang::En => "en",
            UiLang::Tr => "tr",
        }
    }

    /// Parse a persisted language code; unknown codes fall back to English.
    pub fn parse(value: &str) -> Self {
        match value {
            "tr" => UiLang::Tr,
            _ => UiLang::En,
        }
    }
}

/// Look up an interface string. Unknown keys echo the key itself, so a
/// missing entry shows up in the UI instead of panicking.
pub fn t(lang: UiLang, key: &'static str) -> &'static str {
    let translated = match lang {
        UiLang::En => english(key),
        UiLang::Tr => turkish(key).or_else(|| english(key)),
    };
    translated.unwrap_or(key)
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "history" => "History",
        "settings" => "Settings",
        "logout" => "Logout",
        "signIn" => "Sign In",
        "signUp" => "Sign Up",
        "signedInAs" => "Signed in as",
        "youtubeLink" => "YouTube Video Link",
        "pasteLink" => "Paste a YouTube link here...",
        "language" => "Language",
        "summaryLength" => "Length",
        "short" => "Short",
        "detailed" => "Detailed",
        "generateSummary" => "Generate Summary",
        "signInToGetStarted" => "Sign in to get started",
        "summaryError" => "Please sign in to generate a summary.",
        "linkError" => "Please paste a YouTube link first.",
        "fetchingTranscript" => "Fetching transcript and generating summary...",
        "generatedSummary" => "Generated Summary",
        "theme" => "Theme",
        "lightMode" => "Light Mode",
        "darkMode" => "Dark Mode",
        "interfaceLanguage" => "Interface Language",
        "summaryHistory" => "Summary History",
        "noHistory" => "You have no saved summaries.",
        "viewOnYouTube" => "View on YouTube",
        "delete" => "Delete",
        "accessDenied" => "Access Denied",
        "loginToAccess" => "Please log in to access this page.",
        "signInToContinue" => "Sign In to Continue",
        _ => return None,
    })
}

fn turkish(key: &str) -> Option<&'static str> {
    Some(match key {
        "history" => "Geçmiş",
        "settings" => "Ayarlar",
        "logout" => "Çıkış Yap",
        "signIn" => "Giriş Yap",
        "signUp" => "Kayıt Ol",
        "signedInAs" => "Giriş yapan kullanıcı",
        "youtubeLink" => "YouTube Video Bağlantısı",
        "pasteLink" => "Buraya bir YouTube bağlantısı yapıştırın...",
        "language" => "Dil",
        "summaryLength" => "Uzunluk",
        "short" => "Kısa",
        "detailed" => "Detaylı",
        "generateSummary" => "Özet Oluştur",
        "signInToGetStarted" => "Başlamak için giriş yapın",
        "summaryError" => "Özet oluşturmak için lütfen giriş yapın.",
        "linkError" => "Lütfen önce bir YouTube bağlantısı yapıştırın.",
        "fetchingTranscript" => "Transkript alınıyor ve özet oluşturuluyor...",
        "generatedSummary" => "Oluşturulan Özet",
        "theme" => "Tema",
        "lightMode" => "Açık Mod",
        "darkMode" => "Karanlık Mod",
        "interfaceLanguage" => "Arayüz Dili",
        "summaryHistory" => "Özet Geçmişi",
        "noHistory" => "Kaydedilmiş özetiniz bulunmamaktadır.",
        "viewOnYouTube" => "YouTube'da Görüntüle",
        "delete" => "Sil",
        "accessDenied" => "Erişim Engellendi",
        "loginToAccess" => "Bu sayfaya erişmek için lütfen giriş yapın.",
        "signInToContinue" => "Devam Etmek İçin Giriş Yap",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_languages() {
        assert_eq!(t(UiLang::En, "history"), "History");
        assert_eq!(t(UiLang::Tr, "history"), "Geçmiş");
    }

    #[test]
    fn unknown_key_echoes_the_key() {
        assert_eq!(t(UiLang::En, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn unknown_lang_code_falls_back_to_english() {
        assert_eq!(UiLang::parse("de"), UiLang::En);
        assert_eq!(UiLang::parse("tr"), UiLang::Tr);
    }
}

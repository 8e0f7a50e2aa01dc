//! Static reference data: the languages a summary can be generated in.

/// A `{code, name}` pair offered in the summary language picker. The backend
/// receives the human-readable name, not the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

pub const SUMMARY_LANGUAGES: [SummaryLanguage; 13] = [
    SummaryLanguage { code: "en", name: "English" },
    SummaryLanguage { code: "es", name: "Spanish" },
    SummaryLanguage { code: "fr", name: "French" },
    SummaryLanguage { code: "de", name: "German" },
    SummaryLanguage { code: "it", name: "Italian" },
    SummaryLanguage { code: "pt", name: "Portuguese" },
    SummaryLanguage { code: "ru", name: "Russian" },
    SummaryLanguage { code: "ja", name: "Japanese" },
    SummaryLanguage { code: "ko", name: "Korean" },
    SummaryLanguage { code: "zh", name: "Chinese" },
    SummaryLanguage { code: "ar", name: "Arabic" },
    SummaryLanguage { code: "hi", name: "Hindi" },
    SummaryLanguage { code: "tr", name: "Turkish" },
];

pub fn by_code(code: &str) -> Option<SummaryLanguage> {
    SUMMARY_LANGUAGES.iter().copied().find(|l| l.code == code)
}

/// The picker default (first entry, English).
pub fn default_language() -> SummaryLanguage {
    SUMMARY_LANGUAGES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        assert_eq!(by_code("fr").unwrap().name, "French");
        assert!(by_code("xx").is_none());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(default_language().code, "en");
    }
}

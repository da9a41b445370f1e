//! Rendering options and configuration.

/// The language used for the fixed messages of ERROR and confirmation cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Picks a language from a code such as `es` or `es_AR`. Anything that is
    /// not Spanish is English.
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['_', '-']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Language::Spanish
        } else {
            Language::English
        }
    }

    /// Returns the message text for this language.
    pub(crate) fn pick(self, english: &'static str, spanish: &'static str) -> &'static str {
        match self {
            Language::English => english,
            Language::Spanish => spanish,
        }
    }
}

/// Options for rendering result cells.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Language for built-in messages.
    pub language: Language,
}

impl RenderOptions {
    /// Options with the given message language.
    pub fn with_language(language: Language) -> Self {
        Self { language }
    }
}

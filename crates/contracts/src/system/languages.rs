use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::UserStatus;

/// Language pack for outgoing alerts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguage {
    pub code: String,
    pub name: String,
    pub status: UserStatus,
    pub messages: u32,
    pub audio: bool,
}

impl SupportedLanguage {
    pub fn audio_label(&self) -> &'static str {
        if self.audio {
            "Audio Ready"
        } else {
            "Text Only"
        }
    }
}

static LANGUAGES: Lazy<Vec<SupportedLanguage>> = Lazy::new(|| {
    [
        ("en", "English", UserStatus::Active, 45, true),
        ("hi", "Hindi", UserStatus::Active, 38, true),
        ("as", "Assamese", UserStatus::Active, 42, false),
        ("bn", "Bengali", UserStatus::Active, 35, false),
        ("or", "Odia", UserStatus::Inactive, 0, false),
    ]
    .into_iter()
    .map(|(code, name, status, messages, audio)| SupportedLanguage {
        code: code.into(),
        name: name.into(),
        status,
        messages,
        audio,
    })
    .collect()
});

/// Interface languages offered on the login screen, (code, label)
pub const LOGIN_LANGUAGES: [(&str, &str); 4] = [
    ("en", "English"),
    ("hi", "हिन्दी (Hindi)"),
    ("as", "অসমীয়া (Assamese)"),
    ("bn", "বাংলা (Bengali)"),
];

pub fn supported_languages() -> &'static [SupportedLanguage] {
    &LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_packs() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 5);
        assert_eq!(langs[0].audio_label(), "Audio Ready");
        assert_eq!(langs[2].audio_label(), "Text Only");
        assert_eq!(langs[4].messages, 0);
    }

    #[test]
    fn test_login_languages_are_active_packs() {
        for (code, _) in LOGIN_LANGUAGES {
            let pack = supported_languages().iter().find(|l| l.code == code).unwrap();
            assert_eq!(pack.status, UserStatus::Active);
        }
        assert_eq!(LOGIN_LANGUAGES[1].1, "हिन्दी (Hindi)");
    }

    #[test]
    fn test_active_count() {
        let active = supported_languages()
            .iter()
            .filter(|l| l.status == UserStatus::Active)
            .count();
        assert_eq!(active, 4);
    }
}

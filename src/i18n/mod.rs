//! i18n - Internationalization Module
//!
//! Locale selection on top of the `rust-i18n` catalogs in `locales/`.

use crate::constants::DEFAULT_LOCALE;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Catalog code used for lookups
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => DEFAULT_LOCALE,
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Map a user or system locale string (`zh`, `zh_CN`, `en-US`, ...) to a
    /// supported locale. Unknown languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "zh" => Locale::ZhCN,
            _ => Locale::EnUS,
        }
    }
}

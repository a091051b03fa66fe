//! Global UI state shared through context signals.
//!
//! The web shell provides `Signal<Lang>` and `Signal<Theme>` at the app root;
//! components subscribe with the `use_*` helpers below. Components keep
//! rendering with the defaults when no provider exists (tests, previews).

use dioxus::prelude::*;

/// Site locale. `en` is the default; `ar` flips the document to RTL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

    /// URL segment and `Accept-Language` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Fluent locale tag for the translation loader.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Lang::En => "en-US",
            Lang::Ar => "ar-SA",
        }
    }

    /// Document direction for this locale.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    /// Short label for the locale picker.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ar => "AR",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Lang::Ar)
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for URL segments that are not a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{0}`")]
pub struct UnknownLang(pub String);

impl std::str::FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "en" => Ok(Lang::En),
            "ar" => Ok(Lang::Ar),
            other => Err(UnknownLang(other.to_owned())),
        }
    }
}

/// Current locale, falling back to the default when no provider exists.
pub fn use_lang() -> Lang {
    let lang: Option<Signal<Lang>> = try_use_context::<Signal<Lang>>();
    lang.as_ref().map(|s| (*s)()).unwrap_or_default()
}

/// Color theme cycled by the theme switcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Brown,
    White,
    Dark,
}

impl Theme {
    /// Cycle order matches the switcher: brown -> white -> dark -> brown.
    pub fn next(self) -> Theme {
        match self {
            Theme::Brown => Theme::White,
            Theme::White => Theme::Dark,
            Theme::Dark => Theme::Brown,
        }
    }

    /// Modifier class applied to the site shell.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Brown => "site--theme-brown",
            Theme::White => "site--theme-white",
            Theme::Dark => "site--theme-dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_round_trips_through_its_url_segment() {
        for lang in Lang::ALL {
            assert_eq!(lang.as_str().parse::<Lang>(), Ok(lang));
        }
    }

    #[test]
    fn unknown_locales_are_rejected() {
        assert!("fr".parse::<Lang>().is_err());
        assert!("".parse::<Lang>().is_err());
    }

    #[test]
    fn arabic_is_rtl() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert!(Lang::Ar.is_rtl());
        assert_eq!(Lang::En.dir(), "ltr");
    }

    #[test]
    fn theme_cycle_wraps() {
        assert_eq!(Theme::Brown.next(), Theme::White);
        assert_eq!(Theme::White.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Brown);
    }
}

// Preference model - 테마/언어 선호 설정
//
// 저장소에는 문자열로 저장되며, 읽을 수 없는 값은 기본값(light/en)으로 처리

/// 색상 테마
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 이름으로 테마 조회 (알 수 없는 이름은 None)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// 반대 테마
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 테마 버튼을 식별하는 클래스
    pub fn button_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }
}

/// 페이지 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub enum Language {
    #[default]
    English,
    Russian,
    Armenian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Russian, Language::Armenian];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Armenian => "hy",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "ru" => Some(Language::Russian),
            "hy" => Some(Language::Armenian),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Russian => "RU",
            Language::Armenian => "HY",
        }
    }

    /// 언어 버튼을 식별하는 클래스
    pub fn button_class(self) -> &'static str {
        match self {
            Language::English => "en-lang",
            Language::Russian => "ru-lang",
            Language::Armenian => "hy-lang",
        }
    }
}

/// 저장소 키 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Theme,
    Language,
}

impl Category {
    /// 저장소 키 이름
    pub fn storage_key(self) -> &'static str {
        match self {
            Category::Theme => "pageTheme",
            Category::Language => "pageLang",
        }
    }

    /// 값이 없거나 인식할 수 없을 때 사용할 기본값
    pub fn default_value(self) -> &'static str {
        match self {
            Category::Theme => Theme::default().name(),
            Category::Language => Language::default().code(),
        }
    }

    /// 해당 분류에서 유효한 값인지 확인
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Category::Theme => Theme::from_name(value).is_some(),
            Category::Language => Language::from_code(value).is_some(),
        }
    }
}

/// 현재 선호 설정 (분류별 정확히 하나의 값)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preference {
    pub theme: Theme,
    pub language: Language,
}

//! 액션 시스템: 키 바인딩과 커맨드바 힌트를 한곳에서 정의

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Theme
    ToggleTheme,
    ThemeLight,
    ThemeDark,
    // Language
    LanguageEnglish,
    LanguageRussian,
    LanguageArmenian,
    // Input
    FocusSearch,
    CycleFocus,
    // Navigation
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    // System
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::ToggleTheme,
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::ThemeLight,
        command_bar: None,
    },
    ActionDef {
        action: Action::ThemeDark,
        command_bar: None,
    },
    ActionDef {
        action: Action::LanguageEnglish,
        command_bar: Some(CommandBarEntry {
            key: "1/2/3",
            label: "EN/RU/HY",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::LanguageRussian,
        command_bar: None,
    },
    ActionDef {
        action: Action::LanguageArmenian,
        command_bar: None,
    },
    ActionDef {
        action: Action::FocusSearch,
        command_bar: Some(CommandBarEntry {
            key: "/",
            label: "Search",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::CycleFocus,
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Inputs",
            priority: 31,
        }),
    },
    ActionDef {
        action: Action::ScrollUp,
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Scroll",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::ScrollDown,
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        command_bar: None,
    },
    ActionDef {
        action: Action::ScrollTop,
        command_bar: None,
    },
    ActionDef {
        action: Action::Quit,
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let plain = |c: char, action: Action| KeyBinding {
        code: KeyCode::Char(c),
        modifiers: Some(KeyModifiers::NONE),
        action,
    };

    vec![
        // 종료
        plain('q', Action::Quit),
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 테마
        plain('t', Action::ToggleTheme),
        plain('l', Action::ThemeLight),
        plain('d', Action::ThemeDark),
        // 언어
        plain('1', Action::LanguageEnglish),
        plain('2', Action::LanguageRussian),
        plain('3', Action::LanguageArmenian),
        // 입력
        plain('/', Action::FocusSearch),
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::CycleFocus,
        },
        // 스크롤
        plain('j', Action::ScrollDown),
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::ScrollDown,
        },
        plain('k', Action::ScrollUp),
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::ScrollUp,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: None,
            action: Action::PageDown,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: None,
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::ScrollTop,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

/// 커맨드바 힌트 (우선순위 순)
pub fn command_bar_hints() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();
    entries.sort_by_key(|cb| cb.priority);
    entries.into_iter().map(|cb| (cb.key, cb.label)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_has_a_def() {
        for binding in key_bindings() {
            assert!(
                ACTION_DEFS.iter().any(|d| d.action == binding.action),
                "{:?}",
                binding.action
            );
        }
    }

    #[test]
    fn test_find_action_plain_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('t')),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('3')),
            Some(Action::LanguageArmenian)
        );
        assert_eq!(find_action(KeyModifiers::SHIFT, KeyCode::Char('t')), None);
    }

    #[test]
    fn test_find_action_any_modifier() {
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Tab),
            Some(Action::CycleFocus)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_command_bar_hints_sorted() {
        let hints = command_bar_hints();
        assert_eq!(hints.first(), Some(&("t", "Theme")));
        assert_eq!(hints.last(), Some(&("q", "Quit")));
    }
}

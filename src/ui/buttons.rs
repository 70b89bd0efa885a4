// Button state synchronizer - 테마/언어 버튼 활성 표시 동기화

use crate::models::{Document, Emphasis, Language, Theme};

pub const THEME_BUTTON_CLASS: &str = "theme-btn";
pub const LANG_BUTTON_CLASS: &str = "lang-btn";
pub const ACTIVE_CLASS: &str = "active";

/// 모든 테마/언어 버튼의 활성 표시와 강조를 지운 뒤,
/// 현재 값에 해당하는 테마 버튼 하나와 언어 버튼 하나만 다시 표시합니다.
pub fn sync_buttons(doc: &mut Document, theme: Theme, language: Language) {
    for class in [THEME_BUTTON_CLASS, LANG_BUTTON_CLASS] {
        for id in doc.ids_with_class(class) {
            doc.set_class(&id, ACTIVE_CLASS, false);
            doc.set_emphasis(&id, None);
        }
    }

    if let Some(id) = doc.find_with_classes(THEME_BUTTON_CLASS, theme.button_class()) {
        doc.set_class(&id, ACTIVE_CLASS, true);
        doc.set_emphasis(&id, Some(Emphasis::Pulse));
    }

    if let Some(id) = doc.find_with_classes(LANG_BUTTON_CLASS, language.button_class()) {
        doc.set_class(&id, ACTIVE_CLASS, true);
    }
}

/// 활성 표시된 버튼 식별자 목록
#[cfg(test)]
pub fn active_buttons(doc: &Document, class: &str) -> Vec<String> {
    doc.ids_with_class(class)
        .into_iter()
        .filter(|id| doc.element(id).is_some_and(|el| el.has_class(ACTIVE_CLASS)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::landing::landing_document;
    use proptest::prelude::*;

    fn theme_strategy() -> impl Strategy<Value = Theme> {
        prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
    }

    fn language_strategy() -> impl Strategy<Value = Language> {
        prop_oneof![
            Just(Language::English),
            Just(Language::Russian),
            Just(Language::Armenian),
        ]
    }

    #[test]
    fn test_marks_matching_buttons() {
        let mut doc = landing_document();
        sync_buttons(&mut doc, Theme::Dark, Language::Armenian);

        assert_eq!(active_buttons(&doc, THEME_BUTTON_CLASS), vec!["themeDark"]);
        assert_eq!(active_buttons(&doc, LANG_BUTTON_CLASS), vec!["langHy"]);
        assert_eq!(
            doc.element("themeDark").unwrap().emphasis,
            Some(Emphasis::Pulse)
        );
        assert_eq!(doc.element("themeLight").unwrap().emphasis, None);
    }

    proptest! {
        #[test]
        fn prop_exactly_one_active_per_group(
            history in prop::collection::vec((theme_strategy(), language_strategy()), 0..6),
            theme in theme_strategy(),
            language in language_strategy(),
        ) {
            let mut doc = landing_document();
            for (t, l) in history {
                sync_buttons(&mut doc, t, l);
            }
            // 외부에서 엉뚱하게 표시된 상태도 정리되어야 함
            doc.set_class("langRu", ACTIVE_CLASS, true);
            doc.set_emphasis("themeLight", Some(Emphasis::Shake));

            sync_buttons(&mut doc, theme, language);

            let themes = active_buttons(&doc, THEME_BUTTON_CLASS);
            let langs = active_buttons(&doc, LANG_BUTTON_CLASS);
            prop_assert_eq!(themes.len(), 1);
            prop_assert_eq!(langs.len(), 1);
            prop_assert!(doc.element(&themes[0]).unwrap().has_class(theme.button_class()));
            prop_assert!(doc.element(&langs[0]).unwrap().has_class(language.button_class()));

            let emphasized = doc
                .ids_with_class(THEME_BUTTON_CLASS)
                .into_iter()
                .chain(doc.ids_with_class(LANG_BUTTON_CLASS))
                .filter(|id| doc.element(id).unwrap().emphasis.is_some())
                .count();
            prop_assert_eq!(emphasized, 1);
        }
    }
}

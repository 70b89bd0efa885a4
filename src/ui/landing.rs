// Landing page markup - 페이지 요소 구성
//
// 로직이 기대하는 모든 요소 식별자/클래스를 가진 문서를 만듭니다.
// 텍스트는 비워 두고 언어 적용기가 채웁니다.

use crate::core::feedback::SEARCH_LABEL;
use crate::models::{Document, Element, Language, Theme};
use crate::ui::buttons::{LANG_BUTTON_CLASS, THEME_BUTTON_CLASS};

pub const SEARCH_INPUT: &str = "searchPlaceholder";
pub const SEARCH_BUTTON: &str = "searchBtn";
pub const CONTACT_INPUT: &str = "footInput";
pub const SUBMIT_BUTTON: &str = "footBtn";
pub const STAT_NUMBER_CLASS: &str = "stat-number";

/// 통계 항목: (숫자 요소, 라벨 키, 목표값, 초기 텍스트)
pub const STATS: [(&str, &str, u64, &str); 3] = [
    ("statNum1", "stat1", 150, "0+"),
    ("statNum2", "stat2", 25, "0+"),
    ("statNum3", "stat3", 98, "0%"),
];

/// 서비스 카드와 상세(모달) 내용
#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub detail_title: &'static str,
    pub detail_sub: &'static str,
    pub detail_heading: &'static str,
    pub detail_desc: &'static str,
    pub list: &'static str,
    pub action: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "feature1",
        desc: "feature1desc",
        detail_title: "modal1Title",
        detail_sub: "modal1Sub",
        detail_heading: "modal1DetailT",
        detail_desc: "modal1Desc",
        list: "modal1List",
        action: "modal1Action",
    },
    FeatureCard {
        title: "feature2",
        desc: "feature2desc",
        detail_title: "modal2Title",
        detail_sub: "modal2Sub",
        detail_heading: "modal2DetailT",
        detail_desc: "modal2Desc",
        list: "modal2List",
        action: "modal2Action",
    },
    FeatureCard {
        title: "feature3",
        desc: "feature3desc",
        detail_title: "modal3Title",
        detail_sub: "modal3Sub",
        detail_heading: "modal3DetailT",
        detail_desc: "modal3Desc",
        list: "modal3List",
        action: "modal3Action",
    },
];

/// 최근 프로젝트: (제목, 설명, 날짜)
pub const RECENT_PROJECTS: [(&str, &str, &str); 4] = [
    ("recent1", "recent1desc", "recent1date"),
    ("recent2", "recent2desc", "recent2date"),
    ("recent3", "recent3desc", "recent3date"),
    ("recent4", "recent4desc", "recent4date"),
];

/// 빠른 작업 카드
#[derive(Debug, Clone, Copy)]
pub struct LinkCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub button: &'static str,
    pub drop_title: &'static str,
    pub drop_items: [&'static str; 3],
}

pub const LINK_CARDS: [LinkCard; 3] = [
    LinkCard {
        title: "link1",
        desc: "link1desc",
        button: "link1btn",
        drop_title: "sideDropTitle1",
        drop_items: ["sideDrop1_1", "sideDrop1_2", "sideDrop1_3"],
    },
    LinkCard {
        title: "link2",
        desc: "link2desc",
        button: "link2btn",
        drop_title: "sideDropTitle2",
        drop_items: ["sideDrop2_1", "sideDrop2_2", "sideDrop2_3"],
    },
    LinkCard {
        title: "link3",
        desc: "link3desc",
        button: "link3btn",
        drop_title: "sideDropTitle3",
        drop_items: ["sideDrop3_1", "sideDrop3_2", "sideDrop3_3"],
    },
];

/// 푸터 열: (제목, 링크 목록)
pub const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("footH1", ["footL1", "footL2", "footL3", "footL4"]),
    ("footH2", ["footL5", "footL6", "footL7", "footL8"]),
    ("footH3", ["footL9", "footL10", "footL11", "footL12"]),
];

/// 테마 버튼 식별자
pub fn theme_button_id(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "themeLight",
        Theme::Dark => "themeDark",
    }
}

/// 언어 버튼 식별자
pub fn language_button_id(language: Language) -> &'static str {
    match language {
        Language::English => "langEn",
        Language::Russian => "langRu",
        Language::Armenian => "langHy",
    }
}

/// 텍스트 요소 식별자 (언어 적용기가 채움)
const TEXT_IDS: &[&str] = &[
    "logoText",
    "title",
    "subTitle",
    "stat1",
    "stat2",
    "stat3",
    "featuresTitle",
    "recentTitle",
    "linksTitle",
    "donateTitle",
    "donateDesc",
    "donateBtn",
    "footH4",
    "copyright",
];

/// 랜딩 페이지 문서 생성
pub fn landing_document() -> Document {
    let mut doc = Document::new();

    for id in TEXT_IDS {
        doc.insert(id, Element::new());
    }

    for theme in Theme::ALL {
        let glyph = match theme {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        };
        doc.insert(
            theme_button_id(theme),
            Element::new()
                .with_text(glyph)
                .with_class(THEME_BUTTON_CLASS)
                .with_class(theme.button_class()),
        );
    }

    for language in Language::ALL {
        doc.insert(
            language_button_id(language),
            Element::new()
                .with_text(language.display_name())
                .with_class(LANG_BUTTON_CLASS)
                .with_class(language.button_class()),
        );
    }

    doc.insert(SEARCH_INPUT, Element::new().with_class("search-input"));
    doc.insert(
        SEARCH_BUTTON,
        Element::new().with_text(SEARCH_LABEL).with_class("search-btn"),
    );

    for (number, _, count, initial) in STATS {
        doc.insert(
            number,
            Element::new()
                .with_text(initial)
                .with_data_count(count)
                .with_class(STAT_NUMBER_CLASS),
        );
    }

    for card in FEATURE_CARDS {
        for id in [
            card.title,
            card.desc,
            card.detail_title,
            card.detail_sub,
            card.detail_heading,
            card.detail_desc,
            card.list,
            card.action,
        ] {
            doc.insert(id, Element::new());
        }
    }

    for (title, desc, date) in RECENT_PROJECTS {
        for id in [title, desc, date] {
            doc.insert(id, Element::new());
        }
    }

    for card in LINK_CARDS {
        for id in [card.title, card.desc, card.button, card.drop_title] {
            doc.insert(id, Element::new());
        }
        for id in card.drop_items {
            doc.insert(id, Element::new());
        }
    }

    for (heading, links) in FOOTER_COLUMNS {
        doc.insert(heading, Element::new());
        for id in links {
            doc.insert(id, Element::new());
        }
    }

    doc.insert(CONTACT_INPUT, Element::new().with_class("contact-input"));
    doc.insert(SUBMIT_BUTTON, Element::new().with_class("submit-btn"));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::{TranslationTable, MODAL_LIST_BINDINGS};

    #[test]
    fn test_every_text_element_has_a_translation() {
        let table = TranslationTable::bundled().unwrap();
        let entries = table.entries(Language::English).unwrap();
        let doc = landing_document();

        for id in TEXT_IDS {
            assert!(entries.contains_key(*id), "{}", id);
        }
        for card in LINK_CARDS {
            assert!(entries.contains_key(card.title));
            assert!(doc.contains(card.drop_items[2]));
        }
    }

    #[test]
    fn test_modal_list_containers_exist() {
        let doc = landing_document();
        for binding in MODAL_LIST_BINDINGS {
            assert!(doc.contains(binding.container));
        }
    }

    #[test]
    fn test_stat_numbers_are_tagged() {
        let doc = landing_document();
        assert_eq!(doc.ids_with_class(STAT_NUMBER_CLASS).len(), STATS.len());
        assert_eq!(doc.element("statNum3").unwrap().data_count, Some(98));
    }
}

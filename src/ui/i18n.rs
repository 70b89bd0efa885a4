//! 번역 테이블과 언어 적용기
//!
//! 번역 키와 같은 식별자를 가진 요소의 텍스트를 언어별 값으로 덮어씁니다.
//! 키마다 한 번 정해지는 종류(FieldKind)로 목록 항목 키와 placeholder 키를
//! 일반 텍스트 갱신에서 제외합니다.

use crate::models::{Category, Document, Language};
use crate::system::PreferenceStore;
use crate::utils::error::{LandpageError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// 검색 입력 요소 식별자이자 placeholder 번역 키
pub const SEARCH_PLACEHOLDER_KEY: &str = "searchPlaceholder";
/// placeholder 번역이 없을 때 사용하는 문구
pub const SEARCH_PLACEHOLDER_FALLBACK: &str = "Describe your project idea...";
/// 타이핑 효과 문구 목록 키
pub const TYPING_PHRASES_KEY: &str = "typingPhrases";

const BUNDLED_LOCALES: [(Language, &str); 3] = [
    (Language::English, include_str!("../../locales/en.toml")),
    (Language::Russian, include_str!("../../locales/ru.toml")),
    (Language::Armenian, include_str!("../../locales/hy.toml")),
];

/// 번역 값: 단일 문자열 또는 순서 있는 문자열 목록
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    List(Vec<String>),
}

impl TranslationValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TranslationValue::Text(_) => None,
            TranslationValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(s: &str) -> Self {
        TranslationValue::Text(s.to_string())
    }
}

pub type LanguageEntries = BTreeMap<String, TranslationValue>;

/// 언어별 번역 테이블 (시작 시 한 번 로드, 이후 불변)
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    languages: BTreeMap<Language, LanguageEntries>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 로케일 파일 로드
    pub fn bundled() -> Result<Self> {
        let mut table = Self::new();
        for (language, source) in BUNDLED_LOCALES {
            table.load_toml(language, source)?;
        }
        for language in Language::ALL {
            let missing = table.missing_keys(language);
            let extra = table.extra_keys(language);
            if !missing.is_empty() || !extra.is_empty() {
                tracing::warn!(
                    lang = language.code(),
                    ?missing,
                    ?extra,
                    "locale key set differs from English"
                );
            }
        }
        Ok(table)
    }

    /// TOML 로케일 소스를 해당 언어로 로드
    pub fn load_toml(&mut self, language: Language, source: &str) -> Result<()> {
        let entries: LanguageEntries = toml::from_str(source).map_err(|e| {
            LandpageError::Locale(format!("{}: {}", language.code(), e))
        })?;
        tracing::debug!(lang = language.code(), keys = entries.len(), "locale loaded");
        self.languages.insert(language, entries);
        Ok(())
    }

    pub fn insert(&mut self, language: Language, key: &str, value: TranslationValue) {
        self.languages
            .entry(language)
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn entries(&self, language: Language) -> Option<&LanguageEntries> {
        self.languages.get(&language)
    }

    pub fn get(&self, language: Language, key: &str) -> Option<&TranslationValue> {
        self.entries(language)?.get(key)
    }

    pub fn list(&self, language: Language, key: &str) -> Option<&[String]> {
        self.get(language, key)?.as_list()
    }

    /// 영어 테이블에는 있지만 `language`에는 없는 키
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let (Some(reference), Some(entries)) =
            (self.entries(Language::English), self.entries(language))
        else {
            return Vec::new();
        };
        reference
            .keys()
            .filter(|key| !entries.contains_key(*key))
            .cloned()
            .collect()
    }

    /// `language`에만 있고 영어 테이블에는 없는 키
    pub fn extra_keys(&self, language: Language) -> Vec<String> {
        let (Some(reference), Some(entries)) =
            (self.entries(Language::English), self.entries(language))
        else {
            return Vec::new();
        };
        entries
            .keys()
            .filter(|key| !reference.contains_key(*key))
            .cloned()
            .collect()
    }

    /// 타이핑 효과 문구 (없으면 영어 문구)
    pub fn typing_phrases(&self, language: Language) -> &[String] {
        self.list(language, TYPING_PHRASES_KEY)
            .or_else(|| self.list(Language::English, TYPING_PHRASES_KEY))
            .unwrap_or(&[])
    }
}

/// 모달 목록 컨테이너와 항목 키의 고정 연결
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalListBinding {
    pub container: &'static str,
    pub keys: &'static [&'static str],
}

pub const MODAL_LIST_BINDINGS: [ModalListBinding; 3] = [
    ModalListBinding {
        container: "modal1List",
        keys: &["m1_li1", "m1_li2", "m1_li3", "m1_li4"],
    },
    ModalListBinding {
        container: "modal2List",
        keys: &["m2_li1", "m2_li2", "m2_li3", "m2_li4"],
    },
    ModalListBinding {
        container: "modal3List",
        keys: &["m3_li1", "m3_li2", "m3_li3", "m3_li4"],
    },
];

impl ModalListBinding {
    /// 키를 순서대로 해석하고 비어 있거나 없는 항목을 제거
    pub fn resolve(&self, entries: &LanguageEntries) -> Vec<String> {
        let items: Vec<Option<&str>> = self
            .keys
            .iter()
            .map(|key| entries.get(*key).and_then(TranslationValue::as_text))
            .collect();
        non_empty_items(&items)
    }
}

/// 비어 있거나 없는 항목을 제거하고 나머지 순서를 유지
pub fn non_empty_items(items: &[Option<&str>]) -> Vec<String> {
    items
        .iter()
        .flatten()
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}

/// 번역 키의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 같은 식별자의 요소 텍스트(또는 목록)를 갱신
    Text,
    /// 모달 목록 바인딩에서만 사용
    ListItem,
    /// 검색 입력 placeholder
    Placeholder,
}

/// 키별 종류 태그 (시작 시 한 번 구성)
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    kinds: HashMap<&'static str, FieldKind>,
}

impl FieldRegistry {
    pub fn new(bindings: &[ModalListBinding]) -> Self {
        let mut kinds = HashMap::new();
        for binding in bindings {
            for key in binding.keys {
                kinds.insert(*key, FieldKind::ListItem);
            }
        }
        kinds.insert(SEARCH_PLACEHOLDER_KEY, FieldKind::Placeholder);
        Self { kinds }
    }

    pub fn kind(&self, key: &str) -> FieldKind {
        self.kinds.get(key).copied().unwrap_or(FieldKind::Text)
    }
}

/// 언어 적용기
#[derive(Debug, Clone)]
pub struct Localizer {
    table: TranslationTable,
    registry: FieldRegistry,
    bindings: Vec<ModalListBinding>,
}

impl Localizer {
    pub fn new(table: TranslationTable) -> Self {
        Self::with_bindings(table, MODAL_LIST_BINDINGS.to_vec())
    }

    pub fn with_bindings(table: TranslationTable, bindings: Vec<ModalListBinding>) -> Self {
        let registry = FieldRegistry::new(&bindings);
        Self {
            table,
            registry,
            bindings,
        }
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// 언어 코드를 문서에 적용하고 저장
    ///
    /// 지원하지 않는 코드나 테이블에 없는 언어는 아무것도 하지 않습니다.
    pub fn apply_language(&self, doc: &mut Document, store: &mut PreferenceStore, code: &str) {
        let Some(language) = Language::from_code(code) else {
            tracing::debug!(code, "ignoring unsupported language code");
            return;
        };
        let Some(entries) = self.table.entries(language) else {
            tracing::debug!(code, "no translation table for language");
            return;
        };

        for (key, value) in entries {
            if self.registry.kind(key) != FieldKind::Text || !doc.contains(key) {
                continue;
            }
            match value {
                TranslationValue::List(items) => doc.set_items(key, items.clone()),
                TranslationValue::Text(text) => doc.set_text(key, text),
            };
        }

        let placeholder = entries
            .get(SEARCH_PLACEHOLDER_KEY)
            .and_then(TranslationValue::as_text)
            .unwrap_or(SEARCH_PLACEHOLDER_FALLBACK);
        doc.set_placeholder(SEARCH_PLACEHOLDER_KEY, placeholder);

        for binding in &self.bindings {
            if doc.contains(binding.container) {
                doc.set_items(binding.container, binding.resolve(entries));
            }
        }

        store.set(Category::Language, language.code());
        tracing::info!(lang = language.code(), "language applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Element;

    fn small_table() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert(Language::English, "title", "Hello".into());
        table.insert(Language::English, "link1", "Order Layout".into());
        table.insert(
            Language::English,
            "stackList",
            TranslationValue::List(vec!["Rust".into(), "TOML".into()]),
        );
        table.insert(Language::English, "m1_li1", "First".into());
        table.insert(Language::English, "m1_li2", "".into());
        table.insert(Language::English, "m1_li3", "Third".into());
        table.insert(Language::Russian, "title", "Привет".into());
        table.insert(Language::Russian, "searchPlaceholder", "Опишите идею...".into());
        table
    }

    fn small_doc() -> Document {
        let mut doc = Document::new();
        for id in ["title", "link1", "stackList", "modal1List", "searchPlaceholder", "m1_li1"] {
            doc.insert(id, Element::new());
        }
        doc
    }

    #[test]
    fn test_bundled_locales_share_key_set() {
        let table = TranslationTable::bundled().unwrap();
        for language in Language::ALL {
            assert!(table.entries(language).is_some(), "{:?}", language);
            assert!(table.missing_keys(language).is_empty(), "{:?}", language);
            assert!(table.extra_keys(language).is_empty(), "{:?}", language);
        }
    }

    #[test]
    fn test_bundled_typing_phrases() {
        let table = TranslationTable::bundled().unwrap();
        assert_eq!(table.typing_phrases(Language::English).len(), 5);
        assert_eq!(
            table.typing_phrases(Language::Armenian).last().map(String::as_str),
            Some("Լենդինգ")
        );
    }

    #[test]
    fn test_apply_sets_text_list_and_placeholder() {
        let localizer = Localizer::new(small_table());
        let mut doc = small_doc();
        let mut store = PreferenceStore::in_memory();

        localizer.apply_language(&mut doc, &mut store, "en");

        assert_eq!(doc.text("title"), Some("Hello"));
        assert_eq!(doc.text("link1"), Some("Order Layout"));
        assert_eq!(doc.element("stackList").unwrap().items, vec!["Rust", "TOML"]);
        assert_eq!(
            doc.element("searchPlaceholder").unwrap().placeholder.as_deref(),
            Some(SEARCH_PLACEHOLDER_FALLBACK)
        );
        assert_eq!(store.get(Category::Language), "en");
    }

    #[test]
    fn test_list_item_keys_are_not_written_as_text() {
        let localizer = Localizer::new(small_table());
        let mut doc = small_doc();
        let mut store = PreferenceStore::in_memory();

        localizer.apply_language(&mut doc, &mut store, "en");

        assert_eq!(doc.text("m1_li1"), Some(""));
        assert_eq!(doc.element("modal1List").unwrap().items, vec!["First", "Third"]);
    }

    #[test]
    fn test_unsupported_code_is_noop() {
        let localizer = Localizer::new(small_table());
        let mut doc = small_doc();
        let mut store = PreferenceStore::in_memory();
        localizer.apply_language(&mut doc, &mut store, "ru");
        let before = format!("{:?}", doc);

        localizer.apply_language(&mut doc, &mut store, "de");
        localizer.apply_language(&mut doc, &mut store, "hy");

        assert_eq!(format!("{:?}", doc), before);
        assert_eq!(store.get(Category::Language), "ru");
    }

    #[test]
    fn test_missing_key_and_element_are_skipped() {
        let localizer = Localizer::new(small_table());
        let mut doc = Document::new();
        doc.insert("link1", Element::new().with_text("keep"));
        let mut store = PreferenceStore::in_memory();

        localizer.apply_language(&mut doc, &mut store, "ru");

        assert_eq!(doc.text("link1"), Some("keep"));
        assert!(!doc.contains("title"));
        assert!(!doc.contains("modal1List"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let localizer = Localizer::new(TranslationTable::bundled().unwrap());
        let mut store = PreferenceStore::in_memory();
        for language in Language::ALL {
            let mut doc = crate::ui::landing::landing_document();
            localizer.apply_language(&mut doc, &mut store, language.code());
            let once = format!("{:?}", doc);
            localizer.apply_language(&mut doc, &mut store, language.code());
            assert_eq!(format!("{:?}", doc), once);
        }
    }

    #[test]
    fn test_non_empty_items_preserves_order() {
        let items = [Some("A"), Some(""), Some("B"), None, Some("C")];
        assert_eq!(non_empty_items(&items), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_registry_kinds() {
        let registry = FieldRegistry::new(&MODAL_LIST_BINDINGS);
        assert_eq!(registry.kind("m2_li3"), FieldKind::ListItem);
        assert_eq!(registry.kind("searchPlaceholder"), FieldKind::Placeholder);
        assert_eq!(registry.kind("linksTitle"), FieldKind::Text);
        assert_eq!(registry.kind("modal1List"), FieldKind::Text);
    }

    proptest::proptest! {
        #[test]
        fn prop_non_empty_items_is_ordered_filter(
            items in proptest::collection::vec(proptest::option::of("[a-z]{0,3}"), 0..8)
        ) {
            let borrowed: Vec<Option<&str>> = items.iter().map(|i| i.as_deref()).collect();
            let expected: Vec<String> = items.iter().flatten().filter(|s| !s.is_empty()).cloned().collect();
            proptest::prop_assert_eq!(non_empty_items(&borrowed), expected);
        }
    }
}

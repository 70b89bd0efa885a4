// Document model - 페이지 요소 트리
//
// 식별자로 찾는 요소들과 루트 클래스, 일시적인 오버레이를 보관합니다.
// 요소가 없으면 모든 setter는 false를 반환하고 아무것도 하지 않습니다.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// 요소에 붙는 인라인 강조 효과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// 활성 테마 버튼의 맥박 효과
    Pulse,
    /// 전송 성공 강조
    Success,
    /// 입력 흔들림
    Shake,
}

/// 페이지 요소
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    /// 목록 항목 (목록 컨테이너일 때)
    pub items: Vec<String>,
    pub placeholder: Option<String>,
    /// 입력 값 (입력 요소일 때)
    pub value: String,
    /// `data-count` 속성
    pub data_count: Option<u64>,
    pub classes: BTreeSet<String>,
    pub emphasis: Option<Emphasis>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_data_count(mut self, count: u64) -> Self {
        self.data_count = Some(count);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// 테마 전환 시 화면 전체를 덮는 일시적 오버레이
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub id: u64,
    /// 배경색 (hex)
    pub background: &'static str,
    pub created_at: Duration,
}

impl Overlay {
    pub const LIFETIME: Duration = Duration::from_millis(800);
    const START_OPACITY: f32 = 0.3;

    /// 경과 시간에 따른 불투명도 (0.3 → 0 선형 감소)
    pub fn opacity_at(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.created_at);
        if elapsed >= Self::LIFETIME {
            return 0.0;
        }
        let remaining = 1.0 - elapsed.as_secs_f32() / Self::LIFETIME.as_secs_f32();
        Self::START_OPACITY * remaining
    }
}

/// 페이지 문서
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    root_classes: BTreeSet<String>,
    overlays: Vec<Overlay>,
    next_overlay_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 요소 추가 (같은 식별자가 있으면 교체)
    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// 클래스를 가진 요소 식별자 목록
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// 두 클래스를 모두 가진 첫 요소
    pub fn find_with_classes(&self, first: &str, second: &str) -> Option<String> {
        self.elements
            .iter()
            .find(|(_, el)| el.has_class(first) && el.has_class(second))
            .map(|(id, _)| id.clone())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|el| el.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_items(&mut self, id: &str, items: Vec<String>) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.items = items;
                true
            }
            None => false,
        }
    }

    pub fn set_placeholder(&mut self, id: &str, placeholder: &str) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.placeholder = Some(placeholder.to_string());
                true
            }
            None => false,
        }
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_emphasis(&mut self, id: &str, emphasis: Option<Emphasis>) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.emphasis = emphasis;
                true
            }
            None => false,
        }
    }

    pub fn set_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                if on {
                    el.classes.insert(class.to_string());
                } else {
                    el.classes.remove(class);
                }
                true
            }
            None => false,
        }
    }

    pub fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    pub fn set_root_class(&mut self, class: &str, on: bool) {
        if on {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }

    /// 오버레이 추가 후 식별자 반환
    pub fn push_overlay(&mut self, background: &'static str, now: Duration) -> u64 {
        let id = self.next_overlay_id;
        self.next_overlay_id += 1;
        self.overlays.push(Overlay {
            id,
            background,
            created_at: now,
        });
        id
    }

    /// 오버레이 제거 (이미 없으면 false)
    pub fn remove_overlay(&mut self, id: u64) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|o| o.id != id);
        self.overlays.len() != before
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }
}

//! 폼 전송/검색 버튼 피드백
//!
//! 라벨을 잠시 바꾸고, 세션이 예약한 타이머가 원래 상태로 되돌립니다.

use crate::models::{Document, Emphasis};
use std::time::Duration;

pub const SUBMIT_RESET_DELAY: Duration = Duration::from_millis(2000);
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
pub const SEARCH_RESET_DELAY: Duration = Duration::from_millis(2000);

pub const SENT_LABEL: &str = "✓ Sent!";
pub const SEARCHING_LABEL: &str = "SEARCHING ⏳";
pub const SEARCH_LABEL: &str = "SEARCH →";

/// 문의 폼 전송 피드백
#[derive(Debug, Default)]
pub struct SubmitFeedback {
    /// 되돌릴 원래 버튼 라벨 (복원 대기 중일 때만 Some)
    original: Option<String>,
}

impl SubmitFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// 버튼을 "전송됨" 상태로 바꿈
    ///
    /// 복원 타이머를 새로 예약해야 하면 true. 이미 대기 중이면 처음 라벨을 유지합니다.
    pub fn submit(&mut self, doc: &mut Document, button: &str) -> bool {
        let Some(label) = doc.text(button).map(str::to_string) else {
            return false;
        };
        let first = self.original.is_none();
        if first {
            self.original = Some(label);
        }
        doc.set_text(button, SENT_LABEL);
        doc.set_emphasis(button, Some(Emphasis::Success));
        first
    }

    /// 원래 라벨 복원 및 입력 초기화
    pub fn reset(&mut self, doc: &mut Document, button: &str, input: &str) {
        if let Some(label) = self.original.take() {
            doc.set_text(button, &label);
            doc.set_emphasis(button, None);
            doc.set_value(input, "");
        }
    }
}

/// 검색 버튼 피드백 시작 (입력이 비어 있으면 false)
pub fn start_search(doc: &mut Document, input: &str, button: &str) -> bool {
    let has_query = doc
        .element(input)
        .is_some_and(|el| !el.value.trim().is_empty());
    if !has_query {
        return false;
    }
    doc.set_emphasis(input, Some(Emphasis::Shake));
    doc.set_text(button, SEARCHING_LABEL);
    true
}

pub fn clear_shake(doc: &mut Document, input: &str) {
    doc.set_emphasis(input, None);
}

pub fn reset_search_button(doc: &mut Document, button: &str) {
    doc.set_text(button, SEARCH_LABEL);
}

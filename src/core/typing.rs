//! 검색 입력 placeholder 타이핑 효과
//!
//! `Typing → Pausing → Deleting → Typing(다음 문구)` 상태 기계이며,
//! 한 번의 tick마다 한 단계씩 진행하고 다음 tick까지의 지연을 돌려줍니다.
//! 재시작 시 세대(generation)를 올려 이전 인스턴스의 tick을 무효화합니다.

use crate::core::scheduler::TimerHandle;
use crate::models::Language;
use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const PAUSE_DELAY: Duration = Duration::from_millis(2000);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingState {
    #[default]
    Typing,
    /// 문구를 모두 입력한 뒤 대기 중
    Pausing,
    Deleting,
}

/// tick 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// placeholder에 표시할 텍스트
    pub text: String,
    /// 다음 tick까지의 지연
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct TypingAnimator {
    generation: u64,
    pending: Option<TimerHandle>,
    language: Language,
    phrase_index: usize,
    /// 현재 표시 중인 문자 수
    shown: usize,
    state: TypingState,
}

impl TypingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// 예약된 다음 tick 기록
    pub fn set_pending(&mut self, handle: TimerHandle) {
        self.pending = Some(handle);
    }

    /// 새 인스턴스로 재시작
    ///
    /// 취소해야 할 이전 tick 핸들을 돌려줍니다.
    pub fn restart(&mut self, language: Language) -> Option<TimerHandle> {
        self.generation = self.generation.wrapping_add(1);
        self.language = language;
        self.reset_cycle();
        self.pending.take()
    }

    fn reset_cycle(&mut self) {
        self.phrase_index = 0;
        self.shown = 0;
        self.state = TypingState::Typing;
    }

    /// 한 단계 진행
    ///
    /// `active`는 tick 시점의 저장된 언어이며, 바뀌었으면 새 언어의 첫 문구부터 다시 시작합니다.
    pub fn tick(&mut self, active: Language, phrases: &[String]) -> TypingStep {
        self.pending = None;
        if active != self.language {
            self.language = active;
            self.reset_cycle();
        }

        if phrases.is_empty() {
            return TypingStep {
                text: String::new(),
                delay: TYPE_DELAY,
            };
        }

        let phrase = &phrases[self.phrase_index % phrases.len()];
        let len = phrase.chars().count();

        let delay = match self.state {
            TypingState::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown >= len {
                    self.state = TypingState::Pausing;
                    PAUSE_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            TypingState::Pausing | TypingState::Deleting => {
                self.state = TypingState::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    TYPE_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        };

        let text = char_prefix(phrase, self.shown).to_string();
        if self.state == TypingState::Deleting && self.shown == 0 {
            self.phrase_index = (self.phrase_index + 1) % phrases.len();
            self.state = TypingState::Typing;
        }

        TypingStep { text, delay }
    }
}

/// 앞에서부터 `count`개 문자까지의 부분 문자열
fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_cycle_single_phrase() {
        let list = phrases(&["Landing page"]);
        let mut anim = TypingAnimator::new();
        anim.restart(Language::English);

        let mut typed = Vec::new();
        for _ in 0..12 {
            typed.push(anim.tick(Language::English, &list));
        }
        assert_eq!(typed[0].text, "L");
        assert_eq!(typed[1].text, "La");
        assert_eq!(typed[11].text, "Landing page");
        assert!(typed[..11].iter().all(|s| s.delay == TYPE_DELAY));
        assert_eq!(typed[11].delay, PAUSE_DELAY);
        assert_eq!(anim.state, TypingState::Pausing);

        let mut deleted = Vec::new();
        for _ in 0..12 {
            deleted.push(anim.tick(Language::English, &list));
        }
        assert_eq!(deleted[0].text, "Landing pag");
        assert_eq!(deleted[0].delay, DELETE_DELAY);
        assert_eq!(deleted[11].text, "");
        assert_eq!(deleted[11].delay, TYPE_DELAY);

        let restarted = anim.tick(Language::English, &list);
        assert_eq!(restarted.text, "L");
    }

    #[test]
    fn test_advances_to_next_phrase_and_wraps() {
        let list = phrases(&["ab", "c"]);
        let mut anim = TypingAnimator::new();
        let texts: Vec<String> = (0..9)
            .map(|_| anim.tick(Language::English, &list).text)
            .collect();
        assert_eq!(texts, ["a", "ab", "a", "", "c", "", "a", "ab", "a"]);
    }

    #[test]
    fn test_language_change_resets_cycle() {
        let en = phrases(&["Corporate website"]);
        let ru = phrases(&["Лендинг"]);
        let mut anim = TypingAnimator::new();
        for _ in 0..5 {
            anim.tick(Language::English, &en);
        }

        let step = anim.tick(Language::Russian, &ru);
        assert_eq!(step.text, "Л");
        assert_eq!(anim.language, Language::Russian);
    }

    #[test]
    fn test_multibyte_prefixes() {
        assert_eq!(char_prefix("Լենդինգ", 2), "Լե");
        assert_eq!(char_prefix("Лендинг", 0), "");
        assert_eq!(char_prefix("abc", 10), "abc");
    }

    #[test]
    fn test_restart_bumps_generation_and_returns_pending() {
        let mut anim = TypingAnimator::new();
        let first = anim.generation();
        anim.set_pending(crate::core::scheduler::Scheduler::new().schedule(TYPE_DELAY, ()));
        assert!(anim.restart(Language::English).is_some());
        assert!(!anim.is_current(first));
        assert!(anim.restart(Language::English).is_none());
    }

    #[test]
    fn test_empty_phrase_list_is_idle() {
        let mut anim = TypingAnimator::new();
        let step = anim.tick(Language::English, &[]);
        assert_eq!(step.text, "");
        assert_eq!(step.delay, TYPE_DELAY);
    }
}

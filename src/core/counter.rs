//! 통계 숫자 카운트업 애니메이션
//!
//! 프레임마다 목표값의 1/50씩 증가하고, 목표에 도달하면 정확한 목표값을 표시한 뒤 멈춥니다.

use std::time::Duration;

/// 애니메이션 프레임 간격
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const STEPS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    /// `data-count` 속성 또는 표시 텍스트 앞쪽의 숫자로 목표값을 정하고,
    /// 텍스트의 숫자가 아닌 문자를 접미사로 사용
    pub fn new(data_count: Option<u64>, text: &str) -> Self {
        let digits: String = text
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        let target = data_count
            .filter(|count| *count > 0)
            .or_else(|| digits.parse().ok())
            .unwrap_or(0);

        Self {
            target,
            suffix,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 다음 프레임 텍스트 (이미 끝났으면 None)
    pub fn frame(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        let target = self.target as f64;
        self.current += target / STEPS;
        if self.current < target {
            Some(format!("{}{}", self.current.ceil() as u64, self.suffix))
        } else {
            self.finished = true;
            Some(format!("{}{}", self.target, self.suffix))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_frame(mut anim: CounterAnimation) -> Option<String> {
        std::iter::from_fn(|| anim.frame()).last()
    }

    #[test]
    fn test_target_from_data_count() {
        let anim = CounterAnimation::new(Some(150), "0+");
        assert_eq!(last_frame(anim).as_deref(), Some("150+"));
    }

    #[test]
    fn test_target_from_text_digits() {
        let anim = CounterAnimation::new(None, "98%");
        assert_eq!(last_frame(anim).as_deref(), Some("98%"));
    }

    /// 앞쪽 숫자만 목표값으로 사용
    #[test]
    fn test_target_from_leading_digits_only() {
        let anim = CounterAnimation::new(None, "24/7");
        assert_eq!(last_frame(anim).as_deref(), Some("24/"));

        let anim = CounterAnimation::new(None, "v2");
        assert_eq!(last_frame(anim).as_deref(), Some("0v"));
    }

    #[test]
    fn test_counts_up_and_stops_at_target() {
        let mut anim = CounterAnimation::new(Some(100), "0+");
        let frames: Vec<String> = std::iter::from_fn(|| anim.frame()).collect();

        assert_eq!(frames.first().map(String::as_str), Some("2+"));
        assert_eq!(frames.last().map(String::as_str), Some("100+"));
        assert!(frames.len() <= 51);
        assert!(anim.is_finished());
        assert_eq!(anim.frame(), None);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(None, "+");
        assert_eq!(anim.frame().as_deref(), Some("0+"));
        assert_eq!(anim.frame(), None);
    }
}

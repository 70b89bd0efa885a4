use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// 입력 필드처럼 뒷부분(커서 쪽)이 보이도록 앞을 생략한다.
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let suffix_width = max_width.saturating_sub(ELLIPSIS.width());
    format!("{}{}", ELLIPSIS, take_suffix_by_width(text, suffix_width))
}

/// 표시 너비
pub fn display_width(text: &str) -> usize {
    text.width()
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.reverse();
    rev_chars.into_iter().collect()
}

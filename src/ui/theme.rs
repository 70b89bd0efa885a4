// Theme - 색상 팔레트와 테마 적용기
//
// 루트 요소의 `dark-theme` 클래스로 현재 테마를 표시하고,
// 테마를 바꿀 때마다 새 배경색의 전환 오버레이를 띄웁니다.

use crate::models::{Category, Document, Theme};
use crate::system::PreferenceStore;
use ratatui::style::Color;
use std::time::Duration;

/// 다크 테마 표시 클래스
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Hex 색상 문자열("#1e1e1e")을 Color로 파싱
pub fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 두 RGB 색상을 `amount`(0.0~1.0) 비율로 섞음
///
/// RGB가 아닌 색상은 섞지 않고 `base`를 그대로 돌려줍니다.
pub fn blend(base: Color, over: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (base, over) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => base,
    }
}

/// 화면 색상 팔레트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // 배경/전경
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_muted: Color,

    // 카드/섹션
    pub card_bg: Color,
    pub border: Color,

    // 버튼
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_active_bg: Color,
    pub button_active_fg: Color,

    // 강조
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
}

impl Palette {
    /// Light 테마 (기본)
    pub fn light() -> Self {
        Palette {
            bg_primary: parse_hex_color("#f8f9fa"),
            fg_primary: parse_hex_color("#1e1e1e"),
            fg_muted: parse_hex_color("#6c757d"),

            card_bg: parse_hex_color("#ffffff"),
            border: parse_hex_color("#dee2e6"),

            button_bg: parse_hex_color("#e9ecef"),
            button_fg: parse_hex_color("#1e1e1e"),
            button_active_bg: parse_hex_color("#0078d4"),
            button_active_fg: parse_hex_color("#ffffff"),

            accent: parse_hex_color("#0078d4"),
            success: parse_hex_color("#27ae60"),
            warning: parse_hex_color("#ff8c00"),
        }
    }

    /// Dark 테마
    pub fn dark() -> Self {
        Palette {
            bg_primary: parse_hex_color("#1a1a1a"),
            fg_primary: parse_hex_color("#e0e0e0"),
            fg_muted: parse_hex_color("#8a8a8a"),

            card_bg: parse_hex_color("#242424"),
            border: parse_hex_color("#3c3c3c"),

            button_bg: parse_hex_color("#2d2d30"),
            button_fg: parse_hex_color("#e0e0e0"),
            button_active_bg: parse_hex_color("#4ea1ff"),
            button_active_fg: parse_hex_color("#101010"),

            accent: parse_hex_color("#4ea1ff"),
            success: parse_hex_color("#2ecc71"),
            warning: parse_hex_color("#ffa500"),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

/// 전환 오버레이 배경색
pub fn overlay_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "#1a1a1a",
        Theme::Light => "#f8f9fa",
    }
}

/// 문서에 표시된 현재 테마
pub fn document_theme(doc: &Document) -> Theme {
    if doc.root_has_class(DARK_THEME_CLASS) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// 테마를 문서에 적용하고 저장한 뒤 전환 오버레이를 추가
///
/// 추가된 오버레이의 식별자를 돌려주며, 호출자가 `Overlay::LIFETIME` 뒤 제거를 예약합니다.
pub fn apply_theme(
    doc: &mut Document,
    store: &mut PreferenceStore,
    theme: Theme,
    now: Duration,
) -> u64 {
    doc.set_root_class(DARK_THEME_CLASS, theme == Theme::Dark);
    store.set(Category::Theme, theme.name());
    let overlay = doc.push_overlay(overlay_background(theme), now);
    tracing::info!(theme = theme.name(), overlay, "theme applied");
    overlay
}

// Landing view - 문서를 터미널 화면으로 그리는 위젯
//
// 헤더(로고, 테마/언어 버튼), 스크롤 가능한 본문, 하단 커맨드 바로 구성되며
// 전환 오버레이는 남은 불투명도만큼 화면 색을 덮습니다.

use crate::core::actions::command_bar_hints;
use crate::models::{Document, Emphasis, Language, Theme};
use crate::ui::buttons::ACTIVE_CLASS;
use crate::ui::landing::{
    language_button_id, theme_button_id, CONTACT_INPUT, FEATURE_CARDS, FOOTER_COLUMNS,
    LINK_CARDS, RECENT_PROJECTS, SEARCH_BUTTON, SEARCH_INPUT, STATS, SUBMIT_BUTTON,
};
use crate::ui::theme::{blend, parse_hex_color, Palette};
use crate::utils::text::{display_width, truncate_start};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use std::time::Duration;

/// 입력 필드 표시 너비
const INPUT_WIDTH: usize = 36;
/// 포커스된 입력의 커서 표시
const CURSOR: &str = "▏";

/// 랜딩 페이지 위젯
pub struct LandingView<'a> {
    doc: &'a Document,
    colors: Palette,
    /// 포커스된 입력 요소 식별자
    focused: Option<&'a str>,
    scroll: u16,
    now: Duration,
}

impl<'a> LandingView<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            colors: Palette::light(),
            focused: None,
            scroll: 0,
            now: Duration::ZERO,
        }
    }

    /// 테마 팔레트 적용
    pub fn theme(mut self, theme: Theme) -> Self {
        self.colors = Palette::for_theme(theme);
        self
    }

    pub fn focused(mut self, id: Option<&'a str>) -> Self {
        self.focused = id;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// 오버레이 불투명도 계산 기준 시각
    pub fn now(mut self, now: Duration) -> Self {
        self.now = now;
        self
    }

    fn text(&self, id: &str) -> String {
        self.doc.text(id).unwrap_or_default().to_string()
    }

    fn emphasis(&self, id: &str) -> Option<Emphasis> {
        self.doc.element(id).and_then(|el| el.emphasis)
    }

    fn is_active(&self, id: &str) -> bool {
        self.doc
            .element(id)
            .is_some_and(|el| el.has_class(ACTIVE_CLASS))
    }

    fn button(&self, id: &str) -> Span<'static> {
        let c = self.colors;
        let mut style = if self.is_active(id) {
            Style::default().fg(c.button_active_fg).bg(c.button_active_bg)
        } else {
            Style::default().fg(c.button_fg).bg(c.button_bg)
        };
        match self.emphasis(id) {
            Some(Emphasis::Pulse) => style = style.add_modifier(Modifier::BOLD),
            Some(Emphasis::Success) => style = style.fg(c.button_active_fg).bg(c.success),
            Some(Emphasis::Shake) | None => {}
        }
        Span::styled(format!(" {} ", self.text(id)), style)
    }

    fn header_line(&self) -> Line<'static> {
        let c = self.colors;
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                self.text("logoText"),
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];
        for theme in Theme::ALL {
            spans.push(self.button(theme_button_id(theme)));
        }
        spans.push(Span::raw("  "));
        for language in Language::ALL {
            spans.push(self.button(language_button_id(language)));
        }
        Line::from(spans)
    }

    /// 입력 필드: 값이 있으면 값(끝부분), 없으면 placeholder, 그것도 없으면 요소 텍스트
    fn input(&self, id: &str) -> Vec<Span<'static>> {
        let c = self.colors;
        let Some(el) = self.doc.element(id) else {
            return Vec::new();
        };
        let focused = self.focused == Some(id);
        let border = match el.emphasis {
            Some(Emphasis::Shake) => c.warning,
            _ if focused => c.accent,
            _ => c.border,
        };

        let (content, style) = if el.value.is_empty() {
            let hint = el
                .placeholder
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or(&el.text);
            (
                truncate_start(hint, INPUT_WIDTH),
                Style::default().fg(c.fg_muted).add_modifier(Modifier::ITALIC),
            )
        } else {
            (truncate_start(&el.value, INPUT_WIDTH), Style::default().fg(c.fg_primary))
        };
        let cursor = if focused { CURSOR } else { "" };
        let pad = INPUT_WIDTH.saturating_sub(display_width(&content) + display_width(cursor));

        vec![
            Span::styled("[", Style::default().fg(border)),
            Span::styled(content, style.bg(c.card_bg)),
            Span::styled(cursor, Style::default().fg(c.accent).bg(c.card_bg)),
            Span::styled(" ".repeat(pad), Style::default().bg(c.card_bg)),
            Span::styled("]", Style::default().fg(border)),
        ]
    }

    fn heading(&self, id: &str) -> Line<'static> {
        Line::from(Span::styled(
            self.text(id),
            Style::default()
                .fg(self.colors.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn plain(&self, id: &str, indent: usize) -> Line<'static> {
        Line::from(Span::styled(
            format!("{}{}", " ".repeat(indent), self.text(id)),
            Style::default().fg(self.colors.fg_primary),
        ))
    }

    fn muted(&self, id: &str, indent: usize) -> Line<'static> {
        Line::from(Span::styled(
            format!("{}{}", " ".repeat(indent), self.text(id)),
            Style::default().fg(self.colors.fg_muted),
        ))
    }

    /// 본문 줄 목록
    pub fn body_lines(&self) -> Vec<Line<'static>> {
        let c = self.colors;
        let bold = Style::default().fg(c.fg_primary).add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        // 히어로
        lines.push(Line::from(Span::styled(
            self.text("title"),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(self.muted("subTitle", 0));
        lines.push(Line::from(""));

        let mut search = self.input(SEARCH_INPUT);
        search.push(Span::raw(" "));
        search.push(self.button(SEARCH_BUTTON));
        lines.push(Line::from(search));
        lines.push(Line::from(""));

        let mut stats = Vec::new();
        for (number, label, _, _) in STATS {
            stats.push(Span::styled(
                self.text(number),
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
            ));
            stats.push(Span::styled(
                format!(" {}   ", self.text(label)),
                Style::default().fg(c.fg_muted),
            ));
        }
        lines.push(Line::from(stats));
        lines.push(Line::from(""));

        // 서비스
        lines.push(self.heading("featuresTitle"));
        for card in FEATURE_CARDS {
            lines.push(Line::from(Span::styled(format!("■ {}", self.text(card.title)), bold)));
            lines.push(self.muted(card.desc, 2));
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", self.text(card.detail_title)), bold),
                Span::styled(
                    format!(" · {}", self.text(card.detail_sub)),
                    Style::default().fg(c.fg_muted),
                ),
            ]));
            lines.push(self.plain(card.detail_heading, 2));
            lines.push(self.muted(card.detail_desc, 2));
            if let Some(el) = self.doc.element(card.list) {
                for item in &el.items {
                    lines.push(Line::from(Span::styled(
                        format!("    • {}", item),
                        Style::default().fg(c.fg_primary),
                    )));
                }
            }
            lines.push(Line::from(vec![Span::raw("  "), self.button(card.action)]));
            lines.push(Line::from(""));
        }

        // 최근 프로젝트
        lines.push(self.heading("recentTitle"));
        for (title, desc, date) in RECENT_PROJECTS {
            lines.push(Line::from(vec![
                Span::styled(format!("▸ {}", self.text(title)), bold),
                Span::styled(format!("  {}", self.text(date)), Style::default().fg(c.fg_muted)),
            ]));
            lines.push(self.muted(desc, 2));
        }
        lines.push(Line::from(""));

        // 빠른 작업
        lines.push(self.heading("linksTitle"));
        for card in LINK_CARDS {
            lines.push(Line::from(Span::styled(format!("◆ {}", self.text(card.title)), bold)));
            lines.push(self.muted(card.desc, 2));
            lines.push(Line::from(vec![Span::raw("  "), self.button(card.button)]));
            lines.push(self.plain(card.drop_title, 2));
            for item in card.drop_items {
                lines.push(self.muted(item, 4));
            }
        }
        lines.push(Line::from(""));

        // 후원
        lines.push(self.heading("donateTitle"));
        lines.push(self.muted("donateDesc", 0));
        lines.push(Line::from(self.button("donateBtn")));
        lines.push(Line::from(""));

        // 푸터
        for (heading, links) in FOOTER_COLUMNS {
            lines.push(Line::from(Span::styled(self.text(heading), bold)));
            let joined = links
                .iter()
                .map(|id| self.text(id))
                .collect::<Vec<_>>()
                .join(" · ");
            lines.push(Line::from(Span::styled(
                format!("  {}", joined),
                Style::default().fg(c.fg_muted),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(self.text("footH4"), bold)));
        let mut contact = self.input(CONTACT_INPUT);
        contact.push(Span::raw(" "));
        contact.push(self.button(SUBMIT_BUTTON));
        lines.push(Line::from(contact));
        lines.push(Line::from(""));
        lines.push(self.muted("copyright", 0));

        lines
    }

    fn command_line(&self) -> Line<'static> {
        let c = self.colors;
        let hints: Vec<(&str, &str)> = if self.focused.is_some() {
            vec![("Enter", "Submit"), ("Tab", "Next"), ("Esc", "Leave")]
        } else {
            command_bar_hints()
        };

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                key.to_string(),
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(":{}", label), Style::default().fg(c.fg_muted)));
        }
        Line::from(spans)
    }

    /// 남아 있는 전환 오버레이를 순서대로 덮음
    fn render_overlays(&self, area: Rect, buf: &mut Buffer) {
        for overlay in self.doc.overlays() {
            let amount = overlay.opacity_at(self.now);
            if amount <= 0.0 {
                continue;
            }
            let color = parse_hex_color(overlay.background);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        let bg = blend(cell.bg, color, amount);
                        let fg = blend(cell.fg, color, amount);
                        cell.set_bg(bg).set_fg(fg);
                    }
                }
            }
        }
    }
}

impl Widget for LandingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = self.colors;
        buf.set_style(area, Style::default().bg(c.bg_primary).fg(c.fg_primary));

        let [header, body, command] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        buf.set_style(header, Style::default().bg(c.card_bg));
        Paragraph::new(self.header_line()).render(header, buf);

        let inner = Rect {
            x: body.x.saturating_add(1),
            width: body.width.saturating_sub(2),
            ..body
        };
        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);

        buf.set_style(command, Style::default().bg(c.card_bg));
        Paragraph::new(self.command_line()).render(command, buf);

        self.render_overlays(area, buf);
    }
}

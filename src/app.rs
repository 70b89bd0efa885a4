use crate::config::Config;
use crate::core::actions::Action;
use crate::core::counter::FRAME_INTERVAL;
use crate::core::feedback::{
    self, SEARCH_RESET_DELAY, SHAKE_DURATION, SUBMIT_RESET_DELAY,
};
use crate::core::typing::TYPE_DELAY;
use crate::core::{CounterAnimation, Scheduler, SubmitFeedback, TypingAnimator};
use crate::models::{Document, Language, Overlay, Preference, Theme};
use crate::system::{FileStore, PreferenceStore, UnavailableStore};
use crate::ui::buttons::sync_buttons;
use crate::ui::i18n::{Localizer, TranslationTable};
use crate::ui::landing::{
    landing_document, CONTACT_INPUT, SEARCH_BUTTON, SEARCH_INPUT, STAT_NUMBER_CLASS,
    SUBMIT_BUTTON,
};
use crate::ui::theme::{apply_theme, document_theme};
use crate::utils::error::Result;
use std::time::Duration;

/// 예약 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// 타이핑 효과 한 단계 (세대가 다르면 무시)
    TypingTick { generation: u64 },
    /// 테마 전환 오버레이 제거
    RemoveOverlay(u64),
    /// 통계 카운터 한 프레임
    CounterFrame(usize),
    /// 문의 폼 버튼 복원
    ResetSubmit,
    /// 검색 입력 흔들림 해제
    ClearShake,
    /// 검색 버튼 라벨 복원
    ResetSearchButton,
}

/// 입력 포커스
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    Search,
    Contact,
}

impl Focus {
    /// 포커스된 입력 요소 식별자
    pub fn input_id(self) -> Option<&'static str> {
        match self {
            Focus::None => None,
            Focus::Search => Some(SEARCH_INPUT),
            Focus::Contact => Some(CONTACT_INPUT),
        }
    }

    fn next(self) -> Self {
        match self {
            Focus::None => Focus::Search,
            Focus::Search => Focus::Contact,
            Focus::Contact => Focus::None,
        }
    }
}

/// UI 세션 상태
///
/// 문서, 선호 설정 저장소, 타이머 큐와 애니메이션 상태를 한곳에서 소유합니다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 페이지 문서
    pub document: Document,
    /// 선호 설정 저장소
    pub store: PreferenceStore,
    /// 언어 적용기
    localizer: Localizer,
    /// 가상 시계 타이머 큐
    scheduler: Scheduler<Task>,
    /// 검색 placeholder 타이핑 효과
    typing: TypingAnimator,
    /// 통계 카운터 (요소 식별자, 애니메이션)
    counters: Vec<(String, CounterAnimation)>,
    /// 문의 폼 전송 피드백
    submit: SubmitFeedback,
    /// 화면에 적용된 언어
    language: Language,
    /// 입력 포커스
    pub focus: Focus,
    /// 세로 스크롤 위치
    pub scroll: u16,
}

impl App {
    const PAGE_SCROLL: u16 = 10;

    pub fn new(config: &Config) -> Result<Self> {
        let store = match &config.storage_file {
            Some(path) => PreferenceStore::new(Box::new(FileStore::open(path.clone()))),
            None => PreferenceStore::new(Box::new(UnavailableStore)),
        };
        let mut app = Self::with_store(store, TranslationTable::bundled()?);
        app.load();
        Ok(app)
    }

    /// 저장소와 번역 테이블로 세션 구성 (페이지 로드 전)
    pub fn with_store(store: PreferenceStore, table: TranslationTable) -> Self {
        Self {
            should_quit: false,
            document: landing_document(),
            store,
            localizer: Localizer::new(table),
            scheduler: Scheduler::new(),
            typing: TypingAnimator::new(),
            counters: Vec::new(),
            submit: SubmitFeedback::new(),
            language: Language::default(),
            focus: Focus::None,
            scroll: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        let table = TranslationTable::bundled().expect("bundled locales parse");
        Self::with_store(PreferenceStore::in_memory(), table)
    }

    /// 페이지 로드: 저장된 선호 설정 적용, 버튼 동기화, 애니메이션 시작
    pub fn load(&mut self) {
        let Preference { theme, language } = self.store.preference();
        tracing::info!(theme = theme.name(), lang = language.code(), "loading page");

        self.set_theme(theme);
        self.localizer
            .apply_language(&mut self.document, &mut self.store, language.code());
        self.language = language;
        sync_buttons(&mut self.document, theme, language);
        self.start_typing();
        self.start_counters();
    }

    /// 현재 가상 시각
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// 테마 버튼 클릭
    pub fn select_theme(&mut self, theme: Theme) {
        self.set_theme(theme);
        sync_buttons(&mut self.document, theme, self.language);
    }

    /// 화면에 표시된 테마 기준으로 전환 (저장소를 쓸 수 없어도 동작)
    pub fn toggle_theme(&mut self) {
        let next = document_theme(&self.document).toggled();
        self.select_theme(next);
    }

    fn set_theme(&mut self, theme: Theme) {
        let now = self.now();
        let overlay = apply_theme(&mut self.document, &mut self.store, theme, now);
        self.scheduler
            .schedule(Overlay::LIFETIME, Task::RemoveOverlay(overlay));
    }

    /// 언어 버튼 클릭
    pub fn select_language(&mut self, language: Language) {
        self.localizer
            .apply_language(&mut self.document, &mut self.store, language.code());
        self.language = language;
        let theme = document_theme(&self.document);
        sync_buttons(&mut self.document, theme, language);
        self.start_typing();
    }

    /// 타이핑 효과 (재)시작, 이전 인스턴스의 예약 tick은 취소
    pub fn start_typing(&mut self) {
        if !self.document.contains(SEARCH_INPUT) {
            return;
        }
        if let Some(handle) = self.typing.restart(self.store.language()) {
            self.scheduler.cancel(handle);
        }
        self.document.set_placeholder(SEARCH_INPUT, "");
        let handle = self.scheduler.schedule(
            TYPE_DELAY,
            Task::TypingTick {
                generation: self.typing.generation(),
            },
        );
        self.typing.set_pending(handle);
    }

    fn start_counters(&mut self) {
        self.counters = self
            .document
            .ids_with_class(STAT_NUMBER_CLASS)
            .into_iter()
            .filter_map(|id| {
                let el = self.document.element(&id)?;
                let anim = CounterAnimation::new(el.data_count, &el.text);
                Some((id, anim))
            })
            .collect();
        for index in 0..self.counters.len() {
            self.run_counter_frame(index);
        }
    }

    fn run_counter_frame(&mut self, index: usize) {
        let Some((id, anim)) = self.counters.get_mut(index) else {
            return;
        };
        if let Some(text) = anim.frame() {
            self.document.set_text(id, &text);
            if !anim.is_finished() {
                self.scheduler
                    .schedule(FRAME_INTERVAL, Task::CounterFrame(index));
            }
        }
    }

    /// 가상 시계를 `now`까지 진행하며 마감된 작업 실행
    pub fn advance(&mut self, now: Duration) {
        while let Some(task) = self.scheduler.pop_due(now) {
            self.dispatch(task);
        }
        self.scheduler.advance_to(now);
    }

    /// 다음 작업 마감 시각
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    fn dispatch(&mut self, task: Task) {
        match task {
            Task::TypingTick { generation } => {
                if !self.typing.is_current(generation) {
                    return;
                }
                let language = self.store.language();
                let phrases = self.localizer.table().typing_phrases(language);
                let step = self.typing.tick(language, phrases);
                self.document.set_placeholder(SEARCH_INPUT, &step.text);
                let handle = self
                    .scheduler
                    .schedule(step.delay, Task::TypingTick { generation });
                self.typing.set_pending(handle);
            }
            Task::RemoveOverlay(id) => {
                self.document.remove_overlay(id);
            }
            Task::CounterFrame(index) => self.run_counter_frame(index),
            Task::ResetSubmit => {
                self.submit
                    .reset(&mut self.document, SUBMIT_BUTTON, CONTACT_INPUT);
            }
            Task::ClearShake => feedback::clear_shake(&mut self.document, SEARCH_INPUT),
            Task::ResetSearchButton => {
                feedback::reset_search_button(&mut self.document, SEARCH_BUTTON)
            }
        }
    }

    /// 문의 폼 전송
    pub fn submit_contact_form(&mut self) {
        if self.submit.submit(&mut self.document, SUBMIT_BUTTON) {
            self.scheduler.schedule(SUBMIT_RESET_DELAY, Task::ResetSubmit);
        }
    }

    /// 검색 버튼 클릭
    pub fn search(&mut self) {
        if feedback::start_search(&mut self.document, SEARCH_INPUT, SEARCH_BUTTON) {
            tracing::debug!("search feedback started");
            self.scheduler.schedule(SHAKE_DURATION, Task::ClearShake);
            self.scheduler
                .schedule(SEARCH_RESET_DELAY, Task::ResetSearchButton);
        }
    }

    /// 포커스된 입력에서 Enter
    pub fn submit_focused(&mut self) {
        match self.focus {
            Focus::Search => self.search(),
            Focus::Contact => self.submit_contact_form(),
            Focus::None => {}
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(id) = self.focus.input_id() {
            if let Some(el) = self.document.element_mut(id) {
                el.value.push(c);
            }
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(id) = self.focus.input_id() {
            if let Some(el) = self.document.element_mut(id) {
                el.value.pop();
            }
        }
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus != Focus::None
    }

    pub fn blur(&mut self) {
        self.focus = Focus::None;
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::ToggleTheme => self.toggle_theme(),
            Action::ThemeLight => self.select_theme(Theme::Light),
            Action::ThemeDark => self.select_theme(Theme::Dark),
            Action::LanguageEnglish => self.select_language(Language::English),
            Action::LanguageRussian => self.select_language(Language::Russian),
            Action::LanguageArmenian => self.select_language(Language::Armenian),
            Action::FocusSearch => self.focus = Focus::Search,
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(Self::PAGE_SCROLL),
            Action::PageDown => self.scroll = self.scroll.saturating_add(Self::PAGE_SCROLL),
            Action::ScrollTop => self.scroll = 0,
            Action::Quit => self.quit(),
        }
    }
}

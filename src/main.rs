mod app;
mod config;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::{Context, Result};
use app::App;
use config::Config;
use core::actions::{find_action, Action};
use core::counter::FRAME_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ui::theme::document_theme;
use ui::LandingView;

/// 예약 작업이 없을 때의 이벤트 대기 시간
const IDLE_POLL: Duration = Duration::from_millis(250);

/// 터미널 상태 복원을 보장하는 세션
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// 화면을 가리지 않도록 로그는 파일로만 남김
fn init_tracing(config: &Config) {
    let file_layer = config
        .log_file
        .as_deref()
        .and_then(|path| open_log_file(path).ok())
        .map(|file| fmt::layer().with_writer(Mutex::new(file)).with_ansi(false));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    tracing::info!(?config, "starting landpage");

    let result = {
        let mut session = TerminalSession::new()?;
        let mut app = App::new(&config)?;
        run_app(&mut session.terminal, &mut app)
    };

    if let Err(err) = result {
        tracing::error!(error = ?err, "terminated with error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let started = Instant::now();

    loop {
        app.advance(started.elapsed());

        terminal.draw(|f| {
            let view = LandingView::new(&app.document)
                .theme(document_theme(&app.document))
                .focused(app.focus.input_id())
                .scroll(app.scroll)
                .now(app.now());
            f.render_widget(view, f.area());
        })?;

        if app.should_quit() {
            break;
        }

        // 다음 예약 작업까지 대기, 오버레이가 남아 있으면 프레임 단위로 다시 그림
        let mut timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(started.elapsed()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        if !app.document.overlays().is_empty() {
            timeout = timeout.min(FRAME_INTERVAL);
        }

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.advance(started.elapsed());
                if app.is_input_focused() {
                    handle_input_keys(app, key.modifiers, key.code);
                } else {
                    handle_normal_keys(app, key.modifiers, key.code);
                }
            }
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 입력 모드 키 처리
fn handle_input_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (_, KeyCode::Esc) => app.blur(),
        (_, KeyCode::Enter) => app.submit_focused(),
        (_, KeyCode::Tab) => app.execute_action(Action::CycleFocus),
        (_, KeyCode::Backspace) => app.input_backspace(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.input_char(c),
        _ => {}
    }
}

use crate::config::SharedConfig;
use crate::error::{Result, UiError, WraptorError};
use crate::input::KeyMap;
use crate::language::LanguageRegistry;
use crate::ui::{ConfigPanel, PanelRenderer};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, is_raw_mode_enabled, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};
use std::time::Duration;

pub struct ConfigApplication {
    panel: ConfigPanel,
    renderer: PanelRenderer,
    keymap: KeyMap,
}

impl ConfigApplication {
    pub fn new<R: LanguageRegistry + ?Sized>(config: SharedConfig, registry: &R) -> Self {
        let keymap = KeyMap::new();
        let renderer = PanelRenderer::new(keymap.help_line());
        let panel = ConfigPanel::open(config, registry);
        Self {
            panel,
            renderer,
            keymap,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enter_terminal()?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_terminal();
                return Err(init_error(err));
            }
        };
        let hide_cursor_result = terminal.hide_cursor().map_err(|err| terminal_error("hide cursor", err));

        let loop_result = hide_cursor_result.and_then(|_| self.event_loop(&mut terminal));
        let show_cursor_result = terminal.show_cursor().map_err(|err| terminal_error("show cursor", err));
        drop(terminal);
        let cleanup_result = leave_terminal();

        loop_result.and(show_cursor_result).and(cleanup_result)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.panel.is_running() {
            self.panel.expire_status();
            terminal
                .draw(|frame| self.renderer.draw(frame, &self.panel))
                .map_err(|err| terminal_error("render", err))?;

            if event::poll(Duration::from_millis(100)).map_err(|err| terminal_error("event poll", err))? {
                match event::read().map_err(|err| terminal_error("event read", err))? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if let Some(action) = self.keymap.lookup(&key_event) {
                            self.panel.handle(action);
                        }
                    }
                    Event::Key(_) | Event::Resize(_, _) => {}
                    Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
        }

        Ok(())
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().map_err(init_error)?;
    let mut out = stdout();
    if let Err(err) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(init_error(err));
    }
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, LeaveAlternateScreen).map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

/// 端末を通常状態に戻す（パニック時用、失敗は無視）
///
/// 設定画面を開いていない（raw モードでない）ときは何も出力しない
pub fn restore_terminal() {
    let raw = is_raw_mode_enabled().unwrap_or(false);
    let _ = write_restore_sequence(&mut stdout(), raw);
    if raw {
        let _ = disable_raw_mode();
    }
}

fn write_restore_sequence<W: Write>(out: &mut W, raw: bool) -> std::io::Result<()> {
    if !raw {
        return Ok(());
    }
    execute!(out, LeaveAlternateScreen, crossterm::cursor::Show)
}

fn init_error(err: impl std::fmt::Display) -> WraptorError {
    WraptorError::Ui(UiError::TerminalInit {
        message: err.to_string(),
    })
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> WraptorError {
    WraptorError::Ui(UiError::RenderingFailed {
        component: format!("{}: {}", context, err),
    })
}

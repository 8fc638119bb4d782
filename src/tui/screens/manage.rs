//! Extension management dashboard screen.
//!
//! Presentation layer of the management panel: a checkbox list of installed
//! extensions (checked = enabled). Every interaction is expressed as a
//! [`PanelMessage`] to the controller, which answers with [`PanelReply`]s;
//! this screen never touches the config file itself.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    config::Config,
    panel::{PanelController, PanelMessage, PanelReply},
    tui::{event::TuiEvent, widgets::MultiSelect, AppResult, TuiApp},
};

/// How the dashboard session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageOutcome {
    /// User chose to apply: the caller triggers the relaunch after the
    /// terminal has been restored.
    Apply,
    /// Session closed without an apply request.
    Closed,
}

/// Dashboard state.
pub struct ManageScreen<'a, 'b> {
    controller: &'a mut PanelController<'b>,
    list: MultiSelect,
    config: Config,
    pending: usize,
    status: Option<String>,
    reset_armed: bool,
}

impl<'a, 'b> ManageScreen<'a, 'b> {
    /// Creates the screen and performs the `Ready` handshake.
    pub fn new(controller: &'a mut PanelController<'b>) -> anyhow::Result<Self> {
        let mut screen = Self {
            controller,
            list: MultiSelect::new(Vec::<String>::new()).with_title("Workspace Extension Manager"),
            config: Config::default(),
            pending: 0,
            status: None,
            reset_armed: false,
        };
        let replies = screen.controller.handle(PanelMessage::Ready)?;
        screen.apply_replies(replies);
        Ok(screen)
    }

    /// Sends a message and folds the replies into screen state. Controller
    /// errors land on the status line instead of tearing the screen down.
    fn send(&mut self, message: PanelMessage) {
        match self.controller.handle(message) {
            Ok(replies) => self.apply_replies(replies),
            Err(err) => self.status = Some(format!("error: {err:#}")),
        }
        self.pending = self.controller.pending_changes();
    }

    fn apply_replies(&mut self, replies: Vec<PanelReply>) {
        for reply in replies {
            match reply {
                PanelReply::UpdateExtensions {
                    extensions,
                    config,
                    pending_changes,
                } => {
                    self.list.set_items(
                        extensions
                            .into_iter()
                            .map(|ext| (ext.id, ext.enabled))
                            .collect(),
                    );
                    self.config = config;
                    self.pending = pending_changes;
                }
                PanelReply::ConfigurationSaved { success, error } => {
                    self.status = Some(if success {
                        "✓ Configuration saved".to_string()
                    } else {
                        error.unwrap_or_else(|| "Failed to save configuration".to_string())
                    });
                }
            }
        }
    }

    fn save(&mut self) {
        let disabled = self.controller.pending_disabled().to_vec();
        self.send(PanelMessage::SaveConfiguration {
            disabled_extensions: disabled,
        });
    }

    fn toggle_cursor_entry(&mut self) {
        if self.list.toggle_current().is_none() {
            return;
        }
        if let Some((id, enabled)) = self.list.current() {
            let message = PanelMessage::ToggleExtension {
                id: id.to_string(),
                enabled,
            };
            self.status = None;
            self.send(message);
        }
    }
}

impl TuiApp for ManageScreen<'_, '_> {
    type Output = ManageOutcome;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        // Any key other than a second 'r' disarms the pending reset
        let was_armed = self.reset_armed;
        self.reset_armed = false;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppResult::Done(ManageOutcome::Closed)),

            KeyCode::Char('a') => Some(AppResult::Done(ManageOutcome::Apply)),

            KeyCode::Char('s') | KeyCode::Enter => {
                self.save();
                None
            }

            KeyCode::Char('r') => {
                if was_armed {
                    self.send(PanelMessage::ResetToDefaults);
                } else {
                    self.reset_armed = true;
                    self.status = Some("Press r again to enable all extensions".to_string());
                }
                None
            }

            KeyCode::Char(' ') => {
                self.toggle_cursor_entry();
                None
            }

            _ => {
                self.list.handle_key(*key);
                None
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(frame.area());

        let pending = self.pending;
        let header = Line::from(vec![
            Span::styled(
                " quickext ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(if pending == 0 {
                "no pending changes".to_string()
            } else {
                format!("{pending} pending change(s)")
            }),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        self.list
            .render(chunks[1], frame.buffer_mut());

        let help = Line::from(Span::styled(
            " space toggle · s save · a apply & relaunch · r reset · q quit",
            Style::default().fg(Color::DarkGray),
        ));
        let status = Line::from(Span::raw(format!(
            " {}",
            self.status.as_deref().unwrap_or_default()
        )));
        frame.render_widget(Paragraph::new(vec![help, status]), chunks[2]);
    }
}

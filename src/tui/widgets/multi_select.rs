//! Checkbox list widget.
//!
//! A scrollable list where each entry carries a checked state. The dashboard
//! uses checked to mean "enabled".

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

/// Actions from checkbox-list interaction.
///
/// Session-level keys (save, apply, quit) belong to the owning screen, not
/// the widget, so the only actions are navigation side effects and toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiSelectAction {
    /// No action, continue
    None,
    /// The cursor entry was toggled
    Toggled,
}

/// Checkbox list state.
pub struct MultiSelect {
    items: Vec<(String, bool)>,
    state: ListState,
    title: String,
}

impl MultiSelect {
    /// Create a new checkbox list.
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let items: Vec<(String, bool)> =
            items.into_iter().map(|i| (i.to_string(), false)).collect();
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            state,
            title: String::new(),
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Pre-check items by their labels.
    #[must_use]
    pub fn with_checked(mut self, labels: &[String]) -> Self {
        for (item, checked) in &mut self.items {
            *checked = labels.contains(item);
        }
        self
    }

    /// Replace the list contents, keeping the cursor in bounds.
    pub fn set_items(&mut self, items: Vec<(String, bool)>) {
        let cursor = self
            .state
            .selected()
            .map(|i| i.min(items.len().saturating_sub(1)));
        self.items = items;
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(cursor.or(Some(0)));
        }
    }

    /// Get the checked item labels.
    pub fn checked_items(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The entry under the cursor: label and checked state.
    pub fn current(&self) -> Option<(&str, bool)> {
        let i = self.state.selected()?;
        self.items
            .get(i)
            .map(|(item, checked)| (item.as_str(), *checked))
    }

    /// Toggle the entry under the cursor. Returns its new state.
    pub fn toggle_current(&mut self) -> Option<bool> {
        let i = self.state.selected()?;
        let (_, checked) = self.items.get_mut(i)?;
        *checked = !*checked;
        Some(*checked)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> MultiSelectAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                MultiSelectAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                MultiSelectAction::None
            }
            KeyCode::Char(' ') => {
                if self.toggle_current().is_some() {
                    MultiSelectAction::Toggled
                } else {
                    MultiSelectAction::None
                }
            }
            _ => MultiSelectAction::None,
        }
    }

    /// Render the widget.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(if self.title.is_empty() {
                String::new()
            } else {
                format!(" {} ", self.title)
            });

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, (item, checked))| {
                let is_cursor = Some(i) == self.state.selected();
                let style = if is_cursor {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if *checked {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let checkbox = if *checked { "[x] " } else { "[ ] " };
                let cursor = if is_cursor { "> " } else { "  " };

                ListItem::new(Line::from(vec![
                    Span::styled(cursor, style),
                    Span::styled(checkbox, style),
                    Span::styled(item, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn widget() -> MultiSelect {
        MultiSelect::new(vec!["a.ext", "b.ext", "c.ext"])
            .with_checked(&["a.ext".to_string(), "c.ext".to_string()])
    }

    #[test]
    fn test_prechecked_items() {
        let ms = widget();
        assert_eq!(ms.checked_items(), vec!["a.ext", "c.ext"]);
    }

    #[test]
    fn test_space_toggles_cursor_entry() {
        let mut ms = widget();
        assert_eq!(ms.current(), Some(("a.ext", true)));

        let action = ms.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(action, MultiSelectAction::Toggled);
        assert_eq!(ms.current(), Some(("a.ext", false)));
        assert_eq!(ms.checked_items(), vec!["c.ext"]);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut ms = widget();
        ms.handle_key(key(KeyCode::Up));
        assert_eq!(ms.current(), Some(("c.ext", true)));
        ms.handle_key(key(KeyCode::Down));
        assert_eq!(ms.current(), Some(("a.ext", true)));
    }

    #[test]
    fn test_set_items_keeps_cursor_in_bounds() {
        let mut ms = widget();
        ms.handle_key(key(KeyCode::Up)); // cursor on last entry
        ms.set_items(vec![("x.ext".to_string(), true)]);
        assert_eq!(ms.current(), Some(("x.ext", true)));
    }

    #[test]
    fn test_session_keys_are_not_widget_actions() {
        let mut ms = widget();
        assert_eq!(ms.handle_key(key(KeyCode::Enter)), MultiSelectAction::None);
        assert_eq!(ms.handle_key(key(KeyCode::Esc)), MultiSelectAction::None);
        assert_eq!(ms.checked_items(), vec!["a.ext", "c.ext"]);
    }

    #[test]
    fn test_empty_list_has_no_cursor() {
        let mut ms = MultiSelect::new(Vec::<String>::new());
        assert!(ms.is_empty());
        assert_eq!(ms.len(), 0);
        assert_eq!(ms.toggle_current(), None);
    }
}

//! Smarter Integration board
//!
//! The board is mounted when the Smarter Integration tab is entered and dropped
//! when it is left. Each card owns its own expand/action state for as long as
//! the board lives; nothing is shared between cards.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::core::{Action, Module, NotifyLevel};
use crate::data::Integration;

/// Decision recorded on a card's recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionTaken {
    #[default]
    None,
    Approve,
    Review,
}

impl ActionTaken {
    pub fn label(&self) -> &'static str {
        match self {
            ActionTaken::None => "None",
            ActionTaken::Approve => "Approve",
            ActionTaken::Review => "Review",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegrationCard {
    integration: &'static Integration,
    expanded: bool,
    action_taken: ActionTaken,
}

impl IntegrationCard {
    pub fn new(integration: &'static Integration) -> Self {
        Self {
            integration,
            expanded: false,
            action_taken: ActionTaken::None,
        }
    }

    pub fn integration(&self) -> &'static Integration {
        self.integration
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn action_taken(&self) -> ActionTaken {
        self.action_taken
    }

    /// Only cards carrying a recommendation offer the toggle.
    pub fn can_expand(&self) -> bool {
        self.integration.has_recommendation()
    }

    pub fn can_act(&self) -> bool {
        self.expanded && self.action_taken == ActionTaken::None
    }

    /// Flip between collapsed and expanded. Returns false when not offered.
    pub fn toggle(&mut self) -> bool {
        if !self.can_expand() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    /// Record a decision. Once set it is never cleared.
    pub fn take_action(&mut self, action: ActionTaken) -> bool {
        if action == ActionTaken::None || !self.can_act() {
            return false;
        }
        self.action_taken = action;
        info!(
            integration = self.integration.name,
            action = action.label(),
            "integration action taken"
        );
        true
    }
}

#[derive(Debug, Clone)]
pub struct IntegrationBoard {
    cards: Vec<IntegrationCard>,
    selected: usize,
}

impl IntegrationBoard {
    pub fn mount(integrations: &'static [Integration]) -> Self {
        Self {
            cards: integrations.iter().map(IntegrationCard::new).collect(),
            selected: 0,
        }
    }

    pub fn cards(&self) -> &[IntegrationCard] {
        &self.cards
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&IntegrationCard> {
        self.cards.get(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.cards.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + 1) % self.cards.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + self.cards.len() - 1) % self.cards.len();
        }
    }

    pub fn toggle_selected(&mut self) -> Action {
        let Some(card) = self.cards.get_mut(self.selected) else {
            return Action::None;
        };
        let name = card.integration.name;
        if card.toggle() {
            let verb = if card.expanded { "Showing" } else { "Hid" };
            Action::Notify(
                format!("{verb} AI recommendation for {name}"),
                NotifyLevel::Info,
            )
        } else {
            Action::Notify(format!("{name} has no AI recommendation"), NotifyLevel::Warn)
        }
    }

    pub fn act_on_selected(&mut self, action: ActionTaken) -> Action {
        let Some(card) = self.cards.get_mut(self.selected) else {
            return Action::None;
        };
        let name = card.integration.name;
        if card.take_action(action) {
            return Action::Notify(
                format!("Action taken: {} ({name})", action.label()),
                NotifyLevel::Info,
            );
        }
        if card.action_taken != ActionTaken::None {
            Action::Notify(
                format!("Action already taken: {}", card.action_taken.label()),
                NotifyLevel::Warn,
            )
        } else if !card.can_expand() {
            Action::Notify(format!("{name} has no AI recommendation"), NotifyLevel::Warn)
        } else {
            Action::Notify(
                "Expand the recommendation first (Enter)".to_string(),
                NotifyLevel::Warn,
            )
        }
    }
}

impl Module for IntegrationBoard {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => self.act_on_selected(ActionTaken::Approve),
            KeyCode::Char('v') => self.act_on_selected(ActionTaken::Review),
            KeyCode::Char('y') => match self.selected_card() {
                Some(card) => Action::Copy(card.integration.ai_insight.to_string()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::INTEGRATIONS;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_card_without_recommendation_never_expands() {
        for integration in INTEGRATIONS.iter().filter(|i| !i.has_recommendation()) {
            let mut card = IntegrationCard::new(integration);
            assert!(!card.can_expand());
            assert!(!card.toggle());
            assert!(!card.is_expanded());
            assert!(!card.take_action(ActionTaken::Approve));
        }
    }

    #[test]
    fn test_action_requires_expanded() {
        let mut card = IntegrationCard::new(&INTEGRATIONS[1]);
        assert!(!card.take_action(ActionTaken::Review));
        assert!(card.toggle());
        assert!(card.take_action(ActionTaken::Review));
        assert_eq!(card.action_taken(), ActionTaken::Review);
    }

    #[test]
    fn test_action_is_terminal() {
        let mut card = IntegrationCard::new(&INTEGRATIONS[2]);
        card.toggle();
        assert!(card.take_action(ActionTaken::Approve));
        assert!(!card.take_action(ActionTaken::Review));
        assert!(!card.take_action(ActionTaken::None));
        card.toggle();
        card.toggle();
        assert!(card.is_expanded());
        assert_eq!(card.action_taken(), ActionTaken::Approve);
    }

    #[test]
    fn test_board_keys_drive_selected_card() {
        let mut board = IntegrationBoard::mount(&INTEGRATIONS);
        assert_eq!(board.handle_key(key(KeyCode::Char('j'))), Action::None);
        assert_eq!(board.selected(), 1);
        assert_eq!(
            board.handle_key(key(KeyCode::Enter)),
            Action::Notify(
                "Showing AI recommendation for Warehouse Management".to_string(),
                NotifyLevel::Info
            )
        );
        assert!(board.cards()[1].is_expanded());
        let action = board.handle_key(key(KeyCode::Char('a')));
        assert_eq!(
            action,
            Action::Notify(
                "Action taken: Approve (Warehouse Management)".to_string(),
                NotifyLevel::Info
            )
        );
        // Other cards are untouched.
        assert!(board.cards().iter().enumerate().all(|(i, c)| i == 1
            || (!c.is_expanded() && c.action_taken() == ActionTaken::None)));
    }

    #[test]
    fn test_board_selection_wraps() {
        let mut board = IntegrationBoard::mount(&INTEGRATIONS);
        board.select_prev();
        assert_eq!(board.selected(), INTEGRATIONS.len() - 1);
        board.select_next();
        assert_eq!(board.selected(), 0);
        board.select(99);
        assert_eq!(board.selected(), 0);
    }

    #[test]
    fn test_toggle_without_recommendation_warns() {
        let mut board = IntegrationBoard::mount(&INTEGRATIONS);
        let action = board.toggle_selected();
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
    }

    #[test]
    fn test_toggle_reports_each_flip() {
        let mut board = IntegrationBoard::mount(&INTEGRATIONS);
        board.select(2);
        assert!(matches!(board.toggle_selected(), Action::Notify(msg, NotifyLevel::Info)
            if msg.starts_with("Showing")));
        assert_eq!(
            board.toggle_selected(),
            Action::Notify(
                "Hid AI recommendation for Transportation Management".to_string(),
                NotifyLevel::Info
            )
        );
        assert!(!board.cards()[2].is_expanded());
    }

    #[test]
    fn test_copy_selected_insight() {
        let mut board = IntegrationBoard::mount(&INTEGRATIONS);
        assert_eq!(
            board.handle_key(key(KeyCode::Char('y'))),
            Action::Copy(INTEGRATIONS[0].ai_insight.to_string())
        );
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Keybinding, KeybindingAction};

const BOARD_BINDINGS: &[Keybinding] = &[
    Keybinding::new("h", "move left column", KeybindingAction::NavigateLeft),
    Keybinding::new("l", "move right column", KeybindingAction::NavigateRight),
    Keybinding::new("j", "move down", KeybindingAction::NavigateDown),
    Keybinding::new("k", "move up", KeybindingAction::NavigateUp),
    Keybinding::new("C-n", "content down", KeybindingAction::ScrollDetailDown),
    Keybinding::new("C-p", "content up", KeybindingAction::ScrollDetailUp),
    Keybinding::new("R", "refresh", KeybindingAction::Refresh),
    Keybinding::new("P", "open browser (project board)", KeybindingAction::OpenProject),
    Keybinding::new("p", "open browser (issue)", KeybindingAction::OpenCard),
    Keybinding::new("n", "move card to next column", KeybindingAction::MoveCardForward),
    Keybinding::new("b", "move card to previous column", KeybindingAction::MoveCardBackward),
    Keybinding::new("q", "quit", KeybindingAction::Quit),
];

/// Bindings shown in the information panel, in display order.
pub fn board_bindings() -> &'static [Keybinding] {
    BOARD_BINDINGS
}

pub fn action_for(key: &KeyEvent) -> Option<KeybindingAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(KeybindingAction::ScrollDetailDown),
            KeyCode::Char('p') => Some(KeybindingAction::ScrollDetailUp),
            KeyCode::Char('c') => Some(KeybindingAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('h') | KeyCode::Left => KeybindingAction::NavigateLeft,
        KeyCode::Char('l') | KeyCode::Right => KeybindingAction::NavigateRight,
        KeyCode::Char('j') | KeyCode::Down => KeybindingAction::NavigateDown,
        KeyCode::Char('k') | KeyCode::Up => KeybindingAction::NavigateUp,
        KeyCode::Char('R') => KeybindingAction::Refresh,
        KeyCode::Char('P') => KeybindingAction::OpenProject,
        KeyCode::Char('p') => KeybindingAction::OpenCard,
        KeyCode::Char('n') => KeybindingAction::MoveCardForward,
        KeyCode::Char('b') => KeybindingAction::MoveCardBackward,
        KeyCode::Char('q') => KeybindingAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_vim_keys_and_arrows_agree() {
        assert_eq!(action_for(&key(KeyCode::Char('h'))), action_for(&key(KeyCode::Left)));
        assert_eq!(action_for(&key(KeyCode::Char('l'))), action_for(&key(KeyCode::Right)));
        assert_eq!(action_for(&key(KeyCode::Char('j'))), action_for(&key(KeyCode::Down)));
        assert_eq!(action_for(&key(KeyCode::Char('k'))), action_for(&key(KeyCode::Up)));
    }

    #[test]
    fn test_case_distinguishes_project_and_card() {
        let upper = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        assert_eq!(action_for(&upper), Some(KeybindingAction::OpenProject));
        assert_eq!(
            action_for(&key(KeyCode::Char('p'))),
            Some(KeybindingAction::OpenCard)
        );
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(action_for(&ctrl('n')), Some(KeybindingAction::ScrollDetailDown));
        assert_eq!(action_for(&ctrl('p')), Some(KeybindingAction::ScrollDetailUp));
        assert_eq!(action_for(&ctrl('c')), Some(KeybindingAction::Quit));
        assert_eq!(action_for(&ctrl('x')), None);
    }

    #[test]
    fn test_every_listed_binding_resolves() {
        for binding in board_bindings() {
            let event = match binding.key {
                "C-n" => ctrl('n'),
                "C-p" => ctrl('p'),
                other => key(KeyCode::Char(other.chars().next().unwrap())),
            };
            assert_eq!(action_for(&event), Some(binding.action), "{}", binding.key);
        }
    }
}

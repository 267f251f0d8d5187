use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,
    Select,
    GoHome,
    ShowInventions,
    ShowPatterns,
    ShowTimeline,
    ToggleSort,
    ShowHelp,
    HideHelp,
    // Text input actions (invention name on home, filter elsewhere)
    StartInput,
    InputChar(char),
    InputBackspace,
    InputConfirm,
    InputCancel,
    NextSuggestion,
}

pub fn handle_key_event(key: KeyEvent, input_active: bool, show_help: bool) -> Option<AppAction> {
    // If help is showing, any key closes it
    if show_help {
        return Some(AppAction::HideHelp);
    }

    if input_active {
        return match key.code {
            KeyCode::Enter => Some(AppAction::InputConfirm),
            KeyCode::Esc => Some(AppAction::InputCancel),
            KeyCode::Backspace => Some(AppAction::InputBackspace),
            KeyCode::Tab => Some(AppAction::NextSuggestion),
            KeyCode::Char(c) => Some(AppAction::InputChar(c)),
            _ => None,
        };
    }

    // Normal mode
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => Some(AppAction::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppAction::Quit),

        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Some(AppAction::MoveDown),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Some(AppAction::MoveUp),
        (KeyCode::Char('<'), _) => Some(AppAction::MoveToTop),
        (KeyCode::Char('>'), _) => Some(AppAction::MoveToBottom),

        (KeyCode::Enter, _) => Some(AppAction::Select),

        (KeyCode::Esc, _) | (KeyCode::Char('h'), _) => Some(AppAction::GoHome),
        (KeyCode::Char('i'), _) => Some(AppAction::ShowInventions),
        (KeyCode::Char('p'), _) => Some(AppAction::ShowPatterns),
        (KeyCode::Char('t'), _) => Some(AppAction::ShowTimeline),
        (KeyCode::Char('s'), _) => Some(AppAction::ToggleSort),
        (KeyCode::Char('/'), _) | (KeyCode::Char('a'), _) => Some(AppAction::StartInput),

        (KeyCode::Char('?'), _) => Some(AppAction::ShowHelp),

        _ => None,
    }
}

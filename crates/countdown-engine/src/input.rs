/// A key press as seen by the countdown. Only key identity matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Esc,
    CtrlC,
    Char(char),
    Other,
}

/// What a key press asks the countdown to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Pause,
    Restart,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Esc | Key::CtrlC => Some(Command::Quit),
            Key::Char('p' | 'P') => Some(Command::Pause),
            Key::Char('c' | 'C') => Some(Command::Restart),
            Key::Char(_) | Key::Other => None,
        }
    }
}

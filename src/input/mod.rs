use macroquad::input::KeyCode;

/// Host input, in the order the host reported it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    WindowClosed,
    KeyPressed(KeyCode),
    MouseButtonPressed { x: f32, y: f32 },
}

/// What an event asks the coordinator to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Quit,
    TogglePause,
    /// Shrink the step delay by 10%
    SpeedUp,
    /// Grow the step delay by 10%
    SlowDown,
    /// One generation now, regardless of pause or clock
    Step,
    Reset,
    /// Index into `presets::all_patterns()`
    LoadPattern(usize),
    /// Pointer press at a screen position; only honored while paused
    ToggleCellAt { x: f32, y: f32 },
}

const KEY_BINDINGS: [(KeyCode, Command); 14] = [
    (KeyCode::Escape, Command::Quit),
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SlowDown),
    (KeyCode::Right, Command::Step),
    (KeyCode::R, Command::Reset),
    (KeyCode::Key1, Command::LoadPattern(0)),
    (KeyCode::Key2, Command::LoadPattern(1)),
    (KeyCode::Key3, Command::LoadPattern(2)),
    (KeyCode::Key4, Command::LoadPattern(3)),
    (KeyCode::Key5, Command::LoadPattern(4)),
    (KeyCode::Key6, Command::LoadPattern(5)),
    (KeyCode::Key7, Command::LoadPattern(6)),
    (KeyCode::Key8, Command::LoadPattern(7)),
];

/// Map one event to its command; unbound keys map to nothing
pub fn command_for(event: Event) -> Option<Command> {
    match event {
        Event::WindowClosed => Some(Command::Quit),
        Event::MouseButtonPressed { x, y } => Some(Command::ToggleCellAt { x, y }),
        Event::KeyPressed(key) => KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, command)| *command),
    }
}

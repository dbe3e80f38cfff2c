use tricolor_engine::color::{Channel, ColorState, Corner};
use winit::keyboard::KeyCode;

/// A key press translated into a color edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Select(Corner),
    Nudge { channel: Channel, steps: i32 },
    Reset,
}

/// Key bindings:
///
/// - `1` / `2` / `3`: edit top / bottom-left / bottom-right
/// - `Q` / `A`: red up / down
/// - `W` / `S`: green up / down
/// - `E` / `D`: blue up / down
/// - `Backspace`: restore red / green / blue corners
///
/// Holding shift moves ten steps at a time.
pub fn command_for(key: KeyCode, shift: bool) -> Option<Command> {
    let steps = if shift { 10 } else { 1 };
    let nudge = |channel, sign: i32| Command::Nudge { channel, steps: sign * steps };

    Some(match key {
        KeyCode::Digit1 => Command::Select(Corner::Top),
        KeyCode::Digit2 => Command::Select(Corner::BottomLeft),
        KeyCode::Digit3 => Command::Select(Corner::BottomRight),
        KeyCode::KeyQ => nudge(Channel::Red, 1),
        KeyCode::KeyA => nudge(Channel::Red, -1),
        KeyCode::KeyW => nudge(Channel::Green, 1),
        KeyCode::KeyS => nudge(Channel::Green, -1),
        KeyCode::KeyE => nudge(Channel::Blue, 1),
        KeyCode::KeyD => nudge(Channel::Blue, -1),
        KeyCode::Backspace => Command::Reset,
        _ => return None,
    })
}

/// Keyboard stand-in for the per-corner RGB sliders.
#[derive(Debug)]
pub struct Controls {
    selected: Corner,
}

impl Controls {
    pub fn new() -> Self {
        Self {
            selected: Corner::Top,
        }
    }

    pub fn selected(&self) -> Corner {
        self.selected
    }

    /// Applies `cmd` to `colors` and returns a readout line for the change.
    pub fn apply(&mut self, cmd: Command, colors: &mut ColorState) -> String {
        match cmd {
            Command::Select(corner) => {
                self.selected = corner;
                readout(corner, colors)
            }
            Command::Nudge { channel, steps } => {
                colors.adjust(self.selected, channel, steps);
                let [r, g, b] = colors.corner(self.selected).to_u8();
                let value = match channel {
                    Channel::Red => r,
                    Channel::Green => g,
                    Channel::Blue => b,
                };
                format!("{} {} {value}", self.selected.label(), channel.label())
            }
            Command::Reset => {
                *colors = ColorState::default();
                readout(self.selected, colors)
            }
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

/// `"<corner>  R 255  G 0  B 0"`.
pub fn readout(corner: Corner, colors: &ColorState) -> String {
    let [r, g, b] = colors.corner(corner).to_u8();
    format!("{}  R {r}  G {g}  B {b}", corner.label())
}

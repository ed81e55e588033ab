use crate::pos::Dir;
use winit::event::VirtualKeyCode;

/// Input state handed to every update. Holds the last direction pressed and
/// keeps it until another one replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub heading: Option<Dir>,
}

impl Input {
    /// Last write wins; there is no release.
    pub fn steer(&mut self, dir: Dir) {
        self.heading = Some(dir);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Dir),
    Start,
    Stop,
    Restart,
    Dump,
    Quit,
}

impl Command {
    pub fn from_key(key: VirtualKeyCode) -> Option<Self> {
        Some(match key {
            VirtualKeyCode::Up => Command::Steer(Dir::Up),
            VirtualKeyCode::Down => Command::Steer(Dir::Down),
            VirtualKeyCode::Left => Command::Steer(Dir::Left),
            VirtualKeyCode::Right => Command::Steer(Dir::Right),
            VirtualKeyCode::Space => Command::Start,
            VirtualKeyCode::Escape => Command::Stop,
            VirtualKeyCode::R => Command::Restart,
            VirtualKeyCode::D => Command::Dump,
            VirtualKeyCode::Q => Command::Quit,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_starts_empty_and_persists() {
        let mut input = Input::default();
        assert_eq!(input.heading, None);
        input.steer(Dir::Left);
        let copy = input;
        assert_eq!(copy.heading, Some(Dir::Left));
        assert_eq!(input.heading, Some(Dir::Left));
    }

    #[test]
    fn last_press_wins() {
        let mut input = Input::default();
        input.steer(Dir::Up);
        input.steer(Dir::Right);
        input.steer(Dir::Down);
        assert_eq!(input.heading, Some(Dir::Down));
    }

    #[test]
    fn maps_control_keys() {
        assert_eq!(Command::from_key(VirtualKeyCode::Left), Some(Command::Steer(Dir::Left)));
        assert_eq!(Command::from_key(VirtualKeyCode::Space), Some(Command::Start));
        assert_eq!(Command::from_key(VirtualKeyCode::Escape), Some(Command::Stop));
        assert_eq!(Command::from_key(VirtualKeyCode::D), Some(Command::Dump));
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(Command::from_key(VirtualKeyCode::W), None);
        assert_eq!(Command::from_key(VirtualKeyCode::Return), None);
    }
}

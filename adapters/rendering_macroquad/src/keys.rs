//! Translation from macroquad key codes to the key names systems bind against.

use cube_garden_core::InputEvent;
use macroquad::input::{is_key_pressed, is_key_released, KeyCode};

/// Keys forwarded to the simulation, named the way browsers report `KeyboardEvent.key`.
const FORWARDED_KEYS: [(KeyCode, &str); 44] = [
    (KeyCode::Up, "ArrowUp"),
    (KeyCode::Down, "ArrowDown"),
    (KeyCode::Left, "ArrowLeft"),
    (KeyCode::Right, "ArrowRight"),
    (KeyCode::Space, " "),
    (KeyCode::Enter, "Enter"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::LeftShift, "Shift"),
    (KeyCode::A, "a"),
    (KeyCode::B, "b"),
    (KeyCode::C, "c"),
    (KeyCode::D, "d"),
    (KeyCode::E, "e"),
    (KeyCode::F, "f"),
    (KeyCode::G, "g"),
    (KeyCode::H, "h"),
    (KeyCode::I, "i"),
    (KeyCode::J, "j"),
    (KeyCode::K, "k"),
    (KeyCode::L, "l"),
    (KeyCode::M, "m"),
    (KeyCode::N, "n"),
    (KeyCode::O, "o"),
    (KeyCode::P, "p"),
    (KeyCode::Q, "q"),
    (KeyCode::R, "r"),
    (KeyCode::S, "s"),
    (KeyCode::T, "t"),
    (KeyCode::U, "u"),
    (KeyCode::V, "v"),
    (KeyCode::W, "w"),
    (KeyCode::X, "x"),
    (KeyCode::Y, "y"),
    (KeyCode::Z, "z"),
    (KeyCode::Key0, "0"),
    (KeyCode::Key1, "1"),
    (KeyCode::Key2, "2"),
    (KeyCode::Key3, "3"),
    (KeyCode::Key4, "4"),
    (KeyCode::Key5, "5"),
    (KeyCode::Key6, "6"),
    (KeyCode::Key7, "7"),
    (KeyCode::Key8, "8"),
    (KeyCode::Key9, "9"),
];

/// Collects key-down and key-up edges observed by macroquad this frame.
pub(crate) fn poll_events() -> Vec<InputEvent> {
    collect_edges(|code| (is_key_pressed(code), is_key_released(code)))
}

/// Builds events from a probe reporting `(pressed, released)` for each forwarded key.
fn collect_edges<F>(mut probe: F) -> Vec<InputEvent>
where
    F: FnMut(KeyCode) -> (bool, bool),
{
    let mut events = Vec::new();
    for (code, name) in FORWARDED_KEYS {
        let (pressed, released) = probe(code);
        if pressed {
            events.push(InputEvent::KeyDown(name.to_owned()));
        }
        if released {
            events.push(InputEvent::KeyUp(name.to_owned()));
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_for(pressed: &[KeyCode], released: &[KeyCode]) -> Vec<InputEvent> {
        collect_edges(|code| (pressed.contains(&code), released.contains(&code)))
    }

    #[test]
    fn arrows_use_browser_names() {
        assert_eq!(
            edges_for(&[KeyCode::Up], &[KeyCode::Left]),
            vec![
                InputEvent::KeyDown("ArrowUp".to_owned()),
                InputEvent::KeyUp("ArrowLeft".to_owned()),
            ]
        );
    }

    #[test]
    fn letters_are_lowercase() {
        assert_eq!(
            edges_for(&[KeyCode::W, KeyCode::D], &[]),
            vec![
                InputEvent::KeyDown("d".to_owned()),
                InputEvent::KeyDown("w".to_owned()),
            ]
        );
    }

    #[test]
    fn tap_in_one_frame_reports_down_before_up() {
        assert_eq!(
            edges_for(&[KeyCode::Space], &[KeyCode::Space]),
            vec![
                InputEvent::KeyDown(" ".to_owned()),
                InputEvent::KeyUp(" ".to_owned()),
            ]
        );
    }

    #[test]
    fn unmapped_keys_are_not_forwarded() {
        assert!(edges_for(&[KeyCode::Escape, KeyCode::F1], &[KeyCode::Escape]).is_empty());
    }

    #[test]
    fn forwarded_names_are_unique() {
        let mut names: Vec<&str> = FORWARDED_KEYS.iter().map(|(_, name)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FORWARDED_KEYS.len());
    }
}

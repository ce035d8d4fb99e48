//! Line-based keyboard input
//!
//! Each stdin line is `<key> down`, `<key> up` or `quit`, where `<key>` is a
//! key name looked up in the configured bindings.

use std::io::BufRead;
use std::thread;

use crossbeam_channel::Sender;
use game_core::{InputEvent, KeyBindings, KeyEvent};

/// Parse one input line
pub fn parse_line(line: &str, bindings: &KeyBindings) -> Option<InputEvent> {
    let mut words = line.split_whitespace();
    let key = words.next()?;
    if key.eq_ignore_ascii_case("quit") {
        return Some(InputEvent::Quit);
    }

    let control = bindings.control_for(key)?;
    let pressed = match words.next()? {
        "down" | "press" => true,
        "up" | "release" => false,
        _ => return None,
    };
    Some(InputEvent::Key(KeyEvent { control, pressed }))
}

/// Forward parsed lines from `reader` until it ends or the game hangs up.
///
/// Returning drops `tx`, which the game loop sees as a quit.
pub fn pump_lines<R: BufRead>(reader: R, bindings: &KeyBindings, tx: Sender<InputEvent>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line, bindings) {
            Some(event) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            None => log::warn!("ignoring input line {line:?}"),
        }
    }
    log::debug!("input stream closed");
}

/// Read stdin on its own thread
pub fn spawn_stdin_reader(bindings: KeyBindings, tx: Sender<InputEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || pump_lines(std::io::stdin().lock(), &bindings, tx))
}

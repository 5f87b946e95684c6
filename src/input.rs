use log::info;
use rand::Rng;

use crate::cells::CompassPrimary;
use crate::session::Session;

/// Everything a player can ask of a maze session.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Command {
    Move(CompassPrimary),
    ShowPath,
    Reset,
    Regenerate,
    AutoSolve,
    Quit,
}

/// What the driver should do after a command.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Outcome {
    Redraw,
    /// The auto-solve animation was (re)started, restart its step timer too.
    AnimationStarted,
    Ignored,
    Quit,
}

pub const ESCAPE: char = '\u{1b}';

/// Keyboard character bindings. Arrow keys have no character and are mapped by the window layer.
pub fn command_for_char(c: char) -> Option<Command> {
    match c {
        ' ' => Some(Command::ShowPath),
        'r' | 'R' => Some(Command::Reset),
        'n' | 'N' => Some(Command::Regenerate),
        'a' | 'A' => Some(Command::AutoSolve),
        ESCAPE => Some(Command::Quit),
        _ => None,
    }
}

pub const CONTROLS: &str = "Maze controls:
Arrow keys - move player
Space      - show shortest path
R          - reset maze
N          - generate new maze
A          - auto-solve
ESC        - quit";

/// Apply one command to the session.
///
/// Movement is suppressed while the session is auto-solving.
pub fn dispatch<R: Rng>(session: &mut Session<R>, command: Command) -> Outcome {
    match command {
        Command::Move(direction) => {
            if session.is_auto_moving() || !session.move_in_direction(direction) {
                Outcome::Ignored
            } else {
                Outcome::Redraw
            }
        }
        Command::ShowPath => {
            session.find_path_bfs();
            info!("Show shortest path");
            Outcome::Redraw
        }
        Command::Reset => {
            session.reset();
            info!("Reset maze");
            Outcome::Redraw
        }
        Command::Regenerate => {
            session.generate_new_maze();
            info!("Generate new maze");
            Outcome::Redraw
        }
        Command::AutoSolve => {
            info!("Start auto-solve");
            if session.prepare_auto_move() {
                Outcome::AnimationStarted
            } else {
                Outcome::Redraw
            }
        }
        Command::Quit => Outcome::Quit,
    }
}

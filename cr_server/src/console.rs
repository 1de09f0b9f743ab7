//! Console commands read from stdin, standing in for the UI layer.

use card_round::{PlayerInput, selection::Key};
use std::str::FromStr;
use thiserror::Error;

pub const COMMANDS: &str = "\
  deal                 deal a new hand
  pick N               select slot N
  tap N                tap slot N (twice quickly to select)
  drag N Y             release slot N at height Y
  click | drag         pointer activity
  key C | enter | space
  esc | fN             system keys (not activity)
  scroll D             scroll by delta D
  button NAME          press a UI button
  overlay on|off       open or close a blocking overlay
  view                 print the round state
  reset                drop the current hand
  end                  end the session
  help                 show this list
  quit                 close the round and exit";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Deal,
    Pick(usize),
    Tap(usize),
    DragRelease { position: usize, y: f32 },
    Input(PlayerInput),
    Overlay(bool),
    View,
    Reset,
    End,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: invalid {argument} '{value}'")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },
}

fn arg<'a, T: FromStr>(
    args: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, CommandError> {
    let value = args
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        argument,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        let command = match name.as_str() {
            "deal" => Self::Deal,
            "pick" | "select" => Self::Pick(arg(&mut words, "pick", "slot")?),
            "tap" => Self::Tap(arg(&mut words, "tap", "slot")?),
            "drag" => match words.next() {
                None => Self::Input(PlayerInput::Drag),
                Some(position) => {
                    let position = position.parse().map_err(|_| CommandError::InvalidArgument {
                        command: "drag",
                        argument: "slot",
                        value: position.to_string(),
                    })?;
                    let y = arg(&mut words, "drag", "height")?;
                    Self::DragRelease { position, y }
                }
            },
            "click" => Self::Input(PlayerInput::PointerDown),
            "key" => Self::Input(PlayerInput::Key(Key::Char(arg(&mut words, "key", "char")?))),
            "enter" => Self::Input(PlayerInput::Key(Key::Enter)),
            "space" => Self::Input(PlayerInput::Key(Key::Space)),
            "esc" | "escape" => Self::Input(PlayerInput::Key(Key::Escape)),
            "scroll" => Self::Input(PlayerInput::Scroll(arg(&mut words, "scroll", "delta")?)),
            "button" => {
                let label: Vec<&str> = words.by_ref().collect();
                if label.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "button",
                        argument: "name",
                    });
                }
                Self::Input(PlayerInput::UiButton(label.join(" ")))
            }
            "overlay" => match words.next() {
                Some("on") => Self::Overlay(true),
                Some("off") => Self::Overlay(false),
                Some(other) => {
                    return Err(CommandError::InvalidArgument {
                        command: "overlay",
                        argument: "state",
                        value: other.to_string(),
                    });
                }
                None => {
                    return Err(CommandError::MissingArgument {
                        command: "overlay",
                        argument: "state",
                    });
                }
            },
            "view" => Self::View,
            "reset" => Self::Reset,
            "end" => Self::End,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                Some(n) => Self::Input(PlayerInput::Key(Key::Function(n))),
                None => return Err(CommandError::Unknown(other.to_string())),
            },
        };

        Ok(command)
    }
}

use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("expected 'on' or 'off' after debug")]
    Debug,

    #[error("expected 'name' after setoption")]
    MissingName,

    #[error("missing value for option '{0}'")]
    MissingValue(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum EngineOption {
    Hash(usize),
    Threads(usize),
    ClearHash,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Uci,
    Debug(bool),
    IsReady,
    SetOption(EngineOption),
    NewGame,
    Print,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        match tokens.next() {
            Some("uci") => Ok(Self::Uci),
            Some("debug") => Self::parse_debug(tokens),
            Some("isready") => Ok(Self::IsReady),
            Some("setoption") => Self::parse_option(tokens),
            Some("ucinewgame") => Ok(Self::NewGame),
            Some("d") => Ok(Self::Print),
            Some("quit") => Ok(Self::Quit),
            Some(other) => Err(CommandError::Unknown(other.to_string())),
            None => Err(CommandError::Empty),
        }
    }
}

impl Command {
    fn parse_debug(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        match tokens.next() {
            Some("on") => Ok(Self::Debug(true)),
            Some("off") => Ok(Self::Debug(false)),
            _ => Err(CommandError::Debug),
        }
    }

    fn parse_option(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        if tokens.next() != Some("name") {
            return Err(CommandError::MissingName);
        }

        let name = tokens
            .by_ref()
            .take_while(|&token| token != "value")
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            return Err(CommandError::MissingName);
        }

        let option = match name.to_ascii_lowercase().as_str() {
            "hash" => EngineOption::Hash(parse_value(&name, tokens)?),
            "threads" => EngineOption::Threads(parse_value(&name, tokens)?),
            "clear hash" => EngineOption::ClearHash,
            _ => return Err(CommandError::UnknownOption(name)),
        };

        Ok(Self::SetOption(option))
    }
}

fn parse_value<T: FromStr>(name: &str, tokens: SplitWhitespace) -> Result<T, CommandError> {
    let value = tokens.collect::<Vec<_>>().join(" ");

    if value.is_empty() {
        return Err(CommandError::MissingValue(name.to_string()));
    }

    value.parse().map_err(|_| CommandError::InvalidValue {
        name: name.to_string(),
        value,
    })
}

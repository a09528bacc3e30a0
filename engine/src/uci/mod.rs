//! Line based command loop. Enough of the protocol to drive bootstrap and new-game resets; search
//! commands are not understood.

mod command;

use std::io::{self, BufRead, Write};

pub use command::{Command, CommandError, EngineOption};

use crate::{
    Engine, EngineConfig,
    constants::{AUTHORS, NAME, VERSION},
};

/// What the loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input` until `quit` or end of input, writing replies to `output`.
/// Unparseable lines are logged and skipped.
pub fn run(engine: &mut Engine, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                log::warn!("{err}");
                continue;
            }
        };

        if handle(engine, command, &mut output)? == Flow::Quit {
            break;
        }
        output.flush()?;
    }

    engine.stop_helpers();
    Ok(())
}

pub fn handle(engine: &mut Engine, command: Command, output: &mut impl Write) -> io::Result<Flow> {
    match command {
        Command::Uci => {
            writeln!(output, "id name {NAME} {VERSION}")?;
            writeln!(output, "id author {AUTHORS}")?;
            writeln!(
                output,
                "option name Hash type spin default {} min 1 max {}",
                EngineConfig::default().hash_mb,
                EngineConfig::MAX_HASH_MB
            )?;
            writeln!(
                output,
                "option name Threads type spin default {} min 1 max {}",
                EngineConfig::default().threads,
                EngineConfig::MAX_THREADS
            )?;
            writeln!(output, "option name Clear Hash type button")?;
            writeln!(output, "uciok")?;
        }
        Command::Debug(on) => {
            let level = if on { log::LevelFilter::Debug } else { log::LevelFilter::Info };
            log::set_max_level(level);
        }
        Command::IsReady => writeln!(output, "readyok")?,
        Command::SetOption(option) => set_option(engine, option),
        Command::NewGame => engine.reset_new_game(),
        Command::Print => writeln!(output, "{}", engine.main_thread().board)?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn set_option(engine: &mut Engine, option: EngineOption) {
    let result = match option {
        EngineOption::Hash(mb) => engine.set_hash(mb),
        EngineOption::Threads(threads) => engine.set_threads(threads),
        EngineOption::ClearHash => {
            engine.clear_hash();
            Ok(())
        }
    };

    if let Err(err) = result {
        log::warn!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write as _};

    use nnue::params::FILE_SIZE;
    use tempfile::NamedTempFile;

    use super::*;

    fn engine() -> (Engine, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; FILE_SIZE]).unwrap();

        let engine = Engine::bootstrap(EngineConfig {
            hash_mb: 1,
            network_path: file.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();

        (engine, file)
    }

    fn session(engine: &mut Engine, script: &str) -> String {
        let mut output = Vec::new();
        run(engine, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_handshake() {
        let (mut engine, _file) = engine();
        let output = session(&mut engine, "uci\nisready\n");

        assert!(output.starts_with(&format!("id name {NAME}")));
        assert!(output.contains("uciok\nreadyok\n"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (mut engine, _file) = engine();
        let output = session(&mut engine, "isready\nquit\nisready\n");

        assert_eq!(output, "readyok\n");
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let (mut engine, _file) = engine();
        let output = session(&mut engine, "\nfoo bar\nsetoption name Hash value x\nisready\n");

        assert_eq!(output, "readyok\n");
        assert_eq!(engine.config().hash_mb, 1);
    }

    #[test]
    fn test_options_and_new_game() {
        let (mut engine, _file) = engine();
        let key = engine.main_thread().board.key();
        engine.main_thread_mut().board.push_played(key);

        session(
            &mut engine,
            "setoption name Hash value 2\nsetoption name Threads value 2\nucinewgame\n",
        );

        assert_eq!(engine.config().hash_mb, 2);
        assert_eq!(engine.config().threads, 2);
        assert!(engine.main_thread().board.played_positions().is_empty());
    }
}

//! Parsing of the line-oriented command language.

use std::path::PathBuf;

use crate::controls::ParamControl;
use crate::errors::{Result, StudioError};

pub const HELP: &str = "\
Commands:
  set <width|height|scale|octaves|persistence|lacunarity> <number>
  seed <integer>         set the seed (anything else means 0)
  seed random            pick a random seed
  generate               regenerate immediately
  export <path>          write the heightmap (.png or .jpg)
  reset                  restore default parameters
  show                   print the current parameters
  save <path>            save parameters as a JSON preset
  load <path>            load a JSON preset
  help                   show this message
  quit                   leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(ParamControl, f64),
    Seed(String),
    RandomSeed,
    Generate,
    Export(PathBuf),
    Reset,
    Show,
    SavePreset(PathBuf),
    LoadPreset(PathBuf),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    StudioError::InvalidValue {
                        field: "set".to_string(),
                        value: rest.to_string(),
                    }
                })?;
                let control: ParamControl = name.parse()?;
                let value = value.trim();
                let number = value.parse::<f64>().map_err(|_| StudioError::InvalidValue {
                    field: control.name().to_string(),
                    value: value.to_string(),
                })?;
                Command::Set(control, number)
            }
            "seed" if rest.eq_ignore_ascii_case("random") => Command::RandomSeed,
            "seed" => Command::Seed(rest.to_string()),
            "generate" => Command::Generate,
            "export" => Command::Export(path_arg("export", rest)?),
            "reset" => Command::Reset,
            "show" => Command::Show,
            "save" => Command::SavePreset(path_arg("save", rest)?),
            "load" => Command::LoadPreset(path_arg("load", rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(StudioError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn path_arg(command: &str, rest: &str) -> Result<PathBuf> {
    if rest.is_empty() {
        return Err(StudioError::InvalidValue {
            field: format!("{command} path"),
            value: String::new(),
        });
    }
    Ok(PathBuf::from(rest))
}

//! Batches of edit commands, replayed against a canvas.
//!
//! Two formats are accepted: JSON (`{"commands": [...]}` or a bare array of
//! commands) and a line-oriented text form:
//!
//! ```text
//! # comments and blank lines are skipped
//! box logical AND 120 80        # kind, operator, optional x y
//! box operation ADD
//! wire 2 1 0                    # from box, to box, input index
//! tag 1 1 Level ns=2;s=Level    # box, input index, tag name, optional external id
//! ```

use crate::canvas::{Canvas, EditCommand, MutationOutcome};
use crate::error::ScriptError;
use crate::model::{BoxId, OperationKind, Position};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditScript {
    pub commands: Vec<EditCommand>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScript {
    Document { commands: Vec<EditCommand> },
    List(Vec<EditCommand>),
}

impl EditScript {
    pub fn new(commands: Vec<EditCommand>) -> Self {
        Self { commands }
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let raw: RawScript =
            serde_json::from_str(json).map_err(|e| ScriptError::JsonParseError(e.to_string()))?;
        let commands = match raw {
            RawScript::Document { commands } | RawScript::List(commands) => commands,
        };
        Ok(Self { commands })
    }

    pub fn from_lines(text: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if let Some(cmd) = parse_line(i + 1, line)? {
                commands.push(cmd);
            }
        }
        Ok(Self { commands })
    }

    /// Loads a script, picking the format from the extension (`.json` or text).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScriptError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_lines(&content),
        }
    }

    pub fn to_json(&self) -> Result<String, ScriptError> {
        serde_json::to_string_pretty(self).map_err(|e| ScriptError::JsonParseError(e.to_string()))
    }

    /// Applies every command in order, each followed by its evaluation pass.
    pub fn replay(&self, canvas: &mut Canvas) -> Vec<MutationOutcome> {
        self.commands
            .iter()
            .cloned()
            .map(|cmd| canvas.apply(cmd))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromStr for EditCommand {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(1, s)?.ok_or_else(|| ScriptError::InvalidCommand {
            line: 1,
            message: "empty command".to_string(),
        })
    }
}

/// Parses one line of the text form. Blank and comment lines yield `None`.
fn parse_line(line: usize, text: &str) -> Result<Option<EditCommand>, ScriptError> {
    let text = text.split('#').next().unwrap_or("").trim();
    if text.is_empty() {
        return Ok(None);
    }
    let invalid = |message: String| ScriptError::InvalidCommand { line, message };
    let words: Vec<&str> = text.split_whitespace().collect();

    let command = match words.as_slice() {
        ["box", kind, operator, rest @ ..] => {
            let kind = OperationKind::parse(kind)
                .ok_or_else(|| invalid(format!("unknown box kind '{}'", kind)))?;
            let position = match rest {
                [] => Position::default(),
                [x, y] => Position::new(number(x, line)?, number(y, line)?),
                _ => return Err(invalid("expected 'box <kind> <operator> [x y]'".to_string())),
            };
            EditCommand::CreateBox {
                kind,
                operator: operator.to_string(),
                position,
            }
        }
        ["wire", from, to, input] => EditCommand::ConnectBoxOutput {
            from_box_id: box_id(from, line)?,
            to_box_id: box_id(to, line)?,
            to_input_index: index(input, line)?,
        },
        ["tag", target, input, name, rest @ ..] if rest.len() <= 1 => {
            EditCommand::ConnectTagInput {
                box_id: box_id(target, line)?,
                to_input_index: index(input, line)?,
                tag_name: name.to_string(),
                external_id: rest.first().unwrap_or(name).to_string(),
            }
        }
        [verb, ..] => return Err(invalid(format!("cannot parse '{}' command", verb))),
        [] => return Ok(None),
    };
    Ok(Some(command))
}

fn box_id(word: &str, line: usize) -> Result<BoxId, ScriptError> {
    word.parse()
        .map(BoxId)
        .map_err(|_| ScriptError::InvalidCommand {
            line,
            message: format!("'{}' is not a box id", word),
        })
}

fn index(word: &str, line: usize) -> Result<usize, ScriptError> {
    word.parse().map_err(|_| ScriptError::InvalidCommand {
        line,
        message: format!("'{}' is not an input index", word),
    })
}

fn number(word: &str, line: usize) -> Result<f64, ScriptError> {
    word.parse().map_err(|_| ScriptError::InvalidCommand {
        line,
        message: format!("'{}' is not a number", word),
    })
}

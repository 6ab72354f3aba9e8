// ABOUTME: Line-oriented command scripts for the headless driver.
// ABOUTME: Each line sets an input field or issues insert, delete, reset or search.

use ntree_store::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetValue(Value),
    SetParent(Value),
    SetLevel(u32),
    /// Optional arguments overwrite the value and parent fields first
    Insert {
        value: Option<Value>,
        parent: Option<Value>,
    },
    Delete(Option<Value>),
    Reset,
    Search(Option<Value>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: invalid number `{text}`")]
    InvalidNumber { line: usize, text: String },

    #[error("line {line}: `{command}` takes {expected}")]
    WrongArity {
        line: usize,
        command: String,
        expected: &'static str,
    },
}

fn number<T: std::str::FromStr>(line: usize, text: &str) -> Result<T, ScriptError> {
    text.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        text: text.to_string(),
    })
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: usize, source: &str) -> Result<Option<Command>, ScriptError> {
    let source = source.split('#').next().unwrap_or("").trim();
    let mut words = source.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let arity = |expected: &'static str| ScriptError::WrongArity {
        line,
        command: name.to_string(),
        expected,
    };

    let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("value", [n]) => Command::SetValue(number(line, n)?),
        ("parent", [n]) => Command::SetParent(number(line, n)?),
        ("level", [n]) => Command::SetLevel(number(line, n)?),
        ("value" | "parent" | "level", _) => return Err(arity("exactly one number")),

        ("insert", []) => Command::Insert {
            value: None,
            parent: None,
        },
        ("insert", [v]) => Command::Insert {
            value: Some(number(line, v)?),
            parent: None,
        },
        ("insert", [v, p]) => Command::Insert {
            value: Some(number(line, v)?),
            parent: Some(number(line, p)?),
        },
        ("insert", _) => return Err(arity("at most two numbers")),

        ("delete", []) => Command::Delete(None),
        ("delete", [v]) => Command::Delete(Some(number(line, v)?)),
        ("search", []) => Command::Search(None),
        ("search", [v]) => Command::Search(Some(number(line, v)?)),
        ("delete" | "search", _) => return Err(arity("at most one number")),

        ("reset", []) => Command::Reset,
        ("reset", _) => return Err(arity("no arguments")),

        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: name.to_string(),
            })
        }
    };
    Ok(Some(command))
}

/// Parse a whole script. Line numbers in errors start at 1.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

//! Menu command parsing.
//!
//! Each line holds one command: a keyword or its menu number, followed by an
//! argument where the command takes one.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert `n` randomly generated sequences.
    Random(usize),
    Insert(String),
    Find(String),
    Delete(String),
    /// Stored sequences in traversal order, with counts.
    List,
    /// Level view of the tree with parenthesised prefixes.
    Tree,
    /// Total number of stored sequences.
    Count,
    /// Number of nodes below the root.
    Nodes,
    /// Stored sequences in alphabetical order.
    Sorted,
    Stats,
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?}, type 'help' for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument {arg:?} for {command}")]
    UnexpectedArgument { command: &'static str, arg: String },
    #[error("{0:?} is not a count")]
    BadCount(String),
}

/// Keyword, menu number, usage. Numbers follow the classic menu.
const MENU: [(&str, &str, &str); 12] = [
    ("random", "0", "random <n>"),
    ("insert", "1", "insert <sequence>"),
    ("find", "2", "find <sequence>"),
    ("delete", "3", "delete <sequence>"),
    ("list", "4", "list"),
    ("tree", "5", "tree"),
    ("count", "6", "count"),
    ("nodes", "7", "nodes"),
    ("sorted", "8", "sorted"),
    ("quit", "9", "quit"),
    ("stats", "", "stats"),
    ("help", "", "help"),
];

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(ParseError::UnexpectedArgument {
                command: keyword(word).unwrap_or("command"),
                arg: extra.to_string(),
            });
        }

        let Some(name) = keyword(word) else {
            return Err(ParseError::Unknown(word.to_string()));
        };

        let command = match name {
            "random" => {
                let count = required(arg, "random <n>")?;
                let n = count
                    .parse()
                    .map_err(|_| ParseError::BadCount(count.to_string()))?;
                Command::Random(n)
            }
            "insert" => Command::Insert(required(arg, "insert <sequence>")?.to_string()),
            "find" => Command::Find(required(arg, "find <sequence>")?.to_string()),
            "delete" => Command::Delete(required(arg, "delete <sequence>")?.to_string()),
            other => {
                if let Some(arg) = arg {
                    return Err(ParseError::UnexpectedArgument {
                        command: other,
                        arg: arg.to_string(),
                    });
                }
                match other {
                    "list" => Command::List,
                    "tree" => Command::Tree,
                    "count" => Command::Count,
                    "nodes" => Command::Nodes,
                    "sorted" => Command::Sorted,
                    "stats" => Command::Stats,
                    "help" => Command::Help,
                    _ => Command::Quit,
                }
            }
        };
        Ok(Some(command))
    }
}

fn keyword(word: &str) -> Option<&'static str> {
    let lower = word.to_ascii_lowercase();
    let lower = match lower.as_str() {
        "exit" | "q" => "quit",
        "?" => "help",
        other => other,
    };
    MENU.iter()
        .find(|(name, number, _)| *name == lower || (!number.is_empty() && *number == lower))
        .map(|(name, _, _)| *name)
}

fn required<'a>(arg: Option<&'a str>, usage: &'static str) -> Result<&'a str, ParseError> {
    arg.ok_or(ParseError::MissingArgument(usage))
}

/// The help text: one line per command.
pub struct Help;

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Commands (keyword or number):")?;
        for (name, number, usage) in MENU {
            let description = match name {
                "random" => "insert n randomly generated sequences",
                "insert" => "insert a sequence",
                "find" => "search for a sequence",
                "delete" => "delete a sequence",
                "list" => "print the sequences in the tree",
                "tree" => "print the prefix tree",
                "count" => "print the number of sequences",
                "nodes" => "print the number of nodes",
                "sorted" => "print the sequences in alphabetical order",
                "quit" => "leave the shell",
                "stats" => "print all counts",
                _ => "show this help",
            };
            writeln!(f, "  {:>2}  {:<20} {}", number, usage, description)?;
        }
        Ok(())
    }
}

//! Simulated shell: a fixed command table and the session that renders it.

use super::input::InputState;

/// Marker line that ends the output while the session waits for input.
pub const PROMPT_MARKER: &str = "> ";
/// Only line left after `clear`.
pub const CLEARED_BANNER: &str = "Terminal cleared";

const WELCOME_LINES: [&str; 2] = [
    "Welcome to LocalSync Terminal v1.0.0",
    "Type 'help' to see available commands",
];
const HELP_LINES: [&str; 6] = [
    "Available commands:",
    " - help: Show this help message",
    " - clear: Clear the terminal",
    " - npm install <package>: Install a package",
    " - ls: List files in current directory",
    " - exit: Close the terminal",
];
const LS_LINES: [&str; 6] = [
    "node_modules/",
    "public/",
    "src/",
    "package.json",
    "README.md",
    "tsconfig.json",
];
const NPM_INSTALL_PREFIX: &str = "npm install";

/// What a submitted command does to the output history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandEffect {
    /// Echo the command, then append these lines.
    Append(Vec<String>),
    /// Drop the whole history and start over from these lines.
    Reset(Vec<String>),
}

/// Result of interpreting one command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpretation {
    pub close_terminal: bool,
    pub effect: CommandEffect,
}

impl Interpretation {
    fn append(lines: Vec<String>) -> Self {
        Self {
            close_terminal: false,
            effect: CommandEffect::Append(lines),
        }
    }
}

/// Maps a submitted line to its simulated output.
///
/// Returns `None` for whitespace-only input, which the terminal ignores.
/// Commands are matched against the line as typed; the first match wins.
pub fn interpret(line: &str) -> Option<Interpretation> {
    if line.trim().is_empty() {
        return None;
    }

    let interpretation = match line {
        "clear" => Interpretation {
            close_terminal: false,
            effect: CommandEffect::Reset(vec![CLEARED_BANNER.to_string()]),
        },
        "help" => Interpretation::append(to_lines(&HELP_LINES)),
        _ if line.starts_with(NPM_INSTALL_PREFIX) => {
            let package = line.split_whitespace().nth(2).unwrap_or_default();

            Interpretation::append(vec![
                format!("Installing {package}..."),
                format!("+ {package}@latest"),
                "added 1 package, and audited 152 packages in 2.5s".to_string(),
            ])
        }
        "ls" => Interpretation::append(to_lines(&LS_LINES)),
        "exit" => Interpretation {
            close_terminal: true,
            effect: CommandEffect::Append(Vec::new()),
        },
        _ => Interpretation::append(vec![format!("Command not found: {line}")]),
    };

    Some(interpretation)
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

/// Output history, prompt input and visibility of the simulated terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalSession {
    pub input: InputState,
    open: bool,
    output_lines: Vec<String>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    /// Creates a closed session showing the welcome banner.
    pub fn new() -> Self {
        let mut output_lines = to_lines(&WELCOME_LINES);
        output_lines.push(PROMPT_MARKER.to_string());

        Self {
            input: InputState::new(),
            open: false,
            output_lines,
        }
    }

    pub fn output_lines(&self) -> &[String] {
        &self.output_lines
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Runs the current input line and clears the input buffer.
    ///
    /// Returns the submitted command, or `None` when the line was blank and
    /// nothing happened.
    pub fn submit(&mut self) -> Option<String> {
        let command = self.input.text().to_string();
        let interpretation = interpret(&command)?;
        self.input.take_text();
        self.apply(&command, interpretation);

        Some(command)
    }

    fn apply(&mut self, command: &str, interpretation: Interpretation) {
        match interpretation.effect {
            CommandEffect::Reset(lines) => {
                self.output_lines = lines;
            }
            CommandEffect::Append(lines) => {
                if self.output_lines.last().map(String::as_str) == Some(PROMPT_MARKER) {
                    self.output_lines.pop();
                }
                self.output_lines.push(format!("{PROMPT_MARKER}{command}"));
                self.output_lines.extend(lines);
            }
        }
        self.output_lines.push(PROMPT_MARKER.to_string());

        if interpretation.close_terminal {
            self.open = false;
        }
    }
}

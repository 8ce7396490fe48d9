use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound for simulated cursor lines.
pub const MAX_SIMULATED_LINE: usize = 20;
/// Exclusive upper bound for simulated cursor columns.
pub const MAX_SIMULATED_COLUMN: usize = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub ch: usize,
}

/// Mock teammate whose cursor is drawn over the editor body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    /// Hex color such as `#FF5733`.
    pub color: String,
    pub position: CursorPosition,
}

impl Collaborator {
    /// Parses the hex color into a terminal color, defaulting to magenta.
    pub fn terminal_color(&self) -> Color {
        parse_hex_color(&self.color).unwrap_or(Color::Magenta)
    }

    /// First character of the name, shown in the avatar strip.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// First word of the name, drawn next to the cursor in the editor.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();

    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Moves collaborator cursors to pseudo-random positions.
pub struct PresenceSimulator {
    rng: StdRng,
}

impl PresenceSimulator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a simulator with a fixed seed so runs are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Assigns every collaborator a new position inside the simulated bounds.
    pub fn scatter(&mut self, collaborators: &mut [Collaborator]) {
        for collaborator in collaborators {
            collaborator.position = CursorPosition {
                line: self.rng.gen_range(0..MAX_SIMULATED_LINE),
                ch: self.rng.gen_range(0..MAX_SIMULATED_COLUMN),
            };
        }
    }
}

/// Collaborators shown when the seed does not provide any.
pub fn default_collaborators() -> Vec<Collaborator> {
    vec![
        Collaborator {
            id: "1".to_string(),
            name: "Alex Kim".to_string(),
            color: "#FF5733".to_string(),
            position: CursorPosition { line: 5, ch: 10 },
        },
        Collaborator {
            id: "2".to_string(),
            name: "Taylor Smith".to_string(),
            color: "#33FF57".to_string(),
            position: CursorPosition { line: 12, ch: 15 },
        },
    ]
}

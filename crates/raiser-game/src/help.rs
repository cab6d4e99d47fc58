//! Key-binding help table.

use raiser_input::{Action, InputMap, keycode_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    pub action: Action,
    pub label: &'static str,
    pub key: String,
}

/// One row per action in binding order, followed by the resource credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTable {
    pub rows: Vec<HelpRow>,
    pub credits: Vec<String>,
}

impl HelpTable {
    #[must_use]
    pub fn new(map: &InputMap, maze_credits: &str, player_credits: &str) -> Self {
        let rows = Action::ALL
            .into_iter()
            .map(|action| HelpRow {
                action,
                label: action.label(),
                key: map
                    .key_for(action)
                    .map_or_else(|| "unbound".to_string(), keycode_name),
            })
            .collect();
        let credits = [maze_credits, player_credits]
            .into_iter()
            .filter(|credit| !credit.is_empty())
            .map(str::to_string)
            .collect();
        Self { rows, credits }
    }

    /// Plain-text rendering, one line per row.
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self.rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
        let mut text = String::new();
        for row in &self.rows {
            text.push_str(&format!("{:<width$}  {}\n", row.label, row.key));
        }
        for credit in &self.credits {
            text.push_str(credit);
            text.push('\n');
        }
        text
    }
}

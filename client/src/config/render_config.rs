use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Symbols,
    Icons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSymbols {
    pub x: String,
    pub o: String,
    pub empty: String,
}

impl CellSymbols {
    pub fn for_mark(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
            Mark::Empty => &self.empty,
        }
    }
}

impl Default for CellSymbols {
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            o: "O".to_string(),
            empty: ".".to_string(),
        }
    }
}

impl Validate for CellSymbols {
    fn validate(&self) -> Result<(), String> {
        if self.x.trim().is_empty() || self.o.trim().is_empty() || self.empty.trim().is_empty() {
            return Err("Cell symbols must not be blank".to_string());
        }
        if self.x == self.o || self.x == self.empty || self.o == self.empty {
            return Err(format!(
                "Cell symbols must be distinct, got x={:?} o={:?} empty={:?}",
                self.x, self.o, self.empty
            ));
        }
        Ok(())
    }
}

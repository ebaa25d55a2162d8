//! Commands a driver can send to a [`Simulation`](crate::Simulation).

use std::fmt;

use pathviz_core::CellId;
use pathviz_search::Strategy;

/// One user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "arg", rename_all = "kebab-case"))]
pub enum Command {
    /// Start a new run from the given cell with the selected strategy.
    StartRun(CellId),
    /// Choose the strategy for the next run.
    SelectStrategy(Strategy),
    ToggleWall(CellId),
    RelocateStart(CellId),
    RelocateEnd(CellId),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartRun(id) => write!(f, "start run from {id}"),
            Self::SelectStrategy(s) => write!(f, "select {s}"),
            Self::ToggleWall(id) => write!(f, "toggle wall at {id}"),
            Self::RelocateStart(id) => write!(f, "move start to {id}"),
            Self::RelocateEnd(id) => write!(f, "move end to {id}"),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tagged_json() {
        let cmds: Vec<Command> = serde_json::from_str(
            r#"[{"kind":"select-strategy","arg":"depth-first"},{"kind":"toggle-wall","arg":5}]"#,
        )
        .unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::SelectStrategy(Strategy::DepthFirst),
                Command::ToggleWall(CellId(5)),
            ]
        );
    }
}

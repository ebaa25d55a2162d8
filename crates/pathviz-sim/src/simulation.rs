//! The [`Simulation`]: grid, runs, and the commands that change them.

use pathviz_core::{CellId, Grid, GridError, RunToken};
use pathviz_search::{Outcome, Search, SearchContext, Step, Strategy, Traversal};

use crate::command::Command;
use crate::config::{ConfigError, SimConfig};
use crate::controller::RunController;
use crate::pacing::{NoPacing, Pacer};
use crate::sink::{Visit, VisitSink};

// ---------------------------------------------------------------------------
// RunReport
// ---------------------------------------------------------------------------

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub token: RunToken,
    pub strategy: Strategy,
    /// Visit events emitted by the run.
    pub visits: usize,
    pub outcome: Outcome,
}

#[derive(Debug)]
struct ActiveRun {
    search: Search,
    visits: usize,
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Owns the grid and every run still in flight.
///
/// Runs advance only through [`tick`](Self::tick). Commands applied between
/// ticks are seen by the next step of every run. Starting a run while
/// another is in flight supersedes the older one: it stays scheduled until
/// its next step notices and finishes with [`Outcome::Superseded`].
#[derive(Debug)]
pub struct Simulation<P = NoPacing> {
    grid: Grid,
    controller: RunController,
    strategy: Strategy,
    runs: Vec<ActiveRun>,
    finished: Vec<RunReport>,
    pacer: P,
}

impl<P: Pacer> Simulation<P> {
    /// Create a simulation from a validated configuration.
    pub fn new(config: &SimConfig, pacer: P) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        Ok(Self::with_grid(grid, pacer))
    }

    /// Create a simulation over an existing grid.
    pub fn with_grid(grid: Grid, pacer: P) -> Self {
        Self {
            grid,
            controller: RunController::new(),
            strategy: Strategy::default(),
            runs: Vec::new(),
            finished: Vec::new(),
            pacer,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The strategy the next run will use.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Token of the most recently started run.
    #[inline]
    pub fn current_run(&self) -> RunToken {
        self.controller.current()
    }

    /// Whether any run, current or superseded, is still scheduled.
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.runs.is_empty()
    }

    /// Reports of finished runs, oldest first.
    pub fn finished(&self) -> &[RunReport] {
        &self.finished
    }

    /// The report of a finished run, if it has finished.
    pub fn report(&self, token: RunToken) -> Option<&RunReport> {
        self.finished.iter().find(|r| r.token == token)
    }

    /// Drain the finished reports.
    pub fn take_finished(&mut self) -> Vec<RunReport> {
        std::mem::take(&mut self.finished)
    }

    // -- commands --------------------------------------------------------

    /// Start a new run from `origin` with the selected strategy.
    ///
    /// Clears every visited flag and makes `origin` the start cell. Any run
    /// in flight is superseded.
    pub fn start_run(&mut self, origin: CellId) -> Result<RunToken, GridError> {
        let origin = self.grid.check(origin)?;
        if self.grid.is_blocked(origin) || self.grid.is_end(origin) {
            log::warn!("rejected run start from {origin}");
            return Err(GridError::BlockedOrigin(origin));
        }
        self.grid.reset();
        self.grid.relocate_start(origin);

        let token = self.controller.begin();
        let search = self.strategy.begin(origin, token, &self.grid);
        log::debug!(
            "{token} started: {} from {origin} to {}",
            self.strategy,
            self.grid.end()
        );
        self.runs.push(ActiveRun { search, visits: 0 });
        Ok(token)
    }

    /// Choose the strategy for the next run. Runs in flight keep theirs.
    pub fn select_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy {
            log::debug!("strategy changed: {} -> {strategy}", self.strategy);
        }
        self.strategy = strategy;
    }

    /// Toggle a wall on `id`. Returns whether the grid changed; endpoints
    /// refuse walls.
    pub fn toggle_wall(&mut self, id: CellId) -> Result<bool, GridError> {
        let id = self.grid.check(id)?;
        let changed = self.grid.toggle_wall(id);
        if !changed {
            log::warn!("cannot toggle a wall on endpoint {id}");
        }
        Ok(changed)
    }

    /// Move the start cell. Returns whether the grid changed.
    pub fn relocate_start(&mut self, id: CellId) -> Result<bool, GridError> {
        let id = self.grid.check(id)?;
        let changed = self.grid.relocate_start(id);
        if !changed {
            log::warn!("cannot move start onto {id}");
        }
        Ok(changed)
    }

    /// Move the end cell. Returns whether the grid changed.
    ///
    /// Runs in flight stop when they visit the new end. A best-first run
    /// keeps ranking cells by the end it started with.
    pub fn relocate_end(&mut self, id: CellId) -> Result<bool, GridError> {
        let id = self.grid.check(id)?;
        let changed = self.grid.relocate_end(id);
        if !changed {
            log::warn!("cannot move end onto {id}");
        }
        Ok(changed)
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Result<(), GridError> {
        match command {
            Command::StartRun(id) => self.start_run(id).map(drop),
            Command::SelectStrategy(s) => {
                self.select_strategy(s);
                Ok(())
            }
            Command::ToggleWall(id) => self.toggle_wall(id).map(drop),
            Command::RelocateStart(id) => self.relocate_start(id).map(drop),
            Command::RelocateEnd(id) => self.relocate_end(id).map(drop),
        }
    }

    // -- scheduling ------------------------------------------------------

    /// Advance every scheduled run by one step, oldest first.
    ///
    /// Returns whether any run is still scheduled afterwards.
    pub fn tick<S: VisitSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        let current = self.controller.current();
        let grid = &mut self.grid;
        let finished = &mut self.finished;

        self.runs.retain_mut(|run| {
            let mut ctx = SearchContext {
                grid: &mut *grid,
                current,
            };
            match run.search.step(&mut ctx) {
                Step::Suspended(Some(cell)) => {
                    run.visits += 1;
                    sink.cell_visited(Visit {
                        run: run.search.token(),
                        cell,
                    });
                    true
                }
                Step::Suspended(None) => true,
                Step::Finished(outcome) => {
                    let report = RunReport {
                        token: run.search.token(),
                        strategy: run.search.strategy(),
                        visits: run.visits,
                        outcome,
                    };
                    log::debug!(
                        "{} finished: {} {outcome} after {} visits",
                        report.token,
                        report.strategy,
                        report.visits
                    );
                    finished.push(report);
                    false
                }
            }
        });

        !self.runs.is_empty()
    }

    /// Tick until no run is scheduled, pausing between ticks.
    pub fn run_until_idle<S: VisitSink + ?Sized>(&mut self, sink: &mut S) {
        while self.tick(sink) {
            self.pacer.pause();
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let report = RunReport {
            token: RunToken::NONE.next(),
            strategy: Strategy::DepthFirst,
            visits: 12,
            outcome: Outcome::Exhausted,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

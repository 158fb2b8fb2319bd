//! Staged, dependency-ordered system scheduling.
//!
//! Systems are registered into a [`SystemGraph`] together with "runs after"
//! edges. [`SystemGraph::build`] validates the graph and sorts every stage once;
//! the resulting [`Schedule`] replays that order on every call to
//! [`Schedule::run_stage`], committing each system's intention before the next
//! system runs.
//!
//! # Example
//!
//! ```
//! use tui_snake_ecs::{Intention, Stage, System, SystemGraph, World};
//!
//! let mut graph = SystemGraph::new();
//! graph
//!     .add_system(Stage::Update, System::new("second", |_| Ok(Intention::new())))
//!     .add_system(Stage::Update, System::new("first", |_| Ok(Intention::new())))
//!     .add_dependency("second", "first");
//! let schedule = graph.build().unwrap();
//! assert_eq!(schedule.order(Stage::Update), vec!["first", "second"]);
//!
//! let mut world = World::new();
//! world.begin_frame(16);
//! schedule.run_stage(Stage::Update, &mut world).unwrap();
//! ```

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::error::{ScheduleError, WorldError};
use crate::system::System;
use crate::world::World;

/// When a system runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Once, before the first frame.
    StartUp,
    /// Every frame.
    Update,
    /// Once, after the finished predicate turns true.
    TearDown,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::StartUp, Stage::Update, Stage::TearDown];
}

/// Unvalidated registration of systems and ordering edges.
#[derive(Debug, Default)]
pub struct SystemGraph {
    systems: Vec<(Stage, System)>,
    /// `(system, after)`: `system` runs after `after`.
    edges: Vec<(&'static str, &'static str)>,
}

impl SystemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_system(&mut self, stage: Stage, system: System) -> &mut Self {
        self.systems.push((stage, system));
        self
    }

    /// Require `system` to run after `after` within their shared stage.
    pub fn add_dependency(&mut self, system: &'static str, after: &'static str) -> &mut Self {
        self.edges.push((system, after));
        self
    }

    /// Let a plugin register a group of systems and edges.
    pub fn add_plugin(&mut self, plugin: impl FnOnce(&mut SystemGraph)) -> &mut Self {
        plugin(self);
        self
    }

    /// Validate the graph and topologically sort each stage.
    ///
    /// Ties between independent systems keep registration order, so the same
    /// graph always yields the same schedule.
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let mut index: HashMap<&'static str, usize> = HashMap::new();
        for (i, (_, system)) in self.systems.iter().enumerate() {
            if index.insert(system.name(), i).is_some() {
                return Err(ScheduleError::DuplicateSystem(system.name()));
            }
        }

        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); self.systems.len()];
        let mut in_degree = vec![0usize; self.systems.len()];
        for &(system, after) in &self.edges {
            let s = *index
                .get(system)
                .ok_or(ScheduleError::UnknownSystem(system))?;
            let a = *index.get(after).ok_or(ScheduleError::UnknownSystem(after))?;
            let (system_stage, after_stage) = (self.systems[s].0, self.systems[a].0);
            if system_stage != after_stage {
                return Err(ScheduleError::CrossStage {
                    system,
                    system_stage,
                    after,
                    after_stage,
                });
            }
            successors[a].push(s);
            in_degree[s] += 1;
        }

        let mut order = HashMap::new();
        for stage in Stage::ALL {
            let members: Vec<usize> = (0..self.systems.len())
                .filter(|&i| self.systems[i].0 == stage)
                .collect();

            let mut ready: BTreeSet<usize> = members
                .iter()
                .copied()
                .filter(|&i| in_degree[i] == 0)
                .collect();
            let mut sorted = Vec::with_capacity(members.len());
            while let Some(next) = ready.pop_first() {
                sorted.push(next);
                for &succ in &successors[next] {
                    in_degree[succ] -= 1;
                    if in_degree[succ] == 0 {
                        ready.insert(succ);
                    }
                }
            }

            if sorted.len() < members.len() {
                let stuck = members
                    .iter()
                    .filter(|&&i| !sorted.contains(&i))
                    .map(|&i| self.systems[i].1.name())
                    .collect();
                return Err(ScheduleError::Cycle(stuck));
            }

            debug!(
                ?stage,
                order = ?sorted.iter().map(|&i| self.systems[i].1.name()).collect::<Vec<_>>(),
                "stage sorted"
            );
            order.insert(stage, sorted);
        }

        Ok(Schedule {
            systems: self.systems.into_iter().map(|(_, system)| system).collect(),
            order,
        })
    }
}

/// A validated, sorted set of systems.
#[derive(Debug)]
pub struct Schedule {
    systems: Vec<System>,
    order: HashMap<Stage, Vec<usize>>,
}

impl Schedule {
    /// Names of the systems in `stage`, in execution order.
    pub fn order(&self, stage: Stage) -> Vec<&'static str> {
        self.order
            .get(&stage)
            .map(|idx| idx.iter().map(|&i| self.systems[i].name()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Run every system of `stage` in order, committing each intention before the
    /// next system reads the world. Returns the number of operations applied.
    pub fn run_stage(&self, stage: Stage, world: &mut World) -> Result<usize, WorldError> {
        let mut applied = 0;
        for &i in self.order.get(&stage).into_iter().flatten() {
            let system = &self.systems[i];
            let intention = system.run(world)?;
            if intention.is_empty() {
                continue;
            }
            trace!(system = system.name(), ?intention, "commit");
            applied += world.apply(intention)?;
        }
        Ok(applied)
    }
}

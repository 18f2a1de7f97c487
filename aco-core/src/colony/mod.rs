//! This module contains ant colony optimizers for the travelling salesman problem.
//!
//! Both variants share the same skeleton: every iteration a group of ants builds randomized
//! tours, pheromone trails are updated using these tours and the best known tour is tracked.
//! The variants differ in how trails are initialized, deposited and bounded:
//! - `StandardColony` credits every tour and evaporates trails without any bounds
//! - `MinMaxColony` credits one reference tour and keeps trails within dynamic limits to
//!   prevent early stagnation on a single path

mod ant;
pub use self::ant::Ant;

mod minmax;
pub use self::minmax::MinMaxColony;

mod standard;
pub use self::standard::StandardColony;

use crate::models::{AcoParameters, Graph, LinkId, NodeId, PheromoneCoverage, Solution, Tour};
use crate::utils::{Environment, Float, History, Timer, compare_floats};
use std::sync::Arc;

/// A lifecycle phase of a colony run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    /// Created, but not initialized.
    Idle,
    /// Trails and history are reset, no iteration has run yet.
    Initialized,
    /// At least one iteration has run.
    Iterating,
    /// Max iterations reached, further turns are no-ops.
    Done,
}

/// Specifies a colony optimizer which can be driven to completion or one iteration at a time.
pub trait ColonyOptimizer {
    /// Returns the run state.
    fn state(&self) -> &ColonyState;

    /// Resets trails, counters and history.
    fn initialize(&mut self);

    /// Runs exactly one iteration. Does nothing once max iterations are reached.
    fn optimize_turn(&mut self);

    /// Runs max iterations turns.
    fn optimize(&mut self) {
        let timer = Timer::start();

        (0..self.max_iterations()).for_each(|_| self.optimize_turn());

        let state = self.state();
        let best = state.best().map_or_else(|| "n/a".to_string(), |tour| format!("{:.3}", tour.score));

        (state.environment().logger)(
            format!(
                "[{}ms] completed {} of {} iterations, best score: {}",
                timer.elapsed_millis(),
                state.current_iteration(),
                self.max_iterations(),
                best
            )
            .as_str(),
        );
    }

    /// Returns the best known solution.
    fn best_solution(&self) -> Option<Solution> {
        let state = self.state();
        state.best().map(|tour| tour.to_solution(state.problem()))
    }

    /// Returns the best solution of every iteration in order.
    fn best_solutions(&self) -> Vec<Solution> {
        let state = self.state();
        state.iteration_bests().iter().map(|tour| tour.to_solution(state.problem())).collect()
    }

    /// Returns a greedy tour which follows the strongest trails from the best tour's start.
    fn most_marked_solution(&self) -> Option<Solution> {
        let state = self.state();
        state.most_marked().map(|tour| tour.to_solution(state.problem()))
    }

    /// Returns pheromone level of every directed link.
    fn pheromone_coverage(&self) -> Vec<PheromoneCoverage> {
        self.state()
            .problem()
            .links()
            .map(|link| PheromoneCoverage {
                origin: link.origin.label().to_string(),
                destination: link.destination.label().to_string(),
                pheromone_level: link.pheromone,
            })
            .collect()
    }

    /// Returns amount of completed iterations.
    fn current_iteration(&self) -> usize {
        self.state().current_iteration()
    }

    /// Returns amount of iterations of a full run.
    fn max_iterations(&self) -> usize {
        self.state().parameters().max_iterations
    }

    /// Returns run parameters.
    fn parameters(&self) -> &AcoParameters {
        self.state().parameters()
    }

    /// Returns run phase.
    fn phase(&self) -> RunPhase {
        self.state().phase()
    }

    /// Returns the graph copy owned by the optimizer.
    fn problem(&self) -> &Graph {
        self.state().problem()
    }
}

/// Keeps the state of a colony run shared by all variants: the owned graph copy, parameters,
/// counters and tracked tours.
pub struct ColonyState {
    problem: Graph,
    parameters: AcoParameters,
    environment: Arc<Environment>,
    phase: RunPhase,
    current_iteration: usize,
    best: Option<Tour>,
    iteration_bests: History<Tour>,
    most_marked: Option<Tour>,
}

impl ColonyState {
    /// Creates a new state with its own copy of the graph trails.
    pub fn new(parameters: AcoParameters, graph: &Graph, environment: Arc<Environment>) -> Self {
        Self {
            problem: graph.clone(),
            iteration_bests: History::new(parameters.max_iterations),
            parameters,
            environment,
            phase: RunPhase::Idle,
            current_iteration: 0,
            best: None,
            most_marked: None,
        }
    }

    /// Returns the owned graph copy.
    pub fn problem(&self) -> &Graph {
        &self.problem
    }

    /// Returns run parameters.
    pub fn parameters(&self) -> &AcoParameters {
        &self.parameters
    }

    /// Returns environment.
    pub fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    /// Returns run phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Returns amount of completed iterations.
    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    /// Returns the best known tour.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Returns the best tour of every completed iteration.
    pub fn iteration_bests(&self) -> &History<Tour> {
        &self.iteration_bests
    }

    /// Returns the most marked tour.
    pub fn most_marked(&self) -> Option<&Tour> {
        self.most_marked.as_ref()
    }

    /// Sets every trail to given pheromone level and clears counters and tracked tours.
    pub(crate) fn reset(&mut self, pheromone: Float) {
        self.problem.trails_mut().for_each(|trail| {
            trail.pheromone = pheromone;
            trail.iteration_pheromone = 0.;
        });

        self.current_iteration = 0;
        self.best = None;
        self.iteration_bests = History::new(self.parameters.max_iterations);
        self.most_marked = None;
        self.phase = if self.parameters.max_iterations == 0 { RunPhase::Done } else { RunPhase::Initialized };
    }

    pub(crate) fn reset_iteration_trails(&mut self) {
        self.problem.trails_mut().for_each(|trail| trail.iteration_pheromone = 0.);
    }

    /// Lets every ant build its tour.
    pub(crate) fn construct_tours(&self) -> Vec<Tour> {
        let ant = Ant::from_parameters(&self.parameters);
        let random = self.environment.random.as_ref();

        (0..self.parameters.ants).map(|_| Tour::new(ant.random_walk(&self.problem, random), &self.problem)).collect()
    }

    /// Adds `Q / length` to every link of the tour in walked direction and, if `symmetric` is
    /// set, to its reverse link as well.
    pub(crate) fn deposit(&mut self, nodes: &[NodeId], score: Float, symmetric: bool) {
        // zero length (or broken) tour carries no information
        if !(score > 0.) {
            return;
        }

        let amount = self.parameters.q / score;

        nodes.windows(2).for_each(|pair| {
            let forward = self.problem.expect_link_id(pair[0], pair[1]);
            add_pheromone(&mut self.problem, forward, amount);

            if symmetric {
                let backward = self.problem.expect_link_id(pair[1], pair[0]);
                add_pheromone(&mut self.problem, backward, amount);
            }
        });
    }

    /// Multiplies every trail by (1 - evaporation rate).
    pub(crate) fn evaporate(&mut self) {
        let persistence = 1. - self.parameters.evaporation_rate;

        self.problem.trails_mut().for_each(|trail| trail.pheromone *= persistence);
    }

    /// Records the best tour of the iteration and updates the best known one.
    pub(crate) fn update_best(&mut self, tours: Vec<Tour>) {
        let Some(iteration_best) = tours.into_iter().min_by(|a, b| compare_floats(a.score, b.score)) else {
            return;
        };

        if self.best.as_ref().is_none_or(|best| iteration_best.score < best.score) {
            self.best = Some(iteration_best.clone());
        }

        self.iteration_bests.push(iteration_best);
    }

    /// Builds a greedy tour from the best tour's start: every step goes to the remaining node
    /// reachable by the strongest trail, the first candidate wins ties.
    pub(crate) fn update_most_marked(&mut self) {
        let Some(start) = self.best.as_ref().and_then(|tour| tour.nodes.first().copied()) else {
            self.most_marked = None;
            return;
        };

        let graph = &self.problem;
        let mut remaining = (0..graph.size()).filter(|&id| id != start).collect::<Vec<_>>();
        let mut path = Vec::with_capacity(graph.size() + 1);
        let mut current = start;

        path.push(start);

        while !remaining.is_empty() {
            let (index, _) = remaining.iter().enumerate().fold((0, 0.), |(best_idx, best_pheromone), (idx, &next)| {
                let pheromone = graph.trail(graph.expect_link_id(current, next)).pheromone;

                if pheromone > best_pheromone { (idx, pheromone) } else { (best_idx, best_pheromone) }
            });

            current = remaining.remove(index);
            path.push(current);
        }

        path.push(start);

        self.most_marked = Some(Tour::new(path, graph));
    }

    pub(crate) fn finish_iteration(&mut self) {
        self.current_iteration += 1;
        self.phase =
            if self.current_iteration >= self.parameters.max_iterations { RunPhase::Done } else { RunPhase::Iterating };
    }

    pub(crate) fn problem_mut(&mut self) -> &mut Graph {
        &mut self.problem
    }
}

fn add_pheromone(graph: &mut Graph, link_id: LinkId, amount: Float) {
    let trail = graph.trail_mut(link_id);

    trail.pheromone += amount;
    trail.iteration_pheromone += amount;
}

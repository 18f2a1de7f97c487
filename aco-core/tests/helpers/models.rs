use crate::models::{AcoParameters, Graph};
use crate::utils::{DefaultRandom, Environment, Float, Random};
use std::sync::Arc;

/// Creates a unit square: a(0,0), b(0,1), c(1,1), d(1,0). Optimal tour length is 4.
pub fn create_square_graph() -> Graph {
    Graph::from_points(vec![("a", 0., 0.), ("b", 0., 1.), ("c", 1., 1.), ("d", 1., 0.)]).expect("cannot create square")
}

/// Creates points evenly placed on a circle in the order of their labels.
pub fn create_ring_graph(size: usize, radius: Float) -> Graph {
    let points = (0..size).map(|idx| {
        let angle = 2. * std::f64::consts::PI * idx as Float / size as Float;
        (format!("n{idx}"), radius * angle.cos(), radius * angle.sin())
    });

    Graph::from_points(points).expect("cannot create ring")
}

/// Returns perimeter of a regular polygon inscribed into circle.
pub fn get_ring_perimeter(size: usize, radius: Float) -> Float {
    size as Float * 2. * radius * (std::f64::consts::PI / size as Float).sin()
}

pub fn create_test_parameters(ants: usize, max_iterations: usize) -> AcoParameters {
    AcoParameters {
        alpha: 1.,
        beta: 2.,
        gamma: 0.1,
        q: 1.,
        evaporation_rate: 0.2,
        ants,
        max_iterations,
        p_best: 0.05,
        smoothing: 0.1,
    }
}

pub fn create_test_environment() -> Arc<Environment> {
    create_test_environment_with_random(Arc::new(DefaultRandom::new_repeatable()))
}

pub fn create_test_environment_with_random(random: Arc<dyn Random>) -> Arc<Environment> {
    Arc::new(Environment::new(random, Arc::new(|_| {})))
}

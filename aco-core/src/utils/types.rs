/// Alias to a scalar floating type used for weights, scores and pheromone levels.
pub type Float = f64;

use super::*;
use crate::genome::GeneRanges;
use crate::helpers::random::{EchoRandom, FakeRandom};
use crate::helpers::{create_individual, create_test_config};
use aco_core::models::AcoParameters;
use aco_core::utils::DefaultRandom;

fn create_parents() -> (Individual, Individual) {
    let parent_a = create_individual(1., 2., 4.);
    let mut parent_b = create_individual(3., 4., 2.);
    parent_b.genome.beta = 4.;
    parent_b.genome.ants = 12;

    (parent_a, parent_b)
}

#[test]
fn can_create_random_individual_within_ranges() {
    let config = create_test_config();
    let random = DefaultRandom::new_repeatable();

    (0..50).for_each(|_| {
        let individual = create_random_individual(&config, &random);

        assert!(!individual.is_evaluated());
        assert_eq!(individual.genome.gamma, config.base.gamma);
        assert_eq!(individual.genome.max_iterations, config.base.max_iterations);
        Gene::ALL.iter().for_each(|&gene| assert!(config.ranges.get(gene).contains(gene.get(&individual.genome))));
    });
}

#[test]
fn can_detect_duplicates() {
    let individual = create_individual(1., 0., 0.);
    let same = create_individual(1., 10., 10.);
    let one_gene_away = create_individual(2., 0., 0.);
    let mut two_genes_away = create_individual(2., 0., 0.);
    two_genes_away.genome.ants += 1;

    assert!(is_duplicate(&individual, [&same], false));
    assert!(is_duplicate(&individual, [&same], true));

    assert!(!is_duplicate(&individual, [&one_gene_away], false));
    assert!(is_duplicate(&individual, [&one_gene_away], true));

    assert!(!is_duplicate(&individual, [&two_genes_away], true));
    let nothing: [&Individual; 0] = [];
    assert!(!is_duplicate(&individual, nothing, true));
}

#[test]
fn can_select_distinct_parents() {
    let random = FakeRandom::new(vec![], vec![0.2, 0.3, 0.7]);

    assert_eq!(select_parents(&[0.5, 1.], &random), (0, 1));
}

#[test]
fn can_select_distinct_parents_when_wheel_is_degenerate() {
    let random = DefaultRandom::new_repeatable();

    assert_eq!(select_parents(&[1., 1.], &random), (0, 1));
}

#[test]
fn can_keep_stronger_parent_genome_without_crossover() {
    let (parent_a, parent_b) = create_parents();

    let child = crossover(&parent_a, &parent_b, 0., &EchoRandom::new(true));

    assert_eq!(child.genome, parent_a.genome);
    assert!(!child.is_evaluated());
    assert_eq!(child.std_fitness, 0.);
}

#[test]
fn can_take_weaker_parent_genes_with_crossover() {
    let (parent_a, parent_b) = create_parents();

    let child = crossover(&parent_a, &parent_b, 0.9, &EchoRandom::new(true));

    assert_eq!(child.genome, parent_b.genome);
}

#[test]
fn can_limit_crossover_rate_by_quality_ratio() {
    let (parent_a, parent_b) = create_parents();
    // ratio is 0.5, so draws below it take the weaker parent's gene
    let random = FakeRandom::new(vec![], vec![0.6, 0.4, 0.6, 0.6, 0.6, 0.6, 0.4]);

    let child = crossover(&parent_a, &parent_b, 0.9, &random);

    assert_eq!(child.genome.alpha, parent_a.genome.alpha);
    assert_eq!(child.genome.beta, 4.);
    assert_eq!(child.genome.ants, 12);
}

#[test]
fn can_use_second_parent_as_stronger_on_tie() {
    let parent_a = create_individual(1., 2., 2.);
    let parent_b = create_individual(3., 2., 2.);

    let child = crossover(&parent_a, &parent_b, 0., &EchoRandom::new(true));

    assert_eq!(child.genome, parent_b.genome);
}

#[test]
fn can_skip_crossover_when_weaker_parent_has_no_tour() {
    let parent_a = create_individual(1., 2., 4.);
    let parent_b = create_individual(3., Float::INFINITY, 0.);

    let child = crossover(&parent_b, &parent_a, 1., &EchoRandom::new(true));

    assert_eq!(child.genome, parent_a.genome);
}

#[test]
fn can_skip_mutation_with_zero_rate() {
    let config = GeneticConfig { mutation_rate: 0., ..create_test_config() };
    let individual = create_individual(1., 0., 0.);

    let mutated = mutate(&individual, &config, false, &DefaultRandom::new_repeatable());

    assert_eq!(mutated, individual);
}

#[test]
fn can_mutate_with_full_random_value() {
    let config = create_test_config();
    let individual = create_individual(1., 0., 0.);
    let random = FakeRandom::new(vec![0], vec![0.1, 2.3456]);

    let mutated = mutate(&individual, &config, true, &random);

    assert_eq!(mutated.genome.alpha, 2.346);
    assert_eq!(mutated.same_genes(&individual), Gene::ALL.len() - 1);
}

#[test]
fn can_resample_local_shift_until_in_range() {
    let config = GeneticConfig { ranges: GeneRanges::default(), ..create_test_config() };
    let individual = Individual::new(AcoParameters { ants: 10, ..AcoParameters::default() });
    let random = FakeRandom::new(vec![6], vec![0.5, -7.2, 3.9]);

    let mutated = mutate(&individual, &config, true, &random);

    assert_eq!(mutated.genome.ants, 13);
}

#[test]
fn can_clamp_value_when_local_shift_keeps_failing() {
    let config = GeneticConfig { ranges: GeneRanges::default(), ..create_test_config() };
    let individual = Individual::new(AcoParameters { ants: 60, ..AcoParameters::default() });

    let mutated = mutate(&individual, &config, true, &EchoRandom::new(false));

    assert_eq!(mutated.genome.ants, 50);
}

#[test]
fn can_keep_forced_mutation_within_ranges() {
    let config = create_test_config();
    let random = DefaultRandom::new_repeatable();
    let mut individual = create_random_individual(&config, &random);

    (0..200).for_each(|_| {
        let mutated = mutate(&individual, &config, true, &random);

        assert!(mutated.same_genes(&individual) >= Gene::ALL.len() - 1);
        Gene::ALL.iter().for_each(|&gene| assert!(config.ranges.get(gene).contains(gene.get(&mutated.genome))));

        individual = mutated;
    });
}

#[test]
fn can_standardize_fitness_and_assign_probabilities() {
    let mut population =
        vec![create_individual(1., 2., 0.), create_individual(2., 4., 0.), create_individual(3., 4., 0.)];

    standardize_fitness(&mut population, 8.);
    assign_probabilities(&mut population);

    assert_eq!(population.iter().map(|i| i.std_fitness).collect::<Vec<_>>(), vec![16., 4., 4.]);
    assert!((population[0].probability - 16. / 24.).abs() < 1E-9);
    assert!((population[1].probability - 20. / 24.).abs() < 1E-9);
    assert_eq!(population[2].probability, 1.);
}

#[test]
fn can_assign_uniform_probabilities_when_no_tour_is_found() {
    let mut population = vec![
        create_individual(1., Float::INFINITY, 0.),
        create_individual(2., Float::INFINITY, 0.),
        create_individual(3., Float::INFINITY, 0.),
    ];

    standardize_fitness(&mut population, 100_000.);
    assign_probabilities(&mut population);

    assert!(population.iter().all(|individual| individual.std_fitness == 0.));
    assert!((population[0].probability - 1. / 3.).abs() < 1E-9);
    assert!((population[1].probability - 2. / 3.).abs() < 1E-9);
    assert_eq!(population[2].probability, 1.);
}

#[test]
fn can_sort_population_from_fittest_keeping_ties_order() {
    let mut population = vec![
        create_individual(1., 0., 1.),
        create_individual(2., 0., 3.),
        create_individual(3., 0., 3.),
        create_individual(4., 0., 2.),
    ];

    sort_by_fitness(&mut population);

    assert_eq!(population.iter().map(|i| i.genome.alpha).collect::<Vec<_>>(), vec![2., 3., 4., 1.]);
}

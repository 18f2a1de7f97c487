use super::*;
use crate::helpers::{create_capture_logger, create_individual};

fn create_population(size: usize) -> Vec<Individual> {
    (0..size).map(|idx| create_individual(idx as f64, 10. + idx as f64, 1. / (idx + 1) as f64)).collect()
}

fn report_search(telemetry: &Telemetry) {
    let population = create_population(3);

    telemetry.on_initial(&population, Timer::start());
    telemetry.on_generation(0, population.first(), &population, Timer::start());
    telemetry.on_result(1, population.first());
    telemetry.log("message");
}

#[test]
fn can_log_nothing_without_telemetry() {
    let telemetry = Telemetry::new(TelemetryMode::None);

    report_search(&telemetry);

    assert!(telemetry.logger().is_none());
}

#[test]
fn can_log_every_report_with_logging_mode() {
    let (logger, messages) = create_capture_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 1, log_population: 1 });

    report_search(&telemetry);

    assert!(telemetry.logger().is_some());
    let messages = messages.lock().unwrap();
    assert!(messages[0].contains("created initial population of 3 individuals"));
    assert!(messages.iter().any(|msg| msg.contains("generation 0")));
    assert!(messages.iter().any(|msg| msg.contains("total generations: 1")));
    assert_eq!(messages.last().map(String::as_str), Some("message"));
}

parameterized_test! {can_log_population_head_and_tail, (size, expected), {
    can_log_population_head_and_tail_impl(size, expected);
}}

can_log_population_head_and_tail! {
    case01_small: (3, 4),
    case02_no_gap: (7, 8),
    case03_with_gap: (10, 9),
}

fn can_log_population_head_and_tail_impl(size: usize, expected: usize) {
    let (logger, messages) = create_capture_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 2, log_population: 1 });
    let population = create_population(size);

    telemetry.on_generation(1, population.first(), &population, Timer::start());

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), expected);
    assert!(messages[0].contains(&format!("size: {size}")));
    assert_eq!(messages.iter().any(|msg| msg.contains("...")), size > 7);
}

#[test]
fn can_log_best_individual_as_json() {
    let (logger, messages) = create_capture_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 1, log_population: 100 });
    let population = create_population(2);

    telemetry.on_generation(1, population.first(), &population, Timer::start());

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("generation 1"));
    assert!(messages[1].contains("global best"));
    assert!(messages[1].contains(r#""nbAnts":30"#));
    assert!(messages[1].contains("path: 10.000"));
}

#[test]
fn can_log_missing_best_and_result() {
    let (logger, messages) = create_capture_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 1, log_population: 100 });

    telemetry.on_generation(1, None, &[], Timer::start());
    telemetry.on_result(3, None);

    let messages = messages.lock().unwrap();
    assert_eq!(messages[1], "no progress yet");
    assert!(messages[2].contains("total generations: 3"));
    assert_eq!(messages[3], "no individuals evaluated");
}

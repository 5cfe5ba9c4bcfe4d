use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use creational_patterns::builders::director::Director;
use creational_patterns::builders::meal::MealKind;
use creational_patterns::core::config::{ConfigFormat, get_config};
use creational_patterns::core::database::new_database;

/// Picks the log filter directive for the demo binary.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` forces `debug` and the
/// singleton's logger level is used.
fn filter_directive(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directive) => directive,
        None if verbose => "debug".to_string(),
        None => get_config().logger().level.clone(),
    }
}

/// Installs the `tracing` formatter, writing to stderr.
pub fn init_logging(verbose: bool) {
    let directive = filter_directive(verbose, std::env::var("RUST_LOG").ok());

    // Ignore error if a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .try_init();
}

fn meal_report(kind: MealKind, drink: &str, main_course: &str, dessert: &str) -> String {
    let mut director = Director::new(kind.builder());
    let meal = director.construct(drink, main_course, dessert);
    format!("🍽  {kind} meal: {meal}")
}

fn client_report(tag: &str) -> Result<String> {
    let database = new_database(tag)?;
    let client = database.client()?;
    serde_json::to_string_pretty(&client).context("Failed to serialize client")
}

pub fn build_meal(kind: MealKind, drink: &str, main_course: &str, dessert: &str) -> Result<()> {
    println!("{}", meal_report(kind, drink, main_course, dessert));
    Ok(())
}

pub fn open_database(tag: &str) -> Result<()> {
    println!("{}", client_report(tag)?);
    Ok(())
}

pub fn show_config(format: ConfigFormat) -> Result<()> {
    println!("{}", get_config().render(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_rust_log() {
        assert_eq!(
            filter_directive(true, Some("warn".to_string())),
            "warn"
        );
    }

    #[test]
    fn test_filter_verbose_forces_debug() {
        assert_eq!(filter_directive(true, None), "debug");
    }

    #[test]
    fn test_filter_defaults_to_config_level() {
        assert_eq!(filter_directive(false, None), get_config().logger().level);
        assert_eq!(filter_directive(false, None), "debug");
    }

    #[test]
    fn test_meal_report_names_kind_and_courses() {
        let report = meal_report(MealKind::Kids, "Milk", "Pasta", "Cookie");
        assert!(report.ends_with("kids meal: Milk / Pasta / Cookie"));
    }

    #[test]
    fn test_client_report_is_json_for_tag() {
        let report = client_report("postgres").unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["db_type"], "postgres");
        assert!(json["session_id"].is_string());
    }

    #[test]
    fn test_open_database_rejects_unknown_tag() {
        let err = open_database("oracle").unwrap_err();
        assert_eq!(err.to_string(), "unsupported database type: oracle");
    }
}

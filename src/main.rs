//! Command line runner for the creational pattern demonstrations.
//! Each subcommand plays the usage sample of one component:
//! the meal director, the database factory and the config singleton.
use anyhow::Result;
use clap::{Parser, Subcommand};
use creational_patterns::builders::meal::MealKind;
use creational_patterns::core::config::ConfigFormat;

mod utils;

#[derive(Parser)]
#[command(name = "creational-patterns")]
#[command(about = "Run the Builder, Factory and Singleton demonstrations")]
struct Cli {
    /// Log at debug level regardless of the configured logger level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a meal through the director
    Meal {
        /// Which concrete builder the director drives
        #[arg(short, long, value_enum, default_value_t = MealKind::Vegetarian)]
        kind: MealKind,
        drink: String,
        main_course: String,
        dessert: String,
    },
    /// Create a database handle from its tag and print its client
    Database {
        /// Database tag: "mysql" or "postgres"
        tag: String,
    },
    /// Print the process configuration
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Meal {
            kind,
            drink,
            main_course,
            dessert,
        } => utils::build_meal(kind, &drink, &main_course, &dessert),
        Commands::Database { tag } => utils::open_database(&tag),
        Commands::Config { format } => utils::show_config(format),
    }
}

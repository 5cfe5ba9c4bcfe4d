//! Demonstrations of three creational design patterns.
//!
//! * Builder: [`builders::meal`] and [`builders::director`] assemble a
//!   [`Meal`] step by step.
//! * Factory: [`crate::core::database::new_database`] maps a tag to a
//!   [`Database`] handle.
//! * Singleton: [`crate::core::config::get_config`] lazily builds one shared
//!   [`Config`].
//!
//! The components are independent of each other and share no state.
//!
//! ```
//! use creational_patterns::{Director, get_config, new_database, new_vegetarian_meal};
//!
//! let mut director = Director::new(new_vegetarian_meal());
//! let meal = director.construct("Juice", "Salad", "Fruit");
//! assert_eq!(meal.main_course, "Salad");
//!
//! assert!(new_database("postgres").is_ok());
//! assert!(new_database("oracle").is_err());
//!
//! assert!(std::ptr::eq(get_config(), get_config()));
//! ```
pub mod builders;
pub mod core;


pub use crate::builders::director::Director;
pub use crate::builders::meal::{KidsMeal, Meal, MealBuilder, MealKind, VegetarianMeal, new_kids_meal, new_vegetarian_meal};
pub use crate::core::config::{Config, ConfigFormat, get_config};
pub use crate::core::database::{Client, Database, DbType, new_database};
pub use crate::core::error::UnsupportedTypeError;

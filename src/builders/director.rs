use tracing::debug;

use crate::builders::meal::{Meal, MealBuilder};

/// The `Director` fixes the order in which a `MealBuilder` is driven.
///
/// It owns exactly one builder at a time. Swapping the builder with
/// `set_builder` hands the previous one back so its state stays reachable.
pub struct Director {
    builder: Box<dyn MealBuilder>,
}

impl Director {
    pub fn new(builder: Box<dyn MealBuilder>) -> Self {
        Self { builder }
    }

    /// Replaces the current builder.
    ///
    /// # Arguments
    /// * `builder`: The builder every later `construct` and `build` call uses.
    ///
    /// # Returns
    /// The builder that was previously installed, untouched.
    pub fn set_builder(&mut self, builder: Box<dyn MealBuilder>) -> Box<dyn MealBuilder> {
        debug!("director builder replaced");
        std::mem::replace(&mut self.builder, builder)
    }

    /// Returns whatever the current builder has assembled so far.
    pub fn build(&self) -> Meal {
        self.builder.build()
    }

    /// Drives the current builder through drink, main course and dessert,
    /// in that order, then builds the meal.
    pub fn construct(&mut self, drink: &str, main_course: &str, dessert: &str) -> Meal {
        self.builder.set_drink(drink);
        self.builder.set_main_course(main_course);
        self.builder.set_dessert(dessert);
        self.builder.build()
    }
}

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// The product assembled by every `MealBuilder`.
///
/// A `Meal` is a plain value. Its fields reflect the last values handed to
/// the builder's setters before `build` was called; nothing is validated,
/// so empty strings are perfectly acceptable.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub drink: String,
    pub main_course: String,
    pub dessert: String,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.drink, self.main_course, self.dessert)
    }
}

/// The `MealBuilder` trait defines the steps required to assemble a `Meal`.
///
/// The `Director` drives any implementor of this trait through the same
/// sequence of calls, so new kinds of meal can be added without touching
/// the orchestration code.
pub trait MealBuilder {
    /// Stores the drink for the meal under construction.
    fn set_drink(&mut self, drink: &str);

    /// Stores the main course for the meal under construction.
    fn set_main_course(&mut self, main_course: &str);

    /// Stores the dessert for the meal under construction.
    fn set_dessert(&mut self, dessert: &str);

    /// Returns a copy of the meal assembled so far.
    ///
    /// # Returns
    /// An owned `Meal`. Later setter calls on the builder do not affect a
    /// value that has already been returned.
    fn build(&self) -> Meal;
}

/// Builds a vegetarian meal.
#[derive(Debug, Default)]
pub struct VegetarianMeal {
    meal: Meal,
}

impl VegetarianMeal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for VegetarianMeal {
    fn set_drink(&mut self, drink: &str) {
        self.meal.drink = drink.to_string();
    }

    fn set_main_course(&mut self, main_course: &str) {
        self.meal.main_course = main_course.to_string();
    }

    fn set_dessert(&mut self, dessert: &str) {
        self.meal.dessert = dessert.to_string();
    }

    fn build(&self) -> Meal {
        self.meal.clone()
    }
}

/// Builds a kids meal.
#[derive(Debug, Default)]
pub struct KidsMeal {
    meal: Meal,
}

impl KidsMeal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for KidsMeal {
    fn set_drink(&mut self, drink: &str) {
        self.meal.drink = drink.to_string();
    }

    fn set_main_course(&mut self, main_course: &str) {
        self.meal.main_course = main_course.to_string();
    }

    fn set_dessert(&mut self, dessert: &str) {
        self.meal.dessert = dessert.to_string();
    }

    fn build(&self) -> Meal {
        self.meal.clone()
    }
}

/// Returns an empty vegetarian builder behind the `MealBuilder` trait.
pub fn new_vegetarian_meal() -> Box<dyn MealBuilder> {
    Box::new(VegetarianMeal::new())
}

/// Returns an empty kids builder behind the `MealBuilder` trait.
pub fn new_kids_meal() -> Box<dyn MealBuilder> {
    Box::new(KidsMeal::new())
}

/// Selects one of the concrete builders by name.
///
/// This is what the `meal --kind` command line option parses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MealKind {
    Vegetarian,
    Kids,
}

impl MealKind {
    /// Creates a fresh, empty builder of this kind.
    pub fn builder(self) -> Box<dyn MealBuilder> {
        match self {
            MealKind::Vegetarian => new_vegetarian_meal(),
            MealKind::Kids => new_kids_meal(),
        }
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealKind::Vegetarian => write!(f, "vegetarian"),
            MealKind::Kids => write!(f, "kids"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_fill_each_field() {
        let mut builder = VegetarianMeal::new();
        builder.set_drink("Juice");
        builder.set_main_course("Salad");
        builder.set_dessert("Fruit");

        let meal = builder.build();
        assert_eq!(meal.drink, "Juice");
        assert_eq!(meal.main_course, "Salad");
        assert_eq!(meal.dessert, "Fruit");
    }

    #[test]
    fn test_build_returns_detached_copy() {
        let mut builder = KidsMeal::new();
        builder.set_drink("Milk");
        let first = builder.build();

        builder.set_drink("Cocoa");
        assert_eq!(first.drink, "Milk");
        assert_eq!(builder.build().drink, "Cocoa");
    }

    #[test]
    fn test_last_value_wins() {
        let mut builder = new_kids_meal();
        builder.set_dessert("Cookie");
        builder.set_dessert("Ice cream");
        assert_eq!(builder.build().dessert, "Ice cream");
    }

    #[test]
    fn test_fresh_builder_is_empty() {
        assert_eq!(new_vegetarian_meal().build(), Meal::default());
        assert_eq!(MealKind::Kids.builder().build(), Meal::default());
    }

    #[test]
    fn test_meal_display() {
        let meal = Meal {
            drink: "Juice".to_string(),
            main_course: "Salad".to_string(),
            dessert: "Fruit".to_string(),
        };
        assert_eq!(meal.to_string(), "Juice / Salad / Fruit");
        assert_eq!(MealKind::Vegetarian.to_string(), "vegetarian");
    }
}

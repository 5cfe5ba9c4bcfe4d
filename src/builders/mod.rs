// This file is the module declaration file for the `builders` module.
// It groups the Builder pattern: the product, the builder trait with its
// concrete builders, and the director that drives them.

// `meal` module:
// Defines the `Meal` product, the `MealBuilder` trait and the two concrete
// builders (`VegetarianMeal`, `KidsMeal`), plus `MealKind` for picking one
// by name.
pub mod meal;

// `director` module:
// Holds the `Director`, which owns one builder at a time and calls its
// setters in a fixed order.
pub mod director;

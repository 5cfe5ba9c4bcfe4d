// This file is the module declaration file for the `core` module.
// It declares the Factory and Singleton components and the error type
// they share with callers.

// `config` module:
// The process-wide `Config` singleton. `get_config()` builds it exactly once,
// even under concurrent first access, and returns the same instance forever.
pub mod config;

// `database` module:
// The database factory. `new_database(tag)` maps `"mysql"` / `"postgres"`
// to a fresh `Database` handle.
pub mod database;

// `error` module:
// `UnsupportedTypeError`, returned by the factory for unknown tags.
pub mod error;

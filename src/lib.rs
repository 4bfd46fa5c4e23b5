//! Helper routines for controllers and operators.
//!
//! - [`core::formatter`]: pretty-prints any serializable value for log lines.
//! - [`core::id_generator`]: random identifiers restricted to `[0-9a-z]`.
//! - [`system::executor`]: runs a subprocess and captures its output.
//!
//! The library logs through the `log` facade and leaves installing a logger
//! to the binary.

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;

pub use crate::core::formatter::{Formatted, format_value, pformat};
pub use crate::core::id_generator::{
    EntropySource, IdGenerator, SeededSource, rand_string, rand_string_with,
};
pub use crate::models::CommandSpec;
pub use crate::system::executor::{ExecutionError, run, run_command};

#[cfg(test)]
mod tests {
    use crate::{Formatted, IdGenerator, SeededSource, format_value, rand_string_with};

    #[test]
    fn test_root_exports_injectable_and_detailed_forms() {
        let mut source = SeededSource::from_seed(9);
        let id = rand_string_with(&mut source, 6);

        let mut generator = IdGenerator::new(SeededSource::from_seed(9));
        assert_eq!(id, generator.generate(6));

        assert_eq!(format_value("raw"), Formatted::Text("raw".to_string()));
    }
}

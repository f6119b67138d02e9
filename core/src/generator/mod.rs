use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of solutions, consulted once at construction and again on every reset.
///
/// Implementations must return a code that passes [`GameConfig::validate_code`] for the
/// config they are given.
pub trait SolutionGenerator {
    fn generate(&mut self, config: &GameConfig) -> Code;
}

impl<G: SolutionGenerator + ?Sized> SolutionGenerator for alloc::boxed::Box<G> {
    fn generate(&mut self, config: &GameConfig) -> Code {
        (**self).generate(config)
    }
}

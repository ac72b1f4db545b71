pub mod chromosome;
pub mod engine;
pub mod operators;
pub mod progress;

pub use chromosome::{Bounds, Chromosome};
pub use engine::{ProgressCallback, Solver};
pub use operators::{
    cmp_scores, BlendCrossover, CrossoverOperator, DrawOperator, MutationOperator,
    SelectionOperator, TournamentSelection, UniformDraw, UniformMutation,
};
pub use progress::{ConsoleProgress, NoopProgress};

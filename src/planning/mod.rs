pub mod sampling;
pub mod termination;
pub mod validity_checker;

pub use sampling::{FreeSpaceSampler, UniformDistribution};
pub use termination::{MaxAttemptsTermination, MaxTimeTermination, TerminationCondition};
pub use validity_checker::ValidityChecker;

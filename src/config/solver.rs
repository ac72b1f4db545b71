use super::traits::ConfigSection;
use crate::error::EvocastError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_probability: f64,
    pub crossover_probability: f64,
    /// Fraction of next-generation slots filled by bred offspring; the
    /// remainder are fresh random chromosomes. No individual survives a
    /// generation verbatim.
    pub elitism_fraction: f64,
    pub tournament_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 10,
            mutation_probability: 0.05,
            crossover_probability: 0.8,
            elitism_fraction: 0.8,
            tournament_size: 10,
            seed: None,
        }
    }
}

impl ConfigSection for SolverConfig {
    fn section_name() -> &'static str {
        "solver"
    }

    fn validate(&self) -> Result<(), EvocastError> {
        if self.population_size < 2 {
            return Err(EvocastError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(EvocastError::Configuration(
                "Generation count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(EvocastError::Configuration(
                "Mutation probability must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(EvocastError::Configuration(
                "Crossover probability must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.elitism_fraction) {
            return Err(EvocastError::Configuration(
                "Elitism fraction must be between 0 and 1".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(EvocastError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

use crate::config::solver::SolverConfig;
use crate::config::traits::ConfigSection;
use crate::engines::optimization::chromosome::{Bounds, Chromosome};
use crate::engines::optimization::operators::{
    cmp_scores, BlendCrossover, CrossoverOperator, DrawOperator, MutationOperator,
    SelectionOperator, TournamentSelection, UniformDraw, UniformMutation,
};
use crate::engines::optimization::progress::NoopProgress;
use crate::error::{EvocastError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Observes the generational loop without influencing it.
///
/// Callbacks consume no randomness and trigger no objective evaluations,
/// so attaching one never changes a seeded run's result.
pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, bred: usize, immigrants: usize);
}

/// Generational genetic-algorithm minimizer.
///
/// Owns its configuration, its operator strategies, and a single random
/// generator; one `minimize` call is one complete, blocking run.
pub struct Solver {
    config: SolverConfig,
    draw: Box<dyn DrawOperator>,
    selection: Box<dyn SelectionOperator>,
    crossover: Box<dyn CrossoverOperator>,
    mutation: Box<dyn MutationOperator>,
    rng: StdRng,
}

impl Solver {
    /// Solver with the default operator set: uniform draw, tournament
    /// selection, blend crossover, per-gene uniform mutation.
    pub fn new(config: SolverConfig) -> Result<Self> {
        let selection = Box::new(TournamentSelection::new(config.tournament_size));
        Self::with_operators(
            config,
            Box::new(UniformDraw),
            selection,
            Box::new(BlendCrossover),
            Box::new(UniformMutation),
        )
    }

    /// Solver with substitute operator implementations.
    pub fn with_operators(
        config: SolverConfig,
        draw: Box<dyn DrawOperator>,
        selection: Box<dyn SelectionOperator>,
        crossover: Box<dyn CrossoverOperator>,
        mutation: Box<dyn MutationOperator>,
    ) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            draw,
            selection,
            crossover,
            mutation,
            rng,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the full generational loop and return the best chromosome of the
    /// final population.
    pub fn minimize<F>(&mut self, objective: F, bounds: &Bounds) -> Result<Chromosome>
    where
        F: Fn(&Chromosome) -> f64,
    {
        self.minimize_with_progress(objective, bounds, &mut NoopProgress)
    }

    pub fn minimize_with_progress<F>(
        &mut self,
        objective: F,
        bounds: &Bounds,
        callback: &mut dyn ProgressCallback,
    ) -> Result<Chromosome>
    where
        F: Fn(&Chromosome) -> f64,
    {
        let population_size = self.config.population_size;
        let survivors = (population_size as f64 * self.config.elitism_fraction) as usize;
        let immigrants = population_size - survivors;

        let mut population = self.initialize_population(bounds);

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);
            population = self.breed_next_generation(&objective, &population, bounds, survivors);
            callback.on_generation_complete(generation, survivors, immigrants);
        }

        Self::best_of(&objective, population)
    }

    fn initialize_population(&mut self, bounds: &Bounds) -> Vec<Chromosome> {
        (0..self.config.population_size)
            .map(|_| self.draw.draw(bounds, &mut self.rng))
            .collect()
    }

    /// Fully replaces the population: `survivors` bred offspring followed by
    /// fresh random immigrants. No individual carries over verbatim.
    fn breed_next_generation<F>(
        &mut self,
        objective: &F,
        population: &[Chromosome],
        bounds: &Bounds,
        survivors: usize,
    ) -> Vec<Chromosome>
    where
        F: Fn(&Chromosome) -> f64,
    {
        let population_size = self.config.population_size;
        let mut next_generation = Vec::with_capacity(population_size);

        for _ in 0..survivors {
            let parent_a = self.selection.select(objective, population, &mut self.rng);
            let parent_b = self.selection.select(objective, population, &mut self.rng);

            let child = if self.rng.gen::<f64>() < self.config.crossover_probability {
                self.crossover.crossover(&parent_a, &parent_b, &mut self.rng)
            } else if cmp_scores(objective(&parent_a), objective(&parent_b)) == Ordering::Greater {
                parent_b
            } else {
                parent_a
            };

            let child = self
                .mutation
                .mutate(&child, bounds, self.config.mutation_probability, &mut self.rng);
            next_generation.push(child);
        }

        while next_generation.len() < population_size {
            next_generation.push(self.draw.draw(bounds, &mut self.rng));
        }

        next_generation
    }

    /// Argmin over a population; ties keep the first-encountered chromosome,
    /// non-finite scores lose to every finite score.
    fn best_of<F>(objective: &F, population: Vec<Chromosome>) -> Result<Chromosome>
    where
        F: Fn(&Chromosome) -> f64,
    {
        let mut best: Option<(f64, Chromosome)> = None;

        for chromosome in population {
            let score = objective(&chromosome);
            match &best {
                Some((best_score, _)) if cmp_scores(score, *best_score) != Ordering::Less => {}
                _ => best = Some((score, chromosome)),
            }
        }

        best.map(|(_, chromosome)| chromosome).ok_or_else(|| {
            EvocastError::Optimization("cannot minimize over an empty population".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::optimization::operators::uniform_gene;
    use rand::RngCore;
    use std::cell::Cell;
    use std::rc::Rc;

    fn test_config(seed: u64) -> SolverConfig {
        SolverConfig {
            population_size: 20,
            generations: 5,
            seed: Some(seed),
            ..SolverConfig::default()
        }
    }

    /// Draw stand-in that counts how many chromosomes it produced.
    struct CountingDraw {
        count: Rc<Cell<usize>>,
    }

    impl DrawOperator for CountingDraw {
        fn draw(&self, bounds: &Bounds, rng: &mut dyn RngCore) -> Chromosome {
            self.count.set(self.count.get() + 1);
            let genes = bounds
                .iter()
                .map(|&(lower, upper)| uniform_gene(lower, upper, rng))
                .collect();
            Chromosome::new(genes)
        }
    }

    /// Selection stand-in that always returns the first chromosome.
    struct FirstSelection;

    impl SelectionOperator for FirstSelection {
        fn select(
            &self,
            _objective: &dyn Fn(&Chromosome) -> f64,
            population: &[Chromosome],
            _rng: &mut dyn RngCore,
        ) -> Chromosome {
            population[0].clone()
        }
    }

    /// Crossover stand-in that copies the first parent.
    struct FirstParentCrossover;

    impl CrossoverOperator for FirstParentCrossover {
        fn crossover(
            &self,
            a: &Chromosome,
            _b: &Chromosome,
            _rng: &mut dyn RngCore,
        ) -> Chromosome {
            a.clone()
        }
    }

    /// Mutation stand-in that leaves chromosomes untouched.
    struct IdentityMutation;

    impl MutationOperator for IdentityMutation {
        fn mutate(
            &self,
            chromosome: &Chromosome,
            _bounds: &Bounds,
            _probability: f64,
            _rng: &mut dyn RngCore,
        ) -> Chromosome {
            chromosome.clone()
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = test_config(1);
        config.population_size = 1;
        assert!(Solver::new(config).is_err());
    }

    #[test]
    fn test_draw_counts_match_loop_structure() {
        // population 20, elitism 0.8 -> 16 bred offspring and 4 immigrants
        // per generation, on top of the 20 initial draws.
        let count = Rc::new(Cell::new(0));
        let config = test_config(3);
        let generations = config.generations;

        let mut solver = Solver::with_operators(
            config,
            Box::new(CountingDraw {
                count: Rc::clone(&count),
            }),
            Box::new(FirstSelection),
            Box::new(FirstParentCrossover),
            Box::new(IdentityMutation),
        )
        .unwrap();

        let bounds = Bounds::new(vec![(0.0, 1.0)]).unwrap();
        solver.minimize(|c| c[0], &bounds).unwrap();

        assert_eq!(count.get(), 20 + generations * 4);
    }

    #[test]
    fn test_deterministic_stand_ins_propagate_first_chromosome() {
        // With selection pinned to index 0, crossover copying parent A and
        // identity mutation, every bred offspring equals the first initial
        // chromosome regardless of the crossover coin.
        let config = test_config(11);
        let mut solver = Solver::with_operators(
            config,
            Box::new(UniformDraw),
            Box::new(FirstSelection),
            Box::new(FirstParentCrossover),
            Box::new(IdentityMutation),
        )
        .unwrap();

        let bounds = Bounds::new(vec![(5.0, 5.0), (-2.0, -2.0)]).unwrap();
        let best = solver.minimize(|c| c[0] + c[1], &bounds).unwrap();
        assert_eq!(best.genes(), &[5.0, -2.0]);
    }

    #[test]
    fn test_progress_callback_sees_every_generation() {
        struct Recorder {
            started: Vec<usize>,
            completed: Vec<(usize, usize, usize)>,
        }

        impl ProgressCallback for Recorder {
            fn on_generation_start(&mut self, generation: usize) {
                self.started.push(generation);
            }

            fn on_generation_complete(
                &mut self,
                generation: usize,
                bred: usize,
                immigrants: usize,
            ) {
                self.completed.push((generation, bred, immigrants));
            }
        }

        let mut recorder = Recorder {
            started: Vec::new(),
            completed: Vec::new(),
        };

        let mut solver = Solver::new(test_config(5)).unwrap();
        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();
        solver
            .minimize_with_progress(|c| c[0].abs(), &bounds, &mut recorder)
            .unwrap();

        assert_eq!(recorder.started, vec![0, 1, 2, 3, 4]);
        assert_eq!(recorder.completed.len(), 5);
        for &(_, bred, immigrants) in &recorder.completed {
            assert_eq!(bred, 16);
            assert_eq!(immigrants, 4);
        }
    }

    #[test]
    fn test_non_finite_objective_does_not_crash() {
        // Half the search space scores NaN; the run must still complete and
        // land on a finite-scoring chromosome.
        let mut solver = Solver::new(test_config(17)).unwrap();
        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();

        let best = solver
            .minimize(
                |c| if c[0] < 0.0 { f64::NAN } else { c[0] },
                &bounds,
            )
            .unwrap();
        assert!(best[0] >= 0.0);
    }
}

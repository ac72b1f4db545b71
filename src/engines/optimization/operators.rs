use crate::engines::optimization::chromosome::{Bounds, Chromosome};
use rand::seq::index;
use rand::{Rng, RngCore};
use std::cmp::Ordering;

/// Compare two objective scores for minimization.
///
/// Non-finite scores (NaN or infinite) order after every finite score, so
/// a degenerate objective value can never win a comparison.
pub fn cmp_scores(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Uniform draw from a single closed interval. `lower == upper` yields that
/// constant.
pub fn uniform_gene(lower: f64, upper: f64, rng: &mut dyn RngCore) -> f64 {
    if lower == upper {
        lower
    } else {
        rng.gen_range(lower..=upper)
    }
}

/// Produces a fresh random chromosome within bounds.
pub trait DrawOperator {
    fn draw(&self, bounds: &Bounds, rng: &mut dyn RngCore) -> Chromosome;
}

/// Picks a parent from the population using the objective.
pub trait SelectionOperator {
    fn select(
        &self,
        objective: &dyn Fn(&Chromosome) -> f64,
        population: &[Chromosome],
        rng: &mut dyn RngCore,
    ) -> Chromosome;
}

/// Combines two parents into a child.
pub trait CrossoverOperator {
    fn crossover(&self, a: &Chromosome, b: &Chromosome, rng: &mut dyn RngCore) -> Chromosome;
}

/// Rewrites individual genes with fresh draws at a given probability.
pub trait MutationOperator {
    fn mutate(
        &self,
        chromosome: &Chromosome,
        bounds: &Bounds,
        probability: f64,
        rng: &mut dyn RngCore,
    ) -> Chromosome;
}

/// Each gene independently uniform over its own interval.
pub struct UniformDraw;

impl DrawOperator for UniformDraw {
    fn draw(&self, bounds: &Bounds, rng: &mut dyn RngCore) -> Chromosome {
        let genes = bounds
            .iter()
            .map(|&(lower, upper)| uniform_gene(lower, upper, rng))
            .collect();
        Chromosome::new(genes)
    }
}

/// Tournament selection: best of K distinct random candidates.
///
/// Candidates are sampled without replacement; K is clamped to the
/// population size. The objective is re-evaluated for every candidate on
/// every call. Ties keep the first-encountered candidate.
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(10)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select(
        &self,
        objective: &dyn Fn(&Chromosome) -> f64,
        population: &[Chromosome],
        rng: &mut dyn RngCore,
    ) -> Chromosome {
        assert!(!population.is_empty(), "selection requires a non-empty population");
        let group_size = self.tournament_size.clamp(1, population.len());

        let mut best: Option<(usize, f64)> = None;
        for idx in index::sample(rng, population.len(), group_size) {
            let score = objective(&population[idx]);
            match best {
                Some((_, best_score)) if cmp_scores(score, best_score) != Ordering::Less => {}
                _ => best = Some((idx, score)),
            }
        }

        let (winner, _) = best.expect("tournament group is never empty");
        population[winner].clone()
    }
}

/// Blend crossover: each child gene is an independent random convex
/// combination of the parent genes.
pub struct BlendCrossover;

impl CrossoverOperator for BlendCrossover {
    fn crossover(&self, a: &Chromosome, b: &Chromosome, rng: &mut dyn RngCore) -> Chromosome {
        assert_eq!(
            a.len(),
            b.len(),
            "crossover parents must have equal length"
        );

        let genes = a
            .genes()
            .iter()
            .zip(b.genes())
            .map(|(&gene_a, &gene_b)| {
                let percent_a: f64 = rng.gen();
                // Written so equal parent genes reproduce exactly.
                gene_b + percent_a * (gene_a - gene_b)
            })
            .collect();
        Chromosome::new(genes)
    }
}

/// Per-gene mutation: each gene independently has `probability` chance of
/// being replaced by a fresh uniform draw from its own interval.
pub struct UniformMutation;

impl MutationOperator for UniformMutation {
    fn mutate(
        &self,
        chromosome: &Chromosome,
        bounds: &Bounds,
        probability: f64,
        rng: &mut dyn RngCore,
    ) -> Chromosome {
        assert_eq!(
            chromosome.len(),
            bounds.len(),
            "chromosome length must match bounds length"
        );

        let genes = chromosome
            .genes()
            .iter()
            .zip(bounds.iter())
            .map(|(&gene, &(lower, upper))| {
                if rng.gen::<f64>() < probability {
                    uniform_gene(lower, upper, rng)
                } else {
                    gene
                }
            })
            .collect();
        Chromosome::new(genes)
    }
}

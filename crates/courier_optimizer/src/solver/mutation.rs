use rand::{Rng, seq::index};

use super::chromosome::Chromosome;

/// With probability `rate`, swaps two distinct genes picked uniformly.
///
/// Applied once per chromosome, not per gene. Chromosomes shorter than two genes are left
/// untouched. Returns whether a swap happened.
pub fn swap_mutation<R>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) -> bool
where
    R: Rng,
{
    if chromosome.len() < 2 || !rng.random_bool(rate) {
        return false;
    }

    let positions = index::sample(rng, chromosome.len(), 2);
    chromosome
        .genes_mut()
        .swap(positions.index(0), positions.index(1));

    true
}

use fxhash::FxHashSet;
use rand::{Rng, seq::index};

use super::chromosome::Chromosome;

/// **Order Crossover (OX)**
///
/// Copies the `[start, end)` segment of `parent1` in place, then fills the remaining slots
/// circularly from `end` with the genes of `parent2`, in `parent2` order, skipping genes
/// already copied.
///
/// ```text
/// parent1:   [1, 2, 3, 4]     cuts (1, 3)
/// parent2:   [3, 1, 4, 2]
///
/// segment:   [_, 2, 3, _]
/// fill:      1 -> slot 3, 4 -> slot 0 (wrapped)
/// offspring: [4, 2, 3, 1]
/// ```
pub fn order_crossover<R>(parent1: &Chromosome, parent2: &Chromosome, rng: &mut R) -> Chromosome
where
    R: Rng,
{
    let len = parent1.len();
    if len == 0 {
        return parent1.clone();
    }

    let cuts = index::sample(rng, len + 1, 2);
    let (start, end) = if cuts.index(0) < cuts.index(1) {
        (cuts.index(0), cuts.index(1))
    } else {
        (cuts.index(1), cuts.index(0))
    };

    order_crossover_with_cuts(parent1, parent2, start, end)
}

pub fn order_crossover_with_cuts(
    parent1: &Chromosome,
    parent2: &Chromosome,
    start: usize,
    end: usize,
) -> Chromosome {
    let len = parent1.len();

    if parent2.len() != len {
        panic!("OrderCrossover: parents must have the same length")
    }

    if start >= end || end > len {
        panic!("OrderCrossover: invalid cuts ({start}, {end}) for length {len}")
    }

    let mut offspring = vec![None; len];
    let mut copied = FxHashSet::with_capacity_and_hasher(len, Default::default());

    for position in start..end {
        let gene = parent1.genes()[position];
        offspring[position] = Some(gene);
        copied.insert(gene);
    }

    let mut position = end;
    for &gene in parent2.genes() {
        if !copied.insert(gene) {
            continue;
        }

        if position >= len {
            position = 0;
        }

        offspring[position] = Some(gene);
        position += 1;
    }

    Chromosome::new(offspring.into_iter().flatten().collect())
}

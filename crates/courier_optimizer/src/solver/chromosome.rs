use fxhash::FxHashSet;
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::problem::point::PointId;

/// Visiting order of every delivery, before it is split into vehicle routes.
///
/// Never contains the depot. Each chromosome owns its genes, operators mutate them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chromosome(Vec<PointId>);

impl Chromosome {
    pub fn new(genes: Vec<PointId>) -> Self {
        Chromosome(genes)
    }

    /// Uniformly random permutation of `delivery_ids`, the depot id is dropped if present.
    pub fn random<R>(delivery_ids: &[PointId], rng: &mut R) -> Self
    where
        R: Rng,
    {
        let mut genes = delivery_ids
            .iter()
            .copied()
            .filter(|id| !id.is_depot())
            .collect::<Vec<_>>();
        genes.shuffle(rng);

        Chromosome(genes)
    }

    pub fn genes(&self) -> &[PointId] {
        &self.0
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [PointId] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_genes(self) -> Vec<PointId> {
        self.0
    }

    /// Whether the genes are exactly `ids`, in any order, without duplicates.
    pub fn is_permutation_of(&self, ids: &[PointId]) -> bool {
        if self.0.len() != ids.len() {
            return false;
        }

        let genes = self.0.iter().collect::<FxHashSet<_>>();
        genes.len() == self.0.len() && ids.iter().all(|id| genes.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::test_utils;

    use super::*;

    #[test]
    fn test_random_chromosome_excludes_depot() {
        let ids = [0, 1, 2, 3, 4, 5]
            .into_iter()
            .map(PointId::new)
            .collect::<Vec<_>>();
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let chromosome = Chromosome::random(&ids, &mut rng);

            assert_eq!(chromosome.len(), 5);
            assert!(chromosome.is_permutation_of(&ids[1..]));
            assert!(!chromosome.genes().contains(&PointId::DEPOT));
        }
    }

    #[test]
    fn test_random_chromosome_empty() {
        let mut rng = SmallRng::seed_from_u64(7);
        let chromosome = Chromosome::random(&[PointId::DEPOT], &mut rng);

        assert!(chromosome.is_empty());
    }

    #[test]
    fn test_is_permutation_of() {
        let ids = [1, 2, 3].into_iter().map(PointId::new).collect::<Vec<_>>();

        assert!(test_utils::chromosome(&[3, 1, 2]).is_permutation_of(&ids));
        assert!(!test_utils::chromosome(&[3, 1, 1]).is_permutation_of(&ids));
        assert!(!test_utils::chromosome(&[3, 1]).is_permutation_of(&ids));
        assert!(!test_utils::chromosome(&[3, 1, 4]).is_permutation_of(&ids));
    }
}

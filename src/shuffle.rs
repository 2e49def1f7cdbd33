use rand::seq::SliceRandom as _;

/// Source of random permutations, used to seed k-means centroids.
///
/// Every [`rand::Rng`] is an `IndexShuffle`. Implement it directly to replay
/// fixed permutations.
pub trait IndexShuffle {
    /// Shuffles `indices` in place, each permutation being equally likely.
    fn shuffle_indices(&mut self, indices: &mut [usize]);
}

impl<R> IndexShuffle for R
where
    R: rand::Rng + ?Sized,
{
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        indices.shuffle(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(5);
        let mut indices: Vec<usize> = (0..50).collect();
        rng.shuffle_indices(&mut indices);

        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a: Vec<usize> = (0..20).collect();
        let mut b = a.clone();
        rand_pcg::Pcg64::seed_from_u64(42).shuffle_indices(&mut a);
        rand_pcg::Pcg64::seed_from_u64(42).shuffle_indices(&mut b);
        assert_eq!(a, b);
    }
}

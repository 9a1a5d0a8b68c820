use rand::Rng;
use tracing::debug;

use crate::quiz_engine::models::{Question, SelectionOrder};

/// Pick the questions for one run.
///
/// `count` is clamped to `pool.len()`. Sequential order takes the first
/// `count` questions; random order draws `count` distinct questions with a
/// partial Fisher-Yates shuffle and returns them in draw order.
pub fn select<'a, R: Rng>(
    pool: &[&'a Question],
    count: usize,
    order: SelectionOrder,
    rng: &mut R,
) -> Vec<&'a Question> {
    let count = count.min(pool.len());
    let picked: Vec<&Question> = match order {
        SelectionOrder::Sequential => pool[..count].to_vec(),
        SelectionOrder::Random { .. } => {
            let mut idx: Vec<usize> = (0..pool.len()).collect();
            // Swap a random remaining index into slot i; slots 0..count are the draw.
            for i in 0..count {
                let j = rng.gen_range(i..idx.len());
                idx.swap(i, j);
            }
            idx[..count].iter().map(|&i| pool[i]).collect()
        }
    };
    debug!(
        count,
        ids = ?picked.iter().map(|q| q.id).collect::<Vec<_>>(),
        "questions selected"
    );
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn bank(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id,
                category: "VLAN".into(),
                difficulty: Difficulty::Easy,
                question: format!("q{id}"),
                options: [("A".to_string(), "a".to_string())].into_iter().collect(),
                answer: "A".into(),
                explanation: String::new(),
            })
            .collect()
    }

    const RANDOM: SelectionOrder = SelectionOrder::Random { seed: None };

    #[test]
    fn sequential_takes_prefix() {
        let all = bank(5);
        let pool: Vec<&Question> = all.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        let ids: Vec<u32> = select(&pool, 3, SelectionOrder::Sequential, &mut rng)
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn count_is_clamped_to_pool() {
        let all = bank(2);
        let pool: Vec<&Question> = all.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select(&pool, 5, SelectionOrder::Sequential, &mut rng).len(), 2);
        assert_eq!(select(&pool, 5, RANDOM, &mut rng).len(), 2);
        assert!(select(&pool, 0, RANDOM, &mut rng).is_empty());
    }

    #[test]
    fn random_draw_is_without_replacement_and_from_pool() {
        let all = bank(10);
        let pool: Vec<&Question> = all.iter().collect();
        for seed in [1u64, 42, 999, 0xDEAD_BEEF, 7] {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select(&pool, 6, RANDOM, &mut rng);
            assert_eq!(picked.len(), 6);
            let unique: HashSet<u32> = picked.iter().map(|q| q.id).collect();
            assert_eq!(unique.len(), 6, "duplicate draw for seed={seed}");
            assert!(unique.iter().all(|id| (1..=10).contains(id)));
        }
    }

    #[test]
    fn random_draw_is_deterministic_with_seed() {
        let all = bank(10);
        let pool: Vec<&Question> = all.iter().collect();
        let draw = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            select(&pool, 10, RANDOM, &mut rng).iter().map(|q| q.id).collect()
        };
        assert_eq!(draw(99), draw(99));
        let mut full = draw(99);
        full.sort_unstable();
        assert_eq!(full, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn random_draw_varies_across_seeds() {
        let all = bank(10);
        let pool: Vec<&Question> = all.iter().collect();
        let firsts: HashSet<u32> = (0..40u64)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                select(&pool, 1, RANDOM, &mut rng)[0].id
            })
            .collect();
        assert!(firsts.len() > 1, "first draw never changed across 40 seeds");
    }
}

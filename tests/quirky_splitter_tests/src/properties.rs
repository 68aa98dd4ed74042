use more_asserts::assert_le;
use quirky_splitter::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{random_input, reconstruct, SEPARATOR};

const ROUNDS: usize = 500;

fn is_separator(x: &u8) -> bool {
    *x == SEPARATOR
}

#[test]
fn should_reconstruct_input() -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(0..40);
        let input = random_input(&mut rng, len, 4);
        let separators = input.iter().copied().filter(is_separator);

        let segments = Splitter::new(is_separator)
            .split(input.iter().copied())
            .collect::<Vec<_>>();

        assert_eq!(reconstruct(&segments, separators)?, input);
        assert_eq!(
            segments.len(),
            if input.is_empty() {
                0
            } else {
                input.iter().filter(|x| is_separator(x)).count() + 1
            }
        );
        for segment in &segments {
            assert!(!segment.iter().any(is_separator));
        }
        if input.last().is_some_and(is_separator) {
            assert_eq!(segments.last(), Some(&Vec::new()));
        }
    }
    Ok(())
}

#[test]
fn should_bound_segments() -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xc0ffee);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(0..40);
        let limit = rng.gen_range(1..8);
        let input = random_input(&mut rng, len, 3);
        let separators = input.iter().copied().filter(is_separator);

        let segments = Splitter::bounded(limit, is_separator)?
            .split(input.iter().copied())
            .collect::<Vec<_>>();

        assert_le!(segments.len(), limit);
        assert_eq!(reconstruct(&segments, separators)?, input);

        // Everything after the (limit - 1)-th separator lands in the last segment.
        let separator_count = input.iter().filter(|x| is_separator(x)).count();
        if separator_count >= limit {
            let expected_tail = if limit == 1 {
                &input[..]
            } else {
                let tail_start = input
                    .iter()
                    .enumerate()
                    .filter(|(_, x)| is_separator(x))
                    .nth(limit - 2)
                    .map_or(0, |(i, _)| i + 1);
                &input[tail_start..]
            };
            assert_eq!(segments.last().map(Vec::as_slice), Some(expected_tail));
            assert_eq!(segments.len(), limit);
        }
    }
    Ok(())
}

#[test]
fn should_match_unbounded_split_when_quota_is_large() -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(0..40);
        let input = random_input(&mut rng, len, 5);

        let unbounded = Splitter::new(is_separator)
            .split(input.iter().copied())
            .collect::<Vec<_>>();
        let bounded = Splitter::bounded(len + 1, is_separator)?
            .split(input.iter().copied())
            .collect::<Vec<_>>();

        assert_eq!(bounded, unbounded);
    }
    Ok(())
}

#[test]
fn should_push_what_is_pulled() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(0..40);
        let input = random_input(&mut rng, len, 4);

        let pulled = Splitter::new(is_separator)
            .split(input.iter().copied())
            .collect::<Vec<_>>();
        let mut pushed: Vec<Vec<u8>> = Vec::new();
        let status = Splitter::new(is_separator).drive(input.iter().copied(), &mut pushed);

        assert_eq!(pushed, pulled);
        assert_eq!(status.consumed, input.len());
        assert_eq!(status.emitted, pulled.len());
        assert!(!status.stopped);
    }
}

use rand::Rng;

#[cfg(test)]
mod properties;

/// Separator used by the generated inputs.
pub const SEPARATOR: u8 = 0;

/// Generates `len` small numbers, about one in `separator_ratio` of them being
/// [`SEPARATOR`].
pub fn random_input<R: Rng>(rng: &mut R, len: usize, separator_ratio: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            if rng.gen_ratio(1, separator_ratio) {
                SEPARATOR
            } else {
                rng.gen_range(1..=9)
            }
        })
        .collect()
}

/// Joins segments back together, taking one separator from `separators`
/// between each pair of segments.
pub fn reconstruct<T: Clone>(
    segments: &[Vec<T>],
    mut separators: impl Iterator<Item = T>,
) -> anyhow::Result<Vec<T>> {
    let mut output = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            let separator = separators
                .next()
                .ok_or_else(|| anyhow::anyhow!("missing separator before segment {}", i))?;
            output.push(separator);
        }
        output.extend(segment.iter().cloned());
    }
    Ok(output)
}

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

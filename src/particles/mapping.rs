use std::collections::HashSet;

use crate::{
    foundation::error::{StippleError, StippleResult},
    foundation::math::Rng64,
    particles::particle::ParticleSet,
};

/// Index relation from a source set of `len()` particles onto a target set of `target_len()`.
///
/// `targets()[i]` is the target index paired with source particle `i`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Correspondence {
    target_len: usize,
    mapping: Vec<usize>,
}

impl Correspondence {
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn targets(&self) -> &[usize] {
        &self.mapping
    }

    pub fn target_of(&self, source_idx: usize) -> Option<usize> {
        self.mapping.get(source_idx).copied()
    }
}

/// Map `size_a` source indices onto `size_b <= size_a` targets.
///
/// While `i < size_b` a draw that hits an already used target is redrawn, so the first
/// `size_b` entries sample without replacement. From `i >= size_b` on, draws are accepted as-is
/// and targets repeat (fan-out).
///
/// Returns `None` when `size_b > size_a`, or when `size_b == 0` but `size_a > 0`.
#[tracing::instrument(skip(rng))]
pub fn build_mapping(size_a: usize, size_b: usize, rng: &mut Rng64) -> Option<Correspondence> {
    if size_b > size_a {
        return None;
    }
    if size_b == 0 {
        return (size_a == 0).then(|| Correspondence {
            target_len: 0,
            mapping: Vec::new(),
        });
    }

    let mut taken = HashSet::with_capacity(size_b);
    let mut mapping = Vec::with_capacity(size_a);
    let mut redraws = 0u64;
    for i in 0..size_a {
        let mut s = rng.next_below(size_b);
        while i < size_b && taken.contains(&s) {
            s = rng.next_below(size_b);
            redraws += 1;
        }
        mapping.push(s);
        taken.insert(s);
    }

    tracing::debug!(redraws, "built correspondence");
    Some(Correspondence {
        target_len: size_b,
        mapping,
    })
}

/// Two particle sets ordered larger-first, plus the correspondence between them.
///
/// `source` is the larger (or, on a tie, the first given) set; every source particle is
/// paired with `source -> target` through [`MorphPair::mapping`]. When `target` is empty there
/// is nothing to pair with, so the mapping is empty and the pair places no particles.
#[derive(Clone, Debug)]
pub struct MorphPair {
    source: ParticleSet,
    target: ParticleSet,
    mapping: Correspondence,
}

impl MorphPair {
    pub fn new(first: ParticleSet, second: ParticleSet, rng: &mut Rng64) -> StippleResult<Self> {
        let (source, target) = if second.len() > first.len() {
            (second, first)
        } else {
            (first, second)
        };
        if target.is_empty() {
            tracing::debug!(
                source = source.len(),
                "morph target has no particles; pair will draw nothing"
            );
            return Ok(Self {
                source,
                target,
                mapping: Correspondence {
                    target_len: 0,
                    mapping: Vec::new(),
                },
            });
        }
        let mapping = build_mapping(source.len(), target.len(), rng).ok_or_else(|| {
            StippleError::mapping(format!(
                "cannot map {} particles onto {} targets",
                source.len(),
                target.len()
            ))
        })?;
        Ok(Self {
            source,
            target,
            mapping,
        })
    }

    pub fn source(&self) -> &ParticleSet {
        &self.source
    }

    pub fn target(&self) -> &ParticleSet {
        &self.target
    }

    pub fn mapping(&self) -> &Correspondence {
        &self.mapping
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/mapping.rs"]
mod tests;

//! Random round selection over the entity pool.
//!
//! The selector draws uniform random indices and re-draws while the picked
//! entity shares a name with the excluded one, so consecutive rounds never
//! compare an entity against itself. The RNG is injected by the caller, which
//! keeps the draw deterministic under seeded generators in tests.

use rand::Rng;

use crate::entity::Entity;

/// Errors from [`pick_index`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The pool has no entities at all.
    #[error("entity pool is empty")]
    EmptyPool,

    /// An exclusion was requested but every pool entry shares the excluded
    /// name, so rejection sampling could never terminate.
    #[error("entity pool has no name other than {excluded:?}")]
    NoAlternative { excluded: String },
}

/// Picks a uniformly random pool index, avoiding the excluded entry's name.
///
/// `exclude` is the index of the entity the pick must differ from (compared
/// by name, matching how the catalog deduplicates). Passing `None` permits
/// any entry. Repeats against entities from earlier rounds are allowed; only
/// the immediate exclusion is enforced.
pub fn pick_index<R: Rng + ?Sized>(
    pool: &[Entity],
    exclude: Option<usize>,
    rng: &mut R,
) -> Result<usize, SelectError> {
    if pool.is_empty() {
        return Err(SelectError::EmptyPool);
    }

    let Some(excluded) = exclude else {
        return Ok(rng.gen_range(0..pool.len()));
    };

    let excluded_name = pool[excluded].name.as_str();

    // Rejection sampling diverges on a single-name pool, so rule that out
    // up front instead of spinning.
    if !pool.iter().any(|entity| entity.name != excluded_name) {
        return Err(SelectError::NoAlternative {
            excluded: excluded_name.to_string(),
        });
    }

    loop {
        let index = rng.gen_range(0..pool.len());
        if pool[index].name != excluded_name {
            return Ok(index);
        }
    }
}

//! Guessable entity data.

/// One guessable item: a display name, the hidden-or-shown numeric metric,
/// and a reference to an image the presentation layer may show.
///
/// Entities are immutable once fetched. The session owns the full pool and
/// refers to individual entries by index, so cloning stays confined to
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub metric: u64,
    pub image_ref: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, metric: u64, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metric,
            image_ref: image_ref.into(),
        }
    }
}

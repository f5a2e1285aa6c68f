//! Persistence port for the loaded vocabulary and the theme preference.

use crate::types::{Theme, VocabList};

/// Local key-value persistence.
///
/// Lists are stored as a JSON array of [`crate::types::StoredEntry`] with no
/// schema version. Implementations live outside this crate.
pub trait VocabStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load_vocab(&self) -> Result<Option<VocabList>, Self::Error>;
    fn save_vocab(&self, list: &VocabList) -> Result<(), Self::Error>;
    fn load_theme(&self) -> Result<Option<Theme>, Self::Error>;
    fn save_theme(&self, theme: Theme) -> Result<(), Self::Error>;
}

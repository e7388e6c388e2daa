//! Client-side text filter over loaded dogs.
//!
//! Only decides visibility; the page cache is never touched.

use crate::api::Dog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    query: String,
    lowered: String,
}

impl TextFilter {
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let lowered = query.to_lowercase();
        Self { query, lowered }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Case-insensitive substring match on name, breed, age or zip code.
    pub fn matches(&self, dog: &Dog) -> bool {
        if self.lowered.is_empty() {
            return true;
        }
        let needle = self.lowered.as_str();
        dog.name.to_lowercase().contains(needle)
            || dog.breed.to_lowercase().contains(needle)
            || dog.age.to_string().contains(needle)
            || dog.zip_code.to_lowercase().contains(needle)
    }
}

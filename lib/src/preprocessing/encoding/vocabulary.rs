use std::collections::{BTreeSet, HashMap};

/// Result of looking a category up in a [`Vocabulary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Position of the category in the vocabulary.
    Known(usize),
    /// Not seen during fit.
    Unknown,
}

/// Fixed, ordered set of categories captured at fit time.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    categories: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from observed values; sorted and de-duplicated.
    pub fn from_observed<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();
        Self::from_sorted(sorted.into_iter().collect())
    }

    /// Rebuild from a category list already in vocabulary order.
    pub(crate) fn from_sorted(categories: Vec<String>) -> Self {
        let index = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { categories, index }
    }

    pub fn lookup(&self, value: &str) -> Category {
        self.index
            .get(value)
            .map_or(Category::Unknown, |&i| Category::Known(i))
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_sorted_and_unique() {
        let vocab = Vocabulary::from_observed(["Kothrud", "Aundh", "Kothrud", "Baner"]);
        assert_eq!(vocab.categories(), &["Aundh", "Baner", "Kothrud"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_lookup() {
        let vocab = Vocabulary::from_observed(["Kothrud", "Aundh"]);
        assert_eq!(vocab.lookup("Aundh"), Category::Known(0));
        assert_eq!(vocab.lookup("Kothrud"), Category::Known(1));
        assert_eq!(vocab.lookup("kothrud"), Category::Unknown);
        assert_eq!(vocab.lookup(""), Category::Unknown);
    }
}

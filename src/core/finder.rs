use crate::core::catalog::{Catalog, Category};
use crate::core::filters::NormalizedCriteria;
use crate::models::{FilterCriteria, PetMatch};

/// Upper-case the first character only, leaving the rest untouched
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Filter the catalog by the given criteria
///
/// # Pipeline
/// 1. Category scope: every category in catalog order, or only the named one
///    (an unknown name yields nothing)
/// 2. Conjunction of breed, food, curiosity and exercise predicates
/// 3. Annotation with the capitalized category name
///
/// Records keep their catalog order. The catalog is only read.
pub fn filter_pets<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<PetMatch<'a>> {
    let scope: Vec<&Category> = match criteria.category.as_deref() {
        Some(name) => catalog.get(name).into_iter().collect(),
        None => catalog.categories().iter().collect(),
    };

    let normalized = NormalizedCriteria::new(criteria);
    let normalized = &normalized;

    scope
        .into_iter()
        .flat_map(move |category| {
            let label = capitalize_first(&category.name);
            category
                .pets
                .iter()
                .filter(move |pet| normalized.matches(pet))
                .map(move |pet| PetMatch {
                    category: label.clone(),
                    record: pet,
                })
        })
        .collect()
}

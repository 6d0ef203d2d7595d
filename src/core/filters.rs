use crate::models::{FilterCriteria, PetRecord};

/// Filter criteria with every keyword lower-cased once up front
///
/// Built per filter invocation so the per-record predicates only lower-case
/// the record side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCriteria {
    pub breed: Option<String>,
    pub foods: Vec<String>,
    pub curiosity: Option<String>,
    pub exercise: Option<String>,
}

impl NormalizedCriteria {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            breed: criteria.breed.as_deref().map(str::to_lowercase),
            foods: criteria.foods.iter().map(|f| f.to_lowercase()).collect(),
            curiosity: criteria.curiosity.as_deref().map(str::to_lowercase),
            exercise: criteria.exercise.as_deref().map(str::to_lowercase),
        }
    }

    /// Conjunction of all predicates
    #[inline]
    pub fn matches(&self, pet: &PetRecord) -> bool {
        matches_breed(pet, self.breed.as_deref())
            && matches_foods(pet, &self.foods)
            && matches_curiosity(pet, self.curiosity.as_deref())
            && matches_exercise(pet, self.exercise.as_deref())
    }
}

/// Case-insensitive exact breed match
///
/// `breed` must already be lower-cased. A record without a breed fails any
/// breed constraint.
#[inline]
pub fn matches_breed(pet: &PetRecord, breed: Option<&str>) -> bool {
    let Some(breed) = breed else {
        return true;
    };

    pet.breed
        .as_deref()
        .is_some_and(|own| own.to_lowercase() == breed)
}

/// Passes when any token is a substring of any permitted food
///
/// This is substring containment, not set membership: the token "ra"
/// accepts a record whose foods include "Ração" or "carne". Tokens must
/// already be lower-cased; an empty token list always passes.
#[inline]
pub fn matches_foods(pet: &PetRecord, foods: &[String]) -> bool {
    if foods.is_empty() {
        return true;
    }

    let own: Vec<String> = pet
        .permitted_foods
        .iter()
        .flatten()
        .map(|f| f.to_lowercase())
        .collect();

    foods
        .iter()
        .any(|token| own.iter().any(|item| item.contains(token.as_str())))
}

/// Keyword search over the curiosities, list entries joined by a space
#[inline]
pub fn matches_curiosity(pet: &PetRecord, keyword: Option<&str>) -> bool {
    let Some(keyword) = keyword else {
        return true;
    };

    pet.curiosities
        .as_ref()
        .map(|c| c.joined().to_lowercase())
        .unwrap_or_default()
        .contains(keyword)
}

#[inline]
pub fn matches_exercise(pet: &PetRecord, keyword: Option<&str>) -> bool {
    let Some(keyword) = keyword else {
        return true;
    };

    pet.exercise
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
        .contains(keyword)
}

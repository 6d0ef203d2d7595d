use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Curiosities are stored either as one paragraph or as a list of facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Curiosities {
    Single(String),
    Many(Vec<String>),
}

impl Curiosities {
    /// Flatten to one searchable string, list entries joined by a space
    pub fn joined(&self) -> String {
        match self {
            Curiosities::Single(text) => text.clone(),
            Curiosities::Many(items) => items.join(" "),
        }
    }
}

/// One entry of the pet catalog
///
/// The known fields are typed; anything else in the source document is kept
/// verbatim (and in document order) in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(rename = "raca", default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(rename = "comida_permitida", default, skip_serializing_if = "Option::is_none")]
    pub permitted_foods: Option<Vec<String>>,
    #[serde(rename = "curiosidades", default, skip_serializing_if = "Option::is_none")]
    pub curiosities: Option<Curiosities>,
    #[serde(rename = "exercicios", default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A catalog record annotated with the (capitalized) category it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetMatch<'a> {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(flatten)]
    pub record: &'a PetRecord,
}

/// Optional constraints for a catalog query
///
/// `None` means "no constraint". An empty `foods` list is also no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "raca")]
    pub breed: Option<String>,
    #[serde(rename = "comida_permitida")]
    pub foods: Vec<String>,
    #[serde(rename = "curiosidade")]
    pub curiosity: Option<String>,
    #[serde(rename = "exercicios")]
    pub exercise: Option<String>,
}

impl FilterCriteria {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_food(mut self, food: impl Into<String>) -> Self {
        self.foods.push(food.into());
        self
    }

    pub fn with_curiosity(mut self, keyword: impl Into<String>) -> Self {
        self.curiosity = Some(keyword.into());
        self
    }

    pub fn with_exercise(mut self, keyword: impl Into<String>) -> Self {
        self.exercise = Some(keyword.into());
        self
    }

    /// True when no constraint is set at all
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.breed.is_none()
            && self.foods.is_empty()
            && self.curiosity.is_none()
            && self.exercise.is_none()
    }
}

/// Visitor suggestion as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Suggestion {
    pub id: i64,
    pub text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

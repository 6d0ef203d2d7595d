use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::sanitizer::sanitize;
use crate::models::domain::FilterCriteria;

/// Form body of `POST /submit_suggestion`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionForm {
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Sanitized suggestion text about to be inserted
///
/// Built only from already sanitized input; the store validates it once more
/// before writing.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewSuggestion {
    #[validate(length(min = 1, max = 500))]
    pub text: String,
}

/// Raw query parameters of `GET /search`
///
/// `comida_permitida` may repeat, so the query string is read as ordered
/// key/value pairs instead of a flat struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub categoria: Option<String>,
    pub raca: Option<String>,
    pub comida_permitida: Vec<String>,
    pub curiosidade: Option<String>,
    pub exercicios: Option<String>,
}

impl SearchParams {
    /// Collect parameters from decoded query pairs, ignoring unknown keys
    ///
    /// For single-valued keys the first occurrence wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = SearchParams::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "categoria" => &mut params.categoria,
                "raca" => &mut params.raca,
                "curiosidade" => &mut params.curiosidade,
                "exercicios" => &mut params.exercicios,
                "comida_permitida" => {
                    params.comida_permitida.push(value.into());
                    continue;
                }
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        params
    }

    /// Sanitize every parameter and turn them into filter criteria
    ///
    /// Food tokens that sanitize to nothing are dropped.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            category: sanitize(self.categoria.as_deref()),
            breed: sanitize(self.raca.as_deref()),
            foods: self
                .comida_permitida
                .iter()
                .filter_map(|food| sanitize(Some(food)))
                .collect(),
            curiosity: sanitize(self.curiosidade.as_deref()),
            exercise: sanitize(self.exercicios.as_deref()),
        }
    }
}

//! Wire format of the `/filtrar` endpoint
//!
//! Field names follow the server's Portuguese keys; the Rust side uses
//! English names and serde renames.

use crate::core::{Letter, LetterSet};
use serde::{Deserialize, Serialize};

/// A letter tied to a 0-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedLetter {
    #[serde(rename = "letra")]
    pub letter: Letter,
    #[serde(rename = "posicao")]
    pub position: usize,
}

/// Request body for `POST /filtrar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterRequest {
    #[serde(rename = "tamanho_palavra")]
    pub word_length: usize,
    #[serde(rename = "letras_posicionadas")]
    pub positioned: Vec<PlacedLetter>,
    #[serde(rename = "letras_extras")]
    pub required: LetterSet,
    #[serde(rename = "letras_exclusao")]
    pub excluded: LetterSet,
    #[serde(rename = "letras_encontradas")]
    pub found: Vec<LetterSet>,
    #[serde(rename = "letras_incorretas")]
    pub misplaced: Vec<PlacedLetter>,
}

/// Response body of `POST /filtrar`
///
/// The server answers either with an error message or with the match count
/// and (a prefix of) the matching words.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FilterResponse {
    Rejected {
        #[serde(rename = "erro")]
        error: String,
    },
    Matches {
        total: u64,
        #[serde(rename = "palavras")]
        words: Vec<String>,
    },
}

//! What the results panel shows
//!
//! A `ResultsView` is the render-ready outcome of the last applied query: a
//! total line plus a list of items. The strings match what the server's own
//! web page displays.

use super::FilterResponse;

pub const INVALID_QUERY_LENGTH: &str = "Por favor, insira um tamanho válido da palavra.";
pub const INVALID_FIELD_LENGTH: &str = "Por favor, insira um tamanho válido.";
pub const NO_RESULTS: &str = "Nenhuma palavra encontrada.";
pub const REQUEST_FAILED: &str = "Ocorreu um erro ao filtrar as palavras.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    /// Nothing applied yet
    #[default]
    Empty,
    /// Local validation failed; no request was sent
    Invalid(&'static str),
    /// The server answered with an error message
    ServerError(String),
    /// Transport or decoding failure
    Failure,
    Candidates {
        total: u64,
        words: Vec<String>,
    },
}

impl ResultsView {
    /// An empty error message counts as a failed request, not a server error
    #[must_use]
    pub fn from_response(response: FilterResponse) -> Self {
        match response {
            FilterResponse::Rejected { error } if error.is_empty() => Self::Failure,
            FilterResponse::Rejected { error } => Self::ServerError(error),
            FilterResponse::Matches { total, words } => Self::Candidates { total, words },
        }
    }

    /// Text of the total line; empty unless candidates were returned
    #[must_use]
    pub fn total_line(&self) -> String {
        match self {
            Self::Candidates { total, .. } => format!("Total de palavras encontradas: {total}"),
            _ => String::new(),
        }
    }

    /// Items of the result list
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Invalid(message) => vec![(*message).to_string()],
            Self::ServerError(error) => vec![format!("Erro: {error}")],
            Self::Failure => vec![REQUEST_FAILED.to_string()],
            Self::Candidates { words, .. } if words.is_empty() => vec![NO_RESULTS.to_string()],
            Self::Candidates { words, .. } => words.clone(),
        }
    }

    /// Whether the list holds an error or validation message rather than words
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::ServerError(_) | Self::Failure)
    }
}

//! Transport to the filtering service

use super::{FilterRequest, FilterResponse};
use std::fmt;
use std::future::Future;
use url::Url;

/// Path of the filtering endpoint, relative to the server root
pub const FILTER_PATH: &str = "/filtrar";

/// Why a query produced no usable response
#[derive(Debug)]
pub enum DispatchError {
    /// The request could not be sent or the body could not be read
    Transport(reqwest::Error),
    /// The body was not a recognised JSON response
    Decode {
        status: u16,
        source: serde_json::Error,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::Decode { status, source } => {
                write!(f, "unreadable response (HTTP {status}): {source}")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Something that can answer a filter request
pub trait FilterClient: Send + Sync {
    fn filter(
        &self,
        request: &FilterRequest,
    ) -> impl Future<Output = Result<FilterResponse, DispatchError>> + Send;
}

/// `FilterClient` speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpFilterClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpFilterClient {
    /// Client for the `/filtrar` endpoint of `server`
    ///
    /// # Errors
    /// Returns an error if the endpoint URL cannot be derived from `server`.
    pub fn new(server: &Url) -> Result<Self, url::ParseError> {
        Self::with_http(server, reqwest::Client::new())
    }

    /// Same as [`HttpFilterClient::new`] but reusing an existing HTTP client
    ///
    /// # Errors
    /// Returns an error if the endpoint URL cannot be derived from `server`.
    pub fn with_http(server: &Url, http: reqwest::Client) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: server.join(FILTER_PATH)?,
            http,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FilterClient for HttpFilterClient {
    async fn filter(&self, request: &FilterRequest) -> Result<FilterResponse, DispatchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(DispatchError::Transport)?;

        // Error bodies come with 4xx/5xx statuses, so the status is only kept
        // for diagnostics.
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(DispatchError::Transport)?;
        tracing::debug!(status, bytes = body.len(), "filter response received");

        serde_json::from_slice(&body).map_err(|source| DispatchError::Decode { status, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;
    use crate::query::{QueryDispatcher, ResultsView, build_request};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn endpoint_is_rooted_at_server() {
        let server = Url::parse("http://127.0.0.1:5000").unwrap();
        let client = HttpFilterClient::new(&server).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:5000/filtrar");
    }

    #[test]
    fn endpoint_ignores_server_path() {
        let server = Url::parse("https://words.example.com/app/").unwrap();
        let client = HttpFilterClient::new(&server).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://words.example.com/filtrar"
        );
    }

    #[test]
    fn decode_error_mentions_status() {
        let source = serde_json::from_str::<FilterResponse>("oops").unwrap_err();
        let err = DispatchError::Decode {
            status: 502,
            source,
        };
        assert!(err.to_string().contains("HTTP 502"));
    }

    fn client_for(server: &MockServer) -> HttpFilterClient {
        HttpFilterClient::new(&Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn posts_form_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/filtrar"))
            .and(body_json(json!({
                "tamanho_palavra": 5,
                "letras_posicionadas": [{"letra": "c", "posicao": 0}],
                "letras_extras": ["a"],
                "letras_exclusao": [],
                "letras_encontradas": [],
                "letras_incorretas": []
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"total": 1, "palavras": ["cabra"]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut state = FormState::new("5");
        state.inputs().type_positioned(0, 'c');
        state
            .required_keyboard()
            .toggle(crate::core::Letter::from_char('a').unwrap());

        let request = build_request(&state).unwrap();
        let response = client_for(&server).filter(&request).await.unwrap();
        assert_eq!(
            response,
            FilterResponse::Matches {
                total: 1,
                words: vec!["cabra".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn error_body_with_failure_status_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/filtrar"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"erro": "Dados inválidos."})),
            )
            .mount(&server)
            .await;

        let dispatcher = QueryDispatcher::new(client_for(&server));
        let view = dispatcher.dispatch(&FormState::new("5")).await;
        assert_eq!(view, ResultsView::ServerError("Dados inválidos.".to_string()));
        assert_eq!(view.total_line(), "");
    }

    #[tokio::test]
    async fn blank_error_message_shows_generic_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/filtrar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"erro": ""})))
            .mount(&server)
            .await;

        let dispatcher = QueryDispatcher::new(client_for(&server));
        let view = dispatcher.dispatch(&FormState::new("5")).await;
        assert_eq!(view, ResultsView::Failure);
        assert_eq!(
            view.items(),
            vec!["Ocorreu um erro ao filtrar as palavras.".to_string()]
        );
    }

    #[tokio::test]
    async fn unreadable_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/filtrar"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
            .mount(&server)
            .await;

        let request = build_request(&FormState::new("5")).unwrap();
        let err = client_for(&server).filter(&request).await.unwrap_err();
        assert!(matches!(err, DispatchError::Decode { status: 500, .. }));
    }
}

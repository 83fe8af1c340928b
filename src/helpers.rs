use crate::error::Error;
use crate::types::HttpClient;
use reqwest::{header, Request, Response};
use reqwest_middleware::{ClientBuilder, Middleware, Next};
use serde::de::DeserializeOwned;
use http::Extensions;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Logs every outgoing request as `{METHOD} {url}` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger;

#[async_trait::async_trait]
impl Middleware for RequestLogger {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        log::debug!("{} {}", req.method(), req.url());
        next.run(req, extensions).await
    }
}

/// Builds the client used for all requests. No timeouts and no retries are configured.
pub fn get_default_client(user_agent_string: &'static str) -> Result<HttpClient, Error> {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()?;

    Ok(ClientBuilder::new(client)
        .with(RequestLogger)
        .build())
}

/// Checks the status of a response and reads its body.
pub async fn check_response(response: Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    match status.as_u16() {
        400..=599 => Err(Error::Http(status)),
        _ => Ok(response.bytes().await?),
    }
}

/// Checks the status of a response and reads its body as text.
pub async fn response_text(response: Response) -> Result<String, Error> {
    let body = check_response(response).await?;

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Checks the status of a response and parses its body as JSON.
pub async fn parses_response<D>(response: Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    match serde_json::from_slice::<D>(&body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            log::debug!("Unexpected response: {}", String::from_utf8_lossy(&body));
            Err(Error::Parse(parse_error))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(serde::Deserialize, Debug)]
    struct Body {
        success: bool,
    }

    #[tokio::test]
    async fn parses_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
            .mount(&mock_server)
            .await;

        let client = get_default_client(USER_AGENT_STRING).unwrap();
        let response = client.get(format!("{}/ok", mock_server.uri())).send().await.unwrap();
        let body: Body = parses_response(response).await.unwrap();

        assert!(body.success);
    }

    #[tokio::test]
    async fn error_status_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"success":true}"#))
            .mount(&mock_server)
            .await;

        let client = get_default_client(USER_AGENT_STRING).unwrap();
        let response = client.get(format!("{}/missing", mock_server.uri())).send().await.unwrap();
        let result = parses_response::<Body>(response).await;

        assert!(matches!(result, Err(Error::Http(status)) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let client = get_default_client(USER_AGENT_STRING).unwrap();
        let response = client.get(format!("{}/html", mock_server.uri())).send().await.unwrap();
        let result = parses_response::<Body>(response).await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}

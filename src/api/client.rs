//! Typed JSON API client
//!
//! Every call is one independent attempt: compose the request, send it under a
//! timeout, decode the body, and either return the `data` member or fail with
//! an [`ApiClientError`].

use super::error::ApiClientError;
use super::response::{take_data, ErrorBody, Paginated, PaginatedResponse};
use super::transport::{
    Headers, HttpMethod, ReqwestTransport, Transport, TransportError, TransportRequest,
};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const CONTENT_TYPE: &str = "content-type";
const APPLICATION_JSON: &str = "application/json";

/// Client-wide defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Prefix prepended verbatim to every path
    pub base_url: String,
    pub timeout: Duration,
    pub headers: Headers,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            headers: Headers::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

/// Per-call overrides of the client defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Replaces the client timeout for this call
    pub timeout: Option<Duration>,
    /// Override client headers key by key
    pub headers: Headers,
}

impl RequestOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

/// Merge header layers; later layers win, names compared case-insensitively
fn merge_headers(layers: &[&Headers]) -> Headers {
    let mut merged = Headers::new();
    merged.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    for layer in layers {
        for (name, value) in layer.iter() {
            merged.insert(name.to_ascii_lowercase(), value.clone());
        }
    }
    merged
}

/// Client for a JSON API speaking the success/failure envelope
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiClientConfig>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Create a client over a fresh reqwest transport
    pub fn with_reqwest(config: ApiClientConfig) -> Result<Self> {
        Ok(Self::new(config, Arc::new(ReqwestTransport::new()?)))
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiClientError> {
        self.request(HttpMethod::Get, path, None::<&()>, &options)
            .await
    }

    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Post, path, body, &options).await
    }

    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Put, path, body, &options).await
    }

    pub async fn patch<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Patch, path, body, &options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiClientError> {
        self.request(HttpMethod::Delete, path, None::<&()>, &options)
            .await
    }

    /// GET a list endpoint that returns `{ success, data: [..], pagination }`
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Paginated<T>, ApiClientError> {
        let (status, body) = self
            .send(HttpMethod::Get, path, None::<&()>, &options)
            .await?;
        let page: PaginatedResponse<T> = serde_json::from_value(body)
            .map_err(|e| ApiClientError::decode(status, e.to_string()))?;
        Ok(Paginated {
            items: page.data,
            pagination: page.pagination,
        })
    }

    async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, body) = self.send(method, path, body, options).await?;
        serde_json::from_value(take_data(body))
            .map_err(|e| ApiClientError::decode(status, e.to_string()))
    }

    /// Compose, send and classify; returns the decoded body of a 2xx response
    async fn send<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<(u16, Value), ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.compose(method, path, body, options)?;
        let timeout = options.timeout.unwrap_or(self.config.timeout);

        tracing::debug!(%method, url = %request.url, ?timeout, "sending request");

        let result = self.exchange(request, timeout).await;
        if let Err(ref err) = result {
            tracing::warn!(
                %method,
                path,
                status = err.status,
                code = %err.code,
                "request failed: {}",
                err.message
            );
        }
        result
    }

    fn compose<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<TransportRequest, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = match body {
            Some(body) => Some(serde_json::to_string(body).map_err(|e| {
                tracing::warn!("failed to serialize request body: {e}");
                ApiClientError::unknown()
            })?),
            None => None,
        };

        Ok(TransportRequest {
            method,
            url: format!("{}{}", self.config.base_url, path),
            headers: merge_headers(&[&self.config.headers, &options.headers]),
            body,
        })
    }

    async fn exchange(
        &self,
        request: TransportRequest,
        timeout: Duration,
    ) -> Result<(u16, Value), ApiClientError> {
        // The timer and the in-flight send are owned by this future; both are
        // dropped on every exit path.
        let response = match tokio::time::timeout(timeout, self.transport.send(request)).await {
            Err(_elapsed) => return Err(ApiClientError::timeout()),
            Ok(Err(TransportError::Network(message))) => {
                return Err(ApiClientError::network(message))
            }
            Ok(Err(TransportError::Unknown)) => return Err(ApiClientError::unknown()),
            Ok(Ok(response)) => response,
        };

        let status = response.status;
        let body = decode_body(&response.body)?;

        if !response.is_success() {
            return Err(match ErrorBody::decode(body) {
                ErrorBody::Declared(info) => ApiClientError::from_server(status, info),
                ErrorBody::Unrecognized => ApiClientError::unrecognized(status),
            });
        }

        Ok((status, body))
    }
}

/// Parse a response body as JSON; an empty or non-JSON body is a transport failure
fn decode_body(text: &str) -> Result<Value, ApiClientError> {
    serde_json::from_str(text).map_err(|e| ApiClientError::network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::Pagination;
    use crate::api::transport::{MockTransport, TransportResponse};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    const BASE: &str = "http://api.test/v1";

    fn client_with(mock: MockTransport) -> ApiClient {
        ApiClient::new(ApiClientConfig::new(BASE), Arc::new(mock))
    }

    fn respond(status: u16, body: Value) -> MockTransport {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(move |_| Ok(TransportResponse::new(status, body.to_string())));
        mock
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct User {
        id: u32,
    }

    /// Transport that answers after a delay and records whether its
    /// in-flight future was dropped or ran to completion.
    struct SlowTransport {
        delay: Duration,
        dropped: Arc<AtomicBool>,
        completed: Arc<AtomicUsize>,
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl Transport for SlowTransport {
        async fn send(
            &self,
            _request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            let _flag = DropFlag(self.dropped.clone());
            tokio::time::sleep(self.delay).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(TransportResponse::new(
                200,
                json!({ "success": true, "data": { "id": 7 } }).to_string(),
            ))
        }
    }

    mod composition {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_url_is_concatenated_verbatim() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .withf(|req| req.url == "http://api.test/v1users" && req.method == HttpMethod::Get)
                .times(1)
                .returning(|_| Ok(TransportResponse::new(200, r#"{"success":true,"data":null}"#)));

            let result: Option<User> = client_with(mock)
                .get("users", RequestOptions::default())
                .await
                .unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_headers_merge_with_json_baseline() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .withf(|req| {
                    req.headers.get("content-type").map(String::as_str) == Some("application/json")
                        && req.headers.get("authorization").map(String::as_str) == Some("Bearer call")
                        && req.headers.get("x-app").map(String::as_str) == Some("starter")
                })
                .times(1)
                .returning(|_| Ok(TransportResponse::new(200, r#"{"success":true,"data":1}"#)));

            let config = ApiClientConfig::new(BASE)
                .with_header("X-App", "starter")
                .with_header("Authorization", "Bearer default");
            let client = ApiClient::new(config, Arc::new(mock));

            let value: u32 = client
                .get(
                    "/me",
                    RequestOptions::default().with_header("Authorization", "Bearer call"),
                )
                .await
                .unwrap();
            assert_eq!(value, 1);
        }

        #[tokio::test]
        async fn test_content_type_can_be_overridden() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .withf(|req| {
                    req.headers.len() == 1
                        && req.headers.get("content-type").map(String::as_str)
                            == Some("application/merge-patch+json")
                })
                .times(1)
                .returning(|_| Ok(TransportResponse::new(200, r#"{"success":true,"data":{}}"#)));

            let _: Value = client_with(mock)
                .patch(
                    "/me",
                    Some(&json!({ "name": "a" })),
                    RequestOptions::default()
                        .with_header("Content-Type", "application/merge-patch+json"),
                )
                .await
                .unwrap();
        }

        #[tokio::test]
        async fn test_body_is_serialized_for_post() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .withf(|req| {
                    req.method == HttpMethod::Post
                        && req.body.as_deref() == Some(r#"{"email":"a@b.com"}"#)
                })
                .times(1)
                .returning(|_| {
                    Ok(TransportResponse::new(201, r#"{"success":true,"data":{"id":3}}"#))
                });

            let user: User = client_with(mock)
                .post(
                    "/users",
                    Some(&json!({ "email": "a@b.com" })),
                    RequestOptions::default(),
                )
                .await
                .unwrap();
            assert_eq!(user, User { id: 3 });
        }

        #[tokio::test]
        async fn test_no_body_without_payload() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .withf(|req| req.method == HttpMethod::Delete && req.body.is_none())
                .times(1)
                .returning(|_| {
                    Ok(TransportResponse::new(
                        200,
                        json!({ "success": true, "data": null }).to_string(),
                    ))
                });

            let result = client_with(mock)
                .delete::<()>("/users/3", RequestOptions::default())
                .await;
            assert!(result.is_ok());
        }
    }

    mod responses {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_returns_data_verbatim() {
            let client = client_with(respond(200, json!({ "success": true, "data": { "id": 1 } })));
            let data: Value = client.get("/users/1", RequestOptions::default()).await.unwrap();
            assert_eq!(data, json!({ "id": 1 }));
        }

        #[tokio::test]
        async fn test_declared_error_fields_copied_through() {
            let client = client_with(respond(
                404,
                json!({
                    "success": false,
                    "error": { "code": "NOT_FOUND", "message": "missing", "details": {} }
                }),
            ));

            let err = client
                .get::<Value>("/users/9", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err.status, 404);
            assert_eq!(err.code, "NOT_FOUND");
            assert_eq!(err.message, "missing");
            assert_eq!(err.details, Some(Default::default()));
        }

        #[tokio::test]
        async fn test_field_details_survive() {
            let client = client_with(respond(
                422,
                json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "invalid",
                        "details": { "email": ["taken", "blocked"] }
                    }
                }),
            ));

            let err = client
                .post::<Value, _>("/users", Some(&json!({})), RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(
                err.field_messages("email"),
                ["taken".to_string(), "blocked".to_string()]
            );
        }

        #[tokio::test]
        async fn test_unrecognized_error_body() {
            let client = client_with(respond(500, json!({ "message": "boom" })));
            let err = client
                .get::<Value>("/boom", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err, ApiClientError::unrecognized(500));
            assert_eq!(err.code, "UNKNOWN_ERROR");
        }

        #[tokio::test]
        async fn test_empty_error_body_is_a_network_error() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .returning(|_| Ok(TransportResponse::new(503, "")));
            let err = client_with(mock)
                .get::<Value>("/down", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err.status, 0);
            assert_eq!(err.code, "NETWORK_ERROR");
        }

        #[tokio::test]
        async fn test_empty_success_body_is_a_network_error() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .returning(|_| Ok(TransportResponse::new(204, "")));
            let err = client_with(mock)
                .delete::<Value>("/users/3", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err.status, 0);
            assert_eq!(err.code, "NETWORK_ERROR");
        }

        #[tokio::test]
        async fn test_invalid_json_is_a_network_error() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .returning(|_| Ok(TransportResponse::new(502, "<html>bad gateway</html>")));
            let err = client_with(mock)
                .get::<Value>("/proxy", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err.status, 0);
            assert_eq!(err.code, "NETWORK_ERROR");
        }

        #[tokio::test]
        async fn test_data_that_does_not_fit_the_type() {
            let client = client_with(respond(200, json!({ "success": true, "data": "nope" })));
            let err = client
                .get::<User>("/users/1", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err.status, 200);
            assert_eq!(err.code, "DECODE_ERROR");
        }

        #[tokio::test]
        async fn test_paginated_list() {
            let client = client_with(respond(
                200,
                json!({
                    "success": true,
                    "data": [{ "id": 1 }, { "id": 2 }],
                    "pagination": { "page": 1, "limit": 2, "total": 3, "totalPages": 2 }
                }),
            ));

            let page: Paginated<User> = client
                .get_paginated("/users?page=1", RequestOptions::default())
                .await
                .unwrap();
            assert_eq!(page.items, vec![User { id: 1 }, User { id: 2 }]);
            assert_eq!(
                page.pagination,
                Pagination {
                    page: 1,
                    limit: 2,
                    total: 3,
                    total_pages: 2
                }
            );
        }

        #[tokio::test]
        async fn test_repeated_calls_are_independent() {
            let mut mock = MockTransport::new();
            mock.expect_send().times(2).returning(|_| {
                Ok(TransportResponse::new(200, r#"{"success":true,"data":{"id":1}}"#))
            });
            let client = client_with(mock);

            let first: User = client.get("/users/1", RequestOptions::default()).await.unwrap();
            let second: User = client.get("/users/1", RequestOptions::default()).await.unwrap();
            assert_eq!(first, second);
        }
    }

    mod failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_transport_failure_maps_to_network_error() {
            let mut mock = MockTransport::new();
            mock.expect_send()
                .returning(|_| Err(TransportError::Network("connection refused".to_string())));
            let err = client_with(mock)
                .get::<Value>("/x", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err, ApiClientError::network("connection refused"));
        }

        #[tokio::test]
        async fn test_unknown_transport_failure() {
            let mut mock = MockTransport::new();
            mock.expect_send().returning(|_| Err(TransportError::Unknown));
            let err = client_with(mock)
                .get::<Value>("/x", RequestOptions::default())
                .await
                .unwrap_err();
            assert_eq!(err.status, 0);
            assert_eq!(err.code, "UNKNOWN_ERROR");
        }

        #[tokio::test]
        async fn test_timeout_drops_in_flight_request() {
            let dropped = Arc::new(AtomicBool::new(false));
            let completed = Arc::new(AtomicUsize::new(0));
            let transport = SlowTransport {
                delay: Duration::from_secs(5),
                dropped: dropped.clone(),
                completed: completed.clone(),
            };
            let client = ApiClient::new(
                ApiClientConfig::new(BASE).with_timeout(Duration::from_millis(20)),
                Arc::new(transport),
            );

            let err = client
                .get::<User>("/slow", RequestOptions::default())
                .await
                .unwrap_err();

            assert_eq!(err.status, 408);
            assert_eq!(err.code, "TIMEOUT_ERROR");
            assert!(dropped.load(Ordering::SeqCst));
            assert_eq!(completed.load(Ordering::SeqCst), 0);
        }

        #[tokio::test]
        async fn test_call_timeout_replaces_client_default() {
            let transport = SlowTransport {
                delay: Duration::from_millis(30),
                dropped: Arc::new(AtomicBool::new(false)),
                completed: Arc::new(AtomicUsize::new(0)),
            };
            let client = ApiClient::new(
                ApiClientConfig::new(BASE).with_timeout(Duration::from_millis(5)),
                Arc::new(transport),
            );

            let user: User = client
                .get(
                    "/slow",
                    RequestOptions::default().with_timeout(Duration::from_secs(2)),
                )
                .await
                .unwrap();
            assert_eq!(user, User { id: 7 });
        }

        #[tokio::test]
        async fn test_call_timeout_can_shorten() {
            let transport = SlowTransport {
                delay: Duration::from_secs(5),
                dropped: Arc::new(AtomicBool::new(false)),
                completed: Arc::new(AtomicUsize::new(0)),
            };
            let client = ApiClient::new(ApiClientConfig::new(BASE), Arc::new(transport));

            let err = client
                .get::<User>(
                    "/slow",
                    RequestOptions::default().with_timeout(Duration::from_millis(10)),
                )
                .await
                .unwrap_err();
            assert!(err.is_timeout());
        }
    }

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::new("/api");
        assert_eq!(config.timeout, Duration::from_millis(30_000));
        assert!(config.headers.is_empty());
    }
}

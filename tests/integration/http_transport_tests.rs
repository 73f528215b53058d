//! `HttpTransport` against a local mock server
//!
//! The transport is blocking, so each call runs on tokio's blocking pool while
//! the mock server keeps serving.

#[cfg(test)]
mod tests {
    use cloudinary_dispatch::api::media_optimizer;
    use cloudinary_dispatch::{
        ApiClient, ApiResponse, CallOptions, Config, HttpMethod, HttpTransport, Params,
        TransportError,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;
use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_uri: String) -> ApiClient<HttpTransport> {
        let config = Config::builder()
            .cloud_name("demo")
            .api_credentials("key", "secret")
            .upload_prefix(&server_uri)
            .build();
        ApiClient::new(config, HttpTransport::new().unwrap())
    }

    async fn blocking<F, R>(f: F) -> R
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        tokio::task::spawn_blocking(f).await.unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_ping_uses_basic_auth_on_unversioned_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/demo/ping"))
            .and(header("authorization", "Basic a2V5OnNlY3JldA=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response: ApiResponse = blocking(move || {
            media_optimizer::ping(&client_for(uri), CallOptions::new())
        })
        .await
        .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.json::<Value>().unwrap(), json!({"status": "ok"}));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_warm_up_sends_json_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/demo/cache_warm_up"))
            .and(header("authorization", "Bearer t0k3n"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"url": "https://example.com/a.jpg"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = blocking(move || {
            media_optimizer::warm_up(
                &client_for(uri),
                "https://example.com/a.jpg",
                CallOptions::new().oauth_token("t0k3n"),
            )
        })
        .await
        .unwrap();

        assert_eq!(response.text(), r#"{"status":"queued"}"#);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_admin_get_puts_params_in_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1_1/demo/resources/image"))
            .and(query_param("max_results", "10"))
            .and(query_param("type", "upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resources": []})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let params: Params = HashMap::from([
            ("max_results".to_string(), json!(10)),
            ("type".to_string(), json!("upload")),
        ]);
        let response = blocking(move || {
            client_for(uri).call_api(
                HttpMethod::GET,
                &["resources", "image"],
                params,
                CallOptions::new(),
            )
        })
        .await
        .unwrap();

        assert_eq!(response.json::<Value>().unwrap(), json!({"resources": []}));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_error_status_surfaces_as_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/demo/cache_invalidate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let urls: Vec<String> = (0..45).map(|i| format!("https://example.com/{}.jpg", i)).collect();
        let err = blocking(move || {
            media_optimizer::invalidate(&client_for(uri), &urls, CallOptions::new())
        })
        .await
        .unwrap_err();

        // expect(1) on the mock checks the remaining batches were never sent
        assert_eq!(
            err.transport_error(),
            Some(&TransportError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_invalidate_sends_one_request_per_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/demo/cache_invalidate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(2)
            .mount(&server)
            .await;

        let uri = server.uri();
        let urls: Vec<String> = (0..25).map(|i| format!("https://example.com/{}.jpg", i)).collect();
        let expected = urls.clone();
        let responses = blocking(move || {
            media_optimizer::invalidate(&client_for(uri), &urls, CallOptions::new())
        })
        .await
        .unwrap();
        assert_eq!(responses.len(), 2);

        let received = server.received_requests().await.unwrap();
        let bodies: Vec<Value> = received
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect();
        assert_eq!(bodies[0], json!({"urls": &expected[..20]}));
        assert_eq!(bodies[1], json!({"urls": &expected[20..]}));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_slow_response_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/demo/ping"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = blocking(move || {
            media_optimizer::ping(
                &client_for(uri),
                CallOptions::new().transport_option("timeout", 0.1),
            )
        })
        .await
        .unwrap_err();

        assert!(err.is_transport_error());
        assert!(
            matches!(err.transport_error(), Some(TransportError::Timeout(_))),
            "expected timeout, got {:?}",
            err
        );
    }
}

//! Dispatch through the public client API

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{RecordingTransport, test_config};
    use cloudinary_dispatch::{
        ApiClient, ApiSurface, CallOptions, Config, Error, HttpMethod, Params,
    };
    use serde_json::json;

    // ==================== URL shape ====================

    #[test]
    fn test_admin_and_media_optimizer_urls() {
        let config = Config::builder()
            .cloud_name("C")
            .api_credentials("key", "secret")
            .upload_prefix("P")
            .api_version("V")
            .build();
        let client = ApiClient::new(config, RecordingTransport::new());

        assert_ok!(client.call_api(HttpMethod::GET, &["a", "b"], Params::new(), CallOptions::new()));
        assert_ok!(client.call_api(
            HttpMethod::GET,
            &["a", "b"],
            Params::new(),
            CallOptions::new().surface(ApiSurface::MediaOptimizer),
        ));

        let urls: Vec<String> = client.transport().requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["P/V/C/a/b", "P/C/a/b"]);
    }

    // ==================== Validation ordering ====================

    #[test]
    fn test_missing_cloud_name_reported_before_credentials() {
        let client = ApiClient::new(Config::default(), RecordingTransport::new());

        let err = client
            .call_api(HttpMethod::GET, &["ping"], Params::new(), CallOptions::new())
            .unwrap_err();

        assert!(matches!(err, Error::MissingCloudName));
        assert_eq!(client.transport().call_count(), 0);
    }

    #[test]
    fn test_credential_failures_never_reach_transport() {
        let config = Config::builder().cloud_name("demo").build();
        let client = ApiClient::new(config, RecordingTransport::new());

        let no_key = client.call_json_api(HttpMethod::POST, &["tags"], &json!({}), CallOptions::new());
        let no_secret = client.call_json_api(
            HttpMethod::POST,
            &["tags"],
            &json!({}),
            CallOptions::new().api_key("k"),
        );

        assert!(matches!(no_key, Err(Error::MissingApiKey)));
        assert!(matches!(no_secret, Err(Error::MissingApiSecret)));
        assert_eq!(client.transport().call_count(), 0);
    }

    #[test]
    fn test_oauth_token_without_key_or_secret() {
        let config = Config::builder().cloud_name("demo").oauth_token("t").build();
        let client = ApiClient::new(config, RecordingTransport::new());

        assert_ok!(client.call_api(HttpMethod::GET, &["ping"], Params::new(), CallOptions::new()));

        let request = &client.transport().requests()[0];
        assert_eq!(request.auth.oauth_token.as_deref(), Some("t"));
        assert_eq!(request.auth.key, None);
    }

    // ==================== JSON helpers ====================

    #[test]
    fn test_json_call_keeps_caller_headers() {
        let client = ApiClient::new(test_config(), RecordingTransport::new());

        assert_ok!(client.call_json_api(
            HttpMethod::POST,
            &["cache_warm_up"],
            &json!({"url": "x"}),
            CallOptions::new().header("X-Custom", "1").media_optimizer(),
        ));

        let request = &client.transport().requests()[0];
        assert_eq!(request.body.as_deref(), Some(&br#"{"url":"x"}"#[..]));
        assert_eq!(request.headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(request.headers.get("X-Custom").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_metadata_call_prefixes_segments() {
        let client = ApiClient::new(test_config(), RecordingTransport::new());

        assert_ok!(client.call_metadata_api(
            HttpMethod::DELETE,
            &["123"],
            &json!({}),
            CallOptions::new(),
        ));

        let request = &client.transport().requests()[0];
        assert_eq!(request.method, HttpMethod::DELETE);
        assert_eq!(
            request.url,
            "https://api.cloudinary.com/v1_1/demo/metadata_fields/123"
        );
    }

    #[test]
    fn test_transport_error_is_not_translated() {
        let client = ApiClient::new(test_config(), RecordingTransport::failing_on(1));

        let err = client
            .call_api(HttpMethod::GET, &["resources"], Params::new(), CallOptions::new())
            .unwrap_err();

        assert!(err.is_transport_error());
        assert_eq!(err.transport_error(), Some(&RecordingTransport::failure_for(1)));
    }
}

//! End-to-end tests of the request pipeline against a recording transport
//! and armed fixtures.

mod common;

use common::{json_response, recording_client};
use github_rest::{ConfigurationUpdate, Fixture, RequestOptions, DEFAULT_MEDIA_TYPE};
use pretty_assertions::assert_eq;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde_json::{json, Value};

#[test]
fn get_builds_query_and_default_headers() {
    let (client, recorder) = recording_client();

    client
        .request()
        .get("meta", RequestOptions::new().set("page", 2))
        .unwrap();

    let request = recorder.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url.as_str(), "https://api.github.com/meta?page=2");
    assert_eq!(request.headers.get(ACCEPT).unwrap(), DEFAULT_MEDIA_TYPE);
    assert_eq!(request.headers.get(USER_AGENT).unwrap(), "github-rest/0.1.0");
    assert!(request.body.is_none());
}

#[test]
fn leading_slash_is_trimmed() {
    let (client, recorder) = recording_client();

    client.request().get("/meta", RequestOptions::new()).unwrap();

    assert_eq!(
        recorder.last_request().url.as_str(),
        "https://api.github.com/meta"
    );
}

#[test]
fn endpoint_option_overrides_base() {
    let (client, recorder) = recording_client();

    client
        .request()
        .get(
            "meta",
            RequestOptions::new().set("endpoint", "https://ghe.example.com/api/v3"),
        )
        .unwrap();

    assert_eq!(
        recorder.last_request().url.as_str(),
        "https://ghe.example.com/api/v3/meta"
    );
}

#[test]
fn request_host_replaces_host_only() {
    let (client, recorder) = recording_client();
    client.configure(ConfigurationUpdate::new().request_host("garage.github.dev"));

    client.request().get("meta", RequestOptions::new()).unwrap();

    assert_eq!(
        recorder.last_request().url.as_str(),
        "https://garage.github.dev/meta"
    );
}

#[test]
fn token_header_wins_over_basic_credentials() {
    let (client, recorder) = recording_client();
    client.configure(
        ConfigurationUpdate::new()
            .login("octocat")
            .password("secret")
            .oauth_token("tok123"),
    );

    client.request().get("user", RequestOptions::new()).unwrap();

    let request = recorder.last_request();
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "token tok123");
    assert!(request.basic_auth.is_none());
}

#[test]
fn basic_credentials_attach_without_token() {
    let (client, recorder) = recording_client();
    client.configure(ConfigurationUpdate::new().login("octocat").password("secret"));

    client.request().get("user", RequestOptions::new()).unwrap();

    let request = recorder.last_request();
    assert!(request.headers.get(AUTHORIZATION).is_none());
    assert_eq!(request.basic_auth.as_ref().unwrap().login, "octocat");
}

#[test]
fn access_token_option_beats_configured_token() {
    let (client, recorder) = recording_client();
    client.configure(ConfigurationUpdate::new().oauth_token("configured"));

    client
        .request()
        .get("user", RequestOptions::new().set("access_token", "per-call"))
        .unwrap();

    assert_eq!(
        recorder.last_request().headers.get(AUTHORIZATION).unwrap(),
        "token per-call"
    );
}

#[test]
fn anonymous_calls_carry_rate_limit_params() {
    let (client, recorder) = recording_client();
    client.configure(
        ConfigurationUpdate::new()
            .client_id("abc123")
            .client_secret("shhh"),
    );

    client.request().get("meta", RequestOptions::new()).unwrap();

    let url = recorder.last_request().url;
    assert_eq!(url.query(), Some("client_id=abc123&client_secret=shhh"));
}

#[test]
fn authenticated_calls_skip_rate_limit_params() {
    let (client, recorder) = recording_client();
    client.configure(
        ConfigurationUpdate::new()
            .client_id("abc123")
            .client_secret("shhh")
            .oauth_token("tok123"),
    );

    client.request().get("meta", RequestOptions::new()).unwrap();

    assert_eq!(recorder.last_request().url.query(), None);
}

#[test]
fn write_verb_serializes_remaining_options_as_json() {
    let (client, recorder) = recording_client();

    client
        .request()
        .post(
            "repos/octocat/Hello-World/issues",
            RequestOptions::new().set("title", "bug").set("labels", json!(["a"])),
        )
        .unwrap();

    let request = recorder.last_request();
    assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");

    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"title": "bug", "labels": ["a"]}));
}

#[test]
fn force_urlencoded_changes_content_type_not_body() {
    let (client, recorder) = recording_client();

    client
        .request()
        .post(
            "markdown",
            RequestOptions::new()
                .set("force_urlencoded", true)
                .set("text", "hello"),
        )
        .unwrap();

    let request = recorder.last_request();
    assert_eq!(
        request.headers.get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded"
    );

    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"text": "hello"}));
}

#[test]
fn reserved_keys_never_reach_the_wire() {
    let (client, recorder) = recording_client();

    client
        .request()
        .get(
            "meta",
            RequestOptions::new()
                .set("authenticate", true)
                .set("raw", false)
                .set("page", 2),
        )
        .unwrap();

    assert_eq!(recorder.last_request().url.query(), Some("page=2"));
}

#[test]
fn fixture_answers_one_call_then_clears() {
    let (client, recorder) = recording_client();
    client.set_fixture(Fixture::new().json_body(&json!({"ok": true})).unwrap());

    let first = client.request().get("meta", RequestOptions::new()).unwrap();
    assert_eq!(first["ok"], true);
    assert_eq!(recorder.request_count(), 0);

    client.request().get("meta", RequestOptions::new()).unwrap();
    assert_eq!(recorder.request_count(), 1);
}

#[test]
fn boolean_from_response_is_true_on_204() {
    let (client, _recorder) = recording_client();
    client.set_fixture(Fixture::new().status(204));

    let merged = client
        .request()
        .boolean_from_response(Method::GET, "repos/o/r/pulls/1/merge", RequestOptions::new())
        .unwrap();
    assert!(merged);
}

#[test]
fn boolean_from_response_is_false_on_404() {
    let (client, _recorder) = recording_client();
    client.set_fixture(
        Fixture::new()
            .status(404)
            .json_body(&json!({"message": "Not Found"}))
            .unwrap(),
    );

    let merged = client
        .request()
        .boolean_from_response(Method::GET, "repos/o/r/pulls/1/merge", RequestOptions::new())
        .unwrap();
    assert!(!merged);
}

#[test]
fn boolean_from_response_propagates_server_errors() {
    let (client, _recorder) = recording_client();
    client.set_fixture(Fixture::new().status(500).body("oops"));

    let result = client.request().boolean_from_response(
        Method::PUT,
        "user/following/octocat",
        RequestOptions::new(),
    );

    let error = result.unwrap_err();
    assert_eq!(
        error.http_kind(),
        Some(github_rest::HttpErrorKind::InternalServerError)
    );
}

#[test]
fn boolean_from_response_is_false_on_200() {
    let (client, _recorder) = recording_client();
    client.set_fixture(Fixture::new().json_body(&json!({"ok": true})).unwrap());

    let result = client
        .request()
        .boolean_from_response(Method::GET, "user/following/octocat", RequestOptions::new())
        .unwrap();
    assert!(!result);
}

#[test]
fn error_display_carries_method_url_status_and_detail() {
    let (client, recorder) = recording_client();
    recorder.queue(json_response(
        422,
        r#"{"message":"Validation Failed","errors":[{"message":"name is too short"}]}"#,
    ));

    let error = client
        .request()
        .post("user/repos", RequestOptions::new().set("name", "x"))
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "POST https://api.github.com/user/repos: 422: Validation Failed"
    );
}

#[test]
fn error_detail_falls_back_to_errors_array() {
    let (client, recorder) = recording_client();
    recorder.queue(json_response(
        422,
        r#"{"errors":[{"message":"too long"},{"message":"bad color"}]}"#,
    ));

    let error = client
        .request()
        .post("repos/o/r/labels", RequestOptions::new())
        .unwrap_err();

    assert!(error.to_string().ends_with("422: too long, bad color"));
}

#[test]
fn unclassified_status_is_not_an_error() {
    let (client, recorder) = recording_client();
    recorder.queue(json_response(418, r#"{"teapot":true}"#));

    let value = client.request().get("meta", RequestOptions::new()).unwrap();
    assert_eq!(value["teapot"], true);
}

#[test]
fn raw_option_skips_decoding() {
    let (client, recorder) = recording_client();
    recorder.queue(json_response(200, r#"{"a":1}"#));

    let value = client
        .request()
        .get("meta", RequestOptions::new().set("raw", true))
        .unwrap();

    assert_eq!(value, Value::String(r#"{"a":1}"#.to_string()));
}

#[test]
fn non_json_body_comes_back_as_string() {
    let (client, recorder) = recording_client();
    recorder.queue(github_rest::WireResponse::new(
        200,
        vec![("Content-Type".to_string(), "text/plain".to_string())],
        "MMM.           .MMM",
    ));

    let value = client
        .meta()
        .octocat(None, RequestOptions::new())
        .unwrap();
    assert_eq!(value, Value::String("MMM.           .MMM".to_string()));
}

#[test]
fn fetch_meta_parses_json_object() {
    let (client, _recorder) = recording_client();
    client.set_fixture(
        Fixture::new()
            .json_body(&json!({"git": ["127.0.0.1/32"]}))
            .unwrap(),
    );

    let meta = client.request().get("meta", RequestOptions::new()).unwrap();
    assert_eq!(meta["git"][0], "127.0.0.1/32");
}

#[test]
fn add_email_with_basic_auth_decodes_created_list() {
    let (client, _recorder) = recording_client();
    client.configure(ConfigurationUpdate::new().login("x").password("y"));
    client.set_fixture(
        Fixture::new()
            .status(201)
            .json_body(&json!(["a@b.com"]))
            .unwrap(),
    );

    let emails = client
        .users()
        .add_email("a@b.com", RequestOptions::new())
        .unwrap();
    assert_eq!(emails, json!(["a@b.com"]));
}

#[test]
fn unstar_gist_returns_true_on_204() {
    let (client, _recorder) = recording_client();
    client.set_fixture(Fixture::new().status(204));

    assert!(client.gists().unstar("1", RequestOptions::new()).unwrap());
}

#[test]
fn org_membership_miss_is_false() {
    let (client, recorder) = recording_client();
    recorder.queue(json_response(404, r#"{"message":"Not Found"}"#));

    let member = client
        .organizations()
        .is_member("octo-org", "octocat", RequestOptions::new())
        .unwrap();

    assert!(!member);
    assert_eq!(
        recorder.last_request().url.path(),
        "/orgs/octo-org/members/octocat"
    );
}

#[test]
fn rate_limit_reads_response_headers() {
    let (client, recorder) = recording_client();
    recorder.queue(github_rest::WireResponse::new(
        200,
        vec![
            ("X-RateLimit-Limit".to_string(), "5000".to_string()),
            ("X-RateLimit-Remaining".to_string(), "4999".to_string()),
        ],
        "{}",
    ));

    let limit = client.meta().rate_limit(RequestOptions::new()).unwrap();
    assert_eq!(limit, 5000);
    assert_eq!(recorder.last_request().url.path(), "/rate_limit");
}

#[test]
fn markdown_render_overrides_accept_header() {
    let (client, recorder) = recording_client();
    recorder.queue(github_rest::WireResponse::new(
        200,
        vec![("Content-Type".to_string(), "text/html".to_string())],
        "<p>hello</p>",
    ));

    let html = client
        .markdown()
        .render("hello", RequestOptions::new())
        .unwrap();

    assert_eq!(html, Value::String("<p>hello</p>".to_string()));

    let request = recorder.last_request();
    assert_eq!(
        request.headers.get(ACCEPT).unwrap(),
        "application/vnd.github.raw"
    );
    assert_eq!(request.url.path(), "/markdown");
}

#[test]
fn configured_user_agent_is_sent() {
    let (client, recorder) = recording_client();
    client.configure(ConfigurationUpdate::new().user_agent("my-agent/2.0"));

    client.request().get("meta", RequestOptions::new()).unwrap();

    assert_eq!(
        recorder.last_request().headers.get(USER_AGENT).unwrap(),
        "my-agent/2.0"
    );
}

#[test]
fn proxy_option_reaches_the_transport() {
    let (client, recorder) = recording_client();
    client.configure(ConfigurationUpdate::new().proxy("http://localhost:8080"));

    client.request().get("meta", RequestOptions::new()).unwrap();

    assert_eq!(
        recorder.last_request().proxy.as_deref(),
        Some("http://localhost:8080")
    );
}

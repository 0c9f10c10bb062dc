//! Integration tests for the REST client against a local mock server

use spore_rest_client::{AssetId, Error, Page, RestClient, Username};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stats>
  <totalUploads>190919233</totalUploads>
  <dailyUploads>102340</dailyUploads>
  <totalUsers>2305192</totalUsers>
  <dailyUsers>10234</dailyUsers>
</stats>"#;

fn client_for(server: &MockServer) -> RestClient {
    RestClient::new()
        .expect("client construction")
        .with_base_url(server.uri())
}

#[tokio::test]
async fn stats_returns_normalized_tree_without_declaration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATS_XML))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client_for(&server).stats().await.unwrap();

    assert!(stats.get("_declaration").is_none());
    assert_eq!(stats["stats"]["totalUploads"]["_text"], "190919233");
    assert_eq!(stats["stats"]["dailyUsers"]["_text"], "10234");
}

#[tokio::test]
async fn omitted_pagination_defaults_to_zero_and_hundred() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/user/MaxisWill/0/100"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<assets/>"))
        .expect(1)
        .mount(&server)
        .await;

    let username = Username::new("MaxisWill").unwrap();
    let assets = client_for(&server)
        .user_assets(&username, Page::default())
        .await
        .unwrap();
    assert!(assets.get("assets").is_some());
}

#[tokio::test]
async fn explicit_pagination_is_embedded_positionally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/buddies/MaxisWill/5/20"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<buddies/>"))
        .expect(1)
        .mount(&server)
        .await;

    let username = Username::new("MaxisWill").unwrap();
    client_for(&server)
        .user_buddies(&username, Page::new(5, 20))
        .await
        .unwrap();
}

#[tokio::test]
async fn not_found_classifies_with_status_and_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/nobody"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let username = Username::new("nobody").unwrap();
    let err = client_for(&server).user(&username).await.unwrap_err();

    match &err {
        Error::RequestFailed { status, url } => {
            assert_eq!(*status, Some(404));
            assert_eq!(*url, format!("{}/user/nobody", server.uri()));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("/user/nobody"));
}

#[tokio::test]
async fn unreachable_host_classifies_without_status() {
    // Nothing listens on this port.
    let client = RestClient::new()
        .unwrap()
        .with_base_url("http://127.0.0.1:9");

    let err = client.stats().await.unwrap_err();
    match &err {
        Error::RequestFailed { status, url } => {
            assert_eq!(*status, None);
            assert_eq!(url, "http://127.0.0.1:9/stats");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert!(err.to_string().contains("unknown"));
}

#[tokio::test]
async fn malformed_xml_body_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<stats><broken></stats>"))
        .mount(&server)
        .await;

    let err = client_for(&server).stats().await.unwrap_err();
    assert!(matches!(err, Error::Xml(_)));
}

#[tokio::test]
async fn concurrent_calls_do_not_interfere() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/creature/500327625531"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<creature height="1.2"/>"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/asset/500999999999"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<asset name="walker"/>"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let creature = AssetId::new("500327625531").unwrap();
    let asset = AssetId::new("500999999999").unwrap();

    let (creature_stats, asset_detail) =
        tokio::join!(client.creature_stats(&creature), client.asset(&asset));

    let creature_stats = creature_stats.unwrap();
    let asset_detail = asset_detail.unwrap();
    assert_eq!(creature_stats["creature"]["_attributes"]["height"], "1.2");
    assert_eq!(asset_detail["asset"]["_attributes"]["name"], "walker");
}

#[tokio::test]
async fn raw_get_accepts_paths_with_or_without_leading_slash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sporecasts/MaxisWill"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<sporecasts/>"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get("/sporecasts/MaxisWill").await.unwrap();
    client.get("sporecasts/MaxisWill").await.unwrap();
}

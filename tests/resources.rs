//! Resource wrappers against a mock API.

use std::time::Duration;

use natiq_client::resources::auth::{LoginRequest, RegisterRequest};
use natiq_client::resources::surahs::SurahListParams;
use natiq_client::resources::takhtits::{BreakerKind, NewAyahBreaker};
use natiq_client::resources::{ListParams, Status, UploadFile};
use natiq_client::{ApiClient, ClientConfig, ClientError, Selection};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::with_endpoints([server.uri()])).unwrap()
}

#[tokio::test]
async fn test_surah_list_sends_filters_and_decodes_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surahs/"))
        .and(query_param("mushaf", "hafs"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 114,
            "next": "http://api/surahs/?limit=2&offset=2",
            "previous": null,
            "results": [{"number": 1}, {"number": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut params = SurahListParams::new("hafs");
    params.page.limit = Some(2);

    let page = client.surahs().list(&params).await.unwrap();
    assert_eq!(page.count, 114);
    assert!(page.has_next());
    assert_eq!(page.results[1]["number"], 2);
}

#[tokio::test]
async fn test_mushafs_decode_typed_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mushafs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "m1", "name": "Hafs an Asim", "short_name": "hafs", "status": "published"}
        ])))
        .mount(&server)
        .await;

    let mushafs = client_for(&server)
        .mushafs()
        .list(&ListParams::default())
        .await
        .unwrap();
    assert_eq!(mushafs.len(), 1);
    assert_eq!(mushafs[0].short_name, "hafs");
    assert_eq!(mushafs[0].status, Some(Status::Published));
}

#[tokio::test]
async fn test_login_then_authenticated_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({"username": "zayd", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc123",
            "expiry": "2026-12-01T00:00:00Z",
            "user": {"username": "zayd"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile/me/"))
        .and(header("Authorization", "Token abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "zayd"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = client
        .auth()
        .login(&LoginRequest {
            username: "zayd".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "abc123");

    let authed = client.with_token(&session.token).unwrap();
    let profile = authed.profile().me().await.unwrap();
    assert_eq!(profile.username, "zayd");
    assert_eq!(profile.email, None);
}

#[tokio::test]
async fn test_register_omits_unset_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .and(body_json(json!({
            "username": "maryam",
            "email": "m@example.com",
            "password": "pw",
            "password2": "pw"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "t", "user": {}})))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .auth()
        .register(&RegisterRequest {
            username: "maryam".into(),
            email: "m@example.com".into(),
            password: "pw".into(),
            password2: "pw".into(),
            ..RegisterRequest::default()
        })
        .await
        .unwrap();
    assert_eq!(response.token, "t");
}

#[tokio::test]
async fn test_logout_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).auth().logout().await.unwrap();
}

#[tokio::test]
async fn test_delete_and_partial_update_hit_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ayahs/a1/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/words/w1/"))
        .and(body_json(json!({"text": "بِسْمِ"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "w1", "text": "بِسْمِ"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.ayahs().delete("a1").await.unwrap();
    let word = client
        .words()
        .partial_update("w1", &json!({"text": "بِسْمِ"}))
        .await
        .unwrap();
    assert_eq!(word["uuid"], "w1");
}

#[tokio::test]
async fn test_error_envelope_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surahs/missing/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_name": "NotFound",
            "error": "not found",
            "detail": "No Surah matches the given query."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).surahs().retrieve("missing").await.unwrap_err();
    match err {
        ClientError::Api { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body.unwrap().detail, "No Surah matches the given query.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_sub_resources_build_nested_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/takhtits/t1/ayahs_breakers/"))
        .and(body_json(json!({"ayah_uuid": "a9", "type": "juz"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"uuid": "b1", "type": "juz"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/translations/tr1/ayahs/a1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "In the name"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notifications/opened/"))
        .and(query_param("uuid", "n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let breaker = client
        .takhtits()
        .create_ayahs_breaker(
            "t1",
            &NewAyahBreaker {
                ayah_uuid: "a9".into(),
                kind: BreakerKind::Juz,
            },
        )
        .await
        .unwrap();
    assert_eq!(breaker["uuid"], "b1");

    let ayah = client.translations().ayah("tr1", "a1").await.unwrap();
    assert_eq!(ayah["text"], "In the name");
    client.notifications().opened("n1").await.unwrap();
}

const MULTIPART: &str = "^multipart/form-data; boundary=";

#[tokio::test]
async fn test_imports_send_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mushafs/import/"))
        .and(header_regex("content-type", MULTIPART))
        .and(body_string_contains(r#"name="file"; filename="hafs.json""#))
        .and(body_string_contains(r#"{"surahs":[]}"#))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "detail": "Mushaf import started. You will be notified when it is complete."
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/translations/import/"))
        .and(header_regex("content-type", MULTIPART))
        .and(body_string_contains(r#"name="file"; filename="fa.json""#))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"detail": "started"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/takhtits/t1/import/"))
        .and(query_param("type", "juz"))
        .and(header_regex("content-type", MULTIPART))
        .and(body_string_contains(r#"name="file"; filename="juz.json""#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"created": 30})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/"))
        .and(query_param("subject", "avatar"))
        .and(header_regex("content-type", MULTIPART))
        .and(body_string_contains(r#"name="file"; filename="me.png""#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"uuid": "f1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ack = client
        .mushafs()
        .import(UploadFile::new("hafs.json", br#"{"surahs":[]}"#.to_vec()))
        .await
        .unwrap();
    assert!(ack["detail"].as_str().unwrap().starts_with("Mushaf import started"));

    client
        .translations()
        .import(UploadFile::new("fa.json", b"[]".to_vec()))
        .await
        .unwrap();

    let imported = client
        .takhtits()
        .import("t1", UploadFile::new("juz.json", b"[]".to_vec()), Some(BreakerKind::Juz))
        .await
        .unwrap();
    assert_eq!(imported["created"], 30);

    let uploaded = client
        .upload()
        .create(&[("subject", "avatar")], UploadFile::new("me.png", vec![0x89, b'P', b'N', b'G']))
        .await
        .unwrap();
    assert_eq!(uploaded["uuid"], "f1");
}

#[tokio::test]
async fn test_recitation_upload_sends_audio_and_word_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recitations/r1/upload/s1/"))
        .and(header_regex("content-type", MULTIPART))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"surah_uuid": "s1"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let timestamps = vec![json!({"start": 0, "end": 420})];
    client
        .recitations()
        .upload("r1", "s1", UploadFile::new("001.mp3", b"ID3".to_vec()), Some(timestamps.as_slice()))
        .await
        .unwrap();
    client
        .recitations()
        .upload("r1", "s1", UploadFile::new("001.mp3", b"ID3".to_vec()), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let with_timestamps = String::from_utf8_lossy(&requests[0].body);
    assert!(with_timestamps.contains(r#"name="file"; filename="001.mp3""#));
    assert!(with_timestamps.contains(r#"name="word_timestamps""#));
    assert!(with_timestamps.contains(r#"[{"end":420,"start":0}]"#));

    let without = String::from_utf8_lossy(&requests[1].body);
    assert!(without.contains(r#"name="file"; filename="001.mp3""#));
    assert!(!without.contains("word_timestamps"));
}

#[tokio::test]
async fn test_phrase_modify_accepts_plain_text_ack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/phrases/modify/"))
        .and(query_param("language", "fa"))
        .and(body_json(json!({"phrases": {"hello": "سلام"}})))
        .respond_with(ResponseTemplate::new(200).set_body_string("Done"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .phrases()
        .modify("fa", &json!({"phrases": {"hello": "سلام"}}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_phrase_modify_still_reports_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/phrases/modify/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "detail": "You do not have permission to perform this action."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .phrases()
        .modify("fa", &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
}

#[tokio::test]
async fn test_delete_ignores_non_json_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/words/w1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).words().delete("w1").await.unwrap();
}

#[tokio::test]
async fn test_selection_prefers_faster_server() {
    let slow = MockServer::start().await;
    let fast = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
        .mount(&slow)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&fast)
        .await;
    Mock::given(method("GET"))
        .and(path("/upload/subjects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["avatar"])))
        .expect(1)
        .mount(&fast)
        .await;

    let client = ApiClient::new(&ClientConfig::with_endpoints([slow.uri(), fast.uri()])).unwrap();
    let selection = client.refresh_endpoint().await;
    assert!(matches!(selection, Selection::Switched { .. }));

    let subjects = client.upload().subjects().await.unwrap();
    assert_eq!(subjects, vec![json!("avatar")]);
}

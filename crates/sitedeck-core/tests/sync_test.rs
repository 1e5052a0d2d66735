// End-to-end thunk tests: wiremock server → ApiClient → SyncService →
// store snapshots.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use sitedeck_api::{AddUserEnvironmentVariableRequest, ApiClient, BuildState, InviteRequest};
use sitedeck_core::store::state::AlertStatus;
use sitedeck_core::{Store, SyncService};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> SyncService {
    let api = ApiClient::new(&server.uri(), Duration::from_secs(5))
        .expect("client should build against mock server");
    SyncService::new(api, Arc::new(Store::new()))
}

fn site_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "owner": "octocat",
        "repository": format!("site-{id}"),
        "engine": "hugo",
        "defaultBranch": "main",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn successful_fetch_settles_the_slice_with_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([site_json(1), site_json(2)])))
        .mount(&server)
        .await;

    let svc = service(&server);
    svc.fetch_sites().await.expect("fetch should succeed");

    let state = svc.store().state();
    assert!(!state.sites.is_loading);
    assert_eq!(state.sites.data.len(), 2);
    assert_eq!(state.alert, None);
}

#[tokio::test]
async fn failed_fetch_settles_loading_and_raises_an_alert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/site"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "upstream down"})))
        .mount(&server)
        .await;

    let svc = service(&server);
    let err = svc.fetch_sites().await.expect_err("fetch should fail");
    assert_eq!(err.user_message(), "upstream down");

    let state = svc.store().state();
    assert!(!state.sites.is_loading);
    assert!(state.sites.data.is_empty());

    let alert = state.alert.as_ref().expect("alert should be raised");
    assert_eq!(alert.message, "upstream down");
    assert_eq!(alert.status, AlertStatus::Error);
}

#[tokio::test]
async fn inline_failure_skips_the_alert_banner() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/site/1/user-environment-variable"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "name in use"})))
        .mount(&server)
        .await;

    let svc = service(&server);
    let body = AddUserEnvironmentVariableRequest {
        name: "API_KEY".into(),
        value: "shhh".into(),
    };
    let err = svc
        .add_user_environment_variable(1, &body)
        .await
        .expect_err("create should fail");

    // The form renders the message; the banner stays down.
    assert_eq!(err.user_message(), "name in use");
    assert_eq!(svc.store().state().alert, None);
}

#[tokio::test]
async fn keyed_failure_only_settles_existing_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/site/7/domains"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let svc = service(&server);
    svc.fetch_domains(7).await.expect_err("fetch should fail");

    let state = svc.store().state();
    // FetchStarted created the entry; the error settled it.
    let entry = state.domains.get(&7).expect("entry should exist");
    assert!(!entry.is_loading);
    assert!(entry.data.is_empty());
    // No other slice grew an entry for key 7.
    assert!(!state.user_environment_variables.contains_key(&7));
}

#[tokio::test]
async fn build_log_chunks_accumulate_across_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/build/10/log/offset/0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "processing",
            "offset": 0,
            "output": ["cloning", "building"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0/build/10/log/offset/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "success",
            "offset": 2,
            "output": ["published"]
        })))
        .mount(&server)
        .await;

    let svc = service(&server);
    svc.fetch_build_log(10).await.expect("first chunk");
    svc.fetch_build_log(10).await.expect("second chunk");

    let state = svc.store().state();
    let log = &state.build_logs[&10].data;
    assert_eq!(log.lines, vec!["cloning", "building", "published"]);
    assert_eq!(log.offset, 3);
    assert_eq!(log.state, Some(BuildState::Success));
}

#[tokio::test]
async fn basic_auth_not_found_settles_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/site/3/basic-auth"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let svc = service(&server);
    svc.fetch_basic_auth(3).await.expect("404 is not a failure");

    let state = svc.store().state();
    let entry = &state.basic_auth[&3];
    assert!(!entry.is_loading);
    assert_eq!(entry.data, None);
    assert_eq!(state.alert, None);
}

#[tokio::test]
async fn inviting_an_existing_user_lands_in_the_membership_slice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/organization/4/invite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "member": {
                "user": { "id": 9, "username": "jdoe" },
                "role": { "id": 2, "name": "user" }
            }
        })))
        .mount(&server)
        .await;

    let svc = service(&server);
    let result = svc
        .invite_to_organization(
            4,
            &InviteRequest {
                email: "jdoe@example.gov".into(),
                role_id: 2,
            },
        )
        .await
        .expect("invite should succeed");
    assert!(result.invite.is_none());

    // The member shows up without a members refetch.
    let state = svc.store().state();
    let members = &state.members[&4].data;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user.username, "jdoe");
    assert_eq!(state.notifications[0].title, "Member added");
}

#[tokio::test]
async fn delete_site_removes_the_row_and_emits_a_toast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([site_json(1)])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v0/site/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let svc = service(&server);
    svc.fetch_sites().await.expect("fetch should succeed");
    svc.delete_site(1).await.expect("delete should succeed");

    let state = svc.store().state();
    assert!(state.sites.data.is_empty());
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].title, "Site deleted");
}

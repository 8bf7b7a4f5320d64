//! Integration tests for the login/registration flow using wiremock mock server

use eco_client::{
    CredentialClient, CredentialFlow, CredentialForm, FlowOutcome, FormMode, LOGIN_PATH,
    REGISTER_PATH,
};
use eco_core::{ErrorKind, Role, SessionStore, SharedSession, ViewKind};
use eco_store::{LocalStore, TOKEN_KEY, USERNAME_KEY};

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mount_login(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn flow_for(server: &MockServer) -> (CredentialFlow, SharedSession) {
    let session = SessionStore::default().shared();
    let client = CredentialClient::new(&server.uri(), None).unwrap();
    (CredentialFlow::new(client, session.clone()), session)
}

#[tokio::test]
async fn test_login_creates_session_with_chosen_role() {
    let server = MockServer::start().await;
    mount_login(&server, json!({ "status": "ok", "token": "tok-1" })).await;
    let (flow, session) = flow_for(&server);

    let mut form = CredentialForm::login("zavod", "secret", Role::Factory);
    let outcome = flow.submit(&mut form, None).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Authenticated(ViewKind::FactoryView));
    let session = session.read().await;
    let identity = session.current_identity().unwrap();
    assert_eq!(identity.display_name(), "zavod");
    assert_eq!(identity.role(), Role::Factory);
    assert_eq!(identity.balance(), 53_546_000);
    assert!(form.error.is_none());
    assert!(form.password.is_empty());
}

#[tokio::test]
async fn test_login_stores_token_and_username() {
    let server = MockServer::start().await;
    mount_login(&server, json!({ "status": "ok", "token": "tok-2" })).await;
    let (flow, _session) = flow_for(&server);
    let dir = TempDir::new().unwrap();
    let mut store = LocalStore::open(dir.path()).unwrap();

    let mut form = CredentialForm::login("ali", "secret", Role::EndUser);
    flow.submit(&mut form, Some(&mut store)).await.unwrap();

    assert_eq!(store.get(TOKEN_KEY), Some("tok-2"));
    assert_eq!(store.get(USERNAME_KEY), Some("ali"));

    let reopened = LocalStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get(TOKEN_KEY), Some("tok-2"));
}

#[tokio::test]
async fn test_rejected_login_sets_form_error_and_leaves_no_session() {
    let server = MockServer::start().await;
    mount_login(&server, json!({ "status": "error" })).await;
    let (flow, session) = flow_for(&server);

    let mut form = CredentialForm::login("ali", "wrong", Role::EndUser);
    let err = flow.submit(&mut form, None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteFailure);
    assert_eq!(form.error.as_deref(), Some("Invalid login or password"));
    assert!(session.read().await.current_identity().is_none());
}

#[tokio::test]
async fn test_rejected_login_keeps_existing_session() {
    let server = MockServer::start().await;
    mount_login(&server, json!({ "status": "error", "message": "nope" })).await;
    let (flow, session) = flow_for(&server);
    session
        .write()
        .await
        .create_session("existing", Role::CollectionPoint)
        .unwrap();

    let mut form = CredentialForm::login("other", "pw", Role::Factory);
    assert!(flow.submit(&mut form, None).await.is_err());

    let session = session.read().await;
    assert_eq!(session.current_identity().unwrap().display_name(), "existing");
}

#[tokio::test]
async fn test_missing_fields_fail_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (flow, _session) = flow_for(&server);

    let mut form = CredentialForm::login("", "secret", Role::EndUser);
    let err = flow.submit(&mut form, None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        form.error.as_deref(),
        Some("Please fill in all required fields")
    );
}

#[tokio::test]
async fn test_register_success_resets_form_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    let (flow, session) = flow_for(&server);

    let mut form =
        CredentialForm::register("ali", "secret", "Ali Valiyev", "+998901234567", "Toshkent");
    form.role = Role::Factory;
    let outcome = flow.submit(&mut form, None).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Registered { message: None });
    assert_eq!(form.mode, FormMode::Login);
    assert_eq!(form.role, Role::EndUser);
    assert!(form.login.is_empty());
    assert!(form.full_name.is_empty());
    assert!(session.read().await.current_identity().is_none());
}

#[tokio::test]
async fn test_register_failure_keeps_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Login already taken"
        })))
        .mount(&server)
        .await;
    let (flow, _session) = flow_for(&server);

    let mut form = CredentialForm::register("ali", "secret", "Ali Valiyev", "123", "Toshkent");
    assert!(flow.submit(&mut form, None).await.is_err());

    assert_eq!(form.mode, FormMode::Register);
    assert_eq!(form.login, "ali");
    assert_eq!(form.error.as_deref(), Some("Login already taken"));
}

#[tokio::test]
async fn test_successful_submit_clears_previous_error() {
    let server = MockServer::start().await;
    mount_login(&server, json!({ "status": "ok", "token": "t" })).await;
    let (flow, _session) = flow_for(&server);

    let mut form = CredentialForm::login("ali", "secret", Role::CollectionPoint);
    form.error = Some(String::from("old"));
    let outcome = flow.submit(&mut form, None).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Authenticated(ViewKind::CollectionPointView));
    assert!(form.error.is_none());
}

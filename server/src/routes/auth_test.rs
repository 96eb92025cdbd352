use std::sync::{Arc, Mutex};

use apicall::{ApiConfig, ApiError, ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::header::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};

use super::*;

// =============================================================================
// Fakes
// =============================================================================

struct OfflineTransport;

#[async_trait]
impl Transport for OfflineTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
        Err(ApiError::Network("offline".into()))
    }
}

#[derive(Default)]
struct FakeProvider {
    sign_in: Option<ProviderSession>,
    sign_up: Option<Option<ProviderSession>>,
    seen: Mutex<Vec<Credentials>>,
}

#[async_trait]
impl AuthProvider for FakeProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderSession, AuthError> {
        self.seen.lock().unwrap().push(credentials.clone());
        self.sign_in
            .clone()
            .ok_or(AuthError::Rejected { status: 400, body: "invalid_grant".into() })
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<ProviderSession>, AuthError> {
        self.seen.lock().unwrap().push(credentials.clone());
        self.sign_up
            .clone()
            .ok_or(AuthError::Rejected { status: 422, body: "user already registered".into() })
    }
}

fn state_with(provider: Option<Arc<FakeProvider>>, secure: bool) -> AppState {
    let auth = provider.map(|p| p as Arc<dyn AuthProvider>);
    AppState::new(ApiConfig::default(), Arc::new(OfflineTransport), auth, secure)
}

fn credentials() -> Credentials {
    Credentials { email: "a@b.com".into(), password: "hunter2".into() }
}

fn session(token: &str, expires_in: Option<i64>) -> ProviderSession {
    ProviderSession { access_token: token.into(), expires_in }
}

fn location(response: &Response) -> &str {
    response.headers().get(LOCATION).unwrap().to_str().unwrap()
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_owned())
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_success_sets_cookie_and_redirects_home() {
    let provider = Arc::new(FakeProvider { sign_in: Some(session("tok-1", Some(3600))), ..Default::default() });
    let state = state_with(Some(provider.clone()), false);

    let response = login(State(state), CookieJar::new(), Ok(Form(credentials()))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with("sb-access-token=tok-1"), "{cookie}");
    assert!(cookie.contains("Path=/"), "{cookie}");
    assert!(cookie.contains("SameSite=Lax"), "{cookie}");
    assert!(cookie.contains("Max-Age=3600"), "{cookie}");
    assert!(!cookie.contains("HttpOnly"), "{cookie}");
    assert!(!cookie.contains("Secure"), "{cookie}");
    assert_eq!(provider.seen.lock().unwrap().as_slice(), &[credentials()]);
}

#[tokio::test]
async fn login_cookie_marked_secure_when_configured() {
    let provider = Arc::new(FakeProvider { sign_in: Some(session("tok-1", None)), ..Default::default() });
    let state = state_with(Some(provider), true);

    let response = login(State(state), CookieJar::new(), Ok(Form(credentials()))).await;

    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.contains("Secure"), "{cookie}");
    assert!(!cookie.contains("Max-Age"), "{cookie}");
}

#[tokio::test]
async fn login_rejected_redirects_to_error() {
    let state = state_with(Some(Arc::new(FakeProvider::default())), false);

    let response = login(State(state), CookieJar::new(), Ok(Form(credentials()))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/error");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn login_without_provider_redirects_to_error() {
    let response = login(State(state_with(None, false)), CookieJar::new(), Ok(Form(credentials()))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/error");
}

async fn form_from(body: &'static str) -> Result<Form<Credentials>, FormRejection> {
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    Form::<Credentials>::from_request(request, &()).await
}

#[tokio::test]
async fn login_with_missing_password_redirects_to_error() {
    let provider = Arc::new(FakeProvider { sign_in: Some(session("tok-1", None)), ..Default::default() });
    let state = state_with(Some(provider.clone()), false);
    let form = form_from("email=a%40b.com").await;
    assert!(form.is_err());

    let response = login(State(state), CookieJar::new(), form).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/error");
    assert!(set_cookie(&response).is_none());
    assert!(provider.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn well_formed_form_reaches_provider() {
    let provider = Arc::new(FakeProvider { sign_in: Some(session("tok-1", None)), ..Default::default() });
    let state = state_with(Some(provider.clone()), false);
    let form = form_from("email=a%40b.com&password=hunter2").await;

    let response = login(State(state), CookieJar::new(), form).await;

    assert_eq!(location(&response), "/");
    assert_eq!(provider.seen.lock().unwrap().as_slice(), &[credentials()]);
}

// =============================================================================
// signup
// =============================================================================

#[tokio::test]
async fn signup_with_session_sets_cookie() {
    let provider = Arc::new(FakeProvider { sign_up: Some(Some(session("tok-2", None))), ..Default::default() });
    let state = state_with(Some(provider), false);

    let response = signup(State(state), CookieJar::new(), Ok(Form(credentials()))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).unwrap().starts_with("sb-access-token=tok-2"));
}

#[tokio::test]
async fn signup_pending_confirmation_redirects_home_without_cookie() {
    let provider = Arc::new(FakeProvider { sign_up: Some(None), ..Default::default() });
    let state = state_with(Some(provider), false);

    let response = signup(State(state), CookieJar::new(), Ok(Form(credentials()))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn signup_rejected_redirects_to_error() {
    let state = state_with(Some(Arc::new(FakeProvider::default())), false);

    let response = signup(State(state), CookieJar::new(), Ok(Form(credentials()))).await;

    assert_eq!(location(&response), "/error");
}

#[tokio::test]
async fn signup_with_missing_email_redirects_to_error() {
    let provider = Arc::new(FakeProvider { sign_up: Some(Some(session("tok-2", None))), ..Default::default() });
    let state = state_with(Some(provider.clone()), false);

    let response = signup(State(state), CookieJar::new(), form_from("password=hunter2").await).await;

    assert_eq!(location(&response), "/error");
    assert!(provider.seen.lock().unwrap().is_empty());
}

// =============================================================================
// session_cookie
// =============================================================================

#[test]
fn non_positive_expiry_is_a_session_cookie() {
    let cookie = session_cookie(session("t", Some(0)), false);
    assert_eq!(cookie.max_age(), None);
    assert_eq!(cookie.http_only(), Some(false));
}

//! Login, registration, OAuth callback, and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use super::{ActionError, ActionOutcome, ActionResult, required};
use crate::net::api::{ApiClient, decode};
use crate::net::endpoints;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, UserSummary};
use crate::routes;
use crate::state::session::Session;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterPayload<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Sign in with email and password. On success the session holds the token
/// and user id and the caller is sent home.
///
/// # Errors
///
/// `Validation` for blank fields; `Api` for rejected credentials.
pub async fn login(client: &ApiClient, form: &LoginForm) -> ActionResult<UserSummary> {
    let email = required(&form.email, "Please enter your email and password.")?;
    if form.password.is_empty() {
        return Err(ActionError::validation("Please enter your email and password."));
    }
    let body = client
        .post_json(endpoints::LOGIN, &LoginPayload { email: &email, password: &form.password })
        .await
        .map_err(credentials_rejected)?;
    Ok(start_session(client.session(), decode(body)?))
}

/// Create an account and sign in with it.
///
/// # Errors
///
/// `Validation` for blank names/email, short or mismatched passwords; `Api`
/// when the server rejects the registration.
pub async fn register(client: &ApiClient, form: &RegisterForm) -> ActionResult<UserSummary> {
    let first_name = required(&form.first_name, "First name is required.")?;
    let last_name = form.last_name.trim();
    let email = required(&form.email, "Email is required.")?;
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ActionError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    if form.password != form.confirm_password {
        return Err(ActionError::validation("Passwords do not match."));
    }
    let payload = RegisterPayload { first_name: &first_name, last_name, email: &email, password: &form.password };
    let body = client.post_json(endpoints::REGISTER, &payload).await?;
    Ok(start_session(client.session(), decode(body)?))
}

/// A 401 from the login endpoint means bad credentials, not an expired
/// session, so the server's message is shown as-is.
fn credentials_rejected(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized { body } => ApiError::Status { status: 401, body },
        other => other,
    }
}

fn start_session(session: &Session, auth: AuthResponse) -> ActionOutcome<UserSummary> {
    session.set_session(&auth.token, &auth.user.id);
    session.set_display(Some(auth.user.display_name().as_str()), auth.user.avatar.as_deref());
    leptos::logging::log!("signed in as {}", auth.user.id);
    ActionOutcome::new(auth.user)
        .affecting([endpoints::current_user()])
        .redirect_to(routes::HOME)
}

/// Query parameters the backend appends when redirecting back from OAuth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthCallback {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// Store the credential handed back by the OAuth redirect.
///
/// # Errors
///
/// `Validation` when the redirect carried no token or user id.
pub fn complete_oauth(session: &Session, callback: &OAuthCallback) -> Result<ActionOutcome<()>, ActionError> {
    let token = callback.token.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let user_id = callback.user_id.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let (Some(token), Some(user_id)) = (token, user_id) else {
        return Err(ActionError::validation("Sign-in failed. Please try again."));
    };
    session.set_session(token, user_id);
    session.set_display(callback.name.as_deref(), callback.avatar.as_deref());
    Ok(ActionOutcome::new(())
        .affecting([endpoints::current_user()])
        .redirect_to(routes::HOME))
}

/// URL that starts the OAuth flow on the backend.
pub fn oauth_start_url(client: &ApiClient) -> String {
    client.url(endpoints::OAUTH_GOOGLE)
}

/// Forget the session locally. There is no server-side logout endpoint.
pub fn logout(session: &Session) -> ActionOutcome<()> {
    session.clear();
    ActionOutcome::new(()).redirect_to(routes::LOGIN)
}

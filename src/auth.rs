use std::sync::Arc;

use axum::{
    extract::{Form, FromRequestParts, Query, State},
    http::request::Parts,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use serde::Deserialize;

use crate::{
    AppState,
    entities::{session, user},
    error::{AppError, AppResult, is_unique_violation},
    templates,
};

const SESSION_COOKIE: &str = "session";

/// The authenticated requester, resolved from the session cookie.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub is_staff: bool,
}

/// Like `CurrentUser`, but public pages get `None` instead of a redirect.
pub struct OptionalUser(pub Option<CurrentUser>);

async fn user_from_jar<C: ConnectionTrait>(
    db: &C,
    jar: &CookieJar,
) -> Result<Option<CurrentUser>, sea_orm::DbErr> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let Some(session) = session::Entity::find_by_id(cookie.value().to_string()).one(db).await?
    else {
        return Ok(None);
    };
    if session.expires_at <= crate::now_sec() {
        return Ok(None);
    }

    let Some(user) = user::Entity::find_by_id(session.user_id).one(db).await? else {
        return Ok(None);
    };

    Ok(Some(CurrentUser { id: user.id, username: user.username, is_staff: user.is_staff }))
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match user_from_jar(&state.db, &jar).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(Redirect::to("/login/").into_response()),
            Err(err) => Err(AppError::Storage(err).into_response()),
        }
    }
}

impl FromRequestParts<Arc<AppState>> for OptionalUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match user_from_jar(&state.db, &jar).await {
            Ok(user) => Ok(OptionalUser(user)),
            Err(err) => Err(AppError::Storage(err).into_response()),
        }
    }
}

async fn start_session(state: &AppState, user_id: i32, jar: CookieJar) -> AppResult<CookieJar> {
    let now = crate::now_sec();
    let token = uuid::Uuid::new_v4().to_string();

    session::ActiveModel {
        token: Set(token.clone()),
        user_id: Set(user_id),
        created_at: Set(now),
        expires_at: Set(now + state.config.session_ttl_hours * 3600),
    }
    .insert(&state.db)
    .await?;

    let cookie = Cookie::build((SESSION_COOKIE, token)).path("/").http_only(true).build();
    Ok(jar.add(cookie))
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

pub async fn register_page(OptionalUser(user): OptionalUser) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(templates::register_page(None)).into_response()
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    let username = form.username.trim().to_string();
    let email = form.email.trim().to_lowercase();

    if username.is_empty() || !email.contains('@') {
        return Ok(Html(templates::register_page(Some("Enter a username and a valid email.")))
            .into_response());
    }
    if form.password1.len() < 8 {
        return Ok(Html(templates::register_page(Some(
            "Password must be at least 8 characters.",
        )))
        .into_response());
    }
    if form.password1 != form.password2 {
        return Ok(Html(templates::register_page(Some("Passwords do not match."))).into_response());
    }

    let password_hash = bcrypt::hash(&form.password1, state.config.bcrypt_cost)
        .map_err(|err| anyhow::anyhow!("bcrypt: {err}"))?;

    let inserted = user::ActiveModel {
        username: Set(username.clone()),
        email: Set(email),
        password_hash: Set(password_hash),
        is_staff: Set(false),
        created_at: Set(crate::now_sec()),
        ..Default::default()
    }
    .insert(&state.db)
    .await;

    let user = match inserted {
        Ok(user) => user,
        Err(err) if is_unique_violation(&err) => {
            return Ok(Html(templates::register_page(Some(
                "That username or email is already registered.",
            )))
            .into_response());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id = user.id, username = %user.username, "registered");
    let jar = start_session(&state, user.id, jar).await?;
    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn login_page(OptionalUser(user): OptionalUser) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(templates::login_page(None)).into_response()
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<NextQuery>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let found = user::Entity::find()
        .filter(user::Column::Username.eq(form.username.trim()))
        .one(&state.db)
        .await?;

    let Some(user) = found else {
        return Ok(Html(templates::login_page(Some("Invalid username or password.")))
            .into_response());
    };

    let verified = bcrypt::verify(&form.password, &user.password_hash).unwrap_or(false);
    if !verified {
        return Ok(Html(templates::login_page(Some("Invalid username or password.")))
            .into_response());
    }

    tracing::info!(user_id = user.id, username = %user.username, "logged in");
    let jar = start_session(&state, user.id, jar).await?;

    // Only same-site relative targets are honored.
    let next = query
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());
    Ok((jar, Redirect::to(&next)).into_response())
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        session::Entity::delete_by_id(cookie.value().to_string()).exec(&state.db).await?;
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((jar, Redirect::to("/")).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn session_round_trip() {
        let db = test_support::db().await;
        let user = test_support::seed_user(&db, "hana", false).await;

        let now = crate::now_sec();
        session::ActiveModel {
            token: Set("tok-1".to_string()),
            user_id: Set(user.id),
            created_at: Set(now),
            expires_at: Set(now + 3600),
        }
        .insert(&db)
        .await
        .unwrap();

        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "tok-1"));
        let resolved = user_from_jar(&db, &jar).await.unwrap().unwrap();
        assert_eq!(resolved.username, "hana");
    }

    #[tokio::test]
    async fn expired_session_is_ignored() {
        let db = test_support::db().await;
        let user = test_support::seed_user(&db, "ivan", false).await;

        let now = crate::now_sec();
        session::ActiveModel {
            token: Set("tok-2".to_string()),
            user_id: Set(user.id),
            created_at: Set(now - 7200),
            expires_at: Set(now - 3600),
        }
        .insert(&db)
        .await
        .unwrap();

        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "tok-2"));
        assert!(user_from_jar(&db, &jar).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_cookie_is_anonymous() {
        let db = test_support::db().await;
        assert!(user_from_jar(&db, &CookieJar::new()).await.unwrap().is_none());
    }
}

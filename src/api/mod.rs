// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AddCommentRequest, AddEducationRequest, AddExperienceRequest, Comment, CreatePostRequest,
        Education, Experience, GithubRepo, Like, LoginRequest, MessageResponse, Post, Profile,
        ProfileUser, RegisterRequest, SocialLinks, TokenResponse, UpsertProfileRequest, UserId,
        UserResponse,
    },
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod posts;
pub mod profiles;
pub mod users;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/users", post(users::register))
        .route("/auth", post(auth::login).get(auth::current_user))
        .route("/profile/me", get(profiles::get_own))
        .route(
            "/profile",
            post(profiles::upsert_profile)
                .get(profiles::list_profiles)
                .delete(profiles::delete_account),
        )
        .route("/profile/user/{user_id}", get(profiles::get_by_user))
        .route("/profile/experience", put(profiles::add_experience))
        .route(
            "/profile/experience/{exp_id}",
            delete(profiles::remove_experience),
        )
        .route("/profile/education", put(profiles::add_education))
        .route(
            "/profile/education/{edu_id}",
            delete(profiles::remove_education),
        )
        .route("/profile/github/{username}", get(profiles::github_repos))
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route("/posts/{id}", get(posts::get_post).delete(posts::delete_post))
        .route("/posts/like/{id}", put(posts::like_post))
        .route("/posts/unlike/{id}", put(posts::unlike_post))
        .route("/posts/comment/{id}", post(posts::add_comment))
        .route(
            "/posts/comment/{id}/{comment_id}",
            delete(posts::remove_comment),
        )
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::register,
        auth::login,
        auth::current_user,
        profiles::get_own,
        profiles::upsert_profile,
        profiles::list_profiles,
        profiles::get_by_user,
        profiles::delete_account,
        profiles::add_experience,
        profiles::remove_experience,
        profiles::add_education,
        profiles::remove_education,
        profiles::github_repos,
        posts::create_post,
        posts::list_posts,
        posts::get_post,
        posts::delete_post,
        posts::like_post,
        posts::unlike_post,
        posts::add_comment,
        posts::remove_comment,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            UserId,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            UserResponse,
            MessageResponse,
            SocialLinks,
            Experience,
            Education,
            ProfileUser,
            Profile,
            UpsertProfileRequest,
            AddExperienceRequest,
            AddEducationRequest,
            Like,
            Comment,
            Post,
            CreatePostRequest,
            AddCommentRequest,
            GithubRepo,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Users", description = "Registration"),
        (name = "Auth", description = "Login and current user"),
        (name = "Profiles", description = "Member profiles, experience, education, GitHub lookup"),
        (name = "Posts", description = "Posts feed with likes and comments"),
        (name = "Health", description = "Service health and probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::X_AUTH_TOKEN;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::default());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(X_AUTH_TOKEN, token);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn register_login_and_post_over_http() {
        let app = router(AppState::default());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/users",
            None,
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "password123"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().expect("token in body").to_string();

        let (status, me) = send(&app, Method::GET, "/api/auth", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["email"], "ada@example.com");
        assert!(me.get("password").is_none());

        let (status, post_body) = send(
            &app,
            Method::POST,
            "/api/posts",
            Some(&token),
            Some(serde_json::json!({ "text": "hello devcircle" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let post_id = post_body["id"].as_str().expect("post id").to_string();

        let (status, likes) = send(
            &app,
            Method::PUT,
            &format!("/api/posts/like/{post_id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(likes.as_array().map(|l| l.len()), Some(1));
    }

    #[tokio::test]
    async fn private_routes_reject_missing_tokens() {
        let app = router(AppState::default());

        let (status, body) = send(&app, Method::GET, "/api/posts", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "No token, authorization denied");
    }

    #[tokio::test]
    async fn health_endpoint_is_public() {
        let app = router(AppState::default());

        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["checks"]["storage"], "ok");
    }
}

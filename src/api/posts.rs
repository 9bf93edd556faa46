// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit_log,
    auth::Auth,
    error::ApiError,
    models::{AddCommentRequest, Comment, CreatePostRequest, Like, MessageResponse, Post, UserId},
    state::AppState,
    storage::{AuditEventType, OwnershipEnforcer, PostRepository, UserRepository},
    validation::FieldErrors,
};

/// Create a post.
///
/// Author name and avatar are copied onto the post at creation time, so
/// the feed stays renderable even if the account is later deleted.
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    tag = "Posts",
    responses(
        (status = 200, description = "Created post", body = Post),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_post(
    Auth(authed): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let mut checks = FieldErrors::new();
    checks.require("text", &request.text, "Text is required");
    checks.finish()?;

    let author = UserRepository::new(&state.store).get(&authed.user_id)?;
    let post = Post {
        id: Uuid::new_v4().to_string(),
        user: UserId::from(authed.user_id.as_str()),
        text: request.text,
        name: author.name,
        avatar: author.avatar,
        likes: Vec::new(),
        comments: Vec::new(),
        created_at: Utc::now(),
    };
    PostRepository::new(&state.store).create(&post)?;

    audit_log!(
        &state.store,
        AuditEventType::PostCreated,
        &authed.user_id,
        "post",
        &post.id
    );
    tracing::debug!(user_id = %authed.user_id, post_id = %post.id, "post created");

    Ok(Json(post))
}

/// List all posts, newest first.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts", body = [Post]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_posts(
    Auth(_authed): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(PostRepository::new(&state.store).list_all()?))
}

/// Get a single post by id.
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    tag = "Posts",
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    Auth(_authed): Auth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(PostRepository::new(&state.store).get(&id)?))
}

/// Delete a post. Only the author may do this.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    tag = "Posts",
    responses(
        (status = 200, description = "Post removed", body = MessageResponse),
        (status = 401, description = "Not the author"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    Auth(authed): Auth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let posts = PostRepository::new(&state.store);
    let post = posts.get(&id)?;
    post.verify_ownership(&authed)?;
    posts.delete(&id)?;

    audit_log!(
        &state.store,
        AuditEventType::PostDeleted,
        &authed.user_id,
        "post",
        &id
    );
    tracing::debug!(user_id = %authed.user_id, post_id = %id, "post deleted");

    Ok(Json(MessageResponse {
        message: "Post removed".to_string(),
    }))
}

/// Like a post. At most one like per user per post.
#[utoipa::path(
    put,
    path = "/api/posts/like/{id}",
    params(("id" = String, Path, description = "Post id")),
    tag = "Posts",
    responses(
        (status = 200, description = "Updated likes list", body = [Like]),
        (status = 400, description = "Already liked"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn like_post(
    Auth(authed): Auth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let posts = PostRepository::new(&state.store);
    let mut post = posts.get(&id)?;

    if post.likes.iter().any(|like| like.user.0 == authed.user_id) {
        return Err(ApiError::bad_request("Post already liked"));
    }

    post.likes.insert(
        0,
        Like {
            user: UserId::from(authed.user_id.as_str()),
        },
    );
    posts.save(&post)?;

    Ok(Json(post.likes))
}

/// Remove the caller's like from a post.
#[utoipa::path(
    put,
    path = "/api/posts/unlike/{id}",
    params(("id" = String, Path, description = "Post id")),
    tag = "Posts",
    responses(
        (status = 200, description = "Updated likes list", body = [Like]),
        (status = 400, description = "Not liked yet"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn unlike_post(
    Auth(authed): Auth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let posts = PostRepository::new(&state.store);
    let mut post = posts.get(&id)?;

    let Some(index) = post
        .likes
        .iter()
        .position(|like| like.user.0 == authed.user_id)
    else {
        return Err(ApiError::bad_request("Post has not yet been liked"));
    };

    post.likes.remove(index);
    posts.save(&post)?;

    Ok(Json(post.likes))
}

/// Comment on a post.
#[utoipa::path(
    post,
    path = "/api/posts/comment/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = AddCommentRequest,
    tag = "Posts",
    responses(
        (status = 200, description = "Updated comments list", body = [Comment]),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn add_comment(
    Auth(authed): Auth,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<AddCommentRequest>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let mut checks = FieldErrors::new();
    checks.require("text", &request.text, "Text is required");
    checks.finish()?;

    let author = UserRepository::new(&state.store).get(&authed.user_id)?;
    let posts = PostRepository::new(&state.store);
    let mut post = posts.get(&id)?;

    post.comments.insert(
        0,
        Comment {
            id: Uuid::new_v4().to_string(),
            user: UserId::from(authed.user_id.as_str()),
            text: request.text,
            name: author.name,
            avatar: author.avatar,
            created_at: Utc::now(),
        },
    );
    posts.save(&post)?;

    Ok(Json(post.comments))
}

/// Remove a comment from a post. Only the comment's author may do this.
///
/// Removal is keyed strictly by comment id, so a user with several
/// comments on the same post always removes exactly the one addressed.
#[utoipa::path(
    delete,
    path = "/api/posts/comment/{id}/{comment_id}",
    params(
        ("id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id")
    ),
    tag = "Posts",
    responses(
        (status = 200, description = "Updated comments list", body = [Comment]),
        (status = 401, description = "Not the comment's author"),
        (status = 404, description = "Post or comment not found")
    )
)]
pub async fn remove_comment(
    Auth(authed): Auth,
    Path((id, comment_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let posts = PostRepository::new(&state.store);
    let mut post = posts.get(&id)?;

    let Some(index) = post
        .comments
        .iter()
        .position(|comment| comment.id == comment_id)
    else {
        return Err(ApiError::not_found("Comment does not exist"));
    };
    post.comments[index].verify_ownership(&authed)?;

    post.comments.remove(index);
    posts.save(&post)?;

    audit_log!(
        &state.store,
        AuditEventType::CommentDeleted,
        &authed.user_id,
        "comment",
        &comment_id
    );

    Ok(Json(post.comments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::users::register;
    use crate::auth::AuthenticatedUser;
    use crate::models::RegisterRequest;
    use axum::http::StatusCode;

    async fn seed_user(state: &AppState, name: &str, email: &str) -> AuthenticatedUser {
        let Json(body) = register(
            State(state.clone()),
            Json(RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .expect("registration succeeds");
        state.tokens.verify(&body.token).expect("token verifies")
    }

    async fn seed_post(state: &AppState, authed: &AuthenticatedUser, text: &str) -> Post {
        let Json(post) = create_post(
            Auth(authed.clone()),
            State(state.clone()),
            Json(CreatePostRequest {
                text: text.to_string(),
            }),
        )
        .await
        .expect("post created");
        post
    }

    #[tokio::test]
    async fn create_post_denormalizes_author() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;

        let post = seed_post(&state, &authed, "hello").await;
        assert_eq!(post.text, "hello");
        assert_eq!(post.name, "Ada");
        assert!(post.avatar.starts_with("https://www.gravatar.com/avatar/"));
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());

        let stored = PostRepository::new(&state.store)
            .get(&post.id)
            .expect("post persisted");
        assert_eq!(stored.id, post.id);
    }

    #[tokio::test]
    async fn create_post_requires_text() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;

        let err = create_post(
            Auth(authed),
            State(state),
            Json(CreatePostRequest {
                text: String::new(),
            }),
        )
        .await
        .expect_err("empty post fails");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let details = err.details.expect("field details present");
        assert_eq!(details[0].message, "Text is required");
    }

    #[tokio::test]
    async fn second_like_by_same_user_is_rejected() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;
        let post = seed_post(&state, &authed, "hello").await;

        let Json(likes) = like_post(
            Auth(authed.clone()),
            Path(post.id.clone()),
            State(state.clone()),
        )
        .await
        .expect("first like succeeds");
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].user.0, authed.user_id);

        let err = like_post(
            Auth(authed.clone()),
            Path(post.id.clone()),
            State(state.clone()),
        )
        .await
        .expect_err("second like fails");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Post already liked");

        let stored = PostRepository::new(&state.store).get(&post.id).unwrap();
        assert_eq!(stored.likes.len(), 1);
    }

    #[tokio::test]
    async fn unlike_requires_an_existing_like() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;
        let post = seed_post(&state, &authed, "hello").await;

        let err = unlike_post(
            Auth(authed.clone()),
            Path(post.id.clone()),
            State(state.clone()),
        )
        .await
        .expect_err("unlike without like fails");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Post has not yet been liked");

        like_post(
            Auth(authed.clone()),
            Path(post.id.clone()),
            State(state.clone()),
        )
        .await
        .expect("like succeeds");

        let Json(likes) = unlike_post(Auth(authed), Path(post.id), State(state))
            .await
            .expect("unlike succeeds");
        assert!(likes.is_empty());
    }

    #[tokio::test]
    async fn only_the_author_may_delete_a_post() {
        let state = AppState::default();
        let ada = seed_user(&state, "Ada", "ada@example.com").await;
        let grace = seed_user(&state, "Grace", "grace@example.com").await;
        let post = seed_post(&state, &ada, "hello").await;

        let err = delete_post(
            Auth(grace),
            Path(post.id.clone()),
            State(state.clone()),
        )
        .await
        .expect_err("non-author delete fails");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "User not authorized");
        assert!(PostRepository::new(&state.store).exists(&post.id));

        let Json(body) = delete_post(Auth(ada), Path(post.id.clone()), State(state.clone()))
            .await
            .expect("author delete succeeds");
        assert_eq!(body.message, "Post removed");
        assert!(!PostRepository::new(&state.store).exists(&post.id));
    }

    #[tokio::test]
    async fn comment_removal_is_keyed_by_comment_id() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;
        let post = seed_post(&state, &authed, "hello").await;

        for text in ["first thought", "second thought"] {
            add_comment(
                Auth(authed.clone()),
                Path(post.id.clone()),
                State(state.clone()),
                Json(AddCommentRequest {
                    text: text.to_string(),
                }),
            )
            .await
            .expect("comment added");
        }

        let stored = PostRepository::new(&state.store).get(&post.id).unwrap();
        assert_eq!(stored.comments[0].text, "second thought");
        assert_eq!(stored.comments[1].text, "first thought");

        // Remove the older comment; the caller's other comment survives.
        let older_id = stored.comments[1].id.clone();
        let Json(comments) = remove_comment(
            Auth(authed.clone()),
            Path((post.id.clone(), older_id)),
            State(state.clone()),
        )
        .await
        .expect("removal succeeds");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "second thought");
    }

    #[tokio::test]
    async fn strangers_cannot_remove_comments() {
        let state = AppState::default();
        let ada = seed_user(&state, "Ada", "ada@example.com").await;
        let grace = seed_user(&state, "Grace", "grace@example.com").await;
        let post = seed_post(&state, &ada, "hello").await;

        let Json(comments) = add_comment(
            Auth(ada),
            Path(post.id.clone()),
            State(state.clone()),
            Json(AddCommentRequest {
                text: "my comment".to_string(),
            }),
        )
        .await
        .expect("comment added");

        let err = remove_comment(
            Auth(grace),
            Path((post.id.clone(), comments[0].id.clone())),
            State(state.clone()),
        )
        .await
        .expect_err("stranger removal fails");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "User not authorized");

        let stored = PostRepository::new(&state.store).get(&post.id).unwrap();
        assert_eq!(stored.comments.len(), 1);
    }

    #[tokio::test]
    async fn removing_a_missing_comment_is_404() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;
        let post = seed_post(&state, &authed, "hello").await;

        let err = remove_comment(
            Auth(authed),
            Path((post.id, "no-such-comment".to_string())),
            State(state),
        )
        .await
        .expect_err("missing comment fails");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Comment does not exist");
    }

    #[tokio::test]
    async fn feed_lists_newest_first() {
        let state = AppState::default();
        let authed = seed_user(&state, "Ada", "ada@example.com").await;
        seed_post(&state, &authed, "older").await;
        // Make sure the second post gets a strictly later timestamp.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        seed_post(&state, &authed, "newer").await;

        let Json(posts) = list_posts(Auth(authed), State(state))
            .await
            .expect("listing succeeds");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text, "newer");
        assert_eq!(posts[1].text, "older");
    }
}

use crate::post::post_model::{CreatePostRequest, UpdatePostRequest};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use serde_json::json;

pub async fn get_first_post(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_first_post().await?;

    match post {
        Some(p) => Ok(HttpResponse::Ok().json(p)),
        None => Err(CustomError::NotFoundError("No posts found.".into())),
    }
}

pub async fn get_all_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts = post_service.get_all_posts().await?;

    if posts.is_empty() {
        return Err(CustomError::NotFoundError("No posts found.".into()));
    }

    Ok(HttpResponse::Ok().json(posts))
}

pub async fn get_post(
    user_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let user_id = user_id.into_inner();
    let post = post_service.get_post(&user_id).await?;

    match post {
        Some(p) => Ok(HttpResponse::Ok().json(p)),
        None => Err(CustomError::NotFoundError("Post not found.".into())),
    }
}

pub async fn create_post(
    post_service: web::Data<PostService>,
    post: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    post_service
        .create_post(post.post_title.as_deref(), post.post_content.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Post successfully added." })))
}

pub async fn update_post(
    user_id: web::Path<String>,
    post_service: web::Data<PostService>,
    post: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let user_id = user_id.into_inner();
    let changes = post_service
        .update_post(
            &user_id,
            post.post_title.as_deref(),
            post.post_content.as_deref(),
        )
        .await?;

    if changes == 0 {
        return Err(CustomError::NotFoundError("Post not found.".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Post Updated Successfully." })))
}

pub async fn delete_post(
    user_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let user_id = user_id.into_inner();
    let changes = post_service.delete_post(&user_id).await?;

    if changes == 0 {
        return Err(CustomError::NotFoundError("Post not found.".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Post Deleted Successfully" })))
}

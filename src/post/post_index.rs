use super::post_controller::{
    create_post, delete_post, get_all_posts, get_first_post, get_post, update_post,
};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/post")
            .route("", web::get().to(get_first_post))
            .route("", web::post().to(create_post))
            .route("/update/{user_id}", web::put().to(update_post))
            .route("/delete/{user_id}", web::delete().to(delete_post))
            .route("/{user_id}", web::get().to(get_post)),
    );
    cfg.route("/posts", web::get().to(get_all_posts));
}

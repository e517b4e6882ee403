//! V1 version API routes
mod application;
mod auth;
mod brand;
mod campaign;
mod content;
mod influencer;
mod message;
mod milestone;
mod notification;
mod payment;
mod task;

use actix_web::web;

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(auth::ROUTER_PREFIX).configure(auth::configure_routes))
        .service(web::scope(brand::ROUTER_PREFIX).configure(brand::configure_routes))
        .service(web::scope(influencer::ROUTER_PREFIX).configure(influencer::configure_routes))
        .service(web::scope(campaign::ROUTER_PREFIX).configure(campaign::configure_routes))
        .service(
            web::scope(application::ROUTER_PREFIX).configure(application::configure_routes),
        )
        .service(web::scope(task::ROUTER_PREFIX).configure(task::configure_routes))
        .service(web::scope(content::ROUTER_PREFIX).configure(content::configure_routes))
        .service(web::scope(milestone::ROUTER_PREFIX).configure(milestone::configure_routes))
        .service(web::scope(payment::ROUTER_PREFIX).configure(payment::configure_routes))
        .service(
            web::scope(notification::ROUTER_PREFIX).configure(notification::configure_routes),
        )
        .service(web::scope(message::ROUTER_PREFIX).configure(message::configure_routes));
}

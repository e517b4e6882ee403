mod actor;
mod application;
mod auth;
mod brand;
mod campaign;
mod common;
mod content;
mod influencer;
mod message;
mod milestone;
mod notification;
mod payment;
pub mod prelude;
mod task;
mod user;

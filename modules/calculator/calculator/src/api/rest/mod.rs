pub mod context;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod input;
pub mod openapi;
pub mod problem;
pub mod routes;

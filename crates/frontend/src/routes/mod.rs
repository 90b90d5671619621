mod app_route;
pub mod routes;

pub use app_route::{AppRoute, CAFE_ID_QUERY};

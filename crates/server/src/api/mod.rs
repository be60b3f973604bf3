pub mod error;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod moods;
pub mod routes;

pub use routes::create_router;

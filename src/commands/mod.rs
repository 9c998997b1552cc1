pub mod dispatch;
pub mod edges;
pub mod helpers;
pub mod neighbours;
pub mod route;
pub mod vertices;

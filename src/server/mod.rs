pub mod config;
mod http_layers;
mod notification_routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use notification_routes::notification_routes;
pub use server::{make_app, run_server};

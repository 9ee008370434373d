use axum::extract::FromRef;

use crate::notifications::NotificationService;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedNotificationService = Arc<NotificationService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub notifications: GuardedNotificationService,
}

impl FromRef<ServerState> for GuardedNotificationService {
    fn from_ref(input: &ServerState) -> Self {
        input.notifications.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

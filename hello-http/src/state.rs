use crate::service::GreetingService;
use shared::InstanceId;

/// Server state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub instance_id: InstanceId,
    pub greeting_service: GreetingService,
}

impl AppState {
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            greeting_service: GreetingService::new(instance_id),
        }
    }
}

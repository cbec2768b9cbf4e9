use shared::InstanceId;
use tracing::info;

pub const GREETING: &str = "Hello World!";

/// Produces the greeting served on `/`.
#[derive(Clone, Debug)]
pub struct GreetingService {
    instance_id: InstanceId,
}

impl GreetingService {
    pub fn new(instance_id: InstanceId) -> Self {
        Self { instance_id }
    }

    pub fn greeting(&self) -> &'static str {
        info!(
            instance_id = %self.instance_id,
            "Instance ID {}: Return 'hello world'", self.instance_id
        );
        GREETING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_constant() {
        let service = GreetingService::new(InstanceId::generate());
        assert_eq!(service.greeting(), "Hello World!");
        assert_eq!(service.greeting(), service.greeting());
    }
}

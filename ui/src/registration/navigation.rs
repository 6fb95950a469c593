pub const HOME_PATH: &str = "/";

/// A message handed to the next view and shown once
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FlashMessage {
    message: Option<String>,
}

impl FlashMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }

    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Remove the message; later calls return `None`
    pub fn take(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none()
    }
}

/// Where the wizard wants to go next, with the state to deliver there
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRequest {
    pub path: String,
    pub flash: FlashMessage,
}

impl NavigationRequest {
    pub fn home_with_message(message: &str) -> Self {
        Self {
            path: HOME_PATH.to_string(),
            flash: FlashMessage::new(message),
        }
    }
}

/// What the kiosk shows for a failure: a stable code plus a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub code: String,
    pub text: String,
}

impl UserMessage {
    pub fn new(code: &str, text: &str) -> Self {
        Self {
            code: code.to_string(),
            text: text.to_string(),
        }
    }
}

impl std::fmt::Display for UserMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.text, self.code)
    }
}

pub trait IntoUserMessage {
    fn into_user_message(self) -> UserMessage;
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub text: String,
}

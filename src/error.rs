use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("all relay endpoints failed")]
    FetchExhausted,

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("provider error {code}: {}", .message.as_deref().unwrap_or("(no message)"))]
    RemoteError {
        code: String,
        message: Option<String>,
    },

    #[error("no meal data for the requested date")]
    NoDataForDate,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MealError {
    /// The string shown in the error panel. Raw details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            MealError::FetchExhausted => {
                "네트워크 연결에 문제가 있습니다. 잠시 후 다시 시도해주세요.".to_string()
            }
            MealError::NoDataForDate => "선택하신 날짜에는 급식이 제공되지 않습니다.".to_string(),
            MealError::RemoteError {
                message: Some(message),
                ..
            } => message.clone(),
            MealError::InvalidInput(detail) => format!("잘못된 입력입니다: {detail}"),
            _ => "해당 날짜의 급식 정보를 찾을 수 없습니다.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MealError>;

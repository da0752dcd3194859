//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure (server unreachable, CORS, aborted fetch)
    #[error("서버에 연결할 수 없습니다: {0}")]
    Request(String),

    #[error("응답을 해석하지 못했습니다: {0}")]
    Decode(String),

    /// 401 on an authenticated call
    #[error("로그인이 만료되었습니다. 다시 로그인해주세요.")]
    Unauthorized,

    #[error("로그인이 필요합니다. 다시 로그인 해주세요.")]
    MissingToken,

    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Transport errors and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Request(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The stored session is no longer usable.
    pub fn ends_session(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::MissingToken)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(ApiError::Request("offline".into()).is_retryable());
        assert!(ApiError::Status { status: 503, message: "busy".into() }.is_retryable());
        assert!(!ApiError::Status { status: 404, message: "gone".into() }.is_retryable());
        assert!(!ApiError::Unauthorized.is_retryable());
    }

    #[test]
    fn test_status_displays_server_message() {
        let err = ApiError::Status { status: 400, message: "정원이 가득 찼습니다".into() };
        assert_eq!(err.to_string(), "정원이 가득 찼습니다");
        assert!(ApiError::Unauthorized.ends_session());
        assert!(!err.ends_session());
    }
}

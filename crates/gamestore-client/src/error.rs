use reqwest::StatusCode;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Failure of a single API call, tagged with the operation that issued it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{operation} failed with status {status}{}", body_suffix(.body))]
    Status {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned unexpected data: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL for {operation}: {source}")]
    Url {
        operation: &'static str,
        #[source]
        source: url::ParseError,
    },
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

impl ClientError {
    pub fn operation(&self) -> &'static str {
        match self {
            ClientError::Status { operation, .. }
            | ClientError::Transport { operation, .. }
            | ClientError::Decode { operation, .. }
            | ClientError::Url { operation, .. } => operation,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

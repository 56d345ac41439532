use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order parse error: {0}")]
    Parse(String),

    #[error("order {order_no}: {reason}")]
    Invalid { order_no: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Errors that can surface from the viewport crate.
///
/// Viewport arithmetic itself never fails: degenerate input is clamped. Only
/// configuration parsing and layout measurement are fallible.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    InvalidConfig(String),
    LayoutUnavailable(String),
    BrowserApi(String),
}

impl std::fmt::Display for ViewportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportError::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
            ViewportError::LayoutUnavailable(msg) => write!(f, "Layout Unavailable: {}", msg),
            ViewportError::BrowserApi(msg) => write!(f, "Browser API Error: {}", msg),
        }
    }
}

impl std::error::Error for ViewportError {}

pub type ConfigResult<T> = Result<T, ViewportError>;
pub type LayoutResult<T> = Result<T, ViewportError>;

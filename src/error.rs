use wasm_bindgen::JsValue;

/// Failures of the browser glue. None of them reach the visitor: callers log
/// them and keep the page static.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("browser window is unavailable")]
    NoWindow,

    #[error("document is unavailable")]
    NoDocument,

    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("canvas 2d context is unavailable")]
    NoCanvasContext,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("stylesheet error: {0}")]
    Style(#[from] stylist::Error),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SiteError::MissingElement("servicos".to_string()).to_string(),
            "element `servicos` not found"
        );
        assert_eq!(SiteError::NoWindow.to_string(), "browser window is unavailable");
    }

    #[test]
    fn config_errors_convert() {
        let err: SiteError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }
}

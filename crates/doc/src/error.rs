use thiserror::Error;

/// Errors produced while decoding a wire document into the closed model.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("malformed document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root must have nodeType 'document', found '{0}'")]
    NotADocument(String),

    #[error("unsupported node type: '{0}'")]
    UnsupportedNode(String),

    #[error("node '{child}' is not valid content for '{parent}'")]
    UnexpectedChild {
        parent: &'static str,
        child: String,
    },

    #[error("hyperlink node is missing its target URI")]
    MissingLinkUri,
}

//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExbriefError {
    #[error("TEMPLATE/{0}")]
    TemplateError(String),

    #[error("RENDER/{0}")]
    RenderError(String),
}

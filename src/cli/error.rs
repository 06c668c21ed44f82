use thiserror::Error;

/// Root error type for CLI operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parser(#[from] crate::parser::ParserError),

    #[error(transparent)]
    Search(#[from] crate::searcher::SearchError),

    #[error(transparent)]
    Render(#[from] crate::render::RenderError),
}

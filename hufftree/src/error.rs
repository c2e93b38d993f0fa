use thiserror::Error;

use crate::tree::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),
    #[error("code of depth {depth} does not fit into 64 bits")]
    CodeTooLong { depth: usize },
    #[error("could not render tree")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

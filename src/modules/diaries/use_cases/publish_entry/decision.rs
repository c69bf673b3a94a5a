use crate::modules::diaries::core::entry::NewEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("entry needs text or at least one image")]
    EmptyEntry,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { entry: NewEntry },
    Rejected { reason: DecideError },
}

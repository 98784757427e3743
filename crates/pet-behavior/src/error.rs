use pet_core::PetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid personality: {0}")]
    Personality(#[source] PetError),

    #[error("invalid needs: {0}")]
    Needs(#[source] PetError),

    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

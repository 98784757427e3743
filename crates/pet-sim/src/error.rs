use pet_behavior::BehaviorError;
use pet_core::PetError;
use pet_motion::MotionError;
use pet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("companion configuration error: {0}")]
    Config(#[from] PetError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("motion error: {0}")]
    Motion(#[from] MotionError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

pub type SimResult<T> = Result<T, SimError>;

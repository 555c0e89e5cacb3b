use bsim_core::BsimError;
use bsim_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] BsimError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("simulation has already run; build a new one to scan again")]
    AlreadyRun,
}

pub type SimResult<T> = Result<T, SimError>;

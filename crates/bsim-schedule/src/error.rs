use bsim_core::BsimError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error(transparent)]
    Config(#[from] BsimError),

    #[error("{0} beacons exceed the beacon id space")]
    TooManyBeacons(usize),

    #[error("no pending broadcasts left in the scheduler")]
    Exhausted,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

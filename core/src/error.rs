use crate::ObserverId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubjectError {
    #[error("observer {0} is not registered with this subject")]
    NotRegistered(ObserverId),
}

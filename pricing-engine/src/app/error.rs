use thiserror::Error;

use shared::refdata::RefDataError;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("{0}")]
    RefData(#[from] RefDataError),
}

use crate::errors::ReaderError;

pub trait Validate {
    fn validate(&self) -> Result<(), ReaderError>;
}

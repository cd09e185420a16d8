use crate::error::ConfigError;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub use anyhow::{anyhow, bail, ensure};
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

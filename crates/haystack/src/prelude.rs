pub use crate::error::Error;

pub use anstream::eprintln;
pub use color_eyre::eyre::{eyre, Context, Result};

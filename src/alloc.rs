//! Fallible allocation for slot arrays and text copies.
//!
//! Every allocation the table makes goes through here so the `try_*`
//! operations can report exhaustion instead of aborting.

use crate::error::AllocError;
use crate::slot::Slot;

/// A slot array of `len` empty slots.
pub(crate) fn empty_slots(len: usize) -> Result<Vec<Slot>, AllocError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len)?;
    slots.resize_with(len, Slot::default);
    Ok(slots)
}

/// A private, owned copy of `text`.
pub(crate) fn copy_text(text: &str) -> Result<Box<str>, AllocError> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len())?;
    owned.push_str(text);
    Ok(owned.into_boxed_str())
}

/// Terminal path of the infallible operations.
#[cold]
pub(crate) fn exhausted(_err: AllocError) -> ! {
    #[cfg(feature = "logging")]
    log::error!("aborting: {_err}");
    std::process::abort()
}

/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::string::{String, ToString};

#[cfg(not(feature = "std"))]
pub use alloc::string::{String, ToString};

/// Write-once cell holding the memoized parse result.
/// Thread-safe with `std`; single-threaded only under `no_std`.
#[cfg(feature = "std")]
pub type OnceSlot<T> = std::sync::OnceLock<T>;

#[cfg(not(feature = "std"))]
pub type OnceSlot<T> = core::cell::OnceCell<T>;

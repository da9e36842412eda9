#[cfg(feature = "core")]
#[doc(inline)]
pub use mtrack_core as core;

#[cfg(feature = "host")]
#[doc(inline)]
pub use mtrack_host as host;

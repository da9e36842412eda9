pub mod region;
pub mod user_tracks;
pub mod validation;

// re-export for cleaner imports
pub use self::region::Region;
pub use self::user_tracks::{TrackArray, UserTracks};
pub use self::validation::Validation;

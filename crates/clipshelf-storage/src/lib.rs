//! On-disk video library: naming resolution, file CRUD, and range-windowed
//! streaming reads. The filesystem is the single source of truth; there is no
//! secondary index to keep consistent.

pub mod library;

pub use library::{LibraryError, LibraryResult, ResolvedVideo, VideoEntry, VideoLibrary};

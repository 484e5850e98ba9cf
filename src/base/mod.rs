//! Foundation types for the pipe generator.
//!
//! This module provides the dotted-path primitives shared by the namespace
//! and generation layers:
//! - [`split_first`] - Split a reference into its first segment and the rest
//! - [`strip_absolute`] - Detect and strip the leading dot of an absolute reference
//! - [`package_segments`] - Iterate the segments of a package path
//! - [`package_dir`] - Map a package path to an output directory
//!
//! This module has NO dependencies on other pipegen modules.

mod path;

pub use path::{
    PACKAGE_SEPARATOR, PATH_SEPARATOR, package_dir, package_segments, qualify, split_first,
    strip_absolute,
};

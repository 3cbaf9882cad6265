//! Exit code constants for the krapp CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, malformed note, filesystem fault)
//! - 2: Configuration failure
//! - 3: Git or editor invocation failure
//! - 4: GitHub failure (remote resolution or issue listing)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed notes, or note I/O failures.
pub const USER_ERROR: i32 = 1;

/// The configuration layers could not be created, read, or decoded.
pub const CONFIG_FAILURE: i32 = 2;

/// An external process (git, editor) failed.
pub const PROCESS_FAILURE: i32 = 3;

/// The repository could not be resolved or its issues could not be listed.
pub const GITHUB_FAILURE: i32 = 4;

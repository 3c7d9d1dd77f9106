//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error, including an unsupported menu choice
pub const USAGE: i32 = 64;

/// Cannot open input (stdin closed mid-session)
pub const NOINPUT: i32 = 66;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;

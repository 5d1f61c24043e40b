use std::fmt;

/// Stable diagnostic codes. Each code maps onto a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The directory of generated bindings does not exist.
    MissingGeneratedDir = 1001,
    /// A generated source file (or directory entry) could not be read.
    SourceRead = 1002,

    ConfigRead = 2001,
    ConfigParse = 2002,

    /// Two valid manual aliases point at the same target name.
    DuplicateAliasTarget = 2003,

    /// A manual alias target is not a valid TypeScript identifier.
    InvalidAliasName = 2004,

    /// Two distinct exports resolve to the same binding in the output.
    AliasCollision = 3001,

    /// Check mode found no committed alias file.
    MissingCommittedOutput = 4001,
    /// Check mode found a committed alias file that is out of date.
    OutputDrift = 4002,

    OutputWrite = 5001,

    Usage = 9001,
}

impl ErrorCode {
    /// Process exit code reported when this is the first error of a run.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCode::ConfigRead
            | ErrorCode::ConfigParse
            | ErrorCode::DuplicateAliasTarget
            | ErrorCode::InvalidAliasName
            | ErrorCode::AliasCollision => 1,
            ErrorCode::Usage => 2,
            ErrorCode::MissingGeneratedDir | ErrorCode::SourceRead => 3,
            ErrorCode::MissingCommittedOutput | ErrorCode::OutputDrift => 4,
            ErrorCode::OutputWrite => 5,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AAG{}", *self as i32)
    }
}

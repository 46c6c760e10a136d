/// Length of the hyphenated textual form of a UUID
pub const CANONICAL_ID_LENGTH: usize = 36;

/// bcrypt ignores input past this many bytes
pub const PASSWORD_MAX_BYTES: usize = 72;

pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A role column held a string that is not one of the known tiers.
    ///
    /// Roles are only ever written through `Role::as_str`, so this indicates
    /// manual database edits or a migration gap. Results in a 500 Internal
    /// Server Error with a generic message returned to the client.
    #[error("Unknown role '{value}' stored in database")]
    UnknownRole {
        /// The string value that failed to parse as a role.
        value: String,
    },

    /// Password hashing or verification failed for a reason other than a
    /// mismatch (malformed stored hash, parameter error).
    #[error("Password hash operation failed: {0}")]
    PasswordHash(String),
}

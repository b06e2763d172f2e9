use super::types::Error;

impl Error {
    /// Returns true if the requested account exists nowhere.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns true if an account operation was refused without changing state.
    ///
    /// Rejections are recoverable: the caller may retry with a different amount.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InsufficientFunds { .. } | Error::InvalidAmount { .. }
        )
    }

    /// Returns true if the error is not part of the domain model and should
    /// not be retried by the caller.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::LockPoisoned { .. } | Error::Configuration(_))
    }

    /// Key or account id the error refers to, if any
    #[must_use]
    pub fn account_id(&self) -> Option<u64> {
        match self {
            Error::NotFound { key } => Some(*key),
            Error::InsufficientFunds { account_id, .. } => Some(*account_id),
            _ => None,
        }
    }
}

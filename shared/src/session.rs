use crate::Teacher;

/// Durable storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, teacher: Teacher },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Anonymous => None,
        }
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        match self {
            Self::Authenticated { teacher, .. } => Some(teacher),
            Self::Anonymous => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage_unavailable: {0}")]
    Unavailable(String),
    #[error("storage_io_error")]
    Io(#[from] std::io::Error),
}

/// Durable mirror of the session token. Absence of a token means an
/// anonymous session.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

use secrecy::SecretString;
use smol_str::SmolStr;

use crate::dialect::{Dialect, DialectKind, dialect_for};

/// Immutable connection identity, consumed once by the executor collaborator
/// to materialize its own connection descriptor. The engine reads only the
/// dialect tag and database name.
#[derive(Debug)]
pub struct ConnectSettings {
    pub dialect: DialectKind,
    pub host: SmolStr,
    pub port: u16,
    pub username: SmolStr,
    pub password: SecretString,
    /// Instance qualifier for families that name server instances.
    pub instance: Option<SmolStr>,
    pub database: SmolStr,
}

impl ConnectSettings {
    pub fn new(
        dialect: DialectKind,
        host: impl Into<SmolStr>,
        port: u16,
        username: impl Into<SmolStr>,
        password: impl Into<SecretString>,
        database: impl Into<SmolStr>,
    ) -> Self {
        Self {
            dialect,
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
            instance: None,
            database: database.into(),
        }
    }

    pub fn instance(mut self, name: impl Into<SmolStr>) -> Self {
        self.instance = Some(name.into());
        self
    }

    /// Resolve the dialect tag into its strategy, once.
    pub fn strategy(&self) -> &'static dyn Dialect {
        dialect_for(self.dialect)
    }
}

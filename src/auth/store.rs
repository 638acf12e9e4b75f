use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::auth::services::hash_password;
use crate::auth::user::{new_user_id, now_stamp, Role, User};

pub const DEFAULT_ADMIN_NAME: &str = "Administrador";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@sistema.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const MSG_DUPLICATE_EMAIL: &str = "Email já cadastrado";
const MSG_USER_CREATED: &str = "Usuário criado com sucesso";

/// Failures talking to the backing file. Recoverable outcomes
/// (duplicate email, bad credentials) are plain return values, not errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("reading user store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing user store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("encoding user store {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed user store {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed registry of user accounts; the sole authority for
/// authentication decisions.
///
/// Every mutation rewrites the whole file. Callers that share a store
/// across tasks must serialize access around it (`AppState` keeps it
/// behind a mutex); the store itself holds no lock.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: Vec<User>,
}

impl UserStore {
    /// Loads the store from `path`. A missing file means an empty store;
    /// an empty store gets the default administrator created and persisted
    /// before the first request can see it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let users = Self::load(&path)?;
        let mut store = Self { path, users };
        if store.users.is_empty() {
            store.bootstrap_admin()?;
        }
        Ok(store)
    }

    fn load(path: &Path) -> Result<Vec<User>, StoreError> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        serde_json::from_slice(&raw).map_err(|e| StoreError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    // Full rewrite through a sibling temp file plus rename, so a crash
    // mid-write cannot truncate the live store.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.users).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;
        let tmp = self.path.with_extension("tmp");
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }

    // Ids are second-resolution timestamps; same-second creations get a
    // numeric suffix so token subjects resolve to exactly one record.
    fn unused_id(&self) -> String {
        let base = new_user_id();
        let mut id = base.clone();
        let mut n = 1;
        while self.users.iter().any(|u| u.id == id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        id
    }

    fn bootstrap_admin(&mut self) -> Result<(), StoreError> {
        let id = self.unused_id();
        self.users.push(User {
            id,
            name: DEFAULT_ADMIN_NAME.into(),
            email: DEFAULT_ADMIN_EMAIL.into(),
            password_hash: hash_password(DEFAULT_ADMIN_PASSWORD),
            role: Role::Admin,
            created_at: now_stamp(),
            last_login_at: None,
        });
        if let Err(e) = self.persist() {
            self.users.pop();
            return Err(e);
        }
        info!(
            email = DEFAULT_ADMIN_EMAIL,
            "user store was empty, created default administrator"
        );
        Ok(())
    }

    /// Checks `email` + `password` against the stored records. On a match
    /// the record's `last_login_at` is refreshed and persisted before the
    /// record is returned. A wrong password and an unknown email both come
    /// back as `Ok(None)` — callers cannot tell them apart.
    ///
    /// Emails are matched exactly: case-sensitive, untrimmed.
    pub fn authenticate(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let hash = hash_password(password);
        // Linear scan; the store is expected to stay small.
        let Some(pos) = self
            .users
            .iter()
            .position(|u| u.email == email && u.password_hash == hash)
        else {
            return Ok(None);
        };
        let previous = std::mem::replace(&mut self.users[pos].last_login_at, Some(now_stamp()));
        if let Err(e) = self.persist() {
            // Keep memory and file in agreement when the rewrite fails.
            self.users[pos].last_login_at = previous;
            return Err(e);
        }
        let user = self.users[pos].clone();
        debug!(user_id = %user.id, "credentials accepted");
        Ok(Some(user))
    }

    /// Registers a new standard-role account. Returns `(false, message)`
    /// when the email is already taken (no state change), `(true, message)`
    /// once the record is appended and persisted.
    pub fn create_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(bool, String), StoreError> {
        if self.users.iter().any(|u| u.email == email) {
            return Ok((false, MSG_DUPLICATE_EMAIL.into()));
        }
        let id = self.unused_id();
        self.users.push(User {
            id: id.clone(),
            name: name.into(),
            email: email.into(),
            password_hash: hash_password(password),
            role: Role::Standard,
            created_at: now_stamp(),
            last_login_at: None,
        });
        if let Err(e) = self.persist() {
            // A record that never reached disk must not linger in memory,
            // otherwise a retry would be rejected as duplicate.
            self.users.pop();
            return Err(e);
        }
        info!(user_id = %id, email = %email, "user created");
        Ok((true, MSG_USER_CREATED.into()))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

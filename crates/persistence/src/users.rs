// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use contract_desk_domain::{Role, UserProfile};
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

/// The fixed column set of the persisted user table, in order.
const USER_COLUMNS: &[&str] = &["username", "password_hash", "role", "full_name"];

/// Login name of the account seeded into a fresh user table.
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Initial password of the seeded account.
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Hash verified against when a username is not in the table, so a
/// lookup miss costs the same bcrypt work as a wrong password.
pub(crate) const TIMING_DUMMY_HASH: &str =
    "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// One persisted user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
}

/// Owner of the persisted user table.
///
/// Stores one bcrypt hash per user. Authentication failures are
/// indistinguishable by cause: an unknown username and a wrong password
/// both yield `None` from [`UserStore::verify`].
#[derive(Debug, Clone)]
pub struct UserStore {
    /// Path to `users.csv`.
    path: PathBuf,
}

impl UserStore {
    /// The user table file name.
    pub const FILE_NAME: &'static str = "users.csv";

    /// Creates a store for the user table under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(Self::FILE_NAME),
        }
    }

    /// Returns the path of the persisted table.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Initializes the user table if it does not exist yet.
    ///
    /// A fresh table is seeded with a default `admin` account so the
    /// system is reachable on first start.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be created or the seed
    /// password cannot be hashed.
    pub fn init(&self) -> Result<(), PersistenceError> {
        if self.path.exists() {
            return Ok(());
        }

        warn!(
            username = DEFAULT_ADMIN_USERNAME,
            "User table missing; seeding default admin account. Change its password."
        );

        let password_hash: String = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)?;
        let admin: UserRecord = UserRecord {
            username: String::from(DEFAULT_ADMIN_USERNAME),
            password_hash,
            role: String::from(Role::Admin.as_str()),
            full_name: String::from("Administrator"),
        };
        self.write_records(&[admin])
    }

    /// Verifies a username/password pair.
    ///
    /// Returns the user's profile on success. Unknown usernames, wrong
    /// passwords and undecodable stored hashes all yield `Ok(None)`;
    /// callers cannot distinguish which occurred.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or a matched row
    /// carries a role outside the schema.
    pub fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, PersistenceError> {
        let records: Vec<UserRecord> = self.load_records()?;

        let Some(record) = records.iter().find(|r| r.username == username) else {
            // Burn a full verification so an unknown username is not
            // distinguishable from a wrong password by response time.
            let _: bool = bcrypt::verify(password, TIMING_DUMMY_HASH).unwrap_or(false);
            return Ok(None);
        };

        let matches: bool = bcrypt::verify(password, &record.password_hash).unwrap_or(false);
        if !matches {
            return Ok(None);
        }

        let role: Role =
            Role::from_str(&record.role).map_err(|err| PersistenceError::CorruptRow {
                reason: format!("user '{username}': {err}"),
            })?;

        Ok(Some(UserProfile {
            username: record.username.clone(),
            role,
            full_name: record.full_name.clone(),
        }))
    }

    /// Registers a new user.
    ///
    /// Returns `false` without touching the table if the username is
    /// already present; otherwise appends one row with the bcrypt hash
    /// of the password and returns `true`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or written, or the
    /// password cannot be hashed.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
        full_name: &str,
    ) -> Result<bool, PersistenceError> {
        self.init()?;
        let mut records: Vec<UserRecord> = self.load_records()?;

        if records.iter().any(|r| r.username == username) {
            return Ok(false);
        }

        let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        records.push(UserRecord {
            username: username.to_string(),
            password_hash,
            role: String::from(role.as_str()),
            full_name: full_name.to_string(),
        });
        self.write_records(&records)?;

        Ok(true)
    }

    /// Reads all user rows. A missing table reads as empty.
    pub(crate) fn load_records(&self) -> Result<Vec<UserRecord>, PersistenceError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut records: Vec<UserRecord> = Vec::new();
        for record in reader.records() {
            let record: StringRecord = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "Skipping malformed user row");
                    continue;
                }
            };
            let field = |idx: usize| -> String { record.get(idx).unwrap_or("").to_string() };
            let username: String = field(0);
            if username.is_empty() {
                continue;
            }
            records.push(UserRecord {
                username,
                password_hash: field(1),
                role: field(2),
                full_name: field(3),
            });
        }

        Ok(records)
    }

    fn write_records(&self, records: &[UserRecord]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path: PathBuf = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp_path)?;
            writer.write_record(USER_COLUMNS)?;
            for record in records {
                writer.write_record([
                    record.username.as_str(),
                    record.password_hash.as_str(),
                    record.role.as_str(),
                    record.full_name.as_str(),
                ])?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

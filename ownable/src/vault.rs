// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! On-disk commits of store state.

use std::fmt::{self, Debug, Formatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{tempdir, NamedTempFile, TempDir};

use crate::{Error, OwnableValueStore, Root, StoreState};

const COMMITS_DIR: &str = "commits";
const HEAD_FILE: &str = "head";

/// A directory of committed [`StoreState`]s, each filed under its [`Root`].
///
/// Commits are immutable and content addressed, so committing the same state
/// twice is a no-op. The most recent commit is tracked as the head.
pub struct Vault {
    root_dir: PathBuf,
    // Kept so the directory of an ephemeral vault lives as long as it does.
    tmp_dir: Option<TempDir>,
}

impl Debug for Vault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault")
            .field("root_dir", &self.root_dir)
            .field("ephemeral", &self.tmp_dir.is_some())
            .finish()
    }
}

impl Vault {
    /// Opens the vault at `dir`, creating it if it doesn't exist.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let root_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(root_dir.join(COMMITS_DIR))
            .map_err(Error::persistence)?;

        tracing::debug!(root_dir = %root_dir.display(), "vault opened");

        Ok(Self {
            root_dir,
            tmp_dir: None,
        })
    }

    /// Opens a vault in a fresh temporary directory, removed on drop.
    pub fn ephemeral() -> Result<Self, Error> {
        let tmp = tempdir().map_err(Error::persistence)?;
        let mut vault = Self::new(tmp.path())?;
        vault.tmp_dir = Some(tmp);
        Ok(vault)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Writes the current state of `store` and makes it the head.
    pub fn commit(&self, store: &OwnableValueStore) -> Result<Root, Error> {
        let bytes = store.state().to_archived_bytes()?;
        let root = Root::hash(&bytes);

        let path = self.commit_path(&root);
        let intact = fs::read(&path)
            .map(|existing| Root::hash(&existing) == root)
            .unwrap_or(false);
        if !intact {
            tracing::trace!("writing commit {root}");
            write_atomic(&path, &bytes)?;
        }
        write_atomic(&self.head_path(), root.to_hex().as_bytes())?;

        tracing::debug!(%root, "state committed");
        Ok(root)
    }

    /// Reads back the store committed under `root`.
    pub fn restore(&self, root: &Root) -> Result<OwnableValueStore, Error> {
        let bytes = match fs::read(self.commit_path(root)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::CommitDoesNotExist(*root))
            }
            Err(err) => return Err(Error::restore(err)),
        };

        if Root::hash(&bytes) != *root {
            tracing::warn!(%root, "commit contents do not match their root");
            return Err(Error::ValidationError);
        }

        let state = StoreState::from_archived_bytes(&bytes)?;
        tracing::debug!(%root, "state restored");
        Ok(OwnableValueStore::from_state(state))
    }

    /// The root of the last commit, if there is one.
    pub fn head(&self) -> Result<Option<Root>, Error> {
        match fs::read_to_string(self.head_path()) {
            Ok(hex) => Root::from_hex(hex.trim())
                .map(Some)
                .ok_or(Error::ValidationError),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::restore(err)),
        }
    }

    pub fn restore_head(&self) -> Result<Option<OwnableValueStore>, Error> {
        self.head()?.map(|root| self.restore(&root)).transpose()
    }

    /// Returns the roots of all commits in the vault, in ascending order.
    pub fn commits(&self) -> Result<Vec<Root>, Error> {
        let entries = fs::read_dir(self.root_dir.join(COMMITS_DIR))
            .map_err(Error::restore)?;

        let mut roots = Vec::new();
        for entry in entries {
            let entry = entry.map_err(Error::restore)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            // Only names `commit_path` would produce; this skips temporary
            // files and non canonical spellings of a root.
            match Root::from_hex(name) {
                Some(root) if root.to_hex() == name => roots.push(root),
                _ => {}
            }
        }
        roots.sort();

        Ok(roots)
    }

    /// Deletes the commit under `root`. If it was the head, there is no head
    /// afterwards.
    ///
    /// The head is read first, so an unreadable head fails the call before
    /// anything is removed.
    pub fn delete_commit(&self, root: &Root) -> Result<(), Error> {
        let head = self.head()?;

        match fs::remove_file(self.commit_path(root)) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::CommitDoesNotExist(*root))
            }
            Err(err) => return Err(Error::persistence(err)),
        }

        if head == Some(*root) {
            fs::remove_file(self.head_path()).map_err(Error::persistence)?;
        }

        tracing::debug!(%root, "commit deleted");
        Ok(())
    }

    fn commit_path(&self, root: &Root) -> PathBuf {
        self.root_dir.join(COMMITS_DIR).join(root.to_hex())
    }

    fn head_path(&self) -> PathBuf {
        self.root_dir.join(HEAD_FILE)
    }
}

/// Replaces the file at `path` with `bytes`, so that readers see either the
/// old contents or the new ones in full.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(Error::persistence)?;
    file.write_all(bytes).map_err(Error::persistence)?;
    file.as_file().sync_all().map_err(Error::persistence)?;
    file.persist(path)
        .map_err(|err| Error::persistence(err.error))?;

    Ok(())
}

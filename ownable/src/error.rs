// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;
use std::sync::Arc;
use thiserror::Error;

use ownable_uplink::{Address, CallError};
use rkyv::ser::serializers::{
    BufferSerializerError, CompositeSerializerError, FixedSizeScratchError,
};

use crate::Root;

pub type Compo = CompositeSerializerError<
    BufferSerializerError,
    FixedSizeScratchError,
    std::convert::Infallible,
>;

/// The error type returned by a store and its vault.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Commit does not exist: {0}")]
    CommitDoesNotExist(Root),
    #[error(transparent)]
    CompositeSerializerError(Arc<Compo>),
    #[error(transparent)]
    PersistenceError(Arc<io::Error>),
    #[error(transparent)]
    RestoreError(Arc<io::Error>),
    #[error("Unauthorized: caller {caller:#} is not the owner {owner:#}")]
    Unauthorized { caller: Address, owner: Address },
    #[error("ValidationError")]
    ValidationError,
}

impl Error {
    /// Whether the call was rejected because of who made it, as opposed to
    /// a failure of the host.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub(crate) fn persistence(err: io::Error) -> Self {
        Self::PersistenceError(Arc::new(err))
    }

    pub(crate) fn restore(err: io::Error) -> Self {
        Self::RestoreError(Arc::new(err))
    }
}

impl From<Compo> for Error {
    fn from(e: Compo) -> Self {
        Error::CompositeSerializerError(Arc::from(e))
    }
}

impl<A, B> From<rkyv::validation::CheckArchiveError<A, B>> for Error {
    fn from(_e: rkyv::validation::CheckArchiveError<A, B>) -> Self {
        Error::ValidationError
    }
}

impl From<Error> for CallError {
    fn from(err: Error) -> Self {
        match err {
            Error::Unauthorized { .. } => Self::Unauthorized,
            Error::CompositeSerializerError(_) => Self::Other(Self::OTHER),
            Error::CommitDoesNotExist(_) => Self::Other(-3),
            Error::ValidationError => Self::Other(-4),
            Error::PersistenceError(_) => Self::Other(-5),
            Error::RestoreError(_) => Self::Other(-6),
        }
    }
}

// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validated storage operations.
//!
//! Each variant carries exactly the inputs needed by one command, after the
//! command-line arguments have been checked for consistency.

use crate::args::AclRole;
use std::path::PathBuf;

/// A 256-bit AES key supplied by the caller.
///
/// The `Debug` implementation does not print the key material.
#[derive(Clone, PartialEq)]
pub struct EncryptionKey(pub(crate) [u8; 32]);

impl EncryptionKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EncryptionKey([redacted])")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    PrintBucketAcl {
        bucket: String,
    },
    PrintBucketAclForEntity {
        bucket: String,
        entity: String,
    },
    AddBucketAcl {
        bucket: String,
        entity: String,
        role: AclRole,
    },
    DeleteBucketAcl {
        bucket: String,
        entity: String,
    },

    PrintBucketDefaultAcl {
        bucket: String,
    },
    PrintBucketDefaultAclForEntity {
        bucket: String,
        entity: String,
    },
    AddBucketDefaultAcl {
        bucket: String,
        entity: String,
        role: AclRole,
    },
    DeleteBucketDefaultAcl {
        bucket: String,
        entity: String,
    },

    PrintBucketLabels {
        bucket: String,
    },
    AddBucketLabel {
        bucket: String,
        label: String,
        value: String,
    },
    RemoveBucketLabel {
        bucket: String,
        label: String,
    },

    ViewLifecycle {
        bucket: String,
    },
    EnableLifecycle {
        bucket: String,
        age_days: i32,
    },
    DisableLifecycle {
        bucket: String,
    },

    ListBuckets {
        project: String,
    },
    CreateBucket {
        project: String,
        bucket: String,
    },
    DeleteBucket {
        bucket: String,
    },

    GenerateEncryptionKey,
    UploadEncryptedObject {
        bucket: String,
        object: String,
        source: PathBuf,
        key: EncryptionKey,
    },
    DownloadEncryptedObject {
        bucket: String,
        object: String,
        destination: PathBuf,
        key: EncryptionKey,
    },
    RotateEncryptionKey {
        bucket: String,
        object: String,
        key: EncryptionKey,
        new_key: EncryptionKey,
    },

    ViewIamMembers {
        bucket: String,
    },
    AddIamMember {
        bucket: String,
        role: String,
        member: String,
    },
    RemoveIamMember {
        bucket: String,
        role: String,
        member: String,
    },

    PrintObjectAcl {
        bucket: String,
        object: String,
    },
    PrintObjectAclForEntity {
        bucket: String,
        object: String,
        entity: String,
    },
    AddObjectAcl {
        bucket: String,
        object: String,
        entity: String,
        role: AclRole,
    },
    DeleteObjectAcl {
        bucket: String,
        object: String,
        entity: String,
    },

    ListObjects {
        bucket: String,
        prefix: Option<String>,
    },
    UploadObject {
        bucket: String,
        object: String,
        source: PathBuf,
    },
    DownloadObject {
        bucket: String,
        object: String,
        destination: PathBuf,
    },
    MoveObject {
        bucket: String,
        object: String,
        destination: String,
    },
    CopyObject {
        bucket: String,
        object: String,
        destination: String,
    },
    MakePublic {
        bucket: String,
        object: String,
    },
    DeleteObject {
        bucket: String,
        object: String,
    },
    ObjectMetadata {
        bucket: String,
        object: String,
    },

    DownloadRequesterPays {
        project: String,
        bucket: String,
        object: String,
        destination: PathBuf,
    },
    EnableRequesterPays {
        project: String,
        bucket: String,
    },
    DisableRequesterPays {
        project: String,
        bucket: String,
    },
    RequesterPaysStatus {
        project: String,
        bucket: String,
    },

    EnableDefaultKmsKey {
        project: String,
        bucket: String,
        kms_key: String,
    },
    UploadWithKmsKey {
        project: String,
        bucket: String,
        object: String,
        source: PathBuf,
        kms_key: String,
    },
}

impl Operation {
    /// The project billed for the requests, if the command names one.
    pub fn user_project(&self) -> Option<&str> {
        match self {
            Self::DownloadRequesterPays { project, .. }
            | Self::EnableRequesterPays { project, .. }
            | Self::DisableRequesterPays { project, .. }
            | Self::RequesterPaysStatus { project, .. }
            | Self::EnableDefaultKmsKey { project, .. }
            | Self::UploadWithKmsKey { project, .. } => Some(project),
            _ => None,
        }
    }

    /// Returns true if the operation runs without contacting the service.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::GenerateEncryptionKey)
    }
}

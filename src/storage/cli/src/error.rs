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

//! Errors detected while validating the command line.
//!
//! These are raised before any client is created, so no request reaches the
//! service when the arguments are inconsistent.

/// An invalid combination of command-line arguments.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ArgsError {
    #[error("You must provide --value or --remove when including a label name.")]
    MissingLabelAction,

    #[error("Supply --create or --delete with bucket name")]
    MissingBucketAction,

    #[error("Supply a bucket and object OR --generate-key")]
    MissingEncryptionTarget,

    #[error("Supply --rotate-key, --upload-from or --download-to")]
    MissingEncryptionAction,

    #[error("--key is required when using --rotate-key")]
    MissingRotationKey,

    #[error("--key is required when using {0}")]
    MissingEncryptionKey(&'static str),

    #[error("Must provide role as an option.")]
    MissingRole,

    #[error("Supply a download path for object {0}")]
    MissingDownloadPath(String),

    #[error("Supply --enable, --disable or --check-status")]
    MissingRequesterPaysAction,

    #[error("a project is required, use --project or set GOOGLE_CLOUD_PROJECT")]
    MissingProject,

    /// The value of `--key` or `--rotate-key` is not a base64 encoded AES-256 key.
    #[error("invalid encryption key in {flag}: {reason}")]
    InvalidKey { flag: &'static str, reason: String },
}

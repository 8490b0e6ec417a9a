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

use crate::error::ArgsError;
use crate::operation::{EncryptionKey, Operation};
use base64::{Engine as _, engine::general_purpose};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line options for the storage tool.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// Enable informational logs and trace the client requests.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Send requests to this endpoint instead of the default service endpoint.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Manage the ACL for Cloud Storage buckets.
    BucketAcl(BucketAclArgs),
    /// Manage the default ACL for Cloud Storage buckets.
    BucketDefaultAcl(BucketAclArgs),
    /// Manage Cloud Storage bucket labels.
    BucketLabels(BucketLabelsArgs),
    /// Manage the lifecycle configuration of a Cloud Storage bucket.
    BucketLifecycle(BucketLifecycleArgs),
    /// Manage Cloud Storage buckets.
    Buckets(BucketsArgs),
    /// Upload and download Cloud Storage objects with encryption.
    Encryption(EncryptionArgs),
    /// Manage IAM for Storage.
    Iam(IamArgs),
    /// Manage the ACL for Cloud Storage objects.
    ObjectAcl(ObjectAclArgs),
    /// Manage Cloud Storage objects.
    Objects(ObjectsArgs),
    /// Manage Cloud Storage requester pays buckets.
    RequesterPays(RequesterPaysArgs),
    /// Enable default KMS encryption for a bucket.
    EnableDefaultKmsKey(EnableDefaultKmsKeyArgs),
    /// Upload a file using KMS encryption.
    UploadWithKmsKey(UploadWithKmsKeyArgs),
}

impl Command {
    /// Checks the argument combination and returns the operation to run.
    pub fn into_operation(self) -> Result<Operation, ArgsError> {
        match self {
            Self::BucketAcl(a) => Ok(a.bucket_acl()),
            Self::BucketDefaultAcl(a) => Ok(a.default_acl()),
            Self::BucketLabels(a) => a.into_operation(),
            Self::BucketLifecycle(a) => Ok(a.into_operation()),
            Self::Buckets(a) => a.into_operation(),
            Self::Encryption(a) => a.into_operation(),
            Self::Iam(a) => a.into_operation(),
            Self::ObjectAcl(a) => Ok(a.into_operation()),
            Self::Objects(a) => Ok(a.into_operation()),
            Self::RequesterPays(a) => a.into_operation(),
            Self::EnableDefaultKmsKey(a) => Ok(Operation::EnableDefaultKmsKey {
                project: a.project,
                bucket: a.bucket,
                kms_key: a.kms_key_name,
            }),
            Self::UploadWithKmsKey(a) => Ok(Operation::UploadWithKmsKey {
                project: a.project,
                bucket: a.bucket,
                object: a.object,
                source: a.upload_from,
                kms_key: a.kms_key_name,
            }),
        }
    }
}

/// The roles in a bucket or object ACL entry.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum AclRole {
    #[value(name = "OWNER")]
    Owner,
    #[value(name = "READER")]
    Reader,
    #[value(name = "WRITER")]
    Writer,
}

impl AclRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Reader => "READER",
            Self::Writer => "WRITER",
        }
    }
}

/// Options shared by the ACL commands.
#[derive(Clone, Debug, clap::Args)]
pub struct AclOptions {
    /// Add or filter by a user, for example `user-jane@example.com`.
    #[arg(long)]
    pub entity: Option<String>,

    /// The role granted by a new ACL entry.
    #[arg(long, value_enum, ignore_case = true, default_value_t = AclRole::Reader)]
    pub role: AclRole,

    /// Create an ACL entry for the supplied entity.
    #[arg(long, default_value_t = false)]
    pub create: bool,

    /// Remove the supplied entity from the ACL.
    #[arg(long, default_value_t = false)]
    pub delete: bool,
}

#[derive(Clone, Debug, clap::Args)]
pub struct BucketAclArgs {
    /// The Cloud Storage bucket name.
    pub bucket: String,

    #[command(flatten)]
    pub acl: AclOptions,
}

impl BucketAclArgs {
    fn bucket_acl(self) -> Operation {
        let bucket = self.bucket;
        match self.acl {
            AclOptions {
                entity: None, ..
            } => Operation::PrintBucketAcl { bucket },
            AclOptions {
                entity: Some(entity),
                create: true,
                role,
                ..
            } => Operation::AddBucketAcl {
                bucket,
                entity,
                role,
            },
            AclOptions {
                entity: Some(entity),
                delete: true,
                ..
            } => Operation::DeleteBucketAcl { bucket, entity },
            AclOptions {
                entity: Some(entity),
                ..
            } => Operation::PrintBucketAclForEntity { bucket, entity },
        }
    }

    fn default_acl(self) -> Operation {
        let bucket = self.bucket;
        match self.acl {
            AclOptions {
                entity: None, ..
            } => Operation::PrintBucketDefaultAcl { bucket },
            AclOptions {
                entity: Some(entity),
                create: true,
                role,
                ..
            } => Operation::AddBucketDefaultAcl {
                bucket,
                entity,
                role,
            },
            AclOptions {
                entity: Some(entity),
                delete: true,
                ..
            } => Operation::DeleteBucketDefaultAcl { bucket, entity },
            AclOptions {
                entity: Some(entity),
                ..
            } => Operation::PrintBucketDefaultAclForEntity { bucket, entity },
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct ObjectAclArgs {
    /// The Cloud Storage bucket name.
    pub bucket: String,

    /// The Cloud Storage object name.
    pub object: String,

    #[command(flatten)]
    pub acl: AclOptions,
}

impl ObjectAclArgs {
    fn into_operation(self) -> Operation {
        let (bucket, object) = (self.bucket, self.object);
        match self.acl {
            AclOptions {
                entity: None, ..
            } => Operation::PrintObjectAcl { bucket, object },
            AclOptions {
                entity: Some(entity),
                create: true,
                role,
                ..
            } => Operation::AddObjectAcl {
                bucket,
                object,
                entity,
                role,
            },
            AclOptions {
                entity: Some(entity),
                delete: true,
                ..
            } => Operation::DeleteObjectAcl {
                bucket,
                object,
                entity,
            },
            AclOptions {
                entity: Some(entity),
                ..
            } => Operation::PrintObjectAclForEntity {
                bucket,
                object,
                entity,
            },
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct BucketLabelsArgs {
    /// The Cloud Storage bucket name.
    pub bucket: String,

    /// The label to set or remove.
    pub label: Option<String>,

    /// Set the value of the label.
    #[arg(long)]
    pub value: Option<String>,

    /// Remove the label from the bucket.
    #[arg(long, default_value_t = false)]
    pub remove: bool,
}

impl BucketLabelsArgs {
    fn into_operation(self) -> Result<Operation, ArgsError> {
        let bucket = self.bucket;
        let Some(label) = self.label else {
            return Ok(Operation::PrintBucketLabels { bucket });
        };
        match (self.value, self.remove) {
            (Some(value), _) => Ok(Operation::AddBucketLabel {
                bucket,
                label,
                value,
            }),
            (None, true) => Ok(Operation::RemoveBucketLabel { bucket, label }),
            (None, false) => Err(ArgsError::MissingLabelAction),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct BucketLifecycleArgs {
    /// The Cloud Storage bucket name.
    pub bucket: String,

    /// Delete objects older than `--age-days`.
    #[arg(long, default_value_t = false, conflicts_with = "disable")]
    pub enable: bool,

    /// Remove all lifecycle rules from the bucket.
    #[arg(long, default_value_t = false)]
    pub disable: bool,

    /// The age, in days, used by the rule created with `--enable`.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(0..))]
    pub age_days: i32,
}

impl BucketLifecycleArgs {
    fn into_operation(self) -> Operation {
        let bucket = self.bucket;
        if self.enable {
            Operation::EnableLifecycle {
                bucket,
                age_days: self.age_days,
            }
        } else if self.disable {
            Operation::DisableLifecycle { bucket }
        } else {
            Operation::ViewLifecycle { bucket }
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct BucketsArgs {
    /// The Cloud Storage bucket name.
    pub bucket: Option<String>,

    /// Create the bucket.
    #[arg(long, default_value_t = false)]
    pub create: bool,

    /// Delete the bucket.
    #[arg(long, default_value_t = false)]
    pub delete: bool,

    /// The project that owns the buckets.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project: Option<String>,
}

impl BucketsArgs {
    fn into_operation(self) -> Result<Operation, ArgsError> {
        let project = self.project;
        let Some(bucket) = self.bucket else {
            return Ok(Operation::ListBuckets {
                project: project.ok_or(ArgsError::MissingProject)?,
            });
        };
        if self.create {
            return Ok(Operation::CreateBucket {
                project: project.ok_or(ArgsError::MissingProject)?,
                bucket,
            });
        }
        if self.delete {
            return Ok(Operation::DeleteBucket { bucket });
        }
        Err(ArgsError::MissingBucketAction)
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct EncryptionArgs {
    /// The Cloud Storage bucket name.
    pub bucket: Option<String>,

    /// The Cloud Storage object name.
    pub object: Option<String>,

    /// Path to the file to upload.
    #[arg(long)]
    pub upload_from: Option<PathBuf>,

    /// Path to store the downloaded file.
    #[arg(long)]
    pub download_to: Option<PathBuf>,

    /// The base64 encoded AES-256 key protecting the object.
    #[arg(long)]
    pub key: Option<String>,

    /// A new base64 encoded AES-256 key for the object.
    #[arg(long)]
    pub rotate_key: Option<String>,

    /// Generate a new encryption key.
    #[arg(long, default_value_t = false)]
    pub generate_key: bool,
}

impl EncryptionArgs {
    fn into_operation(self) -> Result<Operation, ArgsError> {
        if self.generate_key {
            return Ok(Operation::GenerateEncryptionKey);
        }
        let (Some(bucket), Some(object)) = (self.bucket, self.object) else {
            return Err(ArgsError::MissingEncryptionTarget);
        };
        if let Some(source) = self.upload_from {
            let key = self
                .key
                .ok_or(ArgsError::MissingEncryptionKey("--upload-from"))?;
            return Ok(Operation::UploadEncryptedObject {
                bucket,
                object,
                source,
                key: parse_key("--key", &key)?,
            });
        }
        if let Some(destination) = self.download_to {
            let key = self
                .key
                .ok_or(ArgsError::MissingEncryptionKey("--download-to"))?;
            return Ok(Operation::DownloadEncryptedObject {
                bucket,
                object,
                destination,
                key: parse_key("--key", &key)?,
            });
        }
        if let Some(new_key) = self.rotate_key {
            let key = self.key.ok_or(ArgsError::MissingRotationKey)?;
            return Ok(Operation::RotateEncryptionKey {
                bucket,
                object,
                key: parse_key("--key", &key)?,
                new_key: parse_key("--rotate-key", &new_key)?,
            });
        }
        Err(ArgsError::MissingEncryptionAction)
    }
}

/// Decodes a base64 encoded AES-256 key.
pub fn parse_key(flag: &'static str, value: &str) -> Result<EncryptionKey, ArgsError> {
    let bytes = general_purpose::STANDARD
        .decode(value)
        .map_err(|e| ArgsError::InvalidKey {
            flag,
            reason: e.to_string(),
        })?;
    let key: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| ArgsError::InvalidKey {
        flag,
        reason: format!("expected 32 bytes, got {}", v.len()),
    })?;
    Ok(EncryptionKey(key))
}

#[derive(Clone, Debug, clap::Args)]
pub struct IamArgs {
    /// The bucket that you want to change IAM for.
    pub bucket: String,

    /// The role to grant or revoke, for example `roles/storage.objectViewer`.
    #[arg(long)]
    pub role: Option<String>,

    /// The member to add with the role, for example `user:jane@example.com`.
    #[arg(long)]
    pub add_member: Option<String>,

    /// The member to remove from the role.
    #[arg(long)]
    pub remove_member: Option<String>,
}

impl IamArgs {
    fn into_operation(self) -> Result<Operation, ArgsError> {
        let bucket = self.bucket;
        if let Some(member) = self.add_member {
            let role = self.role.ok_or(ArgsError::MissingRole)?;
            return Ok(Operation::AddIamMember {
                bucket,
                role,
                member,
            });
        }
        if let Some(member) = self.remove_member {
            let role = self.role.ok_or(ArgsError::MissingRole)?;
            return Ok(Operation::RemoveIamMember {
                bucket,
                role,
                member,
            });
        }
        Ok(Operation::ViewIamMembers { bucket })
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct ObjectsArgs {
    /// The Cloud Storage bucket name.
    pub bucket: String,

    /// The Cloud Storage object name.
    pub object: Option<String>,

    /// Path to the file to upload.
    #[arg(long)]
    pub upload_from: Option<PathBuf>,

    /// Path to store the downloaded file.
    #[arg(long)]
    pub download_to: Option<PathBuf>,

    /// New name for the object.
    #[arg(long)]
    pub move_to: Option<String>,

    /// Name of the copy.
    #[arg(long)]
    pub copy_to: Option<String>,

    /// Make the object publicly readable.
    #[arg(long, default_value_t = false)]
    pub make_public: bool,

    /// Delete the object.
    #[arg(long, default_value_t = false)]
    pub delete: bool,

    /// List objects matching a prefix.
    #[arg(long)]
    pub prefix: Option<String>,
}

impl ObjectsArgs {
    fn into_operation(self) -> Operation {
        let bucket = self.bucket;
        let Some(object) = self.object else {
            return Operation::ListObjects {
                bucket,
                prefix: self.prefix,
            };
        };
        if let Some(source) = self.upload_from {
            return Operation::UploadObject {
                bucket,
                object,
                source,
            };
        }
        if let Some(destination) = self.download_to {
            return Operation::DownloadObject {
                bucket,
                object,
                destination,
            };
        }
        if let Some(destination) = self.move_to {
            return Operation::MoveObject {
                bucket,
                object,
                destination,
            };
        }
        if let Some(destination) = self.copy_to {
            return Operation::CopyObject {
                bucket,
                object,
                destination,
            };
        }
        if self.make_public {
            return Operation::MakePublic { bucket, object };
        }
        if self.delete {
            return Operation::DeleteObject { bucket, object };
        }
        Operation::ObjectMetadata { bucket, object }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct RequesterPaysArgs {
    /// Your billable Google Cloud project ID.
    pub project: String,

    /// The Cloud Storage requester pays bucket name.
    pub bucket: String,

    /// The Cloud Storage requester pays object name.
    pub object: Option<String>,

    /// Path to store the downloaded file.
    pub download_to: Option<PathBuf>,

    /// Enable requester pays on the bucket.
    #[arg(long, default_value_t = false)]
    pub enable: bool,

    /// Disable requester pays on the bucket.
    #[arg(long, default_value_t = false)]
    pub disable: bool,

    /// Check the requester pays status of the bucket.
    #[arg(long, default_value_t = false)]
    pub check_status: bool,
}

impl RequesterPaysArgs {
    fn into_operation(self) -> Result<Operation, ArgsError> {
        let (project, bucket) = (self.project, self.bucket);
        if let Some(object) = self.object {
            let Some(destination) = self.download_to else {
                return Err(ArgsError::MissingDownloadPath(object));
            };
            return Ok(Operation::DownloadRequesterPays {
                project,
                bucket,
                object,
                destination,
            });
        }
        if self.enable {
            return Ok(Operation::EnableRequesterPays { project, bucket });
        }
        if self.disable {
            return Ok(Operation::DisableRequesterPays { project, bucket });
        }
        if self.check_status {
            return Ok(Operation::RequesterPaysStatus { project, bucket });
        }
        Err(ArgsError::MissingRequesterPaysAction)
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct EnableDefaultKmsKeyArgs {
    /// Your billable Google Cloud project ID.
    pub project: String,

    /// The Cloud Storage bucket name.
    pub bucket: String,

    /// KMS key used as the default key of the bucket.
    ///
    /// For example:
    /// `projects/p/locations/l/keyRings/r/cryptoKeys/k`
    pub kms_key_name: String,
}

#[derive(Clone, Debug, clap::Args)]
pub struct UploadWithKmsKeyArgs {
    /// Your billable Google Cloud project ID.
    pub project: String,

    /// The Cloud Storage bucket name.
    pub bucket: String,

    /// The Cloud Storage object name.
    pub object: String,

    /// Path to the file to upload.
    pub upload_from: PathBuf,

    /// KMS key used to encrypt the object server side.
    pub kms_key_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const KEY: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";
    const NEW_KEY: &str = "ICEiIyQlJicoKSorLC0uLzAxMjM0NTY3ODk6Ozw9Pj8=";

    fn parse(input: &[&str]) -> anyhow::Result<Result<Operation, ArgsError>> {
        let args = Args::try_parse_from(input)?;
        Ok(args.command.into_operation())
    }

    #[test]
    fn global_options() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "storage",
            "buckets",
            "my-bucket",
            "--delete",
            "--verbose",
            "--endpoint=http://localhost:9000",
        ])?;
        assert!(args.verbose);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:9000"));
        Ok(())
    }

    #[test]
    fn bucket_acl() -> anyhow::Result<()> {
        let got = parse(&["storage", "bucket-acl", "my-bucket"])?;
        assert_eq!(
            got,
            Ok(Operation::PrintBucketAcl {
                bucket: "my-bucket".into()
            })
        );

        let got = parse(&["storage", "bucket-acl", "my-bucket", "--entity=allUsers"])?;
        assert_eq!(
            got,
            Ok(Operation::PrintBucketAclForEntity {
                bucket: "my-bucket".into(),
                entity: "allUsers".into(),
            })
        );

        let got = parse(&[
            "storage",
            "bucket-acl",
            "my-bucket",
            "--entity=allUsers",
            "--create",
        ])?;
        assert_eq!(
            got,
            Ok(Operation::AddBucketAcl {
                bucket: "my-bucket".into(),
                entity: "allUsers".into(),
                role: AclRole::Reader,
            })
        );

        let got = parse(&[
            "storage",
            "bucket-acl",
            "my-bucket",
            "--entity=allUsers",
            "--delete",
        ])?;
        assert_eq!(
            got,
            Ok(Operation::DeleteBucketAcl {
                bucket: "my-bucket".into(),
                entity: "allUsers".into(),
            })
        );
        Ok(())
    }

    #[test_case("OWNER", AclRole::Owner)]
    #[test_case("writer", AclRole::Writer)]
    #[test_case("Reader", AclRole::Reader)]
    fn acl_role(input: &str, want: AclRole) -> anyhow::Result<()> {
        let role = format!("--role={input}");
        let got = parse(&[
            "storage",
            "bucket-default-acl",
            "my-bucket",
            "--entity=user-jane@example.com",
            "--create",
            &role,
        ])?;
        assert_eq!(
            got,
            Ok(Operation::AddBucketDefaultAcl {
                bucket: "my-bucket".into(),
                entity: "user-jane@example.com".into(),
                role: want,
            })
        );
        Ok(())
    }

    #[test]
    fn acl_role_invalid() {
        let got = Args::try_parse_from([
            "storage",
            "bucket-acl",
            "my-bucket",
            "--entity=allUsers",
            "--role=ADMIN",
        ]);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn object_acl() -> anyhow::Result<()> {
        let got = parse(&[
            "storage",
            "object-acl",
            "my-bucket",
            "my-object",
            "--entity=allAuthenticatedUsers",
            "--delete",
        ])?;
        assert_eq!(
            got,
            Ok(Operation::DeleteObjectAcl {
                bucket: "my-bucket".into(),
                object: "my-object".into(),
                entity: "allAuthenticatedUsers".into(),
            })
        );

        let got = Args::try_parse_from(["storage", "object-acl", "my-bucket"]);
        assert!(got.is_err(), "object is required {got:?}");
        Ok(())
    }

    #[test]
    fn bucket_labels() -> anyhow::Result<()> {
        let got = parse(&["storage", "bucket-labels", "my-bucket"])?;
        assert_eq!(
            got,
            Ok(Operation::PrintBucketLabels {
                bucket: "my-bucket".into()
            })
        );

        let got = parse(&["storage", "bucket-labels", "my-bucket", "env", "--value=prod"])?;
        assert_eq!(
            got,
            Ok(Operation::AddBucketLabel {
                bucket: "my-bucket".into(),
                label: "env".into(),
                value: "prod".into(),
            })
        );

        let got = parse(&["storage", "bucket-labels", "my-bucket", "env", "--remove"])?;
        assert_eq!(
            got,
            Ok(Operation::RemoveBucketLabel {
                bucket: "my-bucket".into(),
                label: "env".into(),
            })
        );
        Ok(())
    }

    #[test]
    fn bucket_labels_requires_action() -> anyhow::Result<()> {
        let got = parse(&["storage", "bucket-labels", "my-bucket", "env"])?;
        assert_eq!(got, Err(ArgsError::MissingLabelAction));
        Ok(())
    }

    #[test_case(&["storage", "bucket-lifecycle", "b"], Operation::ViewLifecycle { bucket: "b".into() })]
    #[test_case(&["storage", "bucket-lifecycle", "b", "--enable"], Operation::EnableLifecycle { bucket: "b".into(), age_days: 100 })]
    #[test_case(&["storage", "bucket-lifecycle", "b", "--enable", "--age-days=7"], Operation::EnableLifecycle { bucket: "b".into(), age_days: 7 })]
    #[test_case(&["storage", "bucket-lifecycle", "b", "--disable"], Operation::DisableLifecycle { bucket: "b".into() })]
    fn bucket_lifecycle(input: &[&str], want: Operation) -> anyhow::Result<()> {
        let got = parse(input)?;
        assert_eq!(got, Ok(want));
        Ok(())
    }

    #[test]
    fn bucket_lifecycle_conflicts() {
        let got = Args::try_parse_from(["storage", "bucket-lifecycle", "b", "--enable", "--disable"]);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn buckets() -> anyhow::Result<()> {
        let got = parse(&["storage", "buckets", "--project=my-project"])?;
        assert_eq!(
            got,
            Ok(Operation::ListBuckets {
                project: "my-project".into()
            })
        );

        let got = parse(&[
            "storage",
            "buckets",
            "my-bucket",
            "--create",
            "--project=my-project",
        ])?;
        assert_eq!(
            got,
            Ok(Operation::CreateBucket {
                project: "my-project".into(),
                bucket: "my-bucket".into(),
            })
        );

        let got = parse(&["storage", "buckets", "my-bucket", "--delete"])?;
        assert_eq!(
            got,
            Ok(Operation::DeleteBucket {
                bucket: "my-bucket".into()
            })
        );

        let got = parse(&["storage", "buckets", "my-bucket"])?;
        assert_eq!(got, Err(ArgsError::MissingBucketAction));
        Ok(())
    }

    #[test]
    fn generate_key_needs_no_bucket() -> anyhow::Result<()> {
        let got = parse(&["storage", "encryption", "--generate-key"])?;
        assert_eq!(got, Ok(Operation::GenerateEncryptionKey));
        Ok(())
    }

    #[test]
    fn encryption_requires_target() -> anyhow::Result<()> {
        let got = parse(&["storage", "encryption", "my-bucket"])?;
        assert_eq!(got, Err(ArgsError::MissingEncryptionTarget));
        Ok(())
    }

    #[test]
    fn encryption_requires_action() -> anyhow::Result<()> {
        let key = format!("--key={KEY}");
        let got = parse(&["storage", "encryption", "my-bucket", "my-object", &key])?;
        assert_eq!(got, Err(ArgsError::MissingEncryptionAction));
        Ok(())
    }

    #[test]
    fn rotate_key_requires_key() -> anyhow::Result<()> {
        let rotate = format!("--rotate-key={NEW_KEY}");
        let got = parse(&["storage", "encryption", "my-bucket", "my-object", &rotate])?;
        assert_eq!(got, Err(ArgsError::MissingRotationKey));
        Ok(())
    }

    #[test]
    fn rotate_key() -> anyhow::Result<()> {
        let key = format!("--key={KEY}");
        let rotate = format!("--rotate-key={NEW_KEY}");
        let got = parse(&[
            "storage",
            "encryption",
            "my-bucket",
            "my-object",
            &key,
            &rotate,
        ])?;
        let want_key: [u8; 32] = std::array::from_fn(|i| i as u8);
        let want_new_key: [u8; 32] = std::array::from_fn(|i| 32 + i as u8);
        assert_eq!(
            got,
            Ok(Operation::RotateEncryptionKey {
                bucket: "my-bucket".into(),
                object: "my-object".into(),
                key: EncryptionKey(want_key),
                new_key: EncryptionKey(want_new_key),
            })
        );
        Ok(())
    }

    #[test]
    fn upload_encrypted() -> anyhow::Result<()> {
        let key = format!("--key={KEY}");
        let got = parse(&[
            "storage",
            "encryption",
            "my-bucket",
            "my-object",
            "--upload-from=data.bin",
            &key,
        ])?;
        assert!(
            matches!(got, Ok(Operation::UploadEncryptedObject { ref source, .. }) if source == &PathBuf::from("data.bin")),
            "{got:?}"
        );

        let got = parse(&[
            "storage",
            "encryption",
            "my-bucket",
            "my-object",
            "--download-to=data.bin",
        ])?;
        assert_eq!(got, Err(ArgsError::MissingEncryptionKey("--download-to")));
        Ok(())
    }

    #[test_case("not base64!")]
    #[test_case("AAECAwQ=")]
    fn invalid_key(input: &str) {
        let got = parse_key("--key", input);
        assert!(
            matches!(got, Err(ArgsError::InvalidKey { flag: "--key", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn iam() -> anyhow::Result<()> {
        let got = parse(&["storage", "iam", "my-bucket"])?;
        assert_eq!(
            got,
            Ok(Operation::ViewIamMembers {
                bucket: "my-bucket".into()
            })
        );

        let got = parse(&[
            "storage",
            "iam",
            "my-bucket",
            "--role=roles/storage.objectViewer",
            "--add-member=user:jane@example.com",
        ])?;
        assert_eq!(
            got,
            Ok(Operation::AddIamMember {
                bucket: "my-bucket".into(),
                role: "roles/storage.objectViewer".into(),
                member: "user:jane@example.com".into(),
            })
        );
        Ok(())
    }

    #[test_case("--add-member=user:jane@example.com")]
    #[test_case("--remove-member=user:jane@example.com")]
    fn iam_requires_role(member: &str) -> anyhow::Result<()> {
        let got = parse(&["storage", "iam", "my-bucket", member])?;
        assert_eq!(got, Err(ArgsError::MissingRole));
        Ok(())
    }

    #[test]
    fn objects_list() -> anyhow::Result<()> {
        let got = parse(&["storage", "objects", "my-bucket"])?;
        assert_eq!(
            got,
            Ok(Operation::ListObjects {
                bucket: "my-bucket".into(),
                prefix: None,
            })
        );

        let got = parse(&["storage", "objects", "my-bucket", "--prefix=logs/"])?;
        assert_eq!(
            got,
            Ok(Operation::ListObjects {
                bucket: "my-bucket".into(),
                prefix: Some("logs/".into()),
            })
        );
        Ok(())
    }

    #[test_case(&["--upload-from=a.txt"], Operation::UploadObject { bucket: "b".into(), object: "o".into(), source: "a.txt".into() })]
    #[test_case(&["--download-to=a.txt"], Operation::DownloadObject { bucket: "b".into(), object: "o".into(), destination: "a.txt".into() })]
    #[test_case(&["--move-to=n"], Operation::MoveObject { bucket: "b".into(), object: "o".into(), destination: "n".into() })]
    #[test_case(&["--copy-to=n"], Operation::CopyObject { bucket: "b".into(), object: "o".into(), destination: "n".into() })]
    #[test_case(&["--make-public"], Operation::MakePublic { bucket: "b".into(), object: "o".into() })]
    #[test_case(&["--delete"], Operation::DeleteObject { bucket: "b".into(), object: "o".into() })]
    #[test_case(&[], Operation::ObjectMetadata { bucket: "b".into(), object: "o".into() })]
    #[test_case(&["--move-to=n", "--delete"], Operation::MoveObject { bucket: "b".into(), object: "o".into(), destination: "n".into() })]
    fn objects(options: &[&str], want: Operation) -> anyhow::Result<()> {
        let mut input = vec!["storage", "objects", "b", "o"];
        input.extend_from_slice(options);
        let got = parse(&input)?;
        assert_eq!(got, Ok(want));
        Ok(())
    }

    #[test]
    fn requester_pays() -> anyhow::Result<()> {
        let got = parse(&["storage", "requester-pays", "p", "b", "--enable"])?;
        assert_eq!(
            got,
            Ok(Operation::EnableRequesterPays {
                project: "p".into(),
                bucket: "b".into(),
            })
        );

        let got = parse(&["storage", "requester-pays", "p", "b", "o", "out.txt"])?;
        assert_eq!(
            got,
            Ok(Operation::DownloadRequesterPays {
                project: "p".into(),
                bucket: "b".into(),
                object: "o".into(),
                destination: "out.txt".into(),
            })
        );

        let got = parse(&["storage", "requester-pays", "p", "b", "o"])?;
        assert_eq!(got, Err(ArgsError::MissingDownloadPath("o".into())));

        let got = parse(&["storage", "requester-pays", "p", "b"])?;
        assert_eq!(got, Err(ArgsError::MissingRequesterPaysAction));
        Ok(())
    }

    #[test]
    fn kms() -> anyhow::Result<()> {
        let got = parse(&["storage", "enable-default-kms-key", "p", "b", "k"])?;
        assert_eq!(
            got,
            Ok(Operation::EnableDefaultKmsKey {
                project: "p".into(),
                bucket: "b".into(),
                kms_key: "k".into(),
            })
        );

        let got = parse(&["storage", "upload-with-kms-key", "p", "b", "o", "f.txt", "k"])?;
        assert_eq!(
            got,
            Ok(Operation::UploadWithKmsKey {
                project: "p".into(),
                bucket: "b".into(),
                object: "o".into(),
                source: "f.txt".into(),
                kms_key: "k".into(),
            })
        );

        let got = Args::try_parse_from(["storage", "upload-with-kms-key", "p", "b", "o", "f.txt"]);
        assert!(got.is_err(), "kms-key-name is required {got:?}");
        Ok(())
    }
}

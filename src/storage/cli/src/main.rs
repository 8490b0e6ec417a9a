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

use clap::Parser;
use google_cloud_auth::credentials::Builder as CredentialsBuilder;
use google_cloud_storage::client::{Storage, StorageControl};
use storage_cli::args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing(&args)?;
    tracing::info!("Configuration: {args:?}");

    let operation = args.command.into_operation()?;
    if operation.is_local() {
        storage_cli::encryption::generate_key();
        return Ok(());
    }

    let credentials = match operation.user_project() {
        Some(project) => CredentialsBuilder::default()
            .with_quota_project_id(project)
            .build()?,
        None => CredentialsBuilder::default().build()?,
    };

    let builder = StorageControl::builder().with_credentials(credentials.clone());
    let builder = args
        .endpoint
        .iter()
        .fold(builder, |b, v| b.with_endpoint(v));
    let builder = if args.verbose { builder.with_tracing() } else { builder };
    let control = builder.build().await?;

    let builder = Storage::builder().with_credentials(credentials);
    let storage = args
        .endpoint
        .iter()
        .fold(builder, |b, v| b.with_endpoint(v))
        .build()
        .await?;

    storage_cli::run(operation, &control, &storage).await
}

fn enable_tracing(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let level = if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

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
use google_cloud_speech_v2::client::Speech;
use speech_samples::args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing(&args)?;
    tracing::info!("Configuration: {args:?}");

    let builder = args
        .endpoint()
        .into_iter()
        .fold(Speech::builder(), |b, v| b.with_endpoint(v));
    let builder = if args.verbose { builder.with_tracing() } else { builder };
    let client = builder.build().await?;
    speech_samples::transcribe(&client, &args).await?;
    Ok(())
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

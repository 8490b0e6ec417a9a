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

//! Transcribe a local audio file with Cloud Speech-to-Text.

pub mod args;

use anyhow::Context;
use args::Args;
use google_cloud_speech_v2 as speech;
use speech::model::{ExplicitDecodingConfig, RecognitionConfig, RecognitionFeatures};

pub const DESCRIPTION: &str = concat!(
    "Transcribe a local audio file using the Cloud Speech-to-Text API.",
    " The audio is sent inline, so it must be short enough for synchronous",
    " recognition."
);

/// The most likely alternative for one segment of the audio.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    pub transcript: String,
    pub confidence: f32,
}

/// Sends the audio file named in `args` for recognition and prints the most
/// likely transcript of each segment.
pub async fn transcribe(
    client: &speech::client::Speech,
    args: &Args,
) -> anyhow::Result<Vec<Transcript>> {
    let content = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("cannot read {}", args.path.display()))?;
    tracing::info!(
        "sending {} bytes from {} to {}",
        content.len(),
        args.path.display(),
        args.recognizer()
    );

    let config = RecognitionConfig::new()
        .set_language_codes([args.language_code.as_str()])
        .set_model(&args.model)
        .set_features(
            RecognitionFeatures::new().set_enable_automatic_punctuation(!args.no_punctuation),
        )
        .set_explicit_decoding_config(
            ExplicitDecodingConfig::new()
                .set_encoding(args.encoding)
                .set_sample_rate_hertz(args.sample_rate)
                .set_audio_channel_count(args.channels),
        );
    let response = client
        .recognize()
        .set_recognizer(args.recognizer())
        .set_config(config)
        .set_content(bytes::Bytes::from(content))
        .send()
        .await?;

    let transcripts = response
        .results
        .into_iter()
        .filter_map(|r| r.alternatives.into_iter().next())
        .map(|a| Transcript {
            transcript: a.transcript,
            confidence: a.confidence,
        })
        .collect::<Vec<_>>();
    for t in &transcripts {
        println!("Transcript: {}", t.transcript);
        println!("Confidence: {}", t.confidence);
    }
    Ok(transcripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use google_cloud_gax as gax;
    use speech::model::explicit_decoding_config::AudioEncoding;
    use speech::model::{RecognizeResponse, SpeechRecognitionAlternative, SpeechRecognitionResult};

    mockall::mock! {
        #[derive(Debug)]
        Speech {}
        impl speech::stub::Speech for Speech {
            async fn recognize(&self, req: speech::model::RecognizeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<speech::model::RecognizeResponse>>;
        }
    }

    fn parse(path: &std::path::Path, options: &[&str]) -> anyhow::Result<Args> {
        let mut input = vec![
            "transcribe".to_string(),
            "my-project".to_string(),
            path.display().to_string(),
        ];
        input.extend(options.iter().map(|o| o.to_string()));
        Ok(Args::try_parse_from(input)?)
    }

    fn alternative(transcript: &str, confidence: f32) -> SpeechRecognitionAlternative {
        SpeechRecognitionAlternative::new()
            .set_transcript(transcript)
            .set_confidence(confidence)
    }

    #[tokio::test]
    async fn request_and_results() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("audio.raw");
        std::fs::write(&path, b"not really audio")?;
        let args = parse(&path, &[])?;

        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .withf(|r, _| {
                let config = r.config.clone().unwrap_or_default();
                let decoding = config.explicit_decoding_config().cloned();
                let punctuation = config
                    .features
                    .as_ref()
                    .is_some_and(|f| f.enable_automatic_punctuation);
                r.recognizer == "projects/my-project/locations/global/recognizers/_"
                    && r.content().is_some_and(|c| c[..] == b"not really audio"[..])
                    && config.language_codes == vec!["en-US".to_string()]
                    && config.model == "long"
                    && punctuation
                    && decoding.is_some_and(|d| {
                        d.encoding == AudioEncoding::Linear16
                            && d.sample_rate_hertz == 32000
                            && d.audio_channel_count == 1
                    })
            })
            .return_once(|_, _| {
                Ok(gax::response::Response::from(
                    RecognizeResponse::new().set_results([
                        SpeechRecognitionResult::new().set_alternatives([
                            alternative("How old is the Brooklyn Bridge?", 0.98),
                            alternative("How old is the Brooklyn bridge", 0.5),
                        ]),
                        SpeechRecognitionResult::new(),
                        SpeechRecognitionResult::new()
                            .set_alternatives([alternative("It opened in 1883.", 0.9)]),
                    ]),
                ))
            });
        let client = speech::client::Speech::from_stub(mock);

        let got = transcribe(&client, &args).await?;
        assert_eq!(
            got,
            vec![
                Transcript {
                    transcript: "How old is the Brooklyn Bridge?".into(),
                    confidence: 0.98
                },
                Transcript {
                    transcript: "It opened in 1883.".into(),
                    confidence: 0.9
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_punctuation() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("audio.flac");
        std::fs::write(&path, b"flac")?;
        let args = parse(&path, &["--no-punctuation", "--encoding=flac"])?;

        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .withf(|r, _| {
                let config = r.config.clone().unwrap_or_default();
                !config
                    .features
                    .as_ref()
                    .is_some_and(|f| f.enable_automatic_punctuation)
                    && config
                        .explicit_decoding_config()
                        .is_some_and(|d| d.encoding == AudioEncoding::Flac)
            })
            .return_once(|_, _| Ok(gax::response::Response::from(RecognizeResponse::new())));
        let client = speech::client::Speech::from_stub(mock);

        let got = transcribe(&client, &args).await?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing.wav");
        let args = parse(&path, &[])?;

        let mut mock = MockSpeech::new();
        mock.expect_recognize().never();
        let client = speech::client::Speech::from_stub(mock);

        let got = transcribe(&client, &args).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("audio.wav");
        std::fs::write(&path, b"audio")?;
        let args = parse(&path, &[])?;

        let mut mock = MockSpeech::new();
        mock.expect_recognize().return_once(|_, _| {
            use gax::error::Error;
            use gax::error::rpc::{Code, Status};
            let status = Status::default()
                .set_code(Code::InvalidArgument)
                .set_message("bad audio");
            Err(Error::service(status))
        });
        let client = speech::client::Speech::from_stub(mock);

        let got = transcribe(&client, &args).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }
}

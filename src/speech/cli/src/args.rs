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
use google_cloud_speech_v2::model::explicit_decoding_config::AudioEncoding;
use std::path::PathBuf;

/// Command-line options for the transcription sample.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The Google Cloud project that owns the recognizer.
    pub project: String,

    /// Path to the audio file to transcribe.
    pub path: PathBuf,

    /// The language of the audio, as a BCP-47 language tag.
    #[arg(long, default_value = "en-US")]
    pub language_code: String,

    /// The sample rate of the audio, in hertz.
    #[arg(long, default_value_t = 32000)]
    pub sample_rate: i32,

    /// The encoding of the audio file.
    #[arg(long, value_enum, default_value_t = Encoding::Linear16)]
    pub encoding: Encoding,

    /// The number of channels in the audio.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
    pub channels: i32,

    /// The recognition model.
    #[arg(long, default_value = "long")]
    pub model: String,

    /// The location of the recognizer.
    #[arg(long, default_value = "global")]
    pub location: String,

    /// Disable automatic punctuation.
    #[arg(long, default_value_t = false)]
    pub no_punctuation: bool,

    /// Enable informational logs and trace the client requests.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// The full name of the default recognizer in the selected location.
    pub fn recognizer(&self) -> String {
        format!(
            "projects/{}/locations/{}/recognizers/_",
            self.project, self.location
        )
    }

    /// The service endpoint for the selected location.
    ///
    /// Recognizers outside `global` are only reachable through their regional
    /// endpoint. Returns `None` to keep the client default.
    pub fn endpoint(&self) -> Option<String> {
        match self.location.as_str() {
            "global" => None,
            location => Some(format!("https://{location}-speech.googleapis.com")),
        }
    }
}

/// Encodings for headerless, or explicitly described, audio.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Encoding {
    Linear16,
    Flac,
    Mulaw,
    Alaw,
}

impl From<Encoding> for AudioEncoding {
    fn from(value: Encoding) -> Self {
        match value {
            Encoding::Linear16 => AudioEncoding::Linear16,
            Encoding::Flac => AudioEncoding::Flac,
            Encoding::Mulaw => AudioEncoding::Mulaw,
            Encoding::Alaw => AudioEncoding::Alaw,
        }
    }
}

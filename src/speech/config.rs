//! Speech command configuration — the `speech:` section of the config file.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the temporary WAV path in command arguments.
pub const WAV_PLACEHOLDER: &str = "{wav}";

/// External commands used to synthesize and play speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Synthesizer command line. Receives the text on stdin and must write a
    /// WAV file to `{wav}`.
    #[serde(default = "SpeechConfig::default_synth")]
    pub synth: Vec<String>,
    /// Player command line. Must block until `{wav}` has finished playing.
    #[serde(default = "SpeechConfig::default_player")]
    pub player: Vec<String>,
}

impl SpeechConfig {
    fn default_synth() -> Vec<String> {
        [
            "piper",
            "--model",
            "en_US-hfc_female-medium.onnx",
            "--output_file",
            WAV_PLACEHOLDER,
        ]
        .map(String::from)
        .to_vec()
    }

    fn default_player() -> Vec<String> {
        vec!["paplay".to_string(), WAV_PLACEHOLDER.to_string()]
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            synth: Self::default_synth(),
            player: Self::default_player(),
        }
    }
}

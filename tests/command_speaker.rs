//! CommandSpeaker against stand-in shell commands (no real synthesizer needed).
#![cfg(unix)]

use std::path::Path;

use chordcall::speech::{CommandSpeaker, SpeechConfig, SpeechError, Speaker};

fn write_fixture(path: &Path) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..1600 {
        writer.write_sample(((i % 32) * 100) as i16).unwrap();
    }
    writer.finalize().unwrap();
}

fn sh(script: String) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script]
}

#[test]
fn synthesizes_then_plays() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = dir.path().join("fixture.wav");
    let transcript = dir.path().join("said.txt");
    let played = dir.path().join("played.txt");
    write_fixture(&fixture);

    let config = SpeechConfig {
        synth: sh(format!(
            "cat > {} && cp {} {{wav}}",
            transcript.display(),
            fixture.display()
        )),
        player: sh(format!("test -s {{wav}} && echo ok > {}", played.display())),
    };
    let mut speaker = CommandSpeaker::new(&config).unwrap();
    speaker.say("C major seven").unwrap();

    assert_eq!(
        std::fs::read_to_string(&transcript).unwrap(),
        "C major seven\n"
    );
    assert_eq!(std::fs::read_to_string(&played).unwrap(), "ok\n");
}

#[test]
fn synthesizer_that_writes_nothing_is_an_error() {
    let config = SpeechConfig {
        synth: sh("cat > /dev/null".to_string()),
        player: vec!["true".to_string()],
    };
    let mut speaker = CommandSpeaker::new(&config).unwrap();
    let err = speaker.say("G seven").unwrap_err();
    assert!(matches!(err, SpeechError::Wav(_)), "got {err:?}");
}

#[test]
fn failing_player_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = dir.path().join("fixture.wav");
    write_fixture(&fixture);

    let config = SpeechConfig {
        synth: sh(format!("cat > /dev/null && cp {} {{wav}}", fixture.display())),
        player: vec!["false".to_string()],
    };
    let mut speaker = CommandSpeaker::new(&config).unwrap();
    let err = speaker.say("D minor seven").unwrap_err();
    assert!(
        matches!(&err, SpeechError::Failed { program, .. } if program == "false"),
        "got {err:?}"
    );
}

#[test]
fn synthesizer_exit_status_survives_unread_stdin() {
    let config = SpeechConfig {
        synth: sh("exec 0<&-; exit 3".to_string()),
        player: vec!["true".to_string()],
    };
    let mut speaker = CommandSpeaker::new(&config).unwrap();
    let long_text = "E flat minor seven ".repeat(64 * 1024);
    let err = speaker.say(&long_text).unwrap_err();
    assert!(
        matches!(
            &err,
            SpeechError::Failed { program, status } if program == "sh" && status.code() == Some(3)
        ),
        "got {err:?}"
    );
}

use crate::cli::build_classifier;
use agentkit_core::UserAgentClassifier;
use anyhow::Result;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub fn run(codes: bool, config: Option<PathBuf>) -> Result<()> {
    let classifier = build_classifier(config.as_deref())?;

    let stdin = io::stdin();
    let count = classify_lines(&classifier, stdin.lock(), io::stdout().lock(), codes)?;

    tracing::info!(count, "batch complete");
    Ok(())
}

/// Writes one JSON object per input line. Lines that are not valid UTF-8 are
/// decoded lossily rather than ending the batch.
pub(crate) fn classify_lines<R: BufRead, W: Write>(
    classifier: &UserAgentClassifier,
    reader: R,
    mut out: W,
    codes: bool,
) -> Result<usize> {
    let mut count = 0usize;

    for line in reader.split(b'\n') {
        let line = line?;
        let decoded = String::from_utf8_lossy(&line);
        if matches!(decoded, Cow::Owned(_)) {
            tracing::warn!(line = count + 1, "user-agent is not valid UTF-8, decoded lossily");
        }
        let agent = decoded.trim();

        let result = classifier.classify(agent);
        if codes {
            serde_json::to_writer(&mut out, &result.codes())?;
        } else {
            serde_json::to_writer(&mut out, &result)?;
        }
        writeln!(out)?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::classify_lines;
    use agentkit_core::{AgentkitConfig, UserAgentClassifier};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    const IPHONE_UA: &[u8] = b"Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1";

    fn run(input: &[u8]) -> Vec<Value> {
        let classifier = UserAgentClassifier::from_config(&AgentkitConfig::default()).unwrap();
        let mut out = Vec::new();

        classify_lines(&classifier, input, &mut out, false).unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn invalid_utf8_line_does_not_end_batch() {
        // Arrange
        let mut input = b"garbage \xff\xfe agent\n".to_vec();
        input.extend_from_slice(IPHONE_UA);
        input.push(b'\n');

        // Act
        let rows = run(&input);

        // Assert
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["device_type"], "unknown");
        assert_eq!(rows[1]["browser_type"], "iphone");
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let mut input = IPHONE_UA.to_vec();
        input.extend_from_slice(b"\r\n");

        let rows = run(&input);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["os_type"], "ios");
    }
}

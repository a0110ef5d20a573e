// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `promptwise detect` command implementation.

use promptwise_config::model::{OutputFormat, PromptwiseConfig};
use promptwise_core::PromptwiseError;
use promptwise_router::{detect_language, LanguageDetection};

use crate::{read_text, OutputMode};

/// Run the `promptwise detect` command.
pub fn run_detect(
    config: &PromptwiseConfig,
    text: &[String],
    mode: OutputMode,
) -> Result<(), PromptwiseError> {
    let text = read_text(text)?;
    let detection = detect_language(&text, config.language.default);

    match mode.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detection)?),
        OutputFormat::Plain => println!("{}", render_detection(&detection, mode.color)),
    }
    Ok(())
}

fn render_detection(detection: &LanguageDetection, use_color: bool) -> String {
    let direction = if detection.language.is_rtl() { "rtl" } else { "ltr" };
    let code = detection.language.code();
    let confidence = detection.confidence * 100.0;
    if use_color {
        use colored::Colorize;
        format!("{} ({direction}, {confidence:.0}% confidence)", code.green().bold())
    } else {
        format!("{code} ({direction}, {confidence:.0}% confidence)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptwise_core::Language;

    #[test]
    fn plain_detection_line() {
        let detection = LanguageDetection {
            language: Language::Arabic,
            confidence: 1.0,
        };
        assert_eq!(render_detection(&detection, false), "ar (rtl, 100% confidence)");
    }

    #[test]
    fn undecided_detection_line() {
        let detection = detect_language("", Language::English);
        assert_eq!(render_detection(&detection, false), "en (ltr, 0% confidence)");
    }
}

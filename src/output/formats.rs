//! Event log format implementations

use serde::Serialize;

use crate::event::SpeechRecognitionEvent;

/// JSON line wrapping an event with its position in the log
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    sequence: u32,
    #[serde(flatten)]
    event: &'a SpeechRecognitionEvent,
}

/// Format as one readable line, e.g.
/// `#3 result [0] "hello" (0.950) | "hello and so on" (0.855)`
pub fn format_text(event: &SpeechRecognitionEvent, sequence: u32) -> String {
    let mut line = format!("#{} {}", sequence, event.event_type());

    if let Some(results) = event.results() {
        for (index, result) in results.iter().enumerate() {
            let alternatives: Vec<String> = result
                .iter()
                .map(|a| format!("{:?} ({:.3})", a.transcript(), a.confidence()))
                .collect();
            line.push_str(&format!(" [{}] {}", index, alternatives.join(" | ")));
        }
    }

    line
}

/// Format as a JSON object on a single line
pub fn format_json(event: &SpeechRecognitionEvent, sequence: u32) -> String {
    let output = JsonOutput { sequence, event };

    serde_json::to_string(&output)
        .unwrap_or_else(|_| format!("{{\"sequence\":{},\"type\":\"{}\"}}", sequence, event.event_type()))
}

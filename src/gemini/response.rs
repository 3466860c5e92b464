use crate::core::{
    CardList,
    Flashcard,
    FlashcardError,
};

/// Pulls `candidates[0].content.parts[0].text` out of a `generateContent` reply.
pub fn extract_payload_text(body: &str) -> Result<String, FlashcardError> {
    let envelope: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        FlashcardError::MalformedResponse(format!("response is not valid JSON: {e}"))
    })?;

    envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|text| text.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            FlashcardError::MalformedResponse(
                "Gemini API response did not contain the expected JSON text part.".to_string(),
            )
        })
}

pub fn parse_cards(payload: &str) -> Result<Vec<Flashcard>, FlashcardError> {
    serde_json::from_str::<CardList>(payload)
        .map(|list| list.cards)
        .map_err(|e| FlashcardError::MalformedResponse(format!("invalid flashcard payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
        })
        .to_string()
    }

    #[test]
    fn extracts_embedded_text() {
        let text = extract_payload_text(&envelope(r#"{"cards":[]}"#)).unwrap();
        assert_eq!(text, r#"{"cards":[]}"#);
    }

    #[test]
    fn missing_path_is_malformed() {
        for body in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{"text": 7}]}}]}"#,
            "not json",
        ] {
            assert!(
                matches!(extract_payload_text(body), Err(FlashcardError::MalformedResponse(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn parses_cards_in_order() {
        let cards =
            parse_cards(r#"{"cards":[{"front":"1","back":"a"},{"front":"2","back":"b"}]}"#)
                .unwrap();
        assert_eq!(cards, vec![Flashcard::new("1", "a"), Flashcard::new("2", "b")]);
    }

    #[test]
    fn unparseable_payload_is_malformed() {
        assert!(matches!(parse_cards("[1, 2"), Err(FlashcardError::MalformedResponse(_))));
        assert!(matches!(
            parse_cards(r#"{"deck": []}"#),
            Err(FlashcardError::MalformedResponse(_))
        ));
    }
}

use serde::Serialize;

pub const CARD_COUNT: usize = 5;

const SYSTEM_INSTRUCTION: &str = "You are an expert educational flashcard generator. Based on the user's topic, generate a list of 5 concise flashcards. Each flashcard MUST have a 'front' (term/question) and a 'back' (definition/answer).";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self { parts: vec![Part { text: text.into() }] }
    }
}

impl GenerationRequest {
    pub fn for_topic(topic: &str) -> Self {
        Self {
            contents: vec![Content::text(format!(
                "Generate {} flashcards about: {}",
                CARD_COUNT, topic
            ))],
            system_instruction: Content::text(SYSTEM_INSTRUCTION),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: card_list_schema(),
            },
        }
    }
}

/// Constrains the model's output to `{ "cards": [{ "front", "back" }] }`.
pub fn card_list_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "cards": {
                "type": "ARRAY",
                "description": "A list of flashcards generated for the given topic.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "front": {
                            "type": "STRING",
                            "description": "The question or term for the front of the flashcard."
                        },
                        "back": {
                            "type": "STRING",
                            "description": "The answer or definition for the back of the flashcard."
                        }
                    },
                    "required": ["front", "back"]
                }
            }
        },
        "required": ["cards"]
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn body(topic: &str) -> Value {
        serde_json::to_value(GenerationRequest::for_topic(topic)).unwrap()
    }

    #[test]
    fn user_message_embeds_topic() {
        let body = body("The Roman Empire");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Generate 5 flashcards about: The Roman Empire"
        );
    }

    #[test]
    fn uses_camel_case_keys() {
        let body = body("Rust");
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"systemInstruction"));
        assert!(keys.contains(&"generationConfig"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("5 concise flashcards"));
    }

    #[test]
    fn schema_requires_front_and_back() {
        let schema = &body("Rust")["generationConfig"]["responseSchema"];
        assert_eq!(schema["required"], serde_json::json!(["cards"]));
        let items = &schema["properties"]["cards"]["items"];
        assert_eq!(schema["properties"]["cards"]["type"], "ARRAY");
        assert_eq!(items["required"], serde_json::json!(["front", "back"]));
        assert_eq!(items["properties"]["front"]["type"], "STRING");
        assert_eq!(items["properties"]["back"]["type"], "STRING");
    }
}

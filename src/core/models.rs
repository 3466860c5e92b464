use std::fmt;

use serde::{
    de::{
        self,
        IgnoredAny,
        MapAccess,
        Visitor,
    },
    Deserialize,
    Deserializer,
};

/// One question/answer unit produced by the endpoint.
///
/// Field names are matched case-insensitively on deserialization because the
/// model occasionally drifts to `Front`/`BACK` even with a response schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    front: String,
    back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self { front: front.into(), back: back.into() }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

impl<'de> Deserialize<'de> for Flashcard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlashcardVisitor;

        impl<'de> Visitor<'de> for FlashcardVisitor {
            type Value = Flashcard;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with 'front' and 'back' strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Flashcard, A::Error> {
                let mut front: Option<String> = None;
                let mut back: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("front") {
                        front = map.next_value::<Option<String>>()?;
                    } else if key.eq_ignore_ascii_case("back") {
                        back = map.next_value::<Option<String>>()?;
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                // A missing side renders as a blank face rather than dropping the card.
                Ok(Flashcard { front: front.unwrap_or_default(), back: back.unwrap_or_default() })
            }
        }

        deserializer.deserialize_map(FlashcardVisitor)
    }
}

/// The structured payload embedded in the endpoint's text part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardList {
    pub cards: Vec<Flashcard>,
}

impl<'de> Deserialize<'de> for CardList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CardListVisitor;

        impl<'de> Visitor<'de> for CardListVisitor {
            type Value = CardList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with a 'cards' array")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CardList, A::Error> {
                let mut cards: Option<Vec<Flashcard>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("cards") {
                        cards = map.next_value::<Option<Vec<Flashcard>>>()?;
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                let cards =
                    cards.ok_or_else(|| <A::Error as de::Error>::missing_field("cards"))?;
                Ok(CardList { cards })
            }
        }

        deserializer.deserialize_map(CardListVisitor)
    }
}

use crate::core::generation::GenerationResult;

#[derive(Debug)]
pub enum TaskResult {
    /// Outcome of one generation cycle, in reply to the topic it was started for.
    Generation { topic: String, result: GenerationResult },
}

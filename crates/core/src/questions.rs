/// Number of practice prompts generated for every topic.
pub const QUESTIONS_PER_TOPIC: usize = 3;

/// Builds the fixed practice prompts for a topic.
///
/// The prompts depend only on the topic name, so repeated calls always agree.
pub fn practice_questions(topic: &str) -> [String; QUESTIONS_PER_TOPIC] {
    [
        format!("Explain the basic idea of {}.", topic),
        format!("Solve one beginner-level question from {}.", topic),
        format!("Mention one real-life application of {}.", topic),
    ]
}

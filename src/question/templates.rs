//! Question templates

/// Number of primary templates
pub const TEMPLATE_COUNT: usize = 10;

/// Render primary template `index % 10` for `topic`.
///
/// Order: define, what-is, explain, how-does, why-important,
/// describe-features, give-example, challenges, compare, evaluate.
pub fn primary(index: usize, topic: &str) -> String {
    match index % TEMPLATE_COUNT {
        0 => format!("Define {topic}."),
        1 => format!("What is {topic}?"),
        2 => format!("Explain the concept of {topic}."),
        3 => format!("How does {topic} work?"),
        4 => format!("Why is {topic} important?"),
        5 => format!("Describe the main features or characteristics of {topic}."),
        6 => format!("Give an example where {topic} is applied in the real world."),
        7 => format!("What are the main challenges associated with {topic}?"),
        8 => format!("Compare {topic} with a related concept and highlight the differences."),
        _ => format!("How would you evaluate the effectiveness of {topic} in practice?"),
    }
}

/// Practice question for even indices, failure-mode question for odd ones
pub fn alternating(index: usize, topic: &str) -> String {
    if index % 2 == 0 {
        format!("How is {topic} applied in practice?")
    } else {
        format!("Why might {topic} fail in certain situations?")
    }
}

/// Prompt used when a fill-in-the-blank topic appears in no segment
pub fn explain_term(topic: &str) -> String {
    format!("Explain the term: {topic}")
}

/// Marker substituted for the topic in fill-in-the-blank questions
pub const BLANK: &str = "______";

/// Fill-in-the-blank prompt around an already blanked segment
pub fn fill_in_blank(blanked: &str) -> String {
    format!("Fill in the blank: {blanked}")
}

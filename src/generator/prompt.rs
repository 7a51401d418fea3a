use super::{
    GenerationRequest,
    PracticeMode,
};

/// Number of challenges requested per writing batch. The response is
/// iterated at whatever size actually comes back.
pub const WRITING_BATCH_SIZE: usize = 5;

/// Renders the mode-specific instruction sent to the text model. Every
/// prompt carries the same vocabulary constraint block so the generator
/// stays inside the learner's word and character set.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let constraints = constraint_block(request);
    match request.mode {
        PracticeMode::Reading => format!(
            "You are generating hiragana reading practice for a beginner.\n{}\n\
             Write one short passage of 2-3 simple sentences using ONLY the allowed \
             words and characters.\n\
             Respond with JSON: {{\"text\": \"passage in hiragana\", \
             \"reading\": \"romaji reading\", \"translation\": \"English translation\"}}",
            constraints
        ),
        PracticeMode::Writing => format!(
            "You are generating hiragana writing practice for a beginner.\n{}\n\
             Produce {} short English sentences the learner must write in hiragana, \
             each answerable using ONLY the allowed words and characters.\n\
             Respond with JSON: {{\"challenges\": [{{\"english\": \"English sentence\", \
             \"japanese\": \"expected hiragana answer\", \"reading\": \"romaji reading\"}}]}}",
            constraints, WRITING_BATCH_SIZE
        ),
        PracticeMode::Visual => format!(
            "You are generating a picture quiz for a hiragana learner.\n{}\n\
             Write one simple sentence using ONLY the allowed words and characters, \
             pick one concrete noun from it as the hidden target word, and describe a \
             simple illustration of the sentence.\n\
             Respond with JSON: {{\"sentence\": \"full sentence\", \
             \"targetWord\": \"hidden word\", \
             \"sentenceBefore\": \"sentence text before the target word\", \
             \"sentenceAfter\": \"sentence text after the target word\", \
             \"reading\": \"romaji reading\", \"translation\": \"English translation\", \
             \"imageDescription\": \"plain English description for an image model\"}}",
            constraints
        ),
    }
}

fn constraint_block(request: &GenerationRequest) -> String {
    let mut block = format!(
        "Allowed words: {}\nAllowed characters: {}",
        request.allowed_words.join(" "),
        request.allowed_characters.iter().collect::<String>()
    );
    if !request.priority_words.is_empty() {
        block.push_str(&format!(
            "\nPrioritize using these words: {}",
            request.priority_words.join(" ")
        ));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnalyzedVocabulary;

    fn request(mode: PracticeMode) -> GenerationRequest {
        let vocab = AnalyzedVocabulary::analyze("わたし ねこ", "みず");
        GenerationRequest::new(&vocab, vec!["みず".to_string()], mode)
    }

    #[test]
    fn test_prompt_carries_vocabulary_constraints() {
        let prompt = build_prompt(&request(PracticeMode::Reading));

        assert!(prompt.contains("ねこ"));
        assert!(prompt.contains("Prioritize using these words: みず"));
    }

    #[test]
    fn test_priority_hint_omitted_when_no_suggestions() {
        let vocab = AnalyzedVocabulary::analyze("ねこ", "");
        let request = GenerationRequest::new(&vocab, Vec::new(), PracticeMode::Reading);

        assert!(!build_prompt(&request).contains("Prioritize"));
    }

    #[test]
    fn test_mode_specific_shapes() {
        assert!(build_prompt(&request(PracticeMode::Writing)).contains("challenges"));
        assert!(build_prompt(&request(PracticeMode::Visual)).contains("imageDescription"));
        assert!(build_prompt(&request(PracticeMode::Reading)).contains("translation"));
    }
}

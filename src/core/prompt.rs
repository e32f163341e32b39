//! Prompt assembly for explanation requests

use crate::core::explainer::ExplanationRequest;

/// Format answers as a lettered list: `a) Paris\nb) London`
///
/// Letters continue `c`, `d`, ... by option index. An empty slice yields an
/// empty string.
pub fn format_answer_options(answers: &[String]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(index, answer)| format!("{}) {}", option_letter(index), answer))
        .collect::<Vec<_>>()
        .join("\n")
}

fn option_letter(index: usize) -> char {
    char::from_u32('a' as u32 + index as u32).unwrap_or('?')
}

/// Build the full explanation prompt for one answered question
pub fn build_explanation_prompt(request: &ExplanationRequest) -> String {
    format!(
        "Question: {}\n\n\
         Available answers:\n{}\n\n\
         User selected: {}\n\
         Correct answer: {}\n\n\
         Please explain why the user's answer was incorrect and why the correct \
         answer is right. Reference the specific options in your explanation.",
        request.question,
        format_answer_options(&request.all_answers),
        request.user_answer,
        request.correct_answer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ExplanationRequest {
        ExplanationRequest {
            question: "What is the capital of France?".to_string(),
            user_answer: "London".to_string(),
            correct_answer: "Paris".to_string(),
            all_answers: vec!["Paris".to_string(), "London".to_string()],
        }
    }

    #[test]
    fn test_formats_lettered_options() {
        let answers = vec!["Paris".to_string(), "London".to_string()];
        assert_eq!(format_answer_options(&answers), "a) Paris\nb) London");
    }

    #[test]
    fn test_empty_options_format_empty() {
        assert_eq!(format_answer_options(&[]), "");
    }

    #[test]
    fn test_letters_continue_past_b() {
        let answers: Vec<String> = ["3", "5", "7", "9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_answer_options(&answers), "a) 3\nb) 5\nc) 7\nd) 9");
    }

    #[test]
    fn test_prompt_embeds_question_and_answers() {
        let prompt = build_explanation_prompt(&sample_request());
        assert!(prompt.starts_with("Question: What is the capital of France?"));
        assert!(prompt.contains("Available answers:\na) Paris\nb) London"));
        assert!(prompt.contains("User selected: London\nCorrect answer: Paris"));
    }

    #[test]
    fn test_prompt_without_options_keeps_structure() {
        let mut request = sample_request();
        request.all_answers.clear();
        let prompt = build_explanation_prompt(&request);
        assert!(prompt.contains("Available answers:\n\n"));
        assert!(prompt.contains("User selected: London"));
    }
}

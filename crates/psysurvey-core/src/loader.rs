//! Question file loader.
//!
//! Each line of a question file holds one question:
//!
//! ```text
//! <question text>|<answer 1>,<answer 2>,...,<answer N>
//! ```
//!
//! Lines that do not yield a question text and at least one answer are
//! skipped without error. Answer text is kept verbatim, whitespace included.

use std::collections::HashSet;
use std::path::Path;

use crate::error::SurveyError;
use crate::model::Question;

const FIELD_SEPARATOR: char = '|';
const ANSWER_SEPARATOR: char = ',';

/// Split `s` on `sep`, dropping trailing empty fields.
///
/// Interior empty fields are kept, so `"a,,b"` has three fields while
/// `"a,b,"` has two and `",,"` has none. A string without `sep` is a
/// single field, even when empty.
fn split_fields(s: &str, sep: char) -> Vec<&str> {
    if !s.contains(sep) {
        return vec![s];
    }
    let mut fields: Vec<&str> = s.split(sep).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse a single line, returning `None` for malformed lines.
pub fn parse_line(line: &str) -> Option<Question> {
    let fields = split_fields(line, FIELD_SEPARATOR);
    if fields.len() < 2 {
        return None;
    }

    let answers: Vec<String> = split_fields(fields[1], ANSWER_SEPARATOR)
        .into_iter()
        .map(str::to_string)
        .collect();
    if answers.is_empty() {
        return None;
    }

    Some(Question::new(fields[0], answers))
}

/// Parse question file contents into questions, in file order.
pub fn parse_questions(content: &str) -> Vec<Question> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                tracing::debug!(line = i + 1, "skipping malformed question line");
            }
            parsed
        })
        .collect()
}

/// Read a question file's raw contents.
pub fn read_question_file(path: &Path) -> Result<String, SurveyError> {
    std::fs::read_to_string(path).map_err(|source| SurveyError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a question file, returning the read error if any.
pub fn try_load_questions(path: &Path) -> Result<Vec<Question>, SurveyError> {
    let content = read_question_file(path)?;
    let questions = parse_questions(&content);
    tracing::info!(
        path = %path.display(),
        count = questions.len(),
        "loaded questions"
    );
    Ok(questions)
}

/// Read and parse a question file.
///
/// An unreadable file is logged and yields no questions, which makes the
/// survey complete immediately.
pub fn load_questions(path: &Path) -> Vec<Question> {
    match try_load_questions(path) {
        Ok(questions) => questions,
        Err(e) => {
            tracing::error!("{e}");
            Vec::new()
        }
    }
}

/// A warning from question file validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based line number (if applicable).
    pub line: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check question file contents for common issues.
///
/// This never changes what [`parse_questions`] produces; it only points
/// out lines that will be skipped or may render surprisingly.
pub fn validate_question_file(content: &str, max_answers: usize) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_texts = HashSet::new();
    let mut loaded = 0usize;

    for (i, line) in content.lines().enumerate() {
        let line_no = Some(i + 1);

        if line.trim().is_empty() {
            continue;
        }

        let Some(question) = parse_line(line) else {
            warnings.push(ValidationWarning {
                line: line_no,
                message: "malformed line will be skipped (expected `question|answer,answer`)"
                    .into(),
            });
            continue;
        };
        loaded += 1;

        if !seen_texts.insert(question.text().to_string()) {
            warnings.push(ValidationWarning {
                line: line_no,
                message: format!("duplicate question: {}", question.text()),
            });
        }

        if question.answers().len() > max_answers {
            warnings.push(ValidationWarning {
                line: line_no,
                message: format!(
                    "{} answers, only the first {max_answers} can be displayed",
                    question.answers().len()
                ),
            });
        }

        for (n, answer) in question.answers().iter().enumerate() {
            if answer.is_empty() {
                warnings.push(ValidationWarning {
                    line: line_no,
                    message: format!("answer {} is empty", n + 1),
                });
            } else if answer.trim() != answer {
                warnings.push(ValidationWarning {
                    line: line_no,
                    message: format!(
                        "answer {} has surrounding whitespace: {answer:?}",
                        n + 1
                    ),
                });
            }
        }
    }

    if loaded == 0 {
        warnings.push(ValidationWarning {
            line: None,
            message: "no questions found".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Do you prefer mornings or evenings?|Mornings,Evenings\n\
                          Pick a color|Red,Green,Blue,Yellow\n";

    #[test]
    fn parse_sample() {
        let questions = parse_questions(SAMPLE);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text(), "Do you prefer mornings or evenings?");
        assert_eq!(questions[0].answers(), &["Mornings", "Evenings"]);
        assert_eq!(questions[0].points(), &[1, 2]);
        assert_eq!(questions[1].answers().len(), 4);
        assert_eq!(questions[1].points(), &[1, 2, 3, 4]);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let content = "no delimiter here\n\
                       \n\
                       Valid?|Yes,No\n\
                       Trailing pipe only|\n\
                       Only pipes||\n\
                       Also valid|A\n";
        let questions = parse_questions(content);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text(), "Valid?");
        assert_eq!(questions[1].text(), "Also valid");
    }

    #[test]
    fn answers_keep_whitespace() {
        let q = parse_line("Q| a , b ").unwrap();
        assert_eq!(q.answers(), &[" a ", " b "]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let q = parse_line("Q|a,b|c,d").unwrap();
        assert_eq!(q.text(), "Q");
        assert_eq!(q.answers(), &["a", "b"]);
    }

    #[test]
    fn trailing_empty_answers_are_dropped() {
        assert_eq!(parse_line("Q|a,b,").unwrap().answers(), &["a", "b"]);
        assert_eq!(parse_line("Q|a,,b").unwrap().answers(), &["a", "", "b"]);
        assert_eq!(parse_line("Q|,a").unwrap().answers(), &["", "a"]);
    }

    #[test]
    fn empty_answer_field_between_pipes_loads() {
        let questions = parse_questions("Q||x\nR|a\n");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text(), "Q");
        assert_eq!(questions[0].answers(), &[""]);
        assert_eq!(questions[0].points(), &[1]);
    }

    #[test]
    fn line_without_answers_is_skipped() {
        assert!(parse_line("Q|,,|extra").is_none());
    }

    #[test]
    fn empty_question_text_is_allowed() {
        let q = parse_line("|a,b").unwrap();
        assert_eq!(q.text(), "");
        assert_eq!(q.answers().len(), 2);
    }

    #[test]
    fn crlf_line_endings() {
        let questions = parse_questions("A|x,y\r\nB|z\r\n");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].answers(), &["x", "y"]);
        assert_eq!(questions[1].answers(), &["z"]);
    }

    #[test]
    fn missing_file_yields_no_questions() {
        let dir = tempfile::tempdir().unwrap();
        let questions = load_questions(&dir.path().join("absent.txt"));
        assert!(questions.is_empty());
    }

    #[test]
    fn strict_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = try_load_questions(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, SurveyError::Read { .. }));
    }

    #[test]
    fn read_question_file_returns_raw_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        assert_eq!(read_question_file(&path).unwrap(), SAMPLE);
        let err = read_question_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read question file"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let questions = load_questions(&path);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn validate_clean_file() {
        assert!(validate_question_file(SAMPLE, 5).is_empty());
    }

    #[test]
    fn validate_reports_malformed_lines() {
        let warnings = validate_question_file("Valid|a\nbroken\n\nQ|\n", 5);
        let lines: Vec<_> = warnings.iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![Some(2), Some(4)]);
        assert!(warnings[0].message.contains("malformed"));
    }

    #[test]
    fn validate_reports_too_many_answers() {
        let warnings = validate_question_file("Q|1,2,3,4,5,6\n", 5);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("6 answers"));
    }

    #[test]
    fn validate_reports_whitespace_and_empty_answers() {
        let warnings = validate_question_file("Q|a, b,,c\n", 5);
        assert!(warnings.iter().any(|w| w.message.contains("whitespace")));
        assert!(warnings.iter().any(|w| w.message.contains("answer 3 is empty")));
    }

    #[test]
    fn validate_reports_duplicates() {
        let warnings = validate_question_file("Q|a\nQ|b\n", 5);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_empty_file() {
        let warnings = validate_question_file("", 5);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, None);
    }
}

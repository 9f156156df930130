//! Interview document parser: line-oriented markup -> metadata + Q&A
//! sections.

use chrono::Local;
use insight_core::{InterviewMetadata, QASection};
use once_cell::sync::Lazy;
use regex::Regex;

static METADATA_TRIGGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(メタデータ|metadata)").unwrap());

static HEADER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,2}\s").unwrap());

static METADATA_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-・]\s*([^:：]+)[:：]\s*(.+)$").unwrap());

static QA_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#{2,3}\s*)?Q(\d+)[.．]?\s*(.*)$").unwrap());

/// A fully parsed interview document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInterview {
    pub title: Option<String>,
    pub metadata: InterviewMetadata,
    pub sections: Vec<QASection>,
}

pub struct InterviewParser;

impl InterviewParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, document: &str) -> ParsedInterview {
        let lines: Vec<&str> = document.lines().collect();

        let title = lines
            .iter()
            .find(|line| line.starts_with("# "))
            .map(|line| line.trim_start_matches("# ").trim().to_string());

        let metadata = self.parse_metadata(&lines);
        let sections = self.parse_sections(&lines);

        ParsedInterview { title, metadata, sections }
    }

    fn parse_metadata(&self, lines: &[&str]) -> InterviewMetadata {
        let mut metadata = InterviewMetadata::default();

        let Some(trigger_idx) = lines.iter().position(|l| METADATA_TRIGGER.is_match(l)) else {
            return self.finalize_metadata(metadata);
        };

        for line in &lines[trigger_idx + 1..] {
            if HEADER_LINE.is_match(line) {
                break;
            }
            let Some(captures) = METADATA_LINE.captures(line) else {
                continue;
            };
            let key = captures[1].trim();
            let value = captures[2].trim().to_string();
            assign_field(&mut metadata, key, value);
        }

        self.finalize_metadata(metadata)
    }

    fn finalize_metadata(&self, mut metadata: InterviewMetadata) -> InterviewMetadata {
        if metadata.interview_id.is_none() {
            metadata.interview_id = Some(generate_interview_id(metadata.date.as_deref()));
        }
        metadata
    }

    fn parse_sections(&self, lines: &[&str]) -> Vec<QASection> {
        let mut sections = Vec::new();
        let mut current: Option<(i32, String, Vec<String>, usize)> = None;

        for (idx, line) in lines.iter().enumerate() {
            let line_no = idx + 1;

            if let Some(captures) = QA_HEADER.captures(line) {
                if let Some((question_no, question_text, answer_lines, start_line)) = current.take()
                {
                    sections.push(QASection {
                        question_no,
                        question_text,
                        answer_text: answer_lines.join("\n"),
                        line_no: start_line,
                    });
                }
                let question_no: i32 = captures[1].parse().unwrap_or(0);
                let question_text = captures[2].trim().to_string();
                current = Some((question_no, question_text, Vec::new(), line_no));
                continue;
            }

            if HEADER_LINE.is_match(line) {
                if let Some((question_no, question_text, answer_lines, start_line)) = current.take()
                {
                    sections.push(QASection {
                        question_no,
                        question_text,
                        answer_text: answer_lines.join("\n"),
                        line_no: start_line,
                    });
                }
                continue;
            }

            if let Some((_, _, answer_lines, _)) = current.as_mut() {
                if !line.trim().is_empty() {
                    answer_lines.push(line.to_string());
                }
            }
        }

        if let Some((question_no, question_text, answer_lines, start_line)) = current.take() {
            sections.push(QASection {
                question_no,
                question_text,
                answer_text: answer_lines.join("\n"),
                line_no: start_line,
            });
        }

        sections
    }
}

impl Default for InterviewParser {
    fn default() -> Self {
        Self::new()
    }
}

fn assign_field(metadata: &mut InterviewMetadata, key: &str, value: String) {
    let normalized = key.to_lowercase();

    const RESPONDENT: &[&str] = &["respondent", "回答者", "対象者"];
    const COMPANY: &[&str] = &["company", "会社", "企業", "会社名"];
    const ROLE: &[&str] = &["role", "役職", "職種"];
    const DEPARTMENT: &[&str] = &["department", "部署", "部門"];
    const DATE: &[&str] = &["date", "日付", "実施日"];
    const INTERVIEWER: &[&str] = &["interviewer", "面接官", "インタビュアー", "聞き手"];
    const DURATION: &[&str] = &["duration", "所要時間", "時間"];
    const INTERVIEW_ID: &[&str] = &["interview_id", "id", "面接id"];

    if RESPONDENT.contains(&normalized.as_str()) {
        metadata.respondent = Some(value);
    } else if COMPANY.contains(&normalized.as_str()) {
        metadata.company = Some(value);
    } else if ROLE.contains(&normalized.as_str()) {
        metadata.role = Some(value);
    } else if DEPARTMENT.contains(&normalized.as_str()) {
        metadata.department = Some(value);
    } else if DATE.contains(&normalized.as_str()) {
        metadata.date = Some(value);
    } else if INTERVIEWER.contains(&normalized.as_str()) {
        metadata.interviewer = Some(value);
    } else if DURATION.contains(&normalized.as_str()) {
        metadata.duration = Some(value);
    } else if INTERVIEW_ID.contains(&normalized.as_str()) {
        metadata.interview_id = Some(value);
    } else {
        metadata.extra.insert(normalized, value);
    }
}

/// `INT_<YYYYMMDD>_<6-hex>`, using `date` when present and parseable as
/// `YYYY-MM-DD`/`YYYY/MM/DD`, else today's date.
fn generate_interview_id(date: Option<&str>) -> String {
    let yyyymmdd = date
        .and_then(parse_date_digits)
        .unwrap_or_else(|| Local::now().format("%Y%m%d").to_string());
    let suffix = &uuid::Uuid::new_v4().simple().to_string()[..6];
    format!("INT_{yyyymmdd}_{suffix}")
}

fn parse_date_digits(date: &str) -> Option<String> {
    let digits: String = date.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 8 {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
# 業務改善インタビュー

## メタデータ
- 回答者: 山田太郎
- 会社: 株式会社サンプル
- 部署: 営業部
- 日付: 2026-01-15
- 未知のキー: 何か

## Q&A

### Q1. 現在の業務で困っていることはありますか
在庫管理がうまくいかず困っている。
手作業でのミスが多い。

### Q2. 今後改善したいことは
承認フローを自動化したい
";

    #[test]
    fn extracts_the_title() {
        let parsed = InterviewParser::new().parse(DOCUMENT);
        assert_eq!(parsed.title.as_deref(), Some("業務改善インタビュー"));
    }

    #[test]
    fn parses_known_metadata_keys_via_alias_table() {
        let parsed = InterviewParser::new().parse(DOCUMENT);
        assert_eq!(parsed.metadata.respondent.as_deref(), Some("山田太郎"));
        assert_eq!(parsed.metadata.company.as_deref(), Some("株式会社サンプル"));
        assert_eq!(parsed.metadata.department.as_deref(), Some("営業部"));
        assert_eq!(parsed.metadata.date.as_deref(), Some("2026-01-15"));
    }

    #[test]
    fn unrecognized_keys_land_in_extra() {
        let parsed = InterviewParser::new().parse(DOCUMENT);
        assert_eq!(parsed.metadata.extra.get("未知のキー").map(String::as_str), Some("何か"));
    }

    #[test]
    fn interview_id_falls_back_to_date_derived_id() {
        let parsed = InterviewParser::new().parse(DOCUMENT);
        let id = parsed.metadata.interview_id.unwrap();
        assert!(id.starts_with("INT_20260115_"));
        assert_eq!(id.len(), "INT_20260115_".len() + 6);
    }

    #[test]
    fn parses_two_qa_sections_with_joined_answers() {
        let parsed = InterviewParser::new().parse(DOCUMENT);
        assert_eq!(parsed.sections.len(), 2);

        let first = &parsed.sections[0];
        assert_eq!(first.question_no, 1);
        assert_eq!(first.question_text, "現在の業務で困っていることはありますか");
        assert!(first.answer_text.contains("在庫管理がうまくいかず困っている。"));
        assert!(first.answer_text.contains("手作業でのミスが多い。"));

        let second = &parsed.sections[1];
        assert_eq!(second.question_no, 2);
        assert_eq!(second.answer_text, "承認フローを自動化したい");
    }

    #[test]
    fn document_without_metadata_block_still_gets_a_generated_id() {
        let parsed = InterviewParser::new().parse("# タイトルのみ\n\n### Q1. 質問\n回答。\n");
        assert!(parsed.metadata.interview_id.unwrap().starts_with("INT_"));
    }
}

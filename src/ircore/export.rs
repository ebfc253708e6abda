use std::fs;
use std::io;
use std::path::Path;
use crate::ircore::ranking::RankedResult;

pub const CSV_FILE_NAME: &str = "resume-rankings.csv";
pub const CSV_HEADER: [&str; 3] = ["Resume Name", "Similarity Score (%)", "Top Keywords"];

const CSV_NEWLINE: &str = "\r\n";

// Papa.unparse default quoting: also quotes fields with a leading or trailing space
fn csv_field(field: &str) -> String {
    let needs_quotes = field.contains(|c: char| matches!(c, ',' | '"' | '\r' | '\n'))
        || field.starts_with(' ')
        || field.ends_with(' ');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    fields.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(",")
}

/// One row per result in rank order: name, score with two decimals, keywords
/// joined with ", ".
pub fn to_csv(results: &[RankedResult]) -> String {
    let mut rows = vec![csv_row(&CSV_HEADER)];
    for result in results {
        let score = result.score_display();
        let keywords = result.keywords.join(", ");
        rows.push(csv_row(&[result.name.as_str(), score.as_str(), keywords.as_str()]));
    }
    rows.join(CSV_NEWLINE)
}

pub fn to_json(results: &[RankedResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

pub fn write_csv(path: &Path, results: &[RankedResult]) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, to_csv(results))
}

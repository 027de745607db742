use crate::rank::Ranking;
use chrono::DateTime;

fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

pub fn to_markdown(ranking: &Ranking) -> String {
    let mut output = String::new();
    output.push_str("# Repository Activity Ranking\n\n");

    match ranking.span {
        Some(span) => output.push_str(&format!(
            "Newest commit: {}\nOldest commit: {}\n",
            format_timestamp(span.newest),
            format_timestamp(span.oldest)
        )),
        None => output.push_str("No commits.\n"),
    }
    output.push_str(&format!("Decay rate: {:.6e} per second\n\n", ranking.decay_rate));

    output.push_str("## Repositories\n\n");
    if ranking.repositories.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | Name | Score | Lines changed | Additions | Deletions | Files |\n");
    output.push_str("|---|------|-------|---------------|-----------|-----------|-------|\n");
    for (index, repository) in ranking.repositories.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {:.3} | {} | {} | {} | {} |\n",
            index + 1,
            escape_cell(&repository.name),
            repository.score,
            repository.total_lines_changed,
            repository.additions,
            repository.deletions,
            repository.files
        ));
    }

    output
}

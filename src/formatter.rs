use crate::schemas::{SearchResponse, SearchStatistics, StudyRecord};
use colored::Colorize;

pub const NO_RESULTS_MESSAGE: &str = "No studies found. Try a different query.";

pub fn format_study(study: &StudyRecord, use_color: bool) -> String {
    if use_color {
        format!(
            "{} {}\n  Organism: {}  Mission: {}\n  Assay Type: {}  PI: {}\n  {} {}",
            study.title.bold(),
            format!("[{}]", study.id).dimmed(),
            study.organism.bright_green(),
            study.mission.bright_yellow(),
            study.assay_type.bright_magenta(),
            study.principal_investigator,
            "View on NASA OSDR:".bright_blue(),
            study.source_url.underline()
        )
    } else {
        format!(
            "{} [{}]\n  Organism: {}  Mission: {}\n  Assay Type: {}  PI: {}\n  View on NASA OSDR: {}",
            study.title,
            study.id,
            study.organism,
            study.mission,
            study.assay_type,
            study.principal_investigator,
            study.source_url
        )
    }
}

pub fn format_statistics(summary: &str, stats: &SearchStatistics, use_color: bool) -> String {
    let heading = |text: &str| {
        if use_color {
            text.bold().bright_cyan().to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    out.push_str(&heading("AI Overview"));
    out.push('\n');
    out.push_str(summary);
    out.push_str("\n\n");
    out.push_str(&heading("Key Statistics"));
    out.push('\n');
    out.push_str(&format!("  Total Studies: {}\n", stats.total_studies));
    out.push_str(&format!("  Top Organism:  {}\n", stats.top_organism));
    out.push_str(&format!("  Missions:      {}\n", chips(&stats.missions)));
    out.push_str(&format!("  Assay Types:   {}", chips(&stats.assay_types)));
    out
}

pub fn format_response(response: &SearchResponse, use_color: bool) -> String {
    let mut sections = Vec::with_capacity(response.records.len() + 2);

    let header = format!("Studies Found ({})", response.statistics.total_studies);
    sections.push(if use_color {
        header.bold().to_string()
    } else {
        header
    });

    if response.has_records() {
        for study in &response.records {
            sections.push(format_study(study, use_color));
        }
    } else {
        sections.push(NO_RESULTS_MESSAGE.to_string());
    }

    sections.push(format_statistics(
        &response.ai_summary,
        &response.statistics,
        use_color,
    ));
    sections.join("\n\n")
}

/// One JSON object per record, then a `_metadata` line with the query,
/// summary and statistics. Field names follow the wire format.
pub fn json_lines(response: &SearchResponse) -> serde_json::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(response.records.len() + 1);
    for study in &response.records {
        lines.push(serde_json::to_string(study)?);
    }
    let metadata = serde_json::json!({
        "_metadata": {
            "query": response.query,
            "ai_summary": response.ai_summary,
            "statistics": response.statistics,
            "returned_count": response.records.len(),
        }
    });
    lines.push(serde_json::to_string(&metadata)?);
    Ok(lines)
}

fn chips(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

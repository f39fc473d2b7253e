//! Output formatters: console, JSON, and markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{display_keywords, FitReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Formats a fit report into a displayable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and banded score presentation.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    keyword_cap: usize,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saving shareable reports.
pub struct MarkdownFormatter {
    keyword_cap: usize,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, keyword_cap: usize) -> Self {
        Self {
            use_colors,
            detailed,
            keyword_cap,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            75..=100 => Color::Green,
            50..=74 => Color::Cyan,
            25..=49 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn push_keyword_list(&self, out: &mut String, heading: &str, keywords: &[String]) {
        out.push_str(heading);
        out.push('\n');
        for keyword in display_keywords(keywords, self.keyword_cap) {
            out.push_str("  • ");
            out.push_str(&keyword);
            out.push('\n');
        }
        if keywords.len() > self.keyword_cap {
            out.push_str(&format!(
                "  (showing first {} of {})\n",
                self.keyword_cap,
                keywords.len()
            ));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.colorize("📊 Resume Fit Report", Color::BrightWhite));
        out.push('\n');

        let score_text = format!("{}%", report.result.score);
        out.push_str(&format!(
            "\n🎯 Match Score: {}\n",
            self.colorize(&score_text, Self::score_color(report.result.score))
        ));

        if self.detailed {
            out.push_str(&format!(
                "\n📄 Resume: {} ({} keywords)\n",
                report.resume_path, report.resume_keyword_count
            ));
            out.push_str(&format!(
                "💼 Job description: {} ({} keywords)\n",
                report.job_path, report.job_keyword_count
            ));
        }

        out.push('\n');
        self.push_keyword_list(
            &mut out,
            &self.colorize("✅ Matching Keywords:", Color::Green),
            &report.result.matching,
        );

        out.push('\n');
        self.push_keyword_list(
            &mut out,
            &self.colorize("⚠️  Missing Keywords:", Color::Yellow),
            &report.result.missing,
        );

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(keyword_cap: usize) -> Self {
        Self { keyword_cap }
    }

    fn push_keyword_section(&self, out: &mut String, heading: &str, keywords: &[String]) {
        out.push_str(&format!("## {}\n\n", heading));
        for keyword in display_keywords(keywords, self.keyword_cap) {
            out.push_str(&format!("- {}\n", keyword));
        }
        out.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Fit Report\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at.to_rfc3339()
        ));
        out.push_str(&format!("**Match Score: {}%**\n\n", report.result.score));
        out.push_str(&format!(
            "Resume: `{}` ({} keywords) | Job: `{}` ({} keywords)\n\n",
            report.resume_path,
            report.resume_keyword_count,
            report.job_path,
            report.job_keyword_count
        ));

        self.push_keyword_section(&mut out, "Matching Keywords", &report.result.matching);
        self.push_keyword_section(&mut out, "Missing Keywords", &report.result.missing);

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Render a report in the requested format.
pub fn render_report(
    report: &FitReport,
    format: OutputFormat,
    use_colors: bool,
    detailed: bool,
    keyword_cap: usize,
) -> Result<String> {
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed, keyword_cap)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(keyword_cap)),
    };
    formatter.format_report(report)
}

/// Write the composed letter (or a rendered report) to a plain-text file.
pub fn export_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

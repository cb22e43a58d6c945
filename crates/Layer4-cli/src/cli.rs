//! Command line arguments

use clap::{Parser, Subcommand};
use reportcard_core::ReportFormat;
use reportcard_foundation::{ReportConfig, Result};

/// ReportCard - Plugin report card for a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "reportcard")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// GitHub organization to scan (default: jenkinsci)
    #[arg(long)]
    pub org: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format (html, json)
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Number of descriptors fetched concurrently (1 = sequential)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// GitHub token (overrides GITHUB_TOKEN and config)
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate the report (default)
    Generate,
    /// Print the effective configuration
    Config,
}

impl Args {
    /// 실행할 명령 (없으면 generate)
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Generate)
    }

    /// 명령행 값으로 설정 덮어쓰기
    pub fn apply(&self, config: &mut ReportConfig) {
        if let Some(org) = &self.org {
            config.organization = Some(org.clone());
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
        if let Some(format) = self.format {
            config.output.format = format.to_string();
        }
        if let Some(concurrency) = self.concurrency {
            config.fetch.concurrency = concurrency;
        }
        if let Some(token) = &self.token {
            config.github.token = Some(token.clone());
        }
        if let Some(api_url) = &self.api_url {
            config.github.api_url = api_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.fetch.timeout_secs = timeout;
        }
    }
}

/// 설정의 출력 형식
pub fn report_format(config: &ReportConfig) -> Result<ReportFormat> {
    config.output.format.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_generate() {
        let args = Args::try_parse_from(["reportcard"]).unwrap();
        assert_eq!(args.command(), Command::Generate);
        assert!(!args.debug);

        let args = Args::try_parse_from(["reportcard", "config"]).unwrap();
        assert_eq!(args.command(), Command::Config);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "reportcard",
            "--org",
            "hudson",
            "-o",
            "report.json",
            "--format",
            "json",
            "--concurrency",
            "8",
            "--token",
            "abc",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "--timeout",
            "5",
        ])
        .unwrap();

        let mut config = ReportConfig::new();
        args.apply(&mut config);

        assert_eq!(config.organization(), "hudson");
        assert_eq!(config.output.path.as_deref(), Some("report.json"));
        assert_eq!(report_format(&config).unwrap(), ReportFormat::Json);
        assert_eq!(config.fetch.concurrency, 8);
        assert_eq!(config.github.token.as_deref(), Some("abc"));
        assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.fetch.timeout_secs, 5);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let args = Args::try_parse_from(["reportcard", "generate"]).unwrap();
        let mut config = ReportConfig::new().organization_name("acme").concurrency(4);
        args.apply(&mut config);

        assert_eq!(config.organization(), "acme");
        assert_eq!(config.fetch.concurrency, 4);
        assert_eq!(report_format(&config).unwrap(), ReportFormat::Html);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["reportcard", "--format", "pdf"]).is_err());
    }
}

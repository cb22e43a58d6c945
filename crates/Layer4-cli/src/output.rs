//! 렌더링 결과 출력

use reportcard_foundation::{ReportConfig, Result};
use std::io::Write;
use std::path::Path;

/// 파일이 지정되면 파일에, 아니면 stdout에 기록
pub fn write_report(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// 출력용 설정 JSON (토큰 가림)
pub fn config_json(config: &ReportConfig) -> Result<String> {
    let mut shown = config.clone();
    if shown.github.token.is_some() {
        shown.github.token = Some("********".to_string());
    }
    Ok(serde_json::to_string_pretty(&shown)?)
}

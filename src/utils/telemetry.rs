// file: src/utils/telemetry.rs
// description: health checks for external collaborators and operation timing
// reference: component health reporting

use crate::acquisition::OcrEngine;
use crate::careers::SkillCareerMap;
use crate::config::Config;
use crate::scoring::LanguageToolChecker;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthCheck {
    pub fn healthy(component: &str, response_time: Duration) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Healthy,
            message: None,
            response_time_ms: response_time.as_millis() as u64,
        }
    }

    pub fn degraded(component: &str, message: String, response_time: Duration) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Degraded,
            message: Some(message),
            response_time_ms: response_time.as_millis() as u64,
        }
    }

    pub fn unhealthy(component: &str, message: String, response_time: Duration) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(message),
            response_time_ms: response_time.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub version: String,
}

impl HealthReport {
    pub fn new(checks: Vec<HealthCheck>, version: String) -> Self {
        let overall_status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        Self {
            overall_status,
            checks,
            version,
        }
    }

    /// Probes every collaborator the configuration relies on. Missing OCR
    /// tools only degrade the service since text-layer PDFs and Word files
    /// still parse; a broken career table or grammar endpoint is fatal.
    pub fn collect(config: &Config) -> Self {
        let ocr = OcrEngine::new(&config.acquisition);

        let checks = vec![
            run_check("tesseract", || {
                ocr.tesseract_available()
                    .then_some(())
                    .ok_or_else(|| format!("'{}' not found", config.acquisition.tesseract_path))
            }, HealthStatus::Degraded),
            run_check("pdftoppm", || {
                ocr.pdftoppm_available()
                    .then_some(())
                    .ok_or_else(|| format!("'{}' not found", config.acquisition.pdftoppm_path))
            }, HealthStatus::Degraded),
            run_check("career table", || match &config.careers.map_path {
                Some(path) => SkillCareerMap::from_json_file(path)
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
                None => Ok(()),
            }, HealthStatus::Unhealthy),
            grammar_check(config),
        ];

        Self::new(checks, env!("CARGO_PKG_VERSION").to_string())
    }

    pub fn format(&self) -> String {
        let mut output = format!(
            "{} System Health: {:?}\nVersion: {}\n\n",
            status_icon(&self.overall_status),
            self.overall_status,
            self.version,
        );

        for check in &self.checks {
            output.push_str(&format!(
                "{} {} ({:?}) - {}ms",
                status_icon(&check.status),
                check.component,
                check.status,
                check.response_time_ms
            ));

            if let Some(ref msg) = check.message {
                output.push_str(&format!("\n  {}", msg));
            }

            output.push('\n');
        }

        output
    }
}

fn status_icon(status: &HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "✓",
        HealthStatus::Degraded => "⚠",
        HealthStatus::Unhealthy => "✗",
    }
}

fn run_check<F>(component: &str, check: F, failure: HealthStatus) -> HealthCheck
where
    F: FnOnce() -> std::result::Result<(), String>,
{
    let start = Instant::now();
    match check() {
        Ok(()) => HealthCheck::healthy(component, start.elapsed()),
        Err(message) => match failure {
            HealthStatus::Unhealthy => HealthCheck::unhealthy(component, message, start.elapsed()),
            _ => HealthCheck::degraded(component, message, start.elapsed()),
        },
    }
}

fn grammar_check(config: &Config) -> HealthCheck {
    if !config.grammar.enabled {
        return HealthCheck::healthy("grammar service (disabled)", Duration::ZERO);
    }

    run_check("grammar service", || {
        LanguageToolChecker::new(&config.grammar)
            .and_then(|checker| checker.ping())
            .map_err(|e| e.to_string())
    }, HealthStatus::Unhealthy)
}

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} in {:.2}s",
            self.operation,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn warn_if_slow(&self, threshold: Duration, message: &str) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow operation [{}]: {} took {:.2}s (threshold: {:.2}s)",
                self.operation,
                message,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_health_report_overall_status() {
        let checks = vec![
            HealthCheck::healthy("tesseract", Duration::from_millis(10)),
            HealthCheck::degraded("pdftoppm", "missing".to_string(), Duration::from_millis(1)),
        ];

        let report = HealthReport::new(checks, "0.1.0".to_string());
        assert_eq!(report.overall_status, HealthStatus::Degraded);
        assert!(report.format().contains("pdftoppm (Degraded)"));
    }

    #[test]
    fn test_missing_tools_only_degrade() {
        let mut config = Config::default_config();
        config.acquisition.tesseract_path = "/nonexistent/tesseract".to_string();
        config.acquisition.pdftoppm_path = "/nonexistent/pdftoppm".to_string();

        let report = HealthReport::collect(&config);
        assert_eq!(report.overall_status, HealthStatus::Degraded);
        assert_eq!(report.checks.len(), 4);
    }

    #[test]
    fn test_bad_career_table_is_unhealthy() {
        let mut config = Config::default_config();
        config.careers.map_path = Some(PathBuf::from("/nonexistent/careers.json"));

        let report = HealthReport::collect(&config);
        assert_eq!(report.overall_status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }
}

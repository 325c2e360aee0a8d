use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct AuditEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AuditEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting contrast audit...");
        self.monitor.log_stats("Startup");

        println!("Resolving color pairs...");
        let pairs = self.pipeline.extract().await?;
        println!("Resolved {} color pairs", pairs.len());
        self.monitor.log_stats("Extract");

        println!("Evaluating contrast ratios...");
        let result = self.pipeline.evaluate(pairs).await?;
        println!(
            "Evaluated {} pairs: {} pass, {} large-text only, {} fail",
            result.summary.total,
            result.summary.pass,
            result.summary.pass_large_only,
            result.summary.fail
        );
        if result.summary.fail > 0 {
            tracing::warn!(
                "⚠️ {} color pair(s) fail WCAG AA at any text size",
                result.summary.fail
            );
        }
        self.monitor.log_stats("Evaluate");

        println!("Writing report...");
        let output_path = self.pipeline.report(result).await?;
        println!("Report saved to: {}", output_path);
        self.monitor.log_stats("Report");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

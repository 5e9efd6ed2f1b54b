//! Task dispatch
//!
//! Launches one research worker process per topic, all concurrently, and
//! waits for every one of them to terminate. Dispatch is best-effort: a
//! worker that exits non-zero, writes to stderr, or fails to spawn at all
//! is logged and otherwise ignored. A failed research task surfaces later,
//! at extraction time, as an Unclear verdict.

use crate::research::topics::ResearchTopic;
use crate::types::AppError;
use futures::future::join_all;
use std::process::Stdio;
use tokio::process::Command;

/// One worker invocation paired with the topic it investigates.
#[derive(Debug, Clone)]
pub struct ResearchTask {
    /// The question handed to the worker as its single argument.
    pub question: String,
    /// Position in the fixed topic order.
    pub index: usize,
    /// Worker executable.
    pub program: String,
    /// Fixed arguments preceding the question.
    pub args: Vec<String>,
}

/// Terminal state of one dispatched worker, for logging only. The report
/// artifact on disk is the worker's real output channel.
#[derive(Debug, Clone, Copy)]
pub struct WorkerOutcome {
    /// Position in the fixed topic order.
    pub index: usize,
    /// Whether the process spawned and exited with status zero.
    pub success: bool,
}

/// Pair every topic with the configured worker invocation.
///
/// `worker_command` is whitespace-split into program and leading
/// arguments, so commands like `python researcher.py` work; the question
/// text is appended as one final argument and never shell-interpreted.
pub fn build_tasks(worker_command: &str, topics: &[ResearchTopic]) -> Vec<ResearchTask> {
    let mut parts = worker_command.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_default();
    let args: Vec<String> = parts.collect();

    topics
        .iter()
        .map(|topic| ResearchTask {
            question: topic.question.clone(),
            index: topic.index,
            program: program.clone(),
            args: args.clone(),
        })
        .collect()
}

/// Run all tasks concurrently and block until every worker has
/// terminated, regardless of exit status. Outcomes are returned in topic
/// order, independent of completion order. No timeouts, no retries, no
/// cancellation: once dispatched, a worker runs to completion.
pub async fn dispatch_all(tasks: Vec<ResearchTask>) -> Vec<WorkerOutcome> {
    join_all(tasks.into_iter().map(run_worker)).await
}

async fn run_worker(task: ResearchTask) -> WorkerOutcome {
    tracing::info!("Dispatching research worker {}: {}", task.index, task.question);

    let mut cmd = Command::new(&task.program);
    cmd.args(&task.args)
        .arg(&task.question)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(e) => {
            let err = AppError::WorkerFailure(format!(
                "research worker {} ({}) failed to spawn: {}",
                task.index, task.program, e
            ));
            tracing::warn!("{err}");
            return WorkerOutcome {
                index: task.index,
                success: false,
            };
        }
    };

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        tracing::warn!("Errors from research worker {}: {}", task.index, stderr.trim());
    }
    if !output.status.success() {
        let err = AppError::WorkerFailure(format!(
            "research worker {} exited with {}",
            task.index, output.status
        ));
        tracing::warn!("{err}");
    }

    WorkerOutcome {
        index: task.index,
        success: output.status.success(),
    }
}

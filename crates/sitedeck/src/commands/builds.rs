//! Build command handlers: history, restarts, logs, and scan reports.

use std::time::Duration;

use tabled::Tabled;

use sitedeck_api::{Build, BuildTask};
use sitedeck_core::SyncService;

use crate::cli::{BuildsArgs, BuildsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

const FOLLOW_POLL_INTERVAL: Duration = Duration::from_secs(5);

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct BuildRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Started")]
    started: String,
    #[tabled(rename = "Completed")]
    completed: String,
}

fn build_row(b: &Build, color: bool) -> BuildRow {
    BuildRow {
        id: b.id,
        branch: b.branch.clone(),
        state: output::build_state_label(b.state, color),
        started: util::short_date(b.started_at),
        completed: util::short_date(b.completed_at),
    }
}

fn build_detail(b: &Build, color: bool) -> String {
    let mut lines = vec![
        format!("Build:      {} (site {})", b.id, b.site),
        format!("Branch:     {}", b.branch),
        format!("State:      {}", output::build_state_label(b.state, color)),
    ];
    if let Some(ref sha) = b.requested_commit_sha {
        lines.push(format!("Commit:     {sha}"));
    }
    if let Some(ref username) = b.username {
        lines.push(format!("Started by: {username}"));
    }
    if let Some(ref error) = b.error {
        lines.push(format!("Error:      {error}"));
    }
    lines.join("\n")
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Findings")]
    findings: String,
}

impl From<&BuildTask> for TaskRow {
    fn from(t: &BuildTask) -> Self {
        Self {
            id: t.id,
            kind: t.kind.clone(),
            status: format!("{:?}", t.status).to_lowercase(),
            findings: t.count.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    sync: &SyncService,
    args: BuildsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(&global.color);
    match args.command {
        BuildsCommand::List { site } => {
            sync.fetch_builds(site).await?;
            let state = sync.store().state();
            let out = output::render_list(
                &global.output,
                &state.builds.data,
                |b| build_row(b, color),
                |b| b.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BuildsCommand::Get { build } => {
            sync.refresh_build(build).await?;
            let state = sync.store().state();
            let found = state
                .builds
                .data
                .iter()
                .find(|b| b.id == build)
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "build".into(),
                    identifier: build.to_string(),
                    list_command: "builds list".into(),
                })?;
            let out = output::render_single(
                &global.output,
                found,
                |b| build_detail(b, color),
                |b| b.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BuildsCommand::Restart { build, site } => {
            sync.restart_build(build, site).await?;
            if !global.quiet {
                eprintln!("Build queued");
            }
            Ok(())
        }

        BuildsCommand::Logs { build, follow } => {
            let mut printed = 0;
            loop {
                sync.fetch_build_log(build).await?;

                let state = sync.store().state();
                let log = state
                    .build_logs
                    .get(&build)
                    .map(|entry| entry.data.clone())
                    .unwrap_or_default();

                // The store accumulates the full log; only print what
                // arrived since the last poll.
                for line in log.lines.iter().skip(printed) {
                    println!("{line}");
                }
                printed = log.lines.len();

                let terminal = log.state.is_some_and(sitedeck_api::BuildState::is_terminal);
                if !follow || terminal {
                    break;
                }
                tokio::time::sleep(FOLLOW_POLL_INTERVAL).await;
            }
            Ok(())
        }

        BuildsCommand::Tasks { build } => {
            sync.fetch_build_tasks(build).await?;
            let state = sync.store().state();
            let tasks = state
                .build_tasks
                .get(&build)
                .map(|entry| entry.data.clone())
                .unwrap_or_default();
            let out =
                output::render_list(&global.output, &tasks, |t| TaskRow::from(t), |t| t.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

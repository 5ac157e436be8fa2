use crate::infra::{file_checklist_store, memory_checklist_store};
use admission_guide::config::{AppConfig, StorageBackend};
use admission_guide::error::AppError;
use admission_guide::guide::checklist::{export_csv, item_views};
use admission_guide::guide::tables::DEFAULT_SEMESTER;
use admission_guide::guide::{
    ChecklistProgress, ChecklistStore, CostEstimate, CostEstimator, DegreeLevel, KeyValueStore,
    Timeline, TimelineGenerator, TimelineResolution,
};
use admission_guide::telemetry;
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CostArgs {
    /// Program type (undergraduate, graduate, doctoral)
    #[arg(long)]
    pub(crate) program: Option<String>,
    /// Location cost tier (low, medium, high)
    #[arg(long)]
    pub(crate) location: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct TimelineArgs {
    /// Degree level (undergraduate, graduate, doctoral, postdoc)
    #[arg(long)]
    pub(crate) degree: DegreeLevel,
    /// Admission semester key, e.g. fall2027
    #[arg(long, default_value = DEFAULT_SEMESTER)]
    pub(crate) semester: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ChecklistCommand {
    /// List every checklist item with its completion flag
    Show(DegreeArgs),
    /// Mark an item as completed
    Check(ItemArgs),
    /// Mark an item as not completed
    Uncheck(ItemArgs),
    /// Print the completion percentage
    Progress(DegreeArgs),
    /// Write a printable CSV checklist
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub(crate) struct DegreeArgs {
    #[arg(long)]
    pub(crate) degree: DegreeLevel,
}

#[derive(Args, Debug)]
pub(crate) struct ItemArgs {
    #[arg(long)]
    pub(crate) degree: DegreeLevel,
    /// Zero-based item index as listed by `checklist show`
    #[arg(long)]
    pub(crate) index: usize,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[arg(long)]
    pub(crate) degree: DegreeLevel,
    /// Destination file (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_costs(args: CostArgs) -> Result<(), AppError> {
    let estimate =
        CostEstimator::estimate_selection(args.program.as_deref(), args.location.as_deref())?;
    match estimate {
        Some(estimate) => print!("{}", render_estimate(&estimate)),
        None => println!("Select both --program and --location to see an estimate."),
    }
    Ok(())
}

pub(crate) fn run_timeline(args: TimelineArgs) -> Result<(), AppError> {
    let timeline = TimelineGenerator::timeline(args.degree, &args.semester)?;
    print!("{}", render_timeline(&timeline));
    Ok(())
}

pub(crate) fn run_checklist(command: ChecklistCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.storage.backend {
        StorageBackend::File => {
            let store = file_checklist_store(&config.storage);
            execute_checklist(&store, command, &mut out)
        }
        StorageBackend::Memory => {
            let store = memory_checklist_store();
            execute_checklist(&store, command, &mut out)
        }
    }
}

pub(crate) fn execute_checklist<S, W>(
    store: &ChecklistStore<S>,
    command: ChecklistCommand,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore,
    W: Write,
{
    match command {
        ChecklistCommand::Show(DegreeArgs { degree }) => {
            write!(out, "{}", render_checklist(store, degree))?;
        }
        ChecklistCommand::Check(ItemArgs { degree, index }) => {
            let state = store.set_item(degree, index, true)?;
            let progress = ChecklistProgress::for_degree(degree, &state);
            writeln!(out, "{}", progress.summary())?;
        }
        ChecklistCommand::Uncheck(ItemArgs { degree, index }) => {
            let state = store.set_item(degree, index, false)?;
            let progress = ChecklistProgress::for_degree(degree, &state);
            writeln!(out, "{}", progress.summary())?;
        }
        ChecklistCommand::Progress(DegreeArgs { degree }) => {
            writeln!(out, "{}", store.progress(degree).summary())?;
        }
        ChecklistCommand::Export(ExportArgs { degree, output }) => match output {
            Some(path) => {
                export_csv(store, degree, File::create(&path)?)?;
                writeln!(out, "Checklist written to {}", path.display())?;
            }
            None => export_csv(store, degree, &mut *out)?,
        },
    }
    Ok(())
}

pub(crate) fn render_estimate(estimate: &CostEstimate) -> String {
    let mut output = format!(
        "Estimated Annual Costs ({} / {})\n",
        estimate.program_type.label(),
        estimate.location.label()
    );
    for item in estimate.line_items() {
        output.push_str(&format!("- {:<18} {:>10}\n", item.label, item.formatted));
    }
    output.push_str(&format!(
        "= {:<18} {:>10}\n",
        "Total Annual Cost",
        estimate.formatted_total()
    ));
    if let Some(note) = estimate.note {
        output.push_str(&format!("Note: {note}\n"));
    }
    output
}

pub(crate) fn render_timeline(timeline: &Timeline) -> String {
    let mut output = format!(
        "Your Personalized Timeline ({}, {})\n",
        timeline.degree.label(),
        timeline.resolved_semester
    );
    if timeline.resolution == TimelineResolution::Fallback {
        let available = TimelineGenerator::semesters(timeline.degree).join(", ");
        output.push_str(&format!(
            "No dedicated plan for '{}' (available: {}); showing {}.\n",
            timeline.requested_semester, available, timeline.resolved_semester
        ));
    }
    for milestone in &timeline.milestones {
        output.push_str(&format!(
            "\n[{}] {}\n  {}\n",
            milestone.date_range, milestone.title, milestone.description
        ));
    }
    output
}

pub(crate) fn render_checklist<S: KeyValueStore>(
    store: &ChecklistStore<S>,
    degree: DegreeLevel,
) -> String {
    let state = store.load(degree);
    let mut output = format!("{} checklist\n", degree.label());
    for item in item_views(degree, &state) {
        let mark = if item.completed { "x" } else { " " };
        output.push_str(&format!("{:>3}. [{}] {}\n", item.index, mark, item.label));
    }
    output.push_str(&ChecklistProgress::for_degree(degree, &state).summary());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use admission_guide::guide::{InMemoryStore, LocationTier, ProgramType};
    use std::sync::Arc;

    fn memory_store() -> ChecklistStore<InMemoryStore> {
        ChecklistStore::new(Arc::new(InMemoryStore::default()))
    }

    #[test]
    fn estimate_rendering_lists_total_and_note() {
        let estimate = CostEstimator::estimate(ProgramType::Doctoral, LocationTier::High);
        let text = render_estimate(&estimate);
        assert!(text.contains("Tuition & Fees"));
        assert!(text.contains("$0"));
        assert!(text.contains("$32,600"));
        assert!(text.contains("Note: PhD programs"));
    }

    #[test]
    fn timeline_rendering_flags_fallback() {
        let timeline =
            TimelineGenerator::timeline(DegreeLevel::Doctoral, "spring2027").expect("fallback");
        let text = render_timeline(&timeline);
        assert!(text.contains("No dedicated plan for 'spring2027' (available: fall2027)"));
        assert!(text.contains("[April 15, 2027] Acceptance Deadline"));
    }

    #[test]
    fn check_then_show_marks_item() {
        let store = memory_store();
        let mut out = Vec::new();
        execute_checklist(
            &store,
            ChecklistCommand::Check(ItemArgs {
                degree: DegreeLevel::Postdoc,
                index: 0,
            }),
            &mut out,
        )
        .expect("check succeeds");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "8% Complete (1/12 items)\n"
        );

        let text = render_checklist(&store, DegreeLevel::Postdoc);
        assert!(text.contains("  0. [x] Update CV with all publications and presentations"));
        assert!(text.contains("  1. [ ] Write research statement (1-2 pages)"));
    }

    #[test]
    fn check_rejects_out_of_range_index() {
        let store = memory_store();
        let mut out = Vec::new();
        let err = execute_checklist(
            &store,
            ChecklistCommand::Check(ItemArgs {
                degree: DegreeLevel::Graduate,
                index: 99,
            }),
            &mut out,
        )
        .expect_err("index rejected");
        assert!(err.to_string().contains("out of range"));
        assert!(out.is_empty());
    }

    #[test]
    fn export_without_output_writes_csv_to_stream() {
        let store = memory_store();
        let mut out = Vec::new();
        execute_checklist(
            &store,
            ChecklistCommand::Export(ExportArgs {
                degree: DegreeLevel::Undergraduate,
                output: None,
            }),
            &mut out,
        )
        .expect("export succeeds");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 15);
    }
}

//! Derives day plans from the remote catalogue and compiles logs into
//! timesheets

use chrono::{NaiveDate, Utc};
use hourbridge_domain::utils::slugify;
use hourbridge_domain::{Log, Plan, PlanDefaults, Timesheet, TimesheetMeta};

use crate::sync::ports::Project;

/// Display-name prefix that marks a project as a support engagement.
const SUPPORT_PREFIX: &str = "support - ";

/// Derive a plan from a fresh project listing plus static defaults.
///
/// Every project contributes a tracker mapping entry. Projects named
/// `"Support - <customer>"` (case-insensitive) additionally synthesize a
/// `customer/<slug>` subject tag. Configured default subjects come first,
/// synthesized ones follow in listing order.
#[must_use]
pub fn build_plan(
    date: NaiveDate,
    projects: &[Project],
    defaults: &PlanDefaults,
    source_id: &str,
) -> Plan {
    let mut subjects = defaults.subjects.clone();
    let mut trackers = std::collections::BTreeMap::new();

    for project in projects {
        trackers.insert(project.id.clone(), project.name.clone());

        if let Some(customer) = support_customer(&project.name) {
            subjects.push(format!("customer/{}", slugify(customer)));
        }
    }

    Plan {
        source: source_id.to_string(),
        valid_from: date,
        valid_until: None,
        roles: defaults.roles.clone(),
        objectives: defaults.objectives.clone(),
        actions: defaults.actions.clone(),
        subjects,
        trackers,
    }
}

/// Compile a log into a timesheet for one audience.
///
/// Keeps only timeline items carrying at least one tracker namespaced
/// `"<audience_id>:"`. Always produces a timesheet, even when the filter
/// leaves nothing: compiled-but-empty is distinct from never-compiled.
/// Submission metadata stays unset until a submission actually happens.
#[must_use]
pub fn compile_timesheet(log: &Log, actor: &str, audience_id: &str) -> Timesheet {
    let prefix = format!("{audience_id}:");
    let timeline = log
        .timeline
        .iter()
        .filter(|item| item.intent.trackers.iter().any(|t| t.starts_with(&prefix)))
        .cloned()
        .collect();

    Timesheet {
        actor: actor.to_string(),
        date: log.date,
        compiled: Utc::now(),
        timezone: log.timezone.clone(),
        timeline,
        meta: TimesheetMeta {
            audience_id: audience_id.to_string(),
            submitted_at: None,
            submitted_by: None,
        },
    }
}

/// The customer part of a support project's display name, if it has one.
fn support_customer(name: &str) -> Option<&str> {
    let prefix_len = SUPPORT_PREFIX.len();
    if name.len() >= prefix_len
        && name.is_char_boundary(prefix_len)
        && name[..prefix_len].eq_ignore_ascii_case(SUPPORT_PREFIX)
    {
        Some(&name[prefix_len..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use chrono::TimeZone;
    use hourbridge_domain::{Intent, TimelineItem};

    use super::*;

    fn projects() -> Vec<Project> {
        vec![
            Project { id: "101".into(), name: "Internal Tooling".into() },
            Project { id: "102".into(), name: "Support - Acme Corp".into() },
            Project { id: "103".into(), name: "SUPPORT - Widgets & Co.".into() },
        ]
    }

    fn defaults() -> PlanDefaults {
        PlanDefaults {
            roles: vec!["engineer".into()],
            objectives: vec!["ship".into()],
            actions: vec!["develop".into()],
            subjects: vec!["internal/ops".into()],
        }
    }

    #[test]
    fn maps_every_project_into_trackers() {
        let plan = build_plan(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            &projects(),
            &defaults(),
            "element",
        );

        assert_eq!(plan.trackers.len(), 3);
        assert_eq!(plan.trackers.get("102").map(String::as_str), Some("Support - Acme Corp"));
        assert_eq!(plan.source, "element");
        assert!(plan.valid_until.is_none());
    }

    #[test]
    fn synthesizes_customer_subjects_for_support_projects() {
        let plan = build_plan(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            &projects(),
            &defaults(),
            "element",
        );

        assert_eq!(
            plan.subjects,
            vec![
                "internal/ops".to_string(),
                "customer/acme-corp".to_string(),
                "customer/widgets-co".to_string(),
            ]
        );
    }

    #[test]
    fn non_support_names_contribute_no_subject() {
        let plan = build_plan(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            &[Project { id: "1".into(), name: "Supporting Cast".into() }],
            &PlanDefaults::default(),
            "element",
        );

        assert!(plan.subjects.is_empty());
    }

    #[test]
    fn carries_defaults_through() {
        let plan = build_plan(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            &[],
            &defaults(),
            "element",
        );

        assert_eq!(plan.roles, vec!["engineer".to_string()]);
        assert_eq!(plan.objectives, vec!["ship".to_string()]);
        assert_eq!(plan.actions, vec!["develop".to_string()]);
    }

    fn log_item(alias: &str, trackers: &[&str]) -> TimelineItem {
        let offset = FixedOffset::east_opt(3600).unwrap();
        TimelineItem {
            alias: alias.to_string(),
            intent: Intent { trackers: trackers.iter().map(ToString::to_string).collect() },
            start: offset.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
            end: offset.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap(),
        }
    }

    fn log(items: Vec<TimelineItem>) -> Log {
        Log {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            timezone: "Europe/Berlin".into(),
            timeline: items,
        }
    }

    #[test]
    fn keeps_only_items_tracked_for_this_audience() {
        let compiled = compile_timesheet(
            &log(vec![
                log_item("ours", &["element:101"]),
                log_item("foreign", &["jira:ABC-1"]),
                log_item("untracked", &[]),
                log_item("mixed", &["jira:ABC-2", "element:102"]),
            ]),
            "user",
            "element",
        );

        let aliases: Vec<&str> = compiled.timeline.iter().map(|i| i.alias.as_str()).collect();
        assert_eq!(aliases, vec!["ours", "mixed"]);
    }

    #[test]
    fn empty_filter_still_produces_a_timesheet() {
        let compiled = compile_timesheet(&log(vec![log_item("foreign", &["jira:X"])]), "user", "element");

        assert!(compiled.is_empty());
        assert_eq!(compiled.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(compiled.timezone, "Europe/Berlin");
    }

    #[test]
    fn metadata_is_tagged_but_unsubmitted() {
        let compiled = compile_timesheet(&log(Vec::new()), "user", "element");

        assert_eq!(compiled.actor, "user");
        assert_eq!(compiled.meta.audience_id, "element");
        assert!(compiled.meta.submitted_at.is_none());
        assert!(compiled.meta.submitted_by.is_none());
    }
}

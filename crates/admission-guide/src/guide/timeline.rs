use serde::Serialize;
use tracing::debug;

use super::domain::{DegreeLevel, GuideError};
use super::tables::{timeline_entries, TimelineEntry, DEFAULT_SEMESTER};

/// A dated step in an application timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub date_range: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// How the requested semester was matched against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineResolution {
    Exact,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub degree: DegreeLevel,
    pub requested_semester: String,
    pub resolved_semester: &'static str,
    pub resolution: TimelineResolution,
    pub milestones: Vec<Milestone>,
}

pub struct TimelineGenerator;

impl TimelineGenerator {
    /// Ordered milestones for the degree/semester pair, after the default-semester fallback.
    pub fn generate(degree: DegreeLevel, semester: &str) -> Result<Vec<Milestone>, GuideError> {
        Self::timeline(degree, semester).map(|timeline| timeline.milestones)
    }

    pub fn timeline(degree: DegreeLevel, semester: &str) -> Result<Timeline, GuideError> {
        let (entry, resolution) = Self::resolve(degree, semester)?;

        Ok(Timeline {
            degree,
            requested_semester: semester.to_string(),
            resolved_semester: entry.semester,
            resolution,
            milestones: entry.milestones.to_vec(),
        })
    }

    /// Parses the degree from a raw selection before generating.
    pub fn generate_selection(degree: &str, semester: &str) -> Result<Timeline, GuideError> {
        let degree: DegreeLevel = degree.parse()?;
        Self::timeline(degree, semester)
    }

    /// Semesters with dedicated data for a degree level, in table order.
    pub fn semesters(degree: DegreeLevel) -> Vec<&'static str> {
        timeline_entries(degree)
            .iter()
            .map(|entry| entry.semester)
            .collect()
    }

    fn resolve(
        degree: DegreeLevel,
        semester: &str,
    ) -> Result<(&'static TimelineEntry, TimelineResolution), GuideError> {
        Self::resolve_in(timeline_entries(degree), degree, semester)
    }

    /// Two steps: exact semester, then [`DEFAULT_SEMESTER`]; nothing further.
    fn resolve_in<'t>(
        entries: &'t [TimelineEntry],
        degree: DegreeLevel,
        semester: &str,
    ) -> Result<(&'t TimelineEntry, TimelineResolution), GuideError> {
        if let Some(entry) = entries.iter().find(|entry| entry.semester == semester) {
            return Ok((entry, TimelineResolution::Exact));
        }

        if let Some(entry) = entries
            .iter()
            .find(|entry| entry.semester == DEFAULT_SEMESTER)
        {
            debug!(%degree, requested = semester, "timeline falling back to default semester");
            return Ok((entry, TimelineResolution::Fallback));
        }

        Err(GuideError::NoTimelineData {
            degree,
            semester: semester.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRING_ONLY: &[Milestone] = &[Milestone {
        date_range: "January 2027",
        title: "Spring Intake",
        description: "Arrive for the spring term.",
    }];

    #[test]
    fn exact_semester_is_preferred() {
        let timeline = TimelineGenerator::timeline(DegreeLevel::Undergraduate, "fall2026")
            .expect("timeline exists");
        assert_eq!(timeline.resolution, TimelineResolution::Exact);
        assert_eq!(timeline.resolved_semester, "fall2026");
        assert_eq!(timeline.milestones.len(), 3);
        assert_eq!(timeline.milestones[0].title, "Urgent Preparation");
    }

    #[test]
    fn unknown_semester_falls_back_once() {
        let timeline = TimelineGenerator::timeline(DegreeLevel::Graduate, "spring2028")
            .expect("fallback exists");
        assert_eq!(timeline.resolution, TimelineResolution::Fallback);
        assert_eq!(timeline.resolved_semester, DEFAULT_SEMESTER);
        assert_eq!(timeline.requested_semester, "spring2028");
    }

    #[test]
    fn missing_default_semester_is_an_error() {
        let entries = [TimelineEntry {
            semester: "spring2027",
            milestones: SPRING_ONLY,
        }];

        let (entry, resolution) =
            TimelineGenerator::resolve_in(&entries, DegreeLevel::Postdoc, "spring2027")
                .expect("exact match");
        assert_eq!(resolution, TimelineResolution::Exact);
        assert_eq!(entry.milestones[0].title, "Spring Intake");

        let err = TimelineGenerator::resolve_in(&entries, DegreeLevel::Postdoc, "fall2030")
            .expect_err("no fallback available");
        assert!(matches!(
            err,
            GuideError::NoTimelineData {
                degree: DegreeLevel::Postdoc,
                ref semester,
            } if semester == "fall2030"
        ));
    }

    #[test]
    fn generated_milestones_are_independent_copies() {
        let mut first = TimelineGenerator::generate(DegreeLevel::Doctoral, DEFAULT_SEMESTER)
            .expect("timeline exists");
        first.clear();
        let second = TimelineGenerator::generate(DegreeLevel::Doctoral, DEFAULT_SEMESTER)
            .expect("timeline exists");
        assert_eq!(second.len(), 8);
    }

    #[test]
    fn selection_rejects_unknown_degree() {
        let err = TimelineGenerator::generate_selection("bootcamp", "fall2027")
            .expect_err("invalid degree");
        assert!(matches!(err, GuideError::InvalidSelection { .. }));
    }
}

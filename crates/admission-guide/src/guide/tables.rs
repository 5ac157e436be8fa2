//! Static lookup data backing the estimator, timeline generator, and checklists.
//!
//! Amounts are whole US dollars per academic year. Timeline entries are listed in
//! chronological order and that order is part of the contract.

use super::costs::CostBreakdown;
use super::domain::{DegreeLevel, LocationTier, ProgramType};
use super::timeline::Milestone;

/// Semester used when a degree level has no entry for the requested one.
pub const DEFAULT_SEMESTER: &str = "fall2027";

pub(crate) const DOCTORAL_FUNDING_NOTE: &str =
    "PhD programs typically provide full tuition waiver + stipend ($18,000-$35,000/year)";

const fn costs(tuition: u32, living: u32, books: u32, insurance: u32, misc: u32) -> CostBreakdown {
    CostBreakdown {
        tuition,
        living,
        books,
        insurance,
        misc,
    }
}

pub(crate) const fn cost_breakdown(program: ProgramType, tier: LocationTier) -> CostBreakdown {
    use LocationTier::*;
    use ProgramType::*;

    match (program, tier) {
        (Undergraduate, Low) => costs(25_000, 12_000, 1_000, 2_000, 2_000),
        (Undergraduate, Medium) => costs(35_000, 15_000, 1_000, 2_000, 2_500),
        (Undergraduate, High) => costs(55_000, 20_000, 1_200, 2_500, 3_000),
        (Graduate, Low) => costs(20_000, 12_000, 800, 2_000, 1_500),
        (Graduate, Medium) => costs(35_000, 15_000, 1_000, 2_000, 2_000),
        (Graduate, High) => costs(50_000, 20_000, 1_200, 2_500, 2_500),
        (Doctoral, Low) => costs(0, 18_000, 500, 2_000, 1_000),
        (Doctoral, Medium) => costs(0, 22_000, 500, 2_000, 1_200),
        (Doctoral, High) => costs(0, 28_000, 600, 2_500, 1_500),
    }
}

/// One admission semester's worth of milestones for a degree level.
#[derive(Debug)]
pub(crate) struct TimelineEntry {
    pub semester: &'static str,
    pub milestones: &'static [Milestone],
}

const fn milestone(
    date_range: &'static str,
    title: &'static str,
    description: &'static str,
) -> Milestone {
    Milestone {
        date_range,
        title,
        description,
    }
}

const UNDERGRADUATE_FALL_2027: &[Milestone] = &[
    milestone(
        "Now - Spring 2026",
        "Preparation Phase",
        "Take SAT/ACT, TOEFL/IELTS. Build extracurricular profile. Research universities.",
    ),
    milestone(
        "Summer 2026",
        "Application Planning",
        "Finalize college list (6-12 schools). Draft personal essays. Request letters of recommendation.",
    ),
    milestone(
        "September - October 2026",
        "Early Applications",
        "Submit Early Action/Early Decision applications (deadline: November 1)",
    ),
    milestone(
        "November - December 2026",
        "Regular Decision Prep",
        "Finalize remaining applications. Complete financial aid forms (CSS Profile, FAFSA).",
    ),
    milestone(
        "January 1-15, 2027",
        "Regular Decision Deadline",
        "Submit all remaining applications. Double-check all materials submitted.",
    ),
    milestone(
        "March - April 2027",
        "Admission Decisions",
        "Receive decisions. Compare financial aid packages. Visit campuses if possible.",
    ),
    milestone(
        "May 1, 2027",
        "Commitment Deadline",
        "Accept offer and submit deposit. Decline other offers.",
    ),
    milestone(
        "May - August 2027",
        "Pre-Arrival",
        "Apply for F-1 visa. Arrange housing. Attend orientation. Purchase health insurance.",
    ),
];

const UNDERGRADUATE_FALL_2026: &[Milestone] = &[
    milestone(
        "Now - May 2026",
        "Urgent Preparation",
        "Take required tests immediately. Draft essays quickly. Contact recommenders urgently.",
    ),
    milestone(
        "June - July 2026",
        "Application Sprint",
        "Apply to schools with rolling admissions or late deadlines. Consider gap year programs.",
    ),
    milestone(
        "August 2026",
        "Final Preparations",
        "If admitted, complete visa process urgently. Otherwise, plan for next cycle.",
    ),
];

const GRADUATE_FALL_2027: &[Milestone] = &[
    milestone(
        "Now - Summer 2026",
        "Research & Preparation",
        "Take GRE/GMAT. Achieve TOEFL 90+. Research programs and faculty. Build research experience.",
    ),
    milestone(
        "July - September 2026",
        "Application Development",
        "Draft statement of purpose. Request 3 recommendation letters. Prepare CV. Order transcripts.",
    ),
    milestone(
        "October - November 2026",
        "Contact Faculty",
        "Email potential advisors. Attend virtual open houses. Refine research interests.",
    ),
    milestone(
        "December 1-15, 2026",
        "Priority Deadlines",
        "Submit applications for programs with December deadlines (common for funding consideration).",
    ),
    milestone(
        "January 1-15, 2027",
        "Main Deadline Wave",
        "Submit remaining applications. Most graduate programs have January 1-15 deadlines.",
    ),
    milestone(
        "February - April 2027",
        "Interviews & Decisions",
        "Participate in interviews (if required). Receive admission decisions and funding offers.",
    ),
    milestone(
        "April 15, 2027",
        "Decision Day",
        "Accept offer (April 15 is common graduate deadline). Decline other offers.",
    ),
    milestone(
        "May - August 2027",
        "Pre-Arrival",
        "Apply for F-1/J-1 visa. Secure housing. Connect with current students.",
    ),
];

const DOCTORAL_FALL_2027: &[Milestone] = &[
    milestone(
        "Now - Summer 2026",
        "Research Phase",
        "Publish/present research. Take GRE. Achieve TOEFL 100+. Identify 15-20 potential programs.",
    ),
    milestone(
        "July - September 2026",
        "Faculty Contact Prep",
        "Read faculty publications. Draft research statement (2-3 pages). Prepare CV with publications.",
    ),
    milestone(
        "September - November 2026",
        "Contact Professors",
        "Email 2-3 professors per school. Attend conferences. Refine research proposal based on feedback.",
    ),
    milestone(
        "November - December 2026",
        "Application Finalization",
        "Complete applications (deadlines typically Dec 1-15). Request 3 strong recommendation letters.",
    ),
    milestone(
        "January - March 2027",
        "Interview Season",
        "Participate in recruitment weekends. Meet faculty and students. Present research.",
    ),
    milestone(
        "March - April 2027",
        "Decision Time",
        "Receive offers with funding packages. Compare stipends and benefits. Make decision.",
    ),
    milestone(
        "April 15, 2027",
        "Acceptance Deadline",
        "Accept PhD offer. Officially decline other programs.",
    ),
    milestone(
        "May - August 2027",
        "Preparation",
        "Apply for visa. Find housing. Connect with lab group. Review background literature.",
    ),
];

const POSTDOC_FALL_2027: &[Milestone] = &[
    milestone(
        "Now - Ongoing",
        "Job Search",
        "Monitor job boards (HigherEdJobs, Nature Careers). Network at conferences. Check lab websites.",
    ),
    milestone(
        "Ongoing",
        "Direct Applications",
        "Email PIs directly with CV and research statement. Tailor cover letters to each position.",
    ),
    milestone(
        "3-6 months before start",
        "Offer & Negotiation",
        "Receive offers. Negotiate salary, start date, and research support.",
    ),
    milestone(
        "2-3 months before start",
        "Visa Process",
        "Receive DS-2019 or employment letter. Apply for J-1 or H-1B visa.",
    ),
    milestone(
        "1 month before start",
        "Logistics",
        "Arrange housing. Plan travel. Complete hiring paperwork. Set up bank account.",
    ),
];

const UNDERGRADUATE_TIMELINES: &[TimelineEntry] = &[
    TimelineEntry {
        semester: "fall2027",
        milestones: UNDERGRADUATE_FALL_2027,
    },
    TimelineEntry {
        semester: "fall2026",
        milestones: UNDERGRADUATE_FALL_2026,
    },
];

const GRADUATE_TIMELINES: &[TimelineEntry] = &[TimelineEntry {
    semester: "fall2027",
    milestones: GRADUATE_FALL_2027,
}];

const DOCTORAL_TIMELINES: &[TimelineEntry] = &[TimelineEntry {
    semester: "fall2027",
    milestones: DOCTORAL_FALL_2027,
}];

const POSTDOC_TIMELINES: &[TimelineEntry] = &[TimelineEntry {
    semester: "fall2027",
    milestones: POSTDOC_FALL_2027,
}];

pub(crate) const fn timeline_entries(degree: DegreeLevel) -> &'static [TimelineEntry] {
    match degree {
        DegreeLevel::Undergraduate => UNDERGRADUATE_TIMELINES,
        DegreeLevel::Graduate => GRADUATE_TIMELINES,
        DegreeLevel::Doctoral => DOCTORAL_TIMELINES,
        DegreeLevel::Postdoc => POSTDOC_TIMELINES,
    }
}

const UNDERGRADUATE_CHECKLIST: &[&str] = &[
    "Complete Common Application or Coalition Application",
    "Write personal essay (650 words)",
    "Complete supplemental essays for each school",
    "Request 2-3 teacher recommendation letters",
    "Request counselor recommendation and school report",
    "Submit official high school transcripts",
    "Take SAT or ACT (if required)",
    "Take TOEFL (80+) or IELTS (6.5+)",
    "Submit test scores to universities",
    "Complete CSS Profile (for financial aid)",
    "Submit copy of passport",
    "Prepare financial documents for I-20",
    "Pay application fees",
    "Submit mid-year grade report (if required)",
];

const GRADUATE_CHECKLIST: &[&str] = &[
    "Take GRE or GMAT",
    "Take TOEFL (90+) or IELTS (7.0+)",
    "Write statement of purpose (500-1000 words)",
    "Request 3 recommendation letters",
    "Prepare academic CV/resume",
    "Order official transcripts from all universities",
    "Complete online applications",
    "Prepare writing sample (if required)",
    "Submit test scores",
    "Pay application fees",
    "Prepare financial documents",
    "Research potential advisors",
    "Email faculty members of interest",
];

const DOCTORAL_CHECKLIST: &[&str] = &[
    "Take GRE (if required)",
    "Take TOEFL (100+) or IELTS (7.5+)",
    "Write research statement/proposal (2-3 pages)",
    "Request 3 strong recommendation letters (from research supervisors)",
    "Prepare detailed academic CV with publications",
    "Prepare writing sample (published paper or thesis chapter)",
    "Order official transcripts",
    "Contact potential PhD advisors (2-3 per program)",
    "Complete online applications",
    "Submit test scores",
    "Prepare diversity statement (if required)",
    "Pay application fees",
    "Prepare for interviews",
];

const POSTDOC_CHECKLIST: &[&str] = &[
    "Update CV with all publications and presentations",
    "Write research statement (1-2 pages)",
    "Prepare cover letter template",
    "Identify 3 references (include PhD advisor)",
    "Contact references and get permission",
    "Prepare publication list with citations",
    "Research potential PIs and labs",
    "Draft email template for cold contacts",
    "Monitor job boards regularly",
    "Prepare research talk/presentation",
    "Update GoogleScholar/ResearchGate profiles",
    "Prepare teaching statement (if applicable)",
];

/// Ordered checklist labels for a degree level.
pub const fn checklist_items(degree: DegreeLevel) -> &'static [&'static str] {
    match degree {
        DegreeLevel::Undergraduate => UNDERGRADUATE_CHECKLIST,
        DegreeLevel::Graduate => GRADUATE_CHECKLIST,
        DegreeLevel::Doctoral => DOCTORAL_CHECKLIST,
        DegreeLevel::Postdoc => POSTDOC_CHECKLIST,
    }
}

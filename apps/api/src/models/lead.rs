use bytes::Bytes;

/// A fixed-choice form field. `label()` is the exact string the lead store
/// and the prompt receive; `ALL` is the display order of the dropdown.
pub trait FormOption: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Parses a submitted label. Unknown labels fall back to the first option.
    fn from_label(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|opt| opt.label() == raw)
            .unwrap_or(Self::ALL[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentRole {
    #[default]
    Sde,
    DataScientist,
    ProductManager,
    Analyst,
    Consultancy,
    CoreEngineering,
    Others,
    NotGraduateYet,
}

impl FormOption for CurrentRole {
    const ALL: &'static [Self] = &[
        Self::Sde,
        Self::DataScientist,
        Self::ProductManager,
        Self::Analyst,
        Self::Consultancy,
        Self::CoreEngineering,
        Self::Others,
        Self::NotGraduateYet,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Sde => "SDE",
            Self::DataScientist => "Data Scientist",
            Self::ProductManager => "Product Manager",
            Self::Analyst => "Analyst",
            Self::Consultancy => "Consultancy",
            Self::CoreEngineering => "Core Engineering",
            Self::Others => "Others",
            Self::NotGraduateYet => "Not Graduate Yet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetRole {
    #[default]
    Sde,
    DataScientist,
    ProductManager,
    Analyst,
    CoreEngineering,
    Other,
}

impl FormOption for TargetRole {
    const ALL: &'static [Self] = &[
        Self::Sde,
        Self::DataScientist,
        Self::ProductManager,
        Self::Analyst,
        Self::CoreEngineering,
        Self::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Sde => "SDE",
            Self::DataScientist => "Data Scientist",
            Self::ProductManager => "Product Manager",
            Self::Analyst => "Analyst",
            Self::CoreEngineering => "Core Engineering",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PainPoint {
    #[default]
    ResumeShortlisting,
    OnlineAssessments,
    Interviews,
    Guidance,
    Others,
}

impl FormOption for PainPoint {
    const ALL: &'static [Self] = &[
        Self::ResumeShortlisting,
        Self::OnlineAssessments,
        Self::Interviews,
        Self::Guidance,
        Self::Others,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::ResumeShortlisting => "Resume Shortlisting",
            Self::OnlineAssessments => "Online Assessments (OA)",
            Self::Interviews => "Interviews",
            Self::Guidance => "Guidance / Roadmap",
            Self::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Internship {
    #[default]
    Yes,
    No,
}

impl FormOption for Internship {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Self-rated confidence on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Confidence(u8);

impl Confidence {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Out-of-range numbers clamp to the nearest end; non-numeric input yields the default.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(|v| Self(v.clamp(Self::MIN.into(), Self::MAX.into()) as u8))
            .unwrap_or_default()
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(4)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placeholder sent for `role_others` unless the target role is `Other`.
pub const ROLE_OTHERS_NOT_APPLICABLE: &str = "NA";

/// A submitted user profile destined for the lead spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct LeadProfile {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub college: String,
    pub branch: String,
    pub current_role: CurrentRole,
    pub target_role: TargetRole,
    pub role_others: String,
    pub confidence: Confidence,
    pub internship: Internship,
    pub pain_point: PainPoint,
    pub pain_explain: String,
}

impl LeadProfile {
    /// Field key / value pairs in lead-store column order.
    pub fn form_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Whatsapp", self.whatsapp.clone()),
            ("College", self.college.clone()),
            ("Branch", self.branch.clone()),
            ("Current_Role", self.current_role.label().to_string()),
            ("Target_Role", self.target_role.label().to_string()),
            ("Role_Others", self.role_others.clone()),
            ("Confidence", self.confidence.to_string()),
            ("Internship", self.internship.label().to_string()),
            ("Pain_Point", self.pain_point.label().to_string()),
            ("Pain_Explain", self.pain_explain.clone()),
        ]
    }
}

/// The uploaded resume file. Only ever held for the lifetime of one request.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ResumeUpload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_matches_exact_label() {
        assert_eq!(
            PainPoint::from_label("Online Assessments (OA)"),
            PainPoint::OnlineAssessments
        );
        assert_eq!(
            CurrentRole::from_label("Not Graduate Yet"),
            CurrentRole::NotGraduateYet
        );
        assert_eq!(TargetRole::from_label(" Other "), TargetRole::Other);
    }

    #[test]
    fn test_from_label_unknown_falls_back_to_first_option() {
        assert_eq!(TargetRole::from_label("Astronaut"), TargetRole::Sde);
        assert_eq!(Internship::from_label(""), Internship::Yes);
    }

    #[test]
    fn test_default_is_first_listed_option() {
        assert_eq!(CurrentRole::default(), CurrentRole::ALL[0]);
        assert_eq!(TargetRole::default(), TargetRole::ALL[0]);
        assert_eq!(PainPoint::default(), PainPoint::ALL[0]);
        assert_eq!(Internship::default(), Internship::ALL[0]);
    }

    #[test]
    fn test_confidence_clamps_and_defaults() {
        assert_eq!(Confidence::new(0).value(), 1);
        assert_eq!(Confidence::new(9).value(), 5);
        assert_eq!(Confidence::parse("3").value(), 3);
        assert_eq!(Confidence::parse("very").value(), 4);
        assert_eq!(Confidence::parse("").value(), 4);
    }

    #[test]
    fn test_confidence_parse_clamps_wide_numbers() {
        assert_eq!(Confidence::parse("6").value(), 5);
        assert_eq!(Confidence::parse("300").value(), 5);
        assert_eq!(Confidence::parse("-1").value(), 1);
        assert_eq!(Confidence::parse(" 0 ").value(), 1);
        assert_eq!(Confidence::default().value(), 4);
    }

    #[test]
    fn test_form_entries_follow_column_order() {
        let profile = LeadProfile {
            name: "Rahul Kumar".to_string(),
            email: "rahul@example.com".to_string(),
            confidence: Confidence::new(2),
            pain_point: PainPoint::Interviews,
            role_others: ROLE_OTHERS_NOT_APPLICABLE.to_string(),
            ..Default::default()
        };
        let entries = profile.form_entries();
        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "Name",
                "Email",
                "Whatsapp",
                "College",
                "Branch",
                "Current_Role",
                "Target_Role",
                "Role_Others",
                "Confidence",
                "Internship",
                "Pain_Point",
                "Pain_Explain",
            ]
        );
        assert_eq!(entries[8].1, "2");
        assert_eq!(entries[10].1, "Interviews");
    }
}

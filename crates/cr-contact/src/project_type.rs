//! The contact form's "project type" select options.

use serde::{Deserialize, Serialize};

/// Closed set of project types offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Hospitality,
    Renovation,
    Consultation,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Hospitality,
        ProjectType::Renovation,
        ProjectType::Consultation,
        ProjectType::Other,
    ];

    /// Option value as submitted by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Hospitality => "hospitality",
            ProjectType::Renovation => "renovation",
            ProjectType::Consultation => "consultation",
            ProjectType::Other => "other",
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Ok(ProjectType::Residential),
            "commercial" => Ok(ProjectType::Commercial),
            "hospitality" => Ok(ProjectType::Hospitality),
            "renovation" => Ok(ProjectType::Renovation),
            "consultation" => Ok(ProjectType::Consultation),
            "other" => Ok(ProjectType::Other),
            _ => Err(format!(
                "Invalid project type: '{}'. Valid types: residential, commercial, hospitality, renovation, consultation, other",
                s
            )),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "Commercial".parse::<ProjectType>().unwrap(),
            ProjectType::Commercial
        );
        assert_eq!(
            " renovation ".parse::<ProjectType>().unwrap(),
            ProjectType::Renovation
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "spaceship".parse::<ProjectType>().unwrap_err();
        assert!(err.contains("spaceship"));
    }

    #[test]
    fn as_str_matches_serde() {
        for kind in ProjectType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<ProjectType>().unwrap(), kind);
        }
    }
}

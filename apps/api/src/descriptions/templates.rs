//! Static copy used by the generator: industry blurbs, per-skill responsibilities,
//! experience-level duties and culture benefits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Culture {
    #[default]
    Startup,
    Corporate,
    #[serde(rename = "Remote-first")]
    RemoteFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Industry {
    #[default]
    Tech,
    Finance,
    Healthcare,
}

impl Industry {
    /// Unknown names fall back to `Tech`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Finance" => Industry::Finance,
            "Healthcare" => Industry::Healthcare,
            _ => Industry::Tech,
        }
    }

    pub fn paragraphs(&self) -> [&'static str; 2] {
        match self {
            Industry::Tech => [
                "We are looking for a passionate professional to help build and scale our product. You'll work on full-stack features that directly impact customers.",
                "In this role you'll collaborate with cross-functional teams to deliver performant, reliable software.",
            ],
            Industry::Finance => [
                "Join our finance team to build robust systems that process and analyze financial data at scale.",
                "You will ensure high standards of data accuracy and compliance while improving performance.",
            ],
            Industry::Healthcare => [
                "Help us deliver healthcare solutions that improve patient outcomes and provider workflows.",
                "You will work on compliant, secure systems that prioritize data privacy and reliability.",
            ],
        }
    }
}

impl ExperienceLevel {
    pub fn duties(&self) -> &'static [&'static str] {
        match self {
            ExperienceLevel::Entry => &[
                "Contribute to feature development under guidance from senior engineers.",
                "Write tests and assist in debugging issues.",
            ],
            ExperienceLevel::Mid => &[
                "Own medium-sized features end-to-end from design to deployment.",
                "Collaborate with stakeholders to define priorities.",
            ],
            ExperienceLevel::Senior => &[
                "Lead technical design and mentor junior engineers.",
                "Drive architecture decisions and deliver scalable solutions.",
            ],
        }
    }

    /// Phrased so the match scorer can parse the bracket back out.
    pub fn requirement_text(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "0-2 years of relevant experience.",
            ExperienceLevel::Mid => "2-5 years of relevant experience.",
            ExperienceLevel::Senior => "5+ years of relevant experience.",
        }
    }
}

impl Culture {
    pub fn benefits(&self) -> &'static [&'static str] {
        match self {
            Culture::Startup => &[
                "Equity or stock options",
                "Flexible hours and fast-moving environment",
                "Direct impact on product direction",
            ],
            Culture::Corporate => &[
                "Comprehensive health benefits",
                "Structured career progression",
                "Large-scale, stable projects",
            ],
            Culture::RemoteFirst => &[
                "Fully remote work with flexible scheduling",
                "Home office stipend",
                "Asynchronous collaboration and distributed teams",
            ],
        }
    }
}

/// Responsibilities for skills with dedicated copy. Lookup is case-sensitive.
pub fn skill_responsibilities(skill: &str) -> &'static [&'static str] {
    match skill {
        "Python" => &[
            "Develop and maintain Python-based applications.",
            "Write clean, maintainable code following PEP standards.",
        ],
        "React" => &[
            "Build responsive web interfaces using React.",
            "Implement component-based architecture and reusable components.",
        ],
        "SQL" => &[
            "Design and optimize SQL queries and database schemas.",
            "Work with relational databases to ensure data integrity.",
        ],
        "AWS" => &[
            "Deploy and maintain services on AWS.",
            "Leverage AWS services for scalability and reliability.",
        ],
        _ => &[],
    }
}

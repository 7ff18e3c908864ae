use serde::{Deserialize, Serialize};

/// Closed set of roles the application form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionId {
    FullStackIntern,
    FrontendIntern,
    BusinessDevelopmentIntern,
    QaEngineerIntern,
    SoftwareDevelopmentIntern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentType {
    FullTime,
    Internship,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenPosition {
    pub id: PositionId,
    pub title: &'static str,
    pub employment: EmploymentType,
    pub location: &'static str,
    pub responsibilities: &'static [&'static str],
    pub skills: &'static [&'static str],
}

static FULL_STACK_INTERN: OpenPosition = OpenPosition {
    id: PositionId::FullStackIntern,
    title: "Full Stack Developer Intern",
    employment: EmploymentType::FullTime,
    location: "Hyderabad / Remote",
    responsibilities: &[
        "Build and maintain web applications using React and Django",
        "Design and optimize PostgreSQL databases",
        "Collaborate with product team on new features",
        "Participate in code reviews and technical discussions",
    ],
    skills: &["React", "Django", "PostgreSQL", "TypeScript", "AWS"],
};

static FRONTEND_INTERN: OpenPosition = OpenPosition {
    id: PositionId::FrontendIntern,
    title: "Frontend Developer Intern",
    employment: EmploymentType::FullTime,
    location: "Hyderabad / Remote",
    responsibilities: &[
        "Develop responsive user interfaces with React",
        "Implement pixel-perfect designs from Figma",
        "Optimize application performance",
        "Write clean, maintainable code",
    ],
    skills: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
};

static BUSINESS_DEVELOPMENT_INTERN: OpenPosition = OpenPosition {
    id: PositionId::BusinessDevelopmentIntern,
    title: "Business Development Associate Intern",
    employment: EmploymentType::FullTime,
    location: "Hyderabad",
    responsibilities: &[
        "Generate and qualify leads for VORN HR",
        "Conduct product demos to potential clients",
        "Build relationships with key stakeholders",
        "Meet monthly sales targets",
    ],
    skills: &["Sales", "Communication", "CRM", "Presentation Skills"],
};

static QA_ENGINEER_INTERN: OpenPosition = OpenPosition {
    id: PositionId::QaEngineerIntern,
    title: "QA Engineer Intern",
    employment: EmploymentType::FullTime,
    location: "Hyderabad / Remote",
    responsibilities: &[
        "Design and execute test cases",
        "Perform functional and regression testing",
        "Report and track bugs",
        "Collaborate with development team",
    ],
    skills: &["Manual Testing", "Selenium", "API Testing", "JIRA"],
};

static SOFTWARE_DEVELOPMENT_INTERN: OpenPosition = OpenPosition {
    id: PositionId::SoftwareDevelopmentIntern,
    title: "Software Development Intern",
    employment: EmploymentType::Internship,
    location: "Hyderabad",
    responsibilities: &[
        "Learn and contribute to real projects",
        "Work closely with senior developers",
        "Participate in daily standups",
        "Build features under mentorship",
    ],
    skills: &["Python/JavaScript", "Git", "Problem Solving", "Quick Learner"],
};

static OPEN_POSITIONS: [&OpenPosition; 5] = [
    &FULL_STACK_INTERN,
    &FRONTEND_INTERN,
    &BUSINESS_DEVELOPMENT_INTERN,
    &QA_ENGINEER_INTERN,
    &SOFTWARE_DEVELOPMENT_INTERN,
];

pub fn open_positions() -> &'static [&'static OpenPosition] {
    &OPEN_POSITIONS
}

impl PositionId {
    pub fn position(self) -> &'static OpenPosition {
        match self {
            PositionId::FullStackIntern => &FULL_STACK_INTERN,
            PositionId::FrontendIntern => &FRONTEND_INTERN,
            PositionId::BusinessDevelopmentIntern => &BUSINESS_DEVELOPMENT_INTERN,
            PositionId::QaEngineerIntern => &QA_ENGINEER_INTERN,
            PositionId::SoftwareDevelopmentIntern => &SOFTWARE_DEVELOPMENT_INTERN,
        }
    }

    pub fn title(self) -> &'static str {
        self.position().title
    }

    pub fn from_title(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        OPEN_POSITIONS
            .iter()
            .find(|position| position.title == raw)
            .map(|position| position.id)
    }
}

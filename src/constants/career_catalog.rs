use once_cell::sync::Lazy;

use crate::models::domain::{CareerDomain, CareerPath};

pub fn domain_keywords(domain: CareerDomain) -> &'static [&'static str] {
    match domain {
        CareerDomain::Ai => &[
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "neural network",
            "data science",
        ],
        CareerDomain::Cloud => &["aws", "azure", "gcp", "serverless", "infrastructure", "devops"],
        CareerDomain::Data => &[
            "data science",
            "analytics",
            "visualization",
            "statistics",
            "dashboard",
            "reporting",
        ],
        CareerDomain::Game => &["unity", "unreal", "game development", "3d modeling", "animation"],
        CareerDomain::Mobile => &[
            "android",
            "ios",
            "react native",
            "flutter",
            "mobile development",
        ],
        CareerDomain::Security => &[
            "cybersecurity",
            "network security",
            "penetration testing",
            "security audit",
            "cryptography",
        ],
        CareerDomain::Web => &[
            "frontend",
            "backend",
            "fullstack",
            "javascript",
            "react",
            "node",
            "html",
            "css",
        ],
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn path(
    id: &str,
    title: &str,
    description: &str,
    skills: &[&str],
    education: &[&str],
    job_titles: &[&str],
) -> CareerPath {
    CareerPath {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        skills: owned(skills),
        education: owned(education),
        job_titles: owned(job_titles),
    }
}

static CAREER_PATHS: Lazy<Vec<(CareerDomain, Vec<CareerPath>)>> = Lazy::new(|| {
    vec![
        (
            CareerDomain::Ai,
            vec![
                path(
                    "ai-engineer",
                    "AI Engineer",
                    "Design and implement AI models and systems to solve complex problems.",
                    &[
                        "Python",
                        "TensorFlow",
                        "PyTorch",
                        "Deep Learning",
                        "Neural Networks",
                        "Computer Vision",
                        "NLP",
                    ],
                    &[
                        "BS/MS in Computer Science",
                        "AI/ML Specialization",
                        "Online Courses in Deep Learning",
                    ],
                    &["AI Engineer", "Machine Learning Engineer", "Deep Learning Specialist"],
                ),
                path(
                    "data-scientist",
                    "Data Scientist",
                    "Analyze complex data to extract insights and build predictive models.",
                    &["Python", "R", "SQL", "Statistics", "Machine Learning", "Data Visualization"],
                    &[
                        "BS/MS in Statistics/Math/CS",
                        "Data Science Bootcamp",
                        "Online Specializations",
                    ],
                    &["Data Scientist", "ML Researcher", "Quantitative Analyst"],
                ),
            ],
        ),
        (
            CareerDomain::Cloud,
            vec![path(
                "cloud-architect",
                "Cloud Architect",
                "Design and implement cloud infrastructure solutions.",
                &["AWS/Azure/GCP", "Infrastructure as Code", "Containerization", "Networking"],
                &["BS in CS/IT", "Cloud Certifications (AWS, Azure)", "DevOps Training"],
                &["Cloud Architect", "DevOps Engineer", "Cloud Engineer"],
            )],
        ),
        (
            CareerDomain::Data,
            vec![path(
                "data-analyst",
                "Data Analyst",
                "Interpret data and provide actionable insights for business decisions.",
                &["SQL", "Excel", "Tableau/Power BI", "Python/R", "Statistics"],
                &["BS in Analytics/Statistics/Economics", "Data Analysis Certification"],
                &["Data Analyst", "Business Intelligence Analyst", "Data Visualization Specialist"],
            )],
        ),
        (
            CareerDomain::Game,
            vec![path(
                "game-developer",
                "Game Developer",
                "Design and program video games for various platforms.",
                &["Unity/Unreal Engine", "C#/C++", "3D Modeling", "Game Physics"],
                &["BS in Game Development/CS", "Game Design Courses"],
                &["Game Developer", "Game Designer", "Game Programmer"],
            )],
        ),
        (
            CareerDomain::Mobile,
            vec![path(
                "mobile-developer",
                "Mobile Developer",
                "Create applications for mobile devices.",
                &["Swift/Kotlin", "React Native", "Flutter", "Mobile UI Design"],
                &["BS in CS/Mobile Dev", "Mobile Development Bootcamp"],
                &["iOS Developer", "Android Developer", "Mobile App Developer"],
            )],
        ),
        (
            CareerDomain::Security,
            vec![path(
                "cybersecurity-analyst",
                "Cybersecurity Analyst",
                "Protect systems and networks from digital attacks and security breaches.",
                &[
                    "Network Security",
                    "Vulnerability Assessment",
                    "Security Tools",
                    "Incident Response",
                ],
                &["BS in Cybersecurity/IT", "Security Certifications (CISSP, CEH)"],
                &["Security Analyst", "Security Engineer", "Penetration Tester"],
            )],
        ),
        (
            CareerDomain::Web,
            vec![
                path(
                    "frontend-developer",
                    "Frontend Developer",
                    "Build interactive user interfaces and web applications.",
                    &["JavaScript", "React", "Vue", "Angular", "HTML", "CSS", "Responsive Design"],
                    &["BS in CS/Web Development", "Frontend Bootcamp", "Online Courses"],
                    &["Frontend Developer", "UI Engineer", "Web Developer"],
                ),
                path(
                    "backend-developer",
                    "Backend Developer",
                    "Build server-side logic, databases, and APIs.",
                    &["Node.js", "Python", "Java", "Go", "SQL", "NoSQL", "RESTful APIs"],
                    &["BS in CS/Software Engineering", "Backend Development Courses"],
                    &["Backend Developer", "API Developer", "Software Engineer"],
                ),
            ],
        ),
    ]
});

pub fn career_paths(domain: CareerDomain) -> &'static [CareerPath] {
    CAREER_PATHS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, paths)| paths.as_slice())
        .unwrap_or(&[])
}

pub fn find_career_path(id: &str) -> Option<&'static CareerPath> {
    CAREER_PATHS
        .iter()
        .flat_map(|(_, paths)| paths.iter())
        .find(|p| p.id == id)
}

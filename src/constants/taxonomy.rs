use serde::Serialize;
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct TopicEntry {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubjectEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub topics: &'static [TopicEntry],
}

#[derive(Debug, Serialize)]
pub struct DomainEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub subjects: &'static [SubjectEntry],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("unknown subject '{subject}' in domain '{domain}'")]
    UnknownSubject { domain: String, subject: String },

    #[error("unknown topic '{topic}' in subject '{subject}'")]
    UnknownTopic { subject: String, topic: String },
}

impl From<TaxonomyError> for AppError {
    fn from(err: TaxonomyError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

macro_rules! topics {
    ($($id:literal => $name:literal),* $(,)?) => {
        &[$(TopicEntry { id: $id, name: $name }),*]
    };
}

pub static QUIZ_DOMAINS: &[DomainEntry] = &[
    DomainEntry {
        id: "ai",
        name: "Artificial Intelligence",
        subjects: &[
            SubjectEntry {
                id: "deep_learning",
                name: "Deep Learning",
                topics: topics!["cnn" => "Convolutional Neural Networks", "rnn" => "Recurrent Neural Networks"],
            },
            SubjectEntry {
                id: "nlp",
                name: "Natural Language Processing",
                topics: topics!["transformers" => "Transformers", "word_embeddings" => "Word Embeddings"],
            },
            SubjectEntry {
                id: "ml",
                name: "Machine Learning",
                topics: topics!["supervised" => "Supervised Learning", "unsupervised" => "Unsupervised Learning"],
            },
            SubjectEntry {
                id: "computer_vision",
                name: "Computer Vision",
                topics: topics![],
            },
        ],
    },
    DomainEntry {
        id: "cs",
        name: "Computer Science",
        subjects: &[
            SubjectEntry {
                id: "os",
                name: "Operating Systems",
                topics: topics![
                    "memory_management" => "Memory Management",
                    "process_scheduling" => "Process Scheduling",
                    "file_systems" => "File Systems",
                    "virtualization" => "Virtualization",
                ],
            },
            SubjectEntry {
                id: "algorithms",
                name: "Algorithms",
                topics: topics![
                    "sorting" => "Sorting Algorithms",
                    "graph" => "Graph Algorithms",
                    "dynamic_programming" => "Dynamic Programming",
                    "greedy" => "Greedy Algorithms",
                ],
            },
            SubjectEntry {
                id: "db",
                name: "Databases",
                topics: topics![
                    "sql" => "SQL",
                    "nosql" => "NoSQL",
                    "database_design" => "Database Design",
                    "query_optimization" => "Query Optimization",
                ],
            },
            SubjectEntry {
                id: "data_structures",
                name: "Data Structures",
                topics: topics![
                    "arrays" => "Arrays & Lists",
                    "trees" => "Trees",
                    "graphs" => "Graphs",
                    "hash_tables" => "Hash Tables",
                ],
            },
            SubjectEntry {
                id: "networking",
                name: "Computer Networks",
                topics: topics![
                    "protocols" => "Network Protocols",
                    "routing" => "Routing",
                    "network_security" => "Network Security",
                    "socket_programming" => "Socket Programming",
                ],
            },
            SubjectEntry {
                id: "software_engineering",
                name: "Software Engineering",
                topics: topics![
                    "design_patterns" => "Design Patterns",
                    "agile" => "Agile Methodologies",
                    "testing" => "Software Testing",
                    "version_control" => "Version Control",
                ],
            },
            SubjectEntry {
                id: "distributed_systems",
                name: "Distributed Systems",
                topics: topics![
                    "consensus" => "Consensus Algorithms",
                    "replication" => "Replication Strategies",
                    "fault_tolerance" => "Fault Tolerance",
                    "distributed_computing" => "Distributed Computing Models",
                ],
            },
            SubjectEntry {
                id: "cloud_computing",
                name: "Cloud Computing",
                topics: topics![
                    "iaas" => "Infrastructure as a Service",
                    "paas" => "Platform as a Service",
                    "saas" => "Software as a Service",
                    "serverless" => "Serverless Computing",
                ],
            },
        ],
    },
    DomainEntry {
        id: "math",
        name: "Mathematics",
        subjects: &[
            SubjectEntry {
                id: "calculus",
                name: "Calculus",
                topics: topics!["limits" => "Limits", "derivatives" => "Derivatives"],
            },
            SubjectEntry {
                id: "algebra",
                name: "Algebra",
                topics: topics!["linear" => "Linear Algebra", "polynomials" => "Polynomials"],
            },
            SubjectEntry {
                id: "statistics",
                name: "Statistics",
                topics: topics!["probability" => "Probability", "distributions" => "Distributions"],
            },
            SubjectEntry {
                id: "discrete_math",
                name: "Discrete Mathematics",
                topics: topics!["logic" => "Logic", "graph_theory" => "Graph Theory"],
            },
        ],
    },
    DomainEntry {
        id: "science",
        name: "Science",
        subjects: &[
            SubjectEntry {
                id: "physics",
                name: "Physics",
                topics: topics!["mechanics" => "Mechanics", "thermodynamics" => "Thermodynamics"],
            },
            SubjectEntry {
                id: "chemistry",
                name: "Chemistry",
                topics: topics!["organic" => "Organic Chemistry", "inorganic" => "Inorganic Chemistry"],
            },
            SubjectEntry {
                id: "biology",
                name: "Biology",
                topics: topics!["genetics" => "Genetics", "ecology" => "Ecology"],
            },
        ],
    },
    DomainEntry {
        id: "web_dev",
        name: "Web Development",
        subjects: &[
            SubjectEntry {
                id: "frontend",
                name: "Frontend Development",
                topics: topics![
                    "html_css" => "HTML & CSS",
                    "javascript" => "JavaScript",
                    "react" => "React",
                    "responsive_design" => "Responsive Design",
                ],
            },
            SubjectEntry {
                id: "backend",
                name: "Backend Development",
                topics: topics![
                    "node_js" => "Node.js",
                    "rest_apis" => "REST APIs",
                    "authentication" => "Authentication & Authorization",
                    "server_architecture" => "Server Architecture",
                ],
            },
            SubjectEntry {
                id: "fullstack",
                name: "Full Stack Development",
                topics: topics!["mern" => "MERN Stack", "mean" => "MEAN Stack"],
            },
            SubjectEntry {
                id: "web_frameworks",
                name: "Web Frameworks",
                topics: topics!["angular" => "Angular", "vue" => "Vue.js"],
            },
        ],
    },
    DomainEntry {
        id: "cybersecurity",
        name: "Cybersecurity",
        subjects: &[
            SubjectEntry {
                id: "network_security",
                name: "Network Security",
                topics: topics![
                    "firewalls" => "Firewalls",
                    "ids_ips" => "Intrusion Detection & Prevention",
                    "vpn" => "VPN & Secure Communication",
                    "network_attacks" => "Network Attacks & Defense",
                ],
            },
            SubjectEntry {
                id: "cryptography",
                name: "Cryptography",
                topics: topics![
                    "encryption" => "Encryption Methods",
                    "hashing" => "Hashing Algorithms",
                    "digital_signatures" => "Digital Signatures",
                    "key_management" => "Key Management",
                ],
            },
            SubjectEntry {
                id: "security_practices",
                name: "Security Practices",
                topics: topics![
                    "penetration_testing" => "Penetration Testing",
                    "incident_response" => "Incident Response",
                ],
            },
            SubjectEntry {
                id: "ethical_hacking",
                name: "Ethical Hacking",
                topics: topics!["reconnaissance" => "Reconnaissance", "exploitation" => "Exploitation"],
            },
        ],
    },
];

pub fn find_domain(domain: &str) -> Option<&'static DomainEntry> {
    QUIZ_DOMAINS.iter().find(|d| d.id == domain)
}

/// Checks that `topic` belongs to `subject` and `subject` to `domain`.
pub fn validate_path(domain: &str, subject: &str, topic: &str) -> Result<(), TaxonomyError> {
    let domain_entry =
        find_domain(domain).ok_or_else(|| TaxonomyError::UnknownDomain(domain.to_string()))?;

    let subject_entry = domain_entry
        .subjects
        .iter()
        .find(|s| s.id == subject)
        .ok_or_else(|| TaxonomyError::UnknownSubject {
            domain: domain.to_string(),
            subject: subject.to_string(),
        })?;

    if !subject_entry.topics.iter().any(|t| t.id == topic) {
        return Err(TaxonomyError::UnknownTopic {
            subject: subject.to_string(),
            topic: topic.to_string(),
        });
    }

    Ok(())
}

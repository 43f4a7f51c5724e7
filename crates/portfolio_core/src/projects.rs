#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(pub u32);

/// A project as shown in the details modal.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    /// `(camelCaseKey, value)` pairs in display order.
    pub metrics: &'static [(&'static str, &'static str)],
    pub github: &'static str,
    pub demo: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        id: ProjectId(1),
        title: "Multi-Cloud Infrastructure",
        description: "A comprehensive multi-cloud architecture solution that provides seamless \
                      failover capabilities and cost optimization across AWS, Azure, and Google \
                      Cloud Platform.",
        features: &[
            "Automated failover between cloud providers",
            "Cost optimization algorithms",
            "Real-time monitoring and alerting",
            "Infrastructure as Code with Terraform",
            "Kubernetes orchestration",
            "CI/CD pipeline integration",
        ],
        technologies: &[
            "Terraform",
            "AWS",
            "Azure",
            "GCP",
            "Kubernetes",
            "Prometheus",
            "Grafana",
        ],
        metrics: &[
            ("uptime", "99.9%"),
            ("costReduction", "40%"),
            ("deploymentTime", "15 min"),
            ("services", "25+"),
        ],
        github: "#",
        demo: "#",
    },
    Project {
        id: ProjectId(2),
        title: "CI/CD Pipeline Automation",
        description: "A complete CI/CD pipeline solution with automated testing, security \
                      scanning, and zero-downtime deployments for modern applications.",
        features: &[
            "Automated code quality checks",
            "Security vulnerability scanning",
            "Zero-downtime deployments",
            "Multi-environment support",
            "Rollback capabilities",
            "Performance monitoring",
        ],
        technologies: &[
            "Jenkins",
            "Docker",
            "SonarQube",
            "Ansible",
            "GitLab",
            "Kubernetes",
        ],
        metrics: &[
            ("timeSaved", "80%"),
            ("successRate", "100%"),
            ("deployments", "500+"),
            ("environments", "4"),
        ],
        github: "#",
        demo: "#",
    },
    Project {
        id: ProjectId(3),
        title: "Monitoring & Observability",
        description: "A comprehensive monitoring and observability platform providing real-time \
                      insights into microservices performance and health.",
        features: &[
            "Real-time metrics collection",
            "Custom dashboard creation",
            "Intelligent alerting system",
            "Log aggregation and analysis",
            "Distributed tracing",
            "Performance optimization insights",
        ],
        technologies: &[
            "Prometheus",
            "Grafana",
            "ELK Stack",
            "Jaeger",
            "AlertManager",
            "Fluentd",
        ],
        metrics: &[
            ("services", "50+"),
            ("monitoring", "24/7"),
            ("alerts", "99.5%"),
            ("retention", "90 days"),
        ],
        github: "#",
        demo: "#",
    },
];

/// All projects in declaration order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Turns a camelCase metric key into lower-case words: `costReduction` -> `cost reduction`.
pub fn metric_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch.to_ascii_lowercase());
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_labels_split_camel_case() {
        assert_eq!(metric_label("costReduction"), "cost reduction");
        assert_eq!(metric_label("uptime"), "uptime");
        assert_eq!(metric_label("deploymentTime"), "deployment time");
    }

    #[test]
    fn catalog_keeps_declaration_order() {
        let ids: Vec<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProjectId(1), ProjectId(2), ProjectId(3)]);
        assert!(find_project(ProjectId(4)).is_none());
    }
}

//! Static vocabulary of DevOps and cloud technologies recognised by the skill extractor.

use std::collections::HashSet;

/// Known technologies, grouped by area. Some terms appear under more than one
/// heading; `Vocabulary::devops` keeps only the first declaration.
const TECH_KEYWORDS: &[&[&str]] = &[
    // Cloud platforms
    &[
        "AWS",
        "Amazon Web Services",
        "Azure",
        "Microsoft Azure",
        "GCP",
        "Google Cloud Platform",
        "IBM Cloud",
        "Oracle Cloud",
        "DigitalOcean",
        "Linode",
        "Heroku",
    ],
    // Containers
    &[
        "Docker",
        "Kubernetes",
        "K8s",
        "Containerd",
        "CRI-O",
        "Podman",
        "LXC",
        "LXD",
    ],
    // CI/CD
    &[
        "Jenkins",
        "GitLab CI",
        "GitHub Actions",
        "CircleCI",
        "Travis CI",
        "TeamCity",
        "Bamboo",
        "ArgoCD",
        "Tekton",
        "Spinnaker",
        "Drone CI",
        "Concourse CI",
    ],
    // Infrastructure as code
    &[
        "Terraform",
        "CloudFormation",
        "Ansible",
        "Puppet",
        "Chef",
        "SaltStack",
        "Pulumi",
        "CDK",
        "AWS CDK",
        "Crossplane",
    ],
    // Monitoring and observability
    &[
        "Prometheus",
        "Grafana",
        "Datadog",
        "New Relic",
        "Dynatrace",
        "AppDynamics",
        "Nagios",
        "Zabbix",
        "Splunk",
        "ELK",
        "Elasticsearch",
        "Logstash",
        "Kibana",
        "Jaeger",
        "Zipkin",
        "OpenTelemetry",
        "Fluentd",
        "Loki",
    ],
    // Version control
    &["Git", "GitHub", "GitLab", "Bitbucket", "SVN", "Mercurial"],
    // Scripting and programming languages
    &[
        "Python",
        "Go",
        "Golang",
        "Bash",
        "PowerShell",
        "JavaScript",
        "TypeScript",
        "Ruby",
        "Java",
        "C#",
        ".NET",
        "Node.js",
    ],
    // Security
    &[
        "Vault",
        "HashiCorp Vault",
        "SOPS",
        "Secrets Manager",
        "KMS",
        "Key Management Service",
        "SonarQube",
        "Snyk",
        "Aqua Security",
        "Twistlock",
        "Prisma Cloud",
        "Qualys",
        "OWASP",
        "Nessus",
        "OpenSCAP",
        "Trivy",
        "Clair",
    ],
    // Networking
    &[
        "NGINX",
        "HAProxy",
        "Istio",
        "Envoy",
        "Traefik",
        "Kong",
        "Linkerd",
        "Calico",
        "Cilium",
        "Flannel",
        "Weave Net",
        "VPC",
        "Virtual Private Cloud",
        "Subnet",
        "Route53",
        "CloudFront",
        "CDN",
        "Content Delivery Network",
    ],
    // Databases
    &[
        "MySQL",
        "PostgreSQL",
        "MongoDB",
        "DynamoDB",
        "Cassandra",
        "Redis",
        "Elasticsearch",
        "SQL Server",
        "Oracle",
        "RDS",
        "Aurora",
        "Cosmos DB",
    ],
    // Serverless
    &[
        "Lambda",
        "AWS Lambda",
        "Azure Functions",
        "Cloud Functions",
        "Fargate",
        "Knative",
        "OpenFaaS",
        "Serverless Framework",
        "SAM",
        "Serverless Application Model",
    ],
    // Configuration management
    &["Ansible", "Puppet", "Chef", "SaltStack", "CFEngine"],
    // Service mesh
    &[
        "Istio",
        "Linkerd",
        "Consul",
        "Kuma",
        "Maesh",
        "Service Mesh Interface",
    ],
    // Collaboration and incident tooling
    &[
        "Jira",
        "Confluence",
        "Trello",
        "Asana",
        "Slack",
        "Microsoft Teams",
        "PagerDuty",
        "OpsGenie",
        "VictorOps",
        "StatusPage",
    ],
    // Methodologies
    &[
        "Agile",
        "Scrum",
        "Kanban",
        "DevOps",
        "SRE",
        "Site Reliability Engineering",
        "GitOps",
        "DevSecOps",
        "Continuous Integration",
        "Continuous Deployment",
        "Continuous Delivery",
        "Infrastructure as Code",
        "IaC",
    ],
];

/// An ordered, duplicate-free list of canonical term spellings.
///
/// Built once at startup and shared read-only; order only matters for
/// deterministic iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary terms, dropping exact repeats and
    /// keeping the first occurrence's position.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(Into::into)
            .filter(|term: &String| seen.insert(term.clone()))
            .collect();
        Self { terms }
    }

    /// The built-in DevOps / cloud technology vocabulary.
    pub fn devops() -> Self {
        Self::new(TECH_KEYWORDS.iter().flat_map(|group| group.iter().copied()))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

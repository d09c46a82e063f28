//! Skill extractor: finds vocabulary terms mentioned in a job description.
//!
//! Two passes:
//! 1. Whole-word, case-insensitive match of every term against the full text.
//! 2. Only when pass 1 finds fewer than `MIN_PRIMARY_MATCHES` terms: split the
//!    text on whitespace, strip non-word characters from each token and compare
//!    the cleaned token against every term, case-insensitively.
//!
//! Results always use the vocabulary's canonical spelling.

use std::collections::{HashMap, HashSet};

use regex::{RegexSet, RegexSetBuilder};

use crate::skills::vocabulary::Vocabulary;

/// Below this many primary-pass matches the token fallback pass runs.
pub const MIN_PRIMARY_MATCHES: usize = 3;

/// Precompiled matchers for a fixed vocabulary.
#[derive(Debug)]
pub struct SkillExtractor {
    vocabulary: Vocabulary,
    /// One pattern per term; pattern index == vocabulary index.
    matchers: RegexSet,
    /// Lowercased term → vocabulary indices, for the fallback pass.
    by_lowercase: HashMap<String, Vec<usize>>,
}

impl SkillExtractor {
    pub fn new(vocabulary: Vocabulary) -> Result<Self, regex::Error> {
        let matchers =
            RegexSetBuilder::new(vocabulary.terms().iter().map(|t| whole_word_pattern(t)))
                .case_insensitive(true)
                .build()?;

        let mut by_lowercase: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, term) in vocabulary.terms().iter().enumerate() {
            by_lowercase.entry(term.to_lowercase()).or_default().push(idx);
        }

        Ok(Self {
            vocabulary,
            matchers,
            by_lowercase,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the unique vocabulary terms found in `text`.
    ///
    /// Primary-pass matches come first in vocabulary order, followed by any
    /// fallback matches in the order their tokens appear.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut found = MatchSet::default();

        for idx in self.matchers.matches(text).iter() {
            found.insert(idx);
        }

        if found.len() < MIN_PRIMARY_MATCHES {
            for token in text.split_whitespace() {
                let cleaned = clean_token(token);
                if cleaned.is_empty() {
                    continue;
                }
                if let Some(indices) = self.by_lowercase.get(&cleaned.to_lowercase()) {
                    for &idx in indices {
                        found.insert(idx);
                    }
                }
            }
        }

        found
            .order
            .into_iter()
            .map(|idx| self.vocabulary.terms()[idx].clone())
            .collect()
    }
}

/// Insertion-ordered set of vocabulary indices.
#[derive(Default)]
struct MatchSet {
    seen: HashSet<usize>,
    order: Vec<usize>,
}

impl MatchSet {
    fn insert(&mut self, idx: usize) {
        if self.seen.insert(idx) {
            self.order.push(idx);
        }
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Matches `term` literally, with a non-word character or the text edge on
/// each side. Boundary classes are kept case-sensitive so case folding cannot
/// widen them.
fn whole_word_pattern(term: &str) -> String {
    format!(
        r"(?-i:^|[^0-9A-Za-z_]){}(?-i:[^0-9A-Za-z_]|$)",
        regex::escape(term)
    )
}

fn clean_token(token: &str) -> String {
    token.chars().filter(|&c| is_word_char(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devops() -> SkillExtractor {
        SkillExtractor::new(Vocabulary::devops()).unwrap()
    }

    fn contains(skills: &[String], term: &str) -> bool {
        skills.iter().any(|s| s == term)
    }

    #[test]
    fn test_every_term_matches_itself() {
        let extractor = devops();
        for term in extractor.vocabulary().terms() {
            let skills = extractor.extract(term);
            assert!(
                contains(&skills, term),
                "{term:?} did not match itself: {skills:?}"
            );
        }
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(devops().extract("").is_empty());
        assert!(devops().extract("   \n\t ").is_empty());
    }

    #[test]
    fn test_unrelated_text_yields_nothing() {
        let skills = devops().extract("We are looking for a friendly barista who loves coffee.");
        assert!(skills.is_empty(), "unexpected matches: {skills:?}");
    }

    #[test]
    fn test_case_insensitive_returns_canonical_spelling() {
        let skills = devops().extract("aws lambda");
        assert!(contains(&skills, "AWS"));
        assert!(contains(&skills, "Lambda"));
        assert!(contains(&skills, "AWS Lambda"));
        assert!(!contains(&skills, "aws"));
    }

    #[test]
    fn test_go_does_not_match_inside_golang() {
        let skills = devops().extract("Golang");
        assert_eq!(skills, vec!["Golang".to_string()]);
    }

    #[test]
    fn test_term_inside_longer_word_is_ignored() {
        let extractor = SkillExtractor::new(Vocabulary::new(["Go"])).unwrap();
        assert!(extractor.extract("Gopher Google algorithm").is_empty());
        assert_eq!(extractor.extract("Write Go, daily"), vec!["Go".to_string()]);
    }

    #[test]
    fn test_punctuated_terms_match_literally() {
        let skills =
            devops().extract("Backend in C# and .NET, tooling in Node.js; runtime CRI-O.");
        for term in ["C#", ".NET", "Node.js", "CRI-O"] {
            assert!(contains(&skills, term), "missing {term}: {skills:?}");
        }
    }

    #[test]
    fn test_metacharacters_are_not_patterns() {
        let extractor = SkillExtractor::new(Vocabulary::new(["a+b", "x.y", "(z)"])).unwrap();
        assert!(extractor.extract("aab xzy z").is_empty());
        let skills = extractor.extract("use a+b then x.y with (z) too");
        assert_eq!(skills, vec!["a+b", "x.y", "(z)"]);
    }

    #[test]
    fn test_dot_in_term_does_not_act_as_wildcard() {
        let skills = devops().extract("Nodexjs experience");
        assert!(!contains(&skills, "Node.js"));
    }

    #[test]
    fn test_primary_matches_follow_vocabulary_order() {
        let skills = devops().extract("Terraform, Docker, AWS and Python");
        assert_eq!(skills, vec!["AWS", "Docker", "Terraform", "Python"]);
    }

    #[test]
    fn test_fallback_recovers_mangled_tokens() {
        let skills = devops().extract("Experience with Docker and Kuber-netes plus Terra.form");
        assert_eq!(skills, vec!["Docker", "Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_fallback_skipped_when_primary_finds_enough() {
        let skills = devops().extract("AWS, Docker, Python and Kuber-netes");
        assert_eq!(skills, vec!["AWS", "Docker", "Python"]);
    }

    #[test]
    fn test_no_double_counting_across_passes() {
        let skills = devops().extract("docker DOCKER Docker!");
        assert_eq!(skills, vec!["Docker"]);
    }

    #[test]
    fn test_fallback_adds_every_case_variant() {
        let extractor = SkillExtractor::new(Vocabulary::new(["Go", "GO"])).unwrap();
        assert_eq!(extractor.extract("g-o"), vec!["Go", "GO"]);
    }

    #[test]
    fn test_word_boundary_allows_non_ascii_neighbours() {
        let skills = devops().extract("éDocker");
        assert!(contains(&skills, "Docker"));
    }

    #[test]
    fn test_reextracting_result_does_not_grow() {
        let extractor = devops();
        for input in [
            "aws lambda",
            "Senior SRE: Kubernetes, Terraform, Prometheus/Grafana, GitHub Actions, Python",
            "Oracle Cloud and HashiCorp Vault with GitLab CI",
            "Experience with Docker and Kuber-netes plus Terra.form",
        ] {
            let first = extractor.extract(input);
            let second = extractor.extract(&first.join(", "));
            for skill in &second {
                assert!(
                    contains(&first, skill),
                    "{skill} appeared on re-extraction of {input:?}"
                );
            }
        }
    }

    #[test]
    fn test_realistic_job_description() {
        let jd = r#"
            Platform Engineer (DevOps)
            You will run our Kubernetes clusters on AWS (EKS), manage infrastructure with
            Terraform and Ansible, and own CI/CD in GitHub Actions. Observability via
            Prometheus + Grafana. Nice to have: Go, ArgoCD, Istio.
        "#;
        let skills = devops().extract(jd);
        for term in [
            "AWS",
            "Kubernetes",
            "GitHub Actions",
            "ArgoCD",
            "Terraform",
            "Ansible",
            "Prometheus",
            "Grafana",
            "GitHub",
            "Go",
            "Istio",
            "DevOps",
        ] {
            assert!(contains(&skills, term), "missing {term}: {skills:?}");
        }
        assert!(!contains(&skills, "Git"));
    }
}

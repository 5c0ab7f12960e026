//! Shield Validators: six orthogonal checks over an artifact and its
//! sandbox, independent of the threat detectors and of each other.

pub mod models;
mod validators;

pub use models::ShieldOutcome;
pub use validators::validate_all;

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_sandbox::SandboxRegistry;

    #[test]
    fn runs_all_six_shields() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        let outcomes = validate_all(b"an ordinary artifact", &sandbox.info);
        assert_eq!(outcomes.len(), 6);
        let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert!(names.contains(&"segmentation"));
        assert!(names.contains(&"heuristic"));
        assert!(names.contains(&"integrity"));
        assert!(names.contains(&"privilege_escalation"));
        assert!(names.contains(&"audit_trail"));
        assert!(names.contains(&"multi_party_consensus"));
    }
}

//! Common traits for Direct Link resources

/// Common trait for resources addressed by ID and carrying a name
///
/// Lets the CLI accept either form when looking a resource up.
pub trait DirectLinkResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// Find the first resource matching `input` by ID or name
pub fn find_resource<'a, T: DirectLinkResource>(items: &'a [T], input: &str) -> Option<&'a T> {
    items
        .iter()
        .find(|item| item.id() == input)
        .or_else(|| items.iter().find(|item| item.matches(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        name: String,
    }

    impl DirectLinkResource for TestResource {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn resource(id: &str, name: &str) -> TestResource {
        TestResource {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_matches_by_id_or_name() {
        let r = resource("0a06fb9b-820f-4c44-8a31-77f1f0806d28", "gw-dal");
        assert!(r.matches("0a06fb9b-820f-4c44-8a31-77f1f0806d28"));
        assert!(r.matches("gw-dal"));
        assert!(!r.matches("gw"));
    }

    #[test]
    fn test_find_resource_prefers_id() {
        let items = vec![resource("a", "b"), resource("b", "c")];
        assert_eq!(find_resource(&items, "b").map(|r| r.id()), Some("b"));
        assert_eq!(find_resource(&items, "c").map(|r| r.id()), Some("b"));
        assert!(find_resource(&items, "z").is_none());
    }
}

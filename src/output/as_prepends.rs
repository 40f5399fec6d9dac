//! AS prepend output rows

use super::Record;
use crate::directlink::as_prepends::AsPrepend;

impl Record for AsPrepend {
    fn headers() -> &'static [&'static str] {
        &["ID", "POLICY", "LENGTH", "PREFIXES"]
    }

    fn row(&self) -> Vec<String> {
        let prefixes = self.prefixes();
        vec![
            self.id.clone(),
            self.policy.clone(),
            self.length.to_string(),
            if prefixes.is_empty() {
                "all".to_string()
            } else {
                prefixes.join(" ")
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_without_prefixes_means_all() {
        let prepend: AsPrepend = serde_json::from_value(serde_json::json!({
            "id": "ap-1",
            "length": 3,
            "policy": "export"
        }))
        .unwrap();
        assert_eq!(prepend.row()[3], "all");
    }
}

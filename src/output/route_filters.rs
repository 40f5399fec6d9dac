//! Route filter output rows

use super::common::{format_time, opt};
use super::Record;
use crate::directlink::route_filters::RouteFilter;

impl Record for RouteFilter {
    fn headers() -> &'static [&'static str] {
        &["ID", "ACTION", "PREFIX", "GE", "LE", "BEFORE", "UPDATED AT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.action.clone(),
            self.prefix.clone(),
            opt(self.ge),
            opt(self.le),
            opt(self.before.as_deref()),
            format_time(self.updated_at.as_ref()),
        ]
    }
}

use serde::Serialize;

use crate::catalog::ApiCatalog;

/// Catalog keys partitioned by whether they occur in a piece of TCL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiPresence<'a> {
    pub found: Vec<&'a str>,
    pub not_found: Vec<&'a str>,
}

impl ApiPresence<'_> {
    pub fn total(&self) -> usize {
        self.found.len() + self.not_found.len()
    }
}

/// Plain, case-sensitive substring test. `place` matches inside `place_cells`.
pub fn contains_api(tcl_code: &str, api: &str) -> bool {
    tcl_code.contains(api)
}

/// Split the catalog keys into found / not found, keeping catalog order in both.
pub fn detect_apis<'a>(tcl_code: &str, catalog: &'a ApiCatalog) -> ApiPresence<'a> {
    partition_apis(tcl_code, catalog.keys())
}

pub fn partition_apis<'a, I>(tcl_code: &str, apis: I) -> ApiPresence<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut presence = ApiPresence::default();
    for api in apis {
        if contains_api(tcl_code, api) {
            presence.found.push(api);
        } else {
            presence.not_found.push(api);
        }
    }
    presence
}

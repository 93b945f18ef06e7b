use super::{Equals, Param};

/// `UPDATE table SET assignments WHERE filter RETURNING returning`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<(String, Param)>,
    pub filter: Vec<Equals>,
    pub returning: Vec<String>,
}

impl Update {
    pub(crate) fn collect_identifiers<'a>(&'a self, idents: &mut Vec<&'a str>) {
        idents.push(&self.table);
        idents.extend(self.assignments.iter().map(|(column, _)| column.as_str()));
        for filter in &self.filter {
            filter.collect_identifiers(idents);
        }
        idents.extend(self.returning.iter().map(String::as_str));
    }

    pub(crate) fn collect_params(&self, params: &mut Vec<Option<String>>) {
        params.extend(self.assignments.iter().map(|(_, param)| param.value.clone()));
        for filter in &self.filter {
            filter.collect_params(params);
        }
    }
}

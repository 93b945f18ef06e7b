use super::Param;

/// `INSERT INTO table (columns) VALUES (params) RETURNING returning`
///
/// With no values the row is inserted with `DEFAULT VALUES`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub values: Vec<(String, Param)>,
    pub returning: Vec<String>,
}

impl Insert {
    pub(crate) fn collect_identifiers<'a>(&'a self, idents: &mut Vec<&'a str>) {
        idents.push(&self.table);
        idents.extend(self.values.iter().map(|(column, _)| column.as_str()));
        idents.extend(self.returning.iter().map(String::as_str));
    }

    pub(crate) fn collect_params(&self, params: &mut Vec<Option<String>>) {
        params.extend(self.values.iter().map(|(_, param)| param.value.clone()));
    }
}

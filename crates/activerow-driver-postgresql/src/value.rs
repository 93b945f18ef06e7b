use activerow_core::{Error, Result};
use postgres::{
    types::{private::BytesMut, to_sql_checked, Format, IsNull, ToSql, Type},
    Row,
};

/// A parameter sent in text format, whatever type the server inferred for
/// its placeholder.
#[derive(Debug)]
pub(crate) struct TextParam<'a>(pub(crate) Option<&'a str>);

impl ToSql for TextParam<'_> {
    fn to_sql(
        &self,
        _ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match self.0 {
            Some(text) => {
                out.extend_from_slice(text.as_bytes());
                Ok(IsNull::No)
            }
            None => Ok(IsNull::Yes),
        }
    }

    fn accepts(_ty: &Type) -> bool
    where
        Self: Sized,
    {
        true
    }

    fn encode_format(&self, _ty: &Type) -> Format {
        Format::Text
    }

    to_sql_checked!();
}

/// Reads column `index` of `row` in its text form.
///
/// The engine casts every result column to `text`; a few scalar types are
/// also accepted so hand-written queries passed through the gateway work
/// without casts.
pub(crate) fn text_value(statement: &str, row: &Row, index: usize) -> Result<Option<String>> {
    let ty = row.columns()[index].type_();

    // NOTE: the inner representation of the PostgreSQL type enum is not
    // accessible, so each type is matched manually.
    let value = if ty == &Type::BOOL {
        row.try_get::<_, Option<bool>>(index)
            .map(|v| v.map(|v| if v { "t" } else { "f" }.to_string()))
    } else if ty == &Type::INT2 {
        row.try_get::<_, Option<i16>>(index).map(|v| v.map(|v| v.to_string()))
    } else if ty == &Type::INT4 {
        row.try_get::<_, Option<i32>>(index).map(|v| v.map(|v| v.to_string()))
    } else if ty == &Type::INT8 {
        row.try_get::<_, Option<i64>>(index).map(|v| v.map(|v| v.to_string()))
    } else if ty == &Type::OID {
        row.try_get::<_, Option<u32>>(index).map(|v| v.map(|v| v.to_string()))
    } else if ty == &Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(index).map(|v| v.map(|v| v.to_string()))
    } else if ty == &Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(index).map(|v| v.map(|v| v.to_string()))
    } else {
        row.try_get::<_, Option<String>>(index)
    };

    value.map_err(|err| Error::database_in(statement, err))
}

use super::{Formatter, ToSql};

/// An identifier, written in its backend-quoted form.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let quoted = f.serializer.quoted(self.0.as_ref());
        f.dst.push_str(quoted);
    }
}

use super::{Idents, Serializer};

#[derive(Debug)]
pub(super) enum Flavor {
    Postgresql,
}

impl<'a> Serializer<'a> {
    pub fn postgresql(idents: &'a Idents) -> Serializer<'a> {
        Serializer {
            idents,
            flavor: Flavor::Postgresql,
        }
    }
}

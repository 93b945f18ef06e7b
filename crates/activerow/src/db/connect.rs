use crate::Result;

use activerow_core::{driver::ConnectParams, Driver, Error};

use std::sync::{Mutex, OnceLock, PoisonError};

/// Environment variable consulted when no other parameters are available.
pub(super) const DATABASE_URL: &str = "DATABASE_URL";

static DEFAULT_PARAMS: OnceLock<Mutex<ConnectParams>> = OnceLock::new();

fn defaults() -> &'static Mutex<ConnectParams> {
    DEFAULT_PARAMS.get_or_init(Default::default)
}

/// Sets the process-wide default connection parameters.
///
/// Defaults fill any key not given explicitly to [`Builder`](super::Builder)
/// when a `Db` opens its connection.
pub fn set_default_params<K, V>(params: impl IntoIterator<Item = (K, V)>)
where
    K: Into<String>,
    V: Into<String>,
{
    let params = params.into_iter().collect();
    *defaults().lock().unwrap_or_else(PoisonError::into_inner) = params;
}

/// The process-wide default connection parameters.
pub fn default_params() -> ConnectParams {
    defaults()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Merges the three parameter sources. Explicit parameters win over the
/// defaults, which win over `DATABASE_URL`. A malformed `DATABASE_URL` only
/// fails when neither of the other sources has parameters.
pub(super) fn resolve_params(
    explicit: &ConnectParams,
    defaults: &ConnectParams,
    database_url: Option<String>,
) -> Result<ConnectParams> {
    let mut params = explicit.clone();
    params.fill_from(defaults);

    if let Some(url) = database_url.filter(|url| !url.is_empty()) {
        match ConnectParams::from_url(&url) {
            Ok(from_env) => params.fill_from(&from_env),
            Err(err) if params.is_empty() => {
                return Err(err.context(Error::configuration(format!("invalid {DATABASE_URL}"))));
            }
            Err(err) => log::warn!("ignoring invalid {DATABASE_URL}; error={err}"),
        }
    }

    if params.is_empty() {
        return Err(Error::configuration(format!(
            "no connection parameters; set them on the builder, with `set_default_params`, or in `{DATABASE_URL}`"
        )));
    }

    Ok(params)
}

/// The driver used when the builder is not given one.
pub(super) fn default_driver() -> Result<Box<dyn Driver>> {
    connect_postgresql()
}

#[cfg(feature = "postgresql")]
fn connect_postgresql() -> Result<Box<dyn Driver>> {
    Ok(Box::new(activerow_driver_postgresql::PostgreSQL::new()))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql() -> Result<Box<dyn Driver>> {
    Err(Error::configuration("`postgresql` feature not enabled"))
}

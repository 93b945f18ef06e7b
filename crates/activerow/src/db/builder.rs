use super::{connect, Db, Gateway};
use crate::{Model, Result};

use activerow_core::{driver::ConnectParams, Driver};

/// Declares the associations of one model.
type Declare = fn(&Db) -> Result<()>;

#[derive(Default)]
pub struct Builder {
    /// Explicit connection parameters
    params: ConnectParams,

    /// Connection URL, parsed on `build`
    url: Option<String>,

    driver: Option<Box<dyn Driver>>,

    /// Explicit class -> table mappings
    tables: Vec<(String, String)>,

    models: Vec<Declare>,
}

impl Builder {
    /// Sets one connection parameter, e.g. `dbname`.
    pub fn param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key, value);
        self
    }

    pub fn params<K, V>(&mut self, params: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.params.insert(key, value);
        }
        self
    }

    /// Takes connection parameters from a `postgresql://` URL. Parameters set
    /// with [`Builder::param`] win over the URL.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = Some(url.to_string());
        self
    }

    /// Uses `driver` instead of the default PostgreSQL driver.
    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.driver = Some(Box::new(driver));
        self
    }

    /// Maps `class` to `table` instead of deriving the table name.
    pub fn table(&mut self, class: &str, table: &str) -> &mut Self {
        self.tables.push((class.to_string(), table.to_string()));
        self
    }

    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(T::declare);
        self
    }

    /// Builds the handle. No connection is opened until the first statement.
    pub fn build(&mut self) -> Result<Db> {
        let mut params = self.params.clone();

        if let Some(url) = &self.url {
            params.fill_from(&ConnectParams::from_url(url)?);
        }

        let driver = match self.driver.take() {
            Some(driver) => driver,
            None => connect::default_driver()?,
        };

        let db = Db::new(Gateway::new(driver, params));

        for (class, table) in &self.tables {
            db.register_table(class, table)?;
        }

        for declare in &self.models {
            declare(&db)?;
        }

        Ok(db)
    }
}

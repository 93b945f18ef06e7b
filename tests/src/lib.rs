pub use exec_log::{ExecLog, Op};

pub use scripted_driver::ScriptedDriver;

pub mod prelude;

pub use std_util::*;

use activerow::{Db, Model};

/// Builds a `Db` on top of `driver`. Connection parameters are only
/// checked for presence, so a placeholder database name is enough.
pub fn setup(driver: &ScriptedDriver) -> Db {
    setup_with(driver, |_| {})
}

/// Like [`setup`], letting the test configure the builder first.
pub fn setup_with(driver: &ScriptedDriver, f: impl FnOnce(&mut activerow::db::Builder)) -> Db {
    init_logging();

    let mut builder = Db::builder();
    builder.param("dbname", "activerow_test").driver(driver.clone());
    f(&mut builder);
    builder.build().unwrap()
}

/// Builds a `Db` with `T`'s associations declared.
pub fn setup_model<T: Model>(driver: &ScriptedDriver) -> Db {
    setup_with(driver, |builder| {
        builder.register::<T>();
    })
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

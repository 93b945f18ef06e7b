//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{setup, setup_model, setup_with, ExecLog, Op, ScriptedDriver};

pub use activerow::{Column, Db, Model, Record, Related, Sort, Value};

pub use std_util::prelude::*;

/// The `users` table most tests run against.
pub fn users_table(driver: &ScriptedDriver) {
    driver.table(
        "users",
        [
            Column::new("id", "integer", false, true)
                .with_default("nextval('users_id_seq'::regclass)"),
            Column::new("name", "text", false, false),
            Column::new("email", "character varying(64)", true, false),
            Column::new("active", "boolean", true, false),
        ],
    );
}

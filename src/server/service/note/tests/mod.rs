
use fixdesk_test_utils::{
    constant::{TEST_ERROR_CODE, TEST_SYSTEM_NAME},
    prelude::*,
};
use uuid::Uuid;

use crate::server::{error::Error, service::note::NoteService};

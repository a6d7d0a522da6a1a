//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the resulting responses are
//! checked for status and JSON body.

mod launch;
mod planet;

use mission_control_test_utils::prelude::*;

use crate::util::{into_response, read_json, TestContextExt};

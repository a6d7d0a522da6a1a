
use mission_control_test_utils::prelude::*;

use super::*;

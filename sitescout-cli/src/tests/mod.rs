//! Shared test harness modules for the sitescout CLI.

use super::*;

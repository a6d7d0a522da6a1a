pub static TEST_USER_AGENT: &str = "MissionControl/0.1 (test)";

/// Path of the launch history bulk query endpoint on the mock server
pub static LAUNCH_QUERY_PATH: &str = "/v4/launches/query";
